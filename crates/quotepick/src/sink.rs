#[cfg(feature = "std")]
mod collect;
mod interface;
#[cfg(feature = "std")]
mod write;

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use collect::*;
pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use write::*;
