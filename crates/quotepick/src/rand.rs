mod interface;
#[cfg(feature = "std")]
mod seeded;
#[cfg(feature = "std")]
mod sequence;
#[cfg(feature = "std")]
mod thread_random;

pub use interface::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use seeded::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use sequence::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use thread_random::*;
