mod basic;
mod index;
mod result;

pub use basic::*;
pub use index::*;
pub use result::*;
