#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod picker;
mod quotes;
mod rand;
mod sink;

pub use crate::error::*;
pub use crate::picker::*;
pub use crate::quotes::*;
pub use crate::rand::*;
pub use crate::sink::*;
