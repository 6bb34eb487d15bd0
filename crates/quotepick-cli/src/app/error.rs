//! Error types for the `quotepick` binary.
//!
//! Everything that can go wrong between loading items and printing a pick is
//! captured by [`CliError`]. `main` wraps it in `anyhow` at the edge.
//!
//! ## Error Cases
//! - `ReadItems`: The item file could not be read.
//! - `EmptyItems`: There is nothing to pick from.
//! - `Output`: Writing a pick to stdout failed.
//! - `Json`: A pick could not be encoded as JSON.
//! - `Pick`: A picker failure this binary does not know about yet.

use quotepick::Error as PickError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// The item file could not be opened or was not valid UTF-8.
    #[error("failed to read items from {}: {source}", path.display())]
    ReadItems {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The item list was empty, so no pick could be made.
    #[error("nothing to pick: the item list is empty")]
    EmptyItems,

    /// The output sink rejected a pick.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    /// A pick could not be serialized.
    #[error("failed to encode pick as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for picker errors added after this binary was written.
    ///
    /// `quotepick::Error` is `#[non_exhaustive]`; every variant it has today
    /// maps to one of the cases above, so this is unreachable with the
    /// current library.
    #[error("pick failed: {reason}")]
    Pick { reason: String },
}

impl<E> From<PickError<E>> for CliError
where
    E: Into<CliError> + std::fmt::Debug,
{
    fn from(err: PickError<E>) -> Self {
        match err {
            PickError::InvalidInput => Self::EmptyItems,
            PickError::Sink(e) => e.into(),
            // only reachable once `quotepick::Error` grows a variant
            other => Self::Pick {
                reason: other.to_string(),
            },
        }
    }
}

impl From<std::convert::Infallible> for CliError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
