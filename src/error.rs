//! Error type for the fallible edges of the crate.
//!
//! The correction core is total over strings and never fails; only loading
//! word lists from disk can go wrong.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrispellError {
    /// I/O errors while reading or writing word lists.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TrispellError>;
