use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors surfaced by the codec.
#[derive(Error, Debug)]
pub enum HuffmanError {
    /// The source file is missing, cannot be opened, or failed while being
    /// encoded. Every encode-time failure is collapsed into this kind.
    #[error("file not found or unreadable: {}", path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid header: {message}")]
    InvalidHeader { message: String },

    #[error("position {position} out of range for sequence of size {size}")]
    OutOfRange { position: isize, size: usize },

    #[error("byte {symbol} has no code in the table")]
    MissingCode { symbol: u8 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HuffmanError {
    pub(crate) fn invalid_header(message: impl Into<String>) -> Self {
        HuffmanError::InvalidHeader {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
