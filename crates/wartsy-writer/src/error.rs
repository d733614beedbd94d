use thiserror::Error;

/// A writer error result.
pub type Result<T> = std::result::Result<T, Error>;

/// A writer error.
#[derive(Error, Debug)]
pub enum Error {
    /// The record could not be encoded.
    #[error("encode error: {0}")]
    Format(#[from] wartsy_format::Error),
    /// The destination could not be opened or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The object body exceeds the 32 bit frame length.
    #[error("object body length {0} exceeds u32")]
    FrameTooLarge(usize),
}
