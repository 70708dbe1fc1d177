//! Custom error types for EXIF and PNG processing

use std::fmt;
use std::io;

/// Errors surfaced by the metadata codec
///
/// Field parse failures are not represented here: a field that does not
/// parse is dropped from its directory instead of failing the write.
#[derive(Debug)]
pub enum ExifError {
    /// I/O error
    IoError(io::Error),
    /// The first eight bytes are not the PNG signature
    InvalidPngSignature,
    /// The chunk stream ended without an IHDR chunk to insert after
    MissingIhdr,
    /// A chunk declares more bytes than the buffer holds
    TruncatedChunk {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// The sanitized field set would produce no entries
    NoWritableContent,
    /// Payload exceeds the PNG chunk length limit
    ChunkTooLarge(usize),
    /// A field file could not be parsed
    InvalidFieldFile(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::InvalidPngSignature => write!(f, "invalid PNG signature"),
            ExifError::MissingIhdr => write!(f, "no IHDR chunk found"),
            ExifError::TruncatedChunk { offset, needed, available } => write!(
                f,
                "truncated PNG chunk at offset {}: needs {} bytes, {} available",
                offset, needed, available
            ),
            ExifError::NoWritableContent => write!(f, "no content to write"),
            ExifError::ChunkTooLarge(len) => write!(f, "chunk payload too large: {} bytes", len),
            ExifError::InvalidFieldFile(msg) => write!(f, "invalid field file: {}", msg),
            ExifError::GenericError(msg) => write!(f, "EXIF error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExifError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

/// Result type for EXIF operations
pub type ExifResult<T> = Result<T, ExifError>;

impl From<String> for ExifError {
    fn from(msg: String) -> Self {
        ExifError::GenericError(msg)
    }
}
