use thiserror::Error;

use super::metadata::{ECLevel, Version};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QRError {
    // Capacity
    #[error("Capacity exceeded: {len} bytes do not fit any version at ec level {ecl:?}")]
    CapacityExceeded { len: usize, ecl: ECLevel },
    #[error("Data too long: {len} bytes do not fit version {version} at ec level {ecl:?}")]
    DataTooLong { len: usize, version: Version, ecl: ECLevel },
    #[error("Character count overflow: {len} does not fit a {bits}-bit count field")]
    CharacterCountOverflow { len: usize, bits: usize },

    // Input text
    #[error("Non latin codepoint: {ch:?} at index {index}")]
    NonLatinCodepoint { ch: char, index: usize },

    // Parameters
    #[error("Invalid version: {0}")]
    InvalidVersion(usize),
    #[error("Invalid mask pattern: {0}")]
    InvalidMaskPattern(u8),
    #[error("Invalid error correction level: {0}")]
    InvalidECLevel(String),
    #[error("Invalid charset: {0}")]
    InvalidCharset(String),
}

pub type QRResult<T> = Result<T, QRError>;
