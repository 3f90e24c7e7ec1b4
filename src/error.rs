//! Error types for the shifr library.

use std::fmt;

/// Errors produced by the cipher engines.
///
/// Every validation failure in the library surfaces as one of these
/// variants; callers distinguish failure from success only by the
/// `Result` channel, never by sentinel values in the output string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Substitution key is empty.
    EmptyKey,
    /// Substitution key contains a character outside the Russian alphabet.
    KeyInvalidChars,
    /// Substitution key of length > 1 repeats a single character.
    WeakKey,
    /// Route key is outside the range [2, text length].
    KeyOutOfRange,
    /// Text is empty, or empty after filtering.
    EmptyText,
    /// Text contains a character the operation does not accept.
    TextInvalidChars,
    /// Cipher text and open text lengths differ.
    LengthMismatch,
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::EmptyKey => {
                write!(f, "Key must contain at least 1 character")
            }
            CipherError::KeyInvalidChars => {
                write!(f, "Key contains characters outside the cipher alphabet")
            }
            CipherError::WeakKey => {
                write!(f, "Weak key: every character is identical")
            }
            CipherError::KeyOutOfRange => {
                write!(f, "Key must be between 2 and the length of the text")
            }
            CipherError::EmptyText => {
                write!(f, "Text contains no characters to process")
            }
            CipherError::TextInvalidChars => {
                write!(f, "Text contains characters the cipher does not accept")
            }
            CipherError::LengthMismatch => {
                write!(f, "Cipher text length does not match open text length")
            }
        }
    }
}

impl std::error::Error for CipherError {}
