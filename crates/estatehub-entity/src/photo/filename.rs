//! Flat filename rules for photo records.
//!
//! A photo filename is always a single path segment. The same check guards
//! record creation and incoming request paths, so a name that could never be
//! stored is rejected before any lookup happens.

use std::fmt;

/// Reasons a filename is not a usable flat segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameError {
    /// The name is empty.
    Empty,
    /// The name exceeds 255 characters.
    TooLong,
    /// The name contains a NUL byte.
    NulByte,
    /// The name contains another control character.
    ControlCharacter,
    /// The name contains `/` or `\`.
    Separator,
    /// The name is `.` or `..`.
    DotSegment,
}

/// Maximum filename length in characters.
pub const MAX_FILENAME_LEN: usize = 255;

impl fmt::Display for FilenameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "filename must not be empty",
            Self::TooLong => "filename must be at most 255 characters",
            Self::NulByte => "filename must not contain NUL bytes",
            Self::ControlCharacter => "filename must not contain control characters",
            Self::Separator => "filename must not contain path separators",
            Self::DotSegment => "filename must not be a relative path segment",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for FilenameError {}

/// Validate that `name` is a single, non-traversing path segment.
pub fn check_flat_filename(name: &str) -> Result<(), FilenameError> {
    if name.is_empty() {
        return Err(FilenameError::Empty);
    }
    if name.chars().count() > MAX_FILENAME_LEN {
        return Err(FilenameError::TooLong);
    }
    if name.contains('\0') {
        return Err(FilenameError::NulByte);
    }
    if name.chars().any(char::is_control) {
        return Err(FilenameError::ControlCharacter);
    }
    if name.contains('/') || name.contains('\\') {
        return Err(FilenameError::Separator);
    }
    if name == "." || name == ".." {
        return Err(FilenameError::DotSegment);
    }
    Ok(())
}
