//! Accepted photo content types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image formats a photo record may declare.
///
/// `image/jpg` is non-standard but accepted alongside `image/jpeg` because
/// existing listing uploads use both spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhotoContentType {
    /// `image/jpeg`
    #[serde(rename = "image/jpeg")]
    Jpeg,
    /// `image/jpg`
    #[serde(rename = "image/jpg")]
    Jpg,
    /// `image/png`
    #[serde(rename = "image/png")]
    Png,
    /// `image/webp`
    #[serde(rename = "image/webp")]
    Webp,
}

impl PhotoContentType {
    /// Every accepted content type, in declaration order.
    pub const ALL: [Self; 4] = [Self::Jpeg, Self::Jpg, Self::Png, Self::Webp];

    /// Return the MIME string stored on the record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Jpg => "image/jpg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }

    /// Check whether a raw MIME string is one of the accepted types.
    pub fn is_allowed(value: &str) -> bool {
        Self::ALL.iter().any(|ct| ct.as_str() == value)
    }
}

impl fmt::Display for PhotoContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PhotoContentType {
    type Err = estatehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image/jpeg" => Ok(Self::Jpeg),
            "image/jpg" => Ok(Self::Jpg),
            "image/png" => Ok(Self::Png),
            "image/webp" => Ok(Self::Webp),
            _ => Err(estatehub_core::AppError::validation(format!(
                "Invalid content type: '{s}'. Expected one of: image/jpeg, image/jpg, image/png, image/webp"
            ))),
        }
    }
}
