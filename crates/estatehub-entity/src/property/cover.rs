//! Cover photo selection.
//!
//! A property with at least [`COVER_THRESHOLD`] photos is represented by the
//! photo at [`COVER_POSITION`]; smaller galleries, and larger ones with no
//! photo at that position, use their lowest-positioned photo. The result
//! depends only on positions and is recomputed on every call.

use crate::photo::Photo;

/// Photo count at which the cover moves off the first photo.
pub const COVER_THRESHOLD: usize = 3;

/// Position of the cover photo once the threshold is reached.
pub const COVER_POSITION: i32 = 3;

/// Select the cover photo from a property's photos.
pub fn cover_photo(photos: &[Photo]) -> Option<&Photo> {
    if photos.len() >= COVER_THRESHOLD {
        if let Some(photo) = photos.iter().find(|p| p.position == COVER_POSITION) {
            return Some(photo);
        }
    }
    photos.iter().min_by_key(|p| p.position)
}

/// Whether the gallery is large enough to use the designated cover position.
pub fn has_cover_photo(photo_count: usize) -> bool {
    photo_count >= COVER_THRESHOLD
}

/// The position advertised as the cover: 3 for full galleries, else 1.
pub fn cover_photo_position(photo_count: usize) -> i32 {
    if has_cover_photo(photo_count) {
        COVER_POSITION
    } else {
        1
    }
}
