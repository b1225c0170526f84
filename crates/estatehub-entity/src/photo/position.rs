//! Next-position assignment for photos within one property.

use estatehub_core::{AppError, AppResult};

/// Compute the next position given the current maximum within a property.
///
/// An empty property starts at 1. A maximum of `i32::MAX` cannot be
/// extended and is reported as a validation error.
pub fn next_position(current_max: Option<i32>) -> AppResult<i32> {
    match current_max {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| AppError::validation("No position available after the current maximum")),
    }
}
