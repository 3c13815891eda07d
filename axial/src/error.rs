use thiserror::Error;

use crate::ItemId;

/// Precondition violations reported by the geometry cache and layouts.
///
/// Measurement that is simply not ready yet is not an error: size calculations return NaN
/// and look-ahead measurement returns `Ok(None)` instead.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("no cached record with id {0}")]
    UnknownId(ItemId),

    #[error("id {id} is already cached at position {position}")]
    DuplicateId { id: ItemId, position: usize },

    #[error("position {position} is outside the dense range 0..={count}")]
    PositionOutOfRange { position: usize, count: usize },

    #[error("invalid axis value {0}")]
    InvalidAxis(u8),

    #[error("invalid orientation value {0}")]
    InvalidOrientation(u8),

    #[error("invalid padding {0}: paddings must be finite and non-negative")]
    InvalidPadding(f32),

    #[error("invalid geometry for id {id}: {reason}")]
    InvalidGeometry { id: ItemId, reason: &'static str },
}
