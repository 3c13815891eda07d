use crate::ItemId;

/// One item's cached geometry along the axis of the owning cache.
///
/// `size` is NaN until the item is measured and `offset` is NaN until it is placed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryRecord {
    pub id: ItemId,
    /// Current dense position in the cache.
    pub position: usize,
    pub size: f32,
    /// Leading edge of the item (after its start padding).
    pub offset: f32,
    pub start_padding: f32,
    pub end_padding: f32,
}

impl GeometryRecord {
    pub(crate) fn new(
        id: ItemId,
        position: usize,
        size: f32,
        start_padding: f32,
        end_padding: f32,
    ) -> Self {
        Self {
            id,
            position,
            size,
            offset: f32::NAN,
            start_padding,
            end_padding,
        }
    }

    pub fn is_measured(&self) -> bool {
        !self.size.is_nan() && !self.start_padding.is_nan() && !self.end_padding.is_nan()
    }

    pub fn is_placed(&self) -> bool {
        !self.offset.is_nan()
    }

    /// Size including both paddings, regardless of outer padding rules.
    pub fn padded_size(&self) -> f32 {
        self.start_padding + self.size + self.end_padding
    }
}
