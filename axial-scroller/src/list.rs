use axial::Axis;

/// How a container answered a scroll request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollRequest {
    /// The container moved synchronously.
    Finished,
    /// The container is animating; it calls [`crate::ScrollController::complete_scroll`] when
    /// it gets there.
    Pending,
    /// The container could not move (for example the target is not available).
    Rejected,
}

/// Per-axis scroll distances. `None` means "no movement" on that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

impl ScrollOffset {
    pub fn get(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.z.is_none()
    }
}

/// The scrollable container a [`crate::ScrollController`] drives.
///
/// The controller decides what to show; the container owns the actual window over the items
/// and reports when a request completes.
pub trait ScrollableList {
    fn item_count(&self) -> usize;

    /// Viewport extents. NaN is treated as 0.
    fn viewport_width(&self) -> f32;
    fn viewport_height(&self) -> f32;
    fn viewport_depth(&self) -> f32;

    /// Index of the item currently at the leading edge.
    fn current_position(&self) -> usize;

    fn scroll_to_position(&mut self, position: usize) -> ScrollRequest;

    fn scroll_by_offset(&mut self, offset: ScrollOffset) -> ScrollRequest;
}
