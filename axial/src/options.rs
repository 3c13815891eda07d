use crate::{Gravity, Orientation, Vector3};

/// Configuration for [`crate::LinearLayout`].
///
/// All fields are plain data, so the options can be cloned, compared and (with
/// `feature = "serde"`) serialized alongside the rest of an adapter's settings.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOptions {
    pub orientation: Orientation,

    /// Count the divider padding before the first and after the last item.
    pub outer_padding: bool,

    /// Space between neighbouring items, split evenly between them.
    pub divider_padding: f32,

    /// Placement of the whole block inside the viewport.
    pub gravity: Gravity,

    /// When disabled every cached item counts as visible.
    pub clipping: bool,

    /// Viewport extents per axis. NaN components are treated as 0.
    pub viewport: Vector3,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl LayoutOptions {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            outer_padding: false,
            divider_padding: 0.0,
            gravity: Gravity::Start,
            clipping: true,
            viewport: Vector3::ZERO,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_outer_padding(mut self, outer_padding: bool) -> Self {
        self.outer_padding = outer_padding;
        self
    }

    pub fn with_divider_padding(mut self, divider_padding: f32) -> Self {
        self.divider_padding = divider_padding;
        self
    }

    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_clipping(mut self, clipping: bool) -> Self {
        self.clipping = clipping;
        self
    }

    pub fn with_viewport(mut self, viewport: Vector3) -> Self {
        self.viewport = viewport;
        self
    }
}
