use crate::ScrollError;

/// Deceleration of the fling integrator, in positions per second squared.
pub const DEFAULT_FLING_DECELERATION: f32 = 1500.0;

/// Configuration for [`crate::ScrollController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollerOptions {
    /// Wrap around the ends instead of clamping.
    pub scroll_over: bool,

    /// Items per page; 0 disables paging.
    pub page_size: usize,

    /// Every target index is rounded down to a multiple of this step. Must be at least 1.
    pub delta_scroll_amount: usize,

    pub fling_deceleration: f32,
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollerOptions {
    pub fn new() -> Self {
        Self {
            scroll_over: false,
            page_size: 0,
            delta_scroll_amount: 1,
            fling_deceleration: DEFAULT_FLING_DECELERATION,
        }
    }

    pub fn with_scroll_over(mut self, scroll_over: bool) -> Self {
        self.scroll_over = scroll_over;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_delta_scroll_amount(mut self, delta_scroll_amount: usize) -> Self {
        self.delta_scroll_amount = delta_scroll_amount;
        self
    }

    pub fn with_fling_deceleration(mut self, fling_deceleration: f32) -> Self {
        self.fling_deceleration = fling_deceleration;
        self
    }

    pub fn paging_enabled(&self) -> bool {
        self.page_size > 0
    }

    pub fn validate(&self) -> Result<(), ScrollError> {
        if self.delta_scroll_amount == 0 {
            return Err(ScrollError::InvalidOption {
                option: "delta_scroll_amount",
                reason: "must be at least 1",
            });
        }
        let d = self.fling_deceleration;
        if d.is_nan() || d <= 0.0 || d == f32::INFINITY {
            return Err(ScrollError::InvalidOption {
                option: "fling_deceleration",
                reason: "must be finite and positive",
            });
        }
        Ok(())
    }
}
