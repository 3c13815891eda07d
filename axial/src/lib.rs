//! A headless, incremental axis layout engine.
//!
//! For scrolling, paging and fling handling on top of a layout, see the `axial-scroller`
//! crate.
//!
//! This crate keeps the geometry of a sequence of items and decides where they go:
//! - a per-item geometry cache with dense positions and incremental offset updates
//! - one layout algorithm shared by the three orientations (sum on the active axis, max on
//!   the other two)
//! - viewport queries: visibility, centre child, direction and distance to a child
//!
//! It is UI-agnostic. The widget layer is expected to provide:
//! - item count and per-item measurements ([`ItemSource`])
//! - viewport extents
//! - the layout offset (scroll translation)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod error;
mod key;
mod layout;
mod linear;
mod options;
mod record;
mod types;

#[cfg(test)]
mod tests;

pub use cache::GeometryCache;
pub use error::LayoutError;
pub use layout::{AbsoluteLayout, ItemSource, Layout, measure_extent};
pub use linear::LinearLayout;
pub use options::LayoutOptions;
pub use record::GeometryRecord;
pub use types::{
    Axis, Direction, Gravity, Invalidation, ItemId, Orientation, Vector3, VisibleRange,
};
