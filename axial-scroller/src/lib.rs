//! Scroll, paging and fling control on top of the `axial` layout engine.
//!
//! The controller is framework-neutral. It decides *what* to show and *when* a scroll counts
//! as started or finished; a [`ScrollableList`] implementation owns the actual window over the
//! items:
//!
//! - direct navigation with wrap-around or clamping and step quantization
//! - paging
//! - gesture flings, both as bounded offsets and as decelerated index jumps
//! - scroll and page listeners
//!
//! [`LayoutList`] is a ready-made list backed by `axial::LinearLayout`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod fling;
mod layout_list;
mod list;
mod listeners;
mod options;


pub use controller::{MAX_FLING_OFFSET, ScrollController, ScrollPhase, VELOCITY_MAX, fling_offset};
pub use error::ScrollError;
pub use fling::FlingIntegrator;
pub use layout_list::LayoutList;
pub use list::{ScrollOffset, ScrollRequest, ScrollableList};
pub use listeners::{ListenerList, OnPageChangedListener, OnScrollListener};
pub use options::{DEFAULT_FLING_DECELERATION, ScrollerOptions};
