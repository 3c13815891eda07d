use axial::LayoutError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScrollError {
    /// Rejected at construction; no controller is built.
    #[error("invalid scroller option `{option}`: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: &'static str,
    },

    #[error("paging is disabled (page size is 0)")]
    PagingDisabled,

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
