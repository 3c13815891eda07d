#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ItemId;

/// Reverse index from a record's id to its current position in the cache.
#[cfg(feature = "std")]
pub(crate) type IdPositionMap = HashMap<ItemId, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type IdPositionMap = BTreeMap<ItemId, usize>;
