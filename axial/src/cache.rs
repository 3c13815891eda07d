use alloc::vec::Vec;

use crate::key::IdPositionMap;
use crate::{GeometryRecord, Invalidation, ItemId, LayoutError};

/// Ordered, incrementally maintained geometry of the items managed by a layout.
///
/// Records are stored by dense position (`0..count`) with a reverse index from id to
/// position. Offsets are kept explicitly so a change to one item only touches the records it
/// actually moves:
/// - `add_data`/`remove_data` reflow the records after the edited position.
/// - `set_data_offset_after`/`set_data_offset_before` place a single record relative to a
///   neighbour, letting callers propagate outward from an anchor.
/// - `shift_by` translates everything (scrolling).
///
/// The first record's start padding and the last record's end padding only count when outer
/// padding is enabled.
#[derive(Clone, Debug, Default)]
pub struct GeometryCache {
    records: Vec<GeometryRecord>,
    positions: IdPositionMap,
    outer_padding: bool,
    shared_size: Option<f32>,
    shared_padding: Option<f32>,
    /// Where the first slot starts when nothing is placed yet.
    origin: f32,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outer_padding(mut self, enabled: bool) -> Self {
        self.outer_padding = enabled;
        self
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn id_at(&self, position: usize) -> Option<ItemId> {
        self.records.get(position).map(|r| r.id)
    }

    pub fn record(&self, id: ItemId) -> Option<&GeometryRecord> {
        self.position_of(id).map(|pos| &self.records[pos])
    }

    pub fn record_at(&self, position: usize) -> Option<&GeometryRecord> {
        self.records.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeometryRecord> + '_ {
        self.records.iter()
    }

    pub fn outer_padding(&self) -> bool {
        self.outer_padding
    }

    pub fn set_outer_padding(&mut self, enabled: bool) {
        if self.outer_padding == enabled {
            return;
        }
        let start = self.first_slot_start();
        self.outer_padding = enabled;
        self.reflow_from(0, start);
    }

    /// The size every record shares after [`Self::uniform_size`], if any.
    pub fn shared_size(&self) -> Option<f32> {
        self.shared_size
    }

    pub fn shared_padding(&self) -> Option<f32> {
        self.shared_padding
    }

    pub fn clear(&mut self) {
        vtrace!(count = self.records.len(), "GeometryCache::clear");
        self.records.clear();
        self.positions.clear();
    }

    /// Inserts a record at `pos`, or re-measures the record already cached with `id` at `pos`.
    ///
    /// Records after `pos` are moved by the change in padded size. Returns the leading offset
    /// assigned to the record (NaN while the chain before it is not measured).
    ///
    /// `size` may be NaN (not measured yet); paddings must be finite and non-negative.
    pub fn add_data(
        &mut self,
        id: ItemId,
        pos: usize,
        size: f32,
        start_padding: f32,
        end_padding: f32,
    ) -> Result<f32, LayoutError> {
        if size < 0.0 || size == f32::INFINITY {
            return Err(LayoutError::InvalidGeometry {
                id,
                reason: "size must be finite and non-negative",
            });
        }
        if !is_valid_padding(start_padding) || !is_valid_padding(end_padding) {
            return Err(LayoutError::InvalidGeometry {
                id,
                reason: "padding must be finite and non-negative",
            });
        }
        let size = self.shared_size.unwrap_or(size);
        let (start_padding, end_padding) = match self.shared_padding {
            Some(p) => (p / 2.0, p / 2.0),
            None => (start_padding, end_padding),
        };

        if let Some(existing) = self.position_of(id) {
            if existing != pos {
                return Err(LayoutError::DuplicateId {
                    id,
                    position: existing,
                });
            }
            vtrace!(id, pos, size, "GeometryCache::add_data remeasure");
            let slot_start = self.slot_start_at(pos);
            let r = &mut self.records[pos];
            r.size = size;
            r.start_padding = start_padding;
            r.end_padding = end_padding;
            let slot_start = if slot_start.is_nan() {
                self.neighbour_slot_start(pos)
            } else {
                slot_start
            };
            let end = self.place_after_at(pos, slot_start);
            self.reflow_from(pos + 1, end);
            return Ok(self.records[pos].offset);
        }

        let count = self.records.len();
        if pos > count {
            return Err(LayoutError::PositionOutOfRange {
                position: pos,
                count,
            });
        }

        vtrace!(id, pos, size, "GeometryCache::add_data insert");
        // Where the new slot begins, measured before the neighbours move.
        let slot_start = if pos > 0 && self.records[pos - 1].is_placed() {
            let prev = &self.records[pos - 1];
            prev.offset + prev.size + prev.end_padding
        } else if pos < count && self.records[pos].is_placed() {
            self.slot_start_at(pos)
        } else if pos == 0 {
            self.origin
        } else {
            f32::NAN
        };

        self.records.insert(
            pos,
            GeometryRecord::new(id, pos, size, start_padding, end_padding),
        );
        self.renumber_from(pos);

        let end = self.place_after_at(pos, slot_start);
        self.reflow_from(pos + 1, end);
        self.debug_check_density();
        Ok(self.records[pos].offset)
    }

    /// Removes the record with `id`, closing the gap it leaves behind.
    pub fn remove_data(&mut self, id: ItemId) -> Result<GeometryRecord, LayoutError> {
        let pos = self.position_of(id).ok_or(LayoutError::UnknownId(id))?;
        let slot_start = self.slot_start_at(pos);
        vtrace!(id, pos, "GeometryCache::remove_data");

        let removed = self.records.remove(pos);
        self.positions.remove(&id);
        self.renumber_from(pos);

        if removed.is_placed() && pos < self.records.len() {
            let start = if pos > 0 && self.records[pos - 1].is_placed() {
                self.slot_end_at(pos - 1)
            } else {
                slot_start
            };
            self.reflow_from(pos, start);
        }
        self.debug_check_density();
        Ok(removed)
    }

    /// Leading edge of the item.
    pub fn data_offset(&self, id: ItemId) -> Result<f32, LayoutError> {
        Ok(self.records[self.lookup(id)?].offset)
    }

    /// Leading edge of the item's slot (item offset minus its start padding).
    pub fn start_data_offset(&self, id: ItemId) -> Result<f32, LayoutError> {
        Ok(self.slot_start_at(self.lookup(id)?))
    }

    /// Trailing edge of the item's slot: offset + size + end padding.
    pub fn end_data_offset(&self, id: ItemId) -> Result<f32, LayoutError> {
        Ok(self.slot_end_at(self.lookup(id)?))
    }

    pub fn data_size(&self, id: ItemId) -> Result<f32, LayoutError> {
        Ok(self.records[self.lookup(id)?].size)
    }

    /// Size plus the paddings that count at the record's current position.
    pub fn size_with_padding(&self, id: ItemId) -> Result<f32, LayoutError> {
        let pos = self.lookup(id)?;
        Ok(self.effective_start_padding(pos)
            + self.records[pos].size
            + self.effective_end_padding(pos))
    }

    /// Places the record so its slot starts at `start`; returns where its slot ends.
    ///
    /// Only this record is touched.
    pub fn set_data_offset_after(&mut self, id: ItemId, start: f32) -> Result<f32, LayoutError> {
        let pos = self.lookup(id)?;
        Ok(self.place_after_at(pos, start))
    }

    /// Places the record so its slot ends at `end`; returns where its slot starts.
    ///
    /// Only this record is touched.
    pub fn set_data_offset_before(&mut self, id: ItemId, end: f32) -> Result<f32, LayoutError> {
        let pos = self.lookup(id)?;
        Ok(self.place_before_at(pos, end))
    }

    /// Re-places every record around `anchor`, which keeps its current offset.
    pub fn propagate_from(&mut self, anchor: ItemId) -> Result<(), LayoutError> {
        let pos = self.lookup(anchor)?;
        let end = self.slot_end_at(pos);
        self.reflow_from(pos + 1, end);

        let mut start = self.slot_start_at(pos);
        for p in (0..pos).rev() {
            start = self.place_before_at(p, start);
        }
        Ok(())
    }

    /// Translates every offset by `delta`.
    pub fn shift_by(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        self.origin += delta;
        for r in &mut self.records {
            r.offset += delta;
        }
    }

    /// Switches to a single shared size: the largest measured size in the cache.
    ///
    /// Later `add_data` calls ignore their own size and use the shared one. Returns `None` and
    /// leaves the cache alone when nothing is measured yet.
    pub fn uniform_size(&mut self) -> Option<f32> {
        let shared = self
            .records
            .iter()
            .filter(|r| !r.size.is_nan())
            .map(|r| r.size)
            .reduce(f32::max)?;
        vdebug!(shared, count = self.records.len(), "GeometryCache::uniform_size");
        let start = self.first_slot_start();
        self.shared_size = Some(shared);
        for r in &mut self.records {
            r.size = shared;
        }
        self.reflow_from(0, start);
        Some(shared)
    }

    pub fn clear_uniform_size(&mut self) {
        self.shared_size = None;
    }

    /// Gives every record `padding / 2` on each side; the two outer edges get the full
    /// `padding` when outer padding is enabled.
    pub fn uniform_padding(&mut self, padding: f32) -> Result<(), LayoutError> {
        if !is_valid_padding(padding) {
            return Err(LayoutError::InvalidPadding(padding));
        }
        if self.shared_padding == Some(padding) {
            return Ok(());
        }
        vdebug!(padding, "GeometryCache::uniform_padding");
        let start = self.first_slot_start();
        self.shared_padding = Some(padding);
        let half = padding / 2.0;
        for r in &mut self.records {
            r.start_padding = half;
            r.end_padding = half;
        }
        self.reflow_from(0, start);
        Ok(())
    }

    /// Maps an external data index to a cache position.
    ///
    /// `Ok(pos)` when a record with that id exists, otherwise `Err(insertion_point)` that keeps
    /// ids ascending, which holds when ids are data indexes (windowed caches).
    pub fn search_pos(&self, data_index: ItemId) -> Result<usize, usize> {
        if let Some(pos) = self.position_of(data_index) {
            return Ok(pos);
        }
        self.records.binary_search_by_key(&data_index, |r| r.id)
    }

    /// The position whose slot contains `coordinate`, clamped to the first/last record.
    ///
    /// Assumes records are placed; returns `None` for an empty cache.
    pub fn position_at_offset(&self, coordinate: f32) -> Option<usize> {
        if self.records.is_empty() {
            return None;
        }
        let (mut lo, mut hi) = (0usize, self.records.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.slot_end_at(mid) <= coordinate {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        Some(lo.min(self.records.len() - 1))
    }

    /// Total extent: sizes plus counted paddings. NaN while any record is not measured.
    pub fn total_size(&self) -> f32 {
        (0..self.records.len())
            .map(|p| {
                self.effective_start_padding(p)
                    + self.records[p].size
                    + self.effective_end_padding(p)
            })
            .sum()
    }

    pub fn is_measured(&self) -> bool {
        self.records.iter().all(GeometryRecord::is_measured)
    }

    pub fn is_placed(&self) -> bool {
        self.records.iter().all(GeometryRecord::is_placed)
    }

    pub fn invalidate_all(&mut self) {
        self.invalidate(Invalidation::All);
    }

    /// Marks cached fields stale without dropping records.
    pub fn invalidate(&mut self, op: Invalidation) {
        vdebug!(?op, count = self.records.len(), "GeometryCache::invalidate");
        match op {
            Invalidation::Position => {
                self.positions.clear();
                self.renumber_from(0);
            }
            Invalidation::Offset => self.forget_offsets(),
            Invalidation::Size => {
                self.shared_size = None;
                for r in &mut self.records {
                    r.size = f32::NAN;
                }
                self.forget_offsets();
            }
            Invalidation::Padding => {
                if let Some(p) = self.shared_padding {
                    let start = self.first_slot_start();
                    let half = p / 2.0;
                    for r in &mut self.records {
                        r.start_padding = half;
                        r.end_padding = half;
                    }
                    self.reflow_from(0, start);
                } else {
                    for r in &mut self.records {
                        r.start_padding = f32::NAN;
                        r.end_padding = f32::NAN;
                    }
                    self.forget_offsets();
                }
            }
            Invalidation::All => {
                self.invalidate(Invalidation::Position);
                self.invalidate(Invalidation::Padding);
                self.invalidate(Invalidation::Size);
            }
        }
    }

    fn lookup(&self, id: ItemId) -> Result<usize, LayoutError> {
        self.position_of(id).ok_or(LayoutError::UnknownId(id))
    }

    fn effective_start_padding(&self, pos: usize) -> f32 {
        let own = self.records[pos].start_padding;
        if pos == 0 { self.edge_padding(own) } else { own }
    }

    fn effective_end_padding(&self, pos: usize) -> f32 {
        let own = self.records[pos].end_padding;
        if pos + 1 == self.records.len() {
            self.edge_padding(own)
        } else {
            own
        }
    }

    fn edge_padding(&self, own: f32) -> f32 {
        if !self.outer_padding {
            return 0.0;
        }
        self.shared_padding.unwrap_or(own)
    }

    fn slot_start_at(&self, pos: usize) -> f32 {
        self.records[pos].offset - self.effective_start_padding(pos)
    }

    fn slot_end_at(&self, pos: usize) -> f32 {
        let r = &self.records[pos];
        r.offset + r.size + self.effective_end_padding(pos)
    }

    /// Slot start for an unplaced record derived from its placed neighbours.
    fn neighbour_slot_start(&self, pos: usize) -> f32 {
        if pos > 0 && self.records[pos - 1].is_placed() {
            return self.slot_end_at(pos - 1);
        }
        if pos + 1 < self.records.len() && self.records[pos + 1].is_placed() {
            let padded = self.effective_start_padding(pos)
                + self.records[pos].size
                + self.effective_end_padding(pos);
            return self.slot_start_at(pos + 1) - padded;
        }
        if pos == 0 { self.origin } else { f32::NAN }
    }

    fn place_after_at(&mut self, pos: usize, start: f32) -> f32 {
        let offset = start + self.effective_start_padding(pos);
        self.records[pos].offset = offset;
        self.slot_end_at(pos)
    }

    fn place_before_at(&mut self, pos: usize, end: f32) -> f32 {
        let offset = end - self.effective_end_padding(pos) - self.records[pos].size;
        self.records[pos].offset = offset;
        self.slot_start_at(pos)
    }

    /// Chains placement from `start` over `from..count`.
    fn reflow_from(&mut self, from: usize, mut start: f32) {
        for pos in from..self.records.len() {
            start = self.place_after_at(pos, start);
        }
    }

    /// Where the sequence currently begins; the origin when nothing is placed.
    fn first_slot_start(&self) -> f32 {
        match self.records.first() {
            Some(first) if first.is_placed() => {
                let start = self.slot_start_at(0);
                if start.is_nan() { self.origin } else { start }
            }
            _ => self.origin,
        }
    }

    fn forget_offsets(&mut self) {
        for r in &mut self.records {
            r.offset = f32::NAN;
        }
    }

    fn renumber_from(&mut self, from: usize) {
        for pos in from..self.records.len() {
            let r = &mut self.records[pos];
            r.position = pos;
            self.positions.insert(r.id, pos);
        }
    }

    fn debug_check_density(&self) {
        debug_assert_eq!(
            self.records.len(),
            self.positions.len(),
            "id index out of sync with records"
        );
        debug_assert!(
            self.records
                .iter()
                .enumerate()
                .all(|(pos, r)| r.position == pos && self.positions.get(&r.id) == Some(&pos)),
            "cache positions are not dense"
        );
    }
}

fn is_valid_padding(padding: f32) -> bool {
    padding >= 0.0 && padding != f32::INFINITY
}
