use alloc::vec::Vec;

use crate::layout::measure_extent;
use crate::types::{abs, or_zero};
use crate::{
    Axis, Direction, GeometryCache, GeometryRecord, Gravity, Invalidation, ItemSource, Layout,
    LayoutError, LayoutOptions, Orientation, Vector3, VisibleRange,
};

/// Children closer than this to the viewport centre count as focused.
const FOCUS_EPSILON: f32 = 1e-4;

/// A layout that stacks items along the axis selected by its [`Orientation`].
///
/// Geometry lives in a [`GeometryCache`] keyed by data index. Measuring an item only touches
/// the records it moves; positioning applies gravity and the layout offset on top of the
/// cached offsets.
///
/// Coordinates on the orientation axis run from the viewport's leading edge: the visible
/// window is `[0, viewport_extent)` once the layout offset is applied.
#[derive(Clone, Debug)]
pub struct LinearLayout {
    options: LayoutOptions,
    cache: GeometryCache,
    offset: Vector3,
}

impl LinearLayout {
    pub fn new(options: LayoutOptions) -> Result<Self, LayoutError> {
        vdebug!(
            orientation = ?options.orientation,
            divider_padding = options.divider_padding,
            outer_padding = options.outer_padding,
            "LinearLayout::new"
        );
        let mut cache = GeometryCache::new().with_outer_padding(options.outer_padding);
        cache.uniform_padding(options.divider_padding)?;
        let mut layout = Self {
            options,
            cache,
            offset: Vector3::ZERO,
        };
        layout.set_viewport_size(options.viewport);
        Ok(layout)
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn cache(&self) -> &GeometryCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut GeometryCache {
        &mut self.cache
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    /// The active axis.
    pub fn axis(&self) -> Axis {
        self.options.orientation.axis()
    }

    /// Changing orientation makes every cached size refer to the wrong axis, so sizes are
    /// invalidated and must be measured again.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.options.orientation == orientation {
            return;
        }
        vdebug!(?orientation, "LinearLayout::set_orientation");
        self.options.orientation = orientation;
        self.cache.invalidate(Invalidation::Size);
    }

    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.options.gravity = gravity;
    }

    pub fn set_clipping(&mut self, clipping: bool) {
        self.options.clipping = clipping;
    }

    pub fn set_outer_padding(&mut self, enabled: bool) {
        self.options.outer_padding = enabled;
        self.cache.set_outer_padding(enabled);
    }

    pub fn set_divider_padding(&mut self, padding: f32) -> Result<(), LayoutError> {
        self.cache.uniform_padding(padding)?;
        self.options.divider_padding = padding;
        Ok(())
    }

    pub fn viewport_size(&self) -> Vector3 {
        self.options.viewport
    }

    /// Viewport extent on the active axis.
    pub fn viewport_extent(&self) -> f32 {
        self.options.viewport.get(self.axis())
    }

    pub fn set_viewport_size(&mut self, viewport: Vector3) {
        if viewport.has_nan() {
            vwarn!(?viewport, "viewport has unknown extents, treating them as 0");
        }
        self.options.viewport = Vector3::new(
            or_zero(viewport.x),
            or_zero(viewport.y),
            or_zero(viewport.z),
        );
    }

    pub fn set_offset(&mut self, offset: Vector3) {
        self.offset = offset;
    }

    pub fn invalidate(&mut self, op: Invalidation) {
        self.cache.invalidate(op);
    }

    /// Records the measured size of `data_index`, inserting it in data-index order.
    ///
    /// Returns the cached leading offset of the item.
    pub fn measure_child(&mut self, data_index: usize, size: Vector3) -> Result<f32, LayoutError> {
        let pos = match self.cache.search_pos(data_index) {
            Ok(pos) | Err(pos) => pos,
        };
        let half = self.options.divider_padding / 2.0;
        self.cache
            .add_data(data_index, pos, size.get(self.axis()), half, half)
    }

    pub fn remove_child(&mut self, data_index: usize) -> Result<GeometryRecord, LayoutError> {
        self.cache.remove_data(data_index)
    }

    /// Measures forward from `from` until the viewport extent is covered or items run out.
    ///
    /// Returns how many items were measured.
    pub fn measure_until_full(
        &mut self,
        source: &mut dyn ItemSource,
        from: usize,
    ) -> Result<usize, LayoutError> {
        if from >= source.item_count() {
            return Ok(0);
        }
        let axis = self.axis();
        let size = source.measure(from);
        if size.get(axis).is_nan() {
            return Ok(0);
        }
        self.measure_child(from, size)?;

        let extent = self.viewport_extent();
        let mut measured = alloc::vec![from];
        let mut covered = self.cache.size_with_padding(from)?;
        while covered < extent {
            match self.pre_measure_next(source, &measured, axis, Direction::Forward)? {
                Some(next) => {
                    covered += self.cache.size_with_padding(next)?;
                    measured.push(next);
                }
                None => break,
            }
        }
        vdebug!(from, measured = measured.len(), covered, extent, "measure_until_full");
        Ok(measured.len())
    }

    /// Places any record whose offset went stale, keeping the first record's slot start.
    pub fn layout_children(&mut self) -> Result<(), LayoutError> {
        if self.cache.is_placed() {
            return Ok(());
        }
        let Some(first) = self.cache.id_at(0) else {
            return Ok(());
        };
        let start = self.cache.start_data_offset(first)?;
        let start = if start.is_nan() { 0.0 } else { start };
        self.cache.set_data_offset_after(first, start)?;
        self.cache.propagate_from(first)
    }

    /// Shift applied to every cached offset so a block shorter than the viewport honours the
    /// configured gravity. Zero once the content fills the viewport.
    pub fn gravity_shift(&self) -> f32 {
        if self.options.gravity == Gravity::Start {
            return 0.0;
        }
        let free = (self.viewport_extent() - or_zero(self.cache.total_size())).max(0.0);
        match self.options.gravity {
            Gravity::Center => free / 2.0,
            _ => free,
        }
    }

    /// Data indexes of the cached children intersecting the viewport.
    pub fn visible_range(&self) -> VisibleRange {
        let shift = self.placement_shift();
        let mut first = None;
        let mut last = None;
        for r in self.cache.iter() {
            if self.is_visible_with(r.id, shift) {
                first.get_or_insert(r.id);
                last = Some(r.id);
            }
        }
        match (first, last) {
            (Some(start_index), Some(last)) => VisibleRange {
                start_index,
                end_index: last + 1,
            },
            _ => VisibleRange::default(),
        }
    }

    /// Calls `f` with the data index and position of every visible child, in order.
    pub fn for_each_visible_child(
        &self,
        mut f: impl FnMut(usize, Vector3),
    ) -> Result<(), LayoutError> {
        let shift = self.placement_shift();
        for r in self.cache.iter() {
            if self.is_visible_with(r.id, shift) {
                f(r.id, self.layout_child(r.id)?);
            }
        }
        Ok(())
    }

    /// Positions of every cached child, in cache order.
    pub fn layout_all(&self) -> Result<Vec<(usize, Vector3)>, LayoutError> {
        self.cache
            .iter()
            .map(|r| Ok((r.id, self.layout_child(r.id)?)))
            .collect()
    }

    /// Gravity plus layout offset on the active axis.
    fn placement_shift(&self) -> f32 {
        self.gravity_shift() + self.offset.get(self.axis())
    }

    fn is_visible_with(&self, data_index: usize, shift: f32) -> bool {
        if !self.options.clipping {
            return self.cache.contains(data_index);
        }
        let (Ok(start), Ok(end)) = (
            self.cache.start_data_offset(data_index),
            self.cache.end_data_offset(data_index),
        ) else {
            return false;
        };
        start + shift < self.viewport_extent() && end + shift > 0.0
    }
}

impl Layout for LinearLayout {
    fn orientation_axis(&self) -> Option<Axis> {
        Some(self.axis())
    }

    fn offset(&self) -> Vector3 {
        self.offset
    }

    fn data_offset(&self, data_index: usize) -> Result<f32, LayoutError> {
        Ok(self.cache.data_offset(data_index)? + self.gravity_shift())
    }

    fn calculate_size(&self, children: &[Vector3], axis: Axis) -> f32 {
        measure_extent(
            children,
            axis,
            Some(self.axis()),
            self.options.divider_padding,
            self.options.outer_padding,
        )
    }

    fn in_viewport(&self, data_index: usize) -> bool {
        self.is_visible_with(data_index, self.placement_shift())
    }

    fn center_child(&self) -> usize {
        let axis = self.axis();
        let center =
            self.viewport_extent() / 2.0 - self.offset.get(axis) - self.gravity_shift();
        self.cache
            .position_at_offset(center)
            .and_then(|pos| self.cache.id_at(pos))
            .unwrap_or(0)
    }

    fn direction_to_child(&self, data_index: usize, axis: Axis) -> Direction {
        let distance = self.distance_to_child(data_index, axis);
        if distance.is_nan() || abs(distance) < FOCUS_EPSILON {
            Direction::None
        } else if distance > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// NaN when the child is not cached or not placed yet.
    fn distance_to_child(&self, data_index: usize, axis: Axis) -> f32 {
        if axis != self.axis() {
            return 0.0;
        }
        let Some(record) = self.cache.record(data_index) else {
            return f32::NAN;
        };
        let child_center = record.offset + record.size / 2.0 + self.placement_shift();
        child_center - self.viewport_extent() / 2.0
    }

    fn pre_measure_next(
        &mut self,
        source: &mut dyn ItemSource,
        measured: &[usize],
        axis: Axis,
        direction: Direction,
    ) -> Result<Option<usize>, LayoutError> {
        if axis != self.axis() {
            return Ok(None);
        }
        let next = match direction {
            Direction::Forward => match measured.iter().max() {
                Some(&last) => last.checked_add(1),
                None => Some(0),
            },
            Direction::Backward => measured
                .iter()
                .min()
                .and_then(|&first| first.checked_sub(1)),
            Direction::None => None,
        };
        let Some(next) = next.filter(|&i| i < source.item_count()) else {
            return Ok(None);
        };

        let size = source.measure(next);
        if size.get(axis).is_nan() {
            vtrace!(next, "pre_measure_next: item not ready");
            return Ok(None);
        }

        // Prepending must not move what is already on screen: re-anchor the old first record
        // and place the new one before it.
        let anchor = match direction {
            Direction::Backward => self
                .cache
                .id_at(0)
                .map(|id| self.cache.end_data_offset(id).map(|end| (id, end)))
                .transpose()?,
            _ => None,
        };
        self.measure_child(next, size)?;
        if let Some((id, end)) = anchor.filter(|(_, end)| !end.is_nan()) {
            self.cache.set_data_offset_before(id, end)?;
            self.cache.propagate_from(id)?;
        }
        vtrace!(next, ?direction, "pre_measure_next");
        Ok(Some(next))
    }
}
