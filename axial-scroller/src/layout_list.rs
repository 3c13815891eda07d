use axial::{Direction, ItemSource, Layout, LayoutError, LayoutOptions, LinearLayout};

use crate::{ScrollError, ScrollOffset, ScrollRequest, ScrollableList};

/// A [`ScrollableList`] backed by an in-process [`LinearLayout`].
///
/// Scrolling moves the layout offset and measures items through the [`ItemSource`] as they
/// come into view. Requests always complete synchronously.
///
/// The scroll position is the cache coordinate shown at the viewport's leading edge.
#[derive(Debug)]
pub struct LayoutList<S> {
    layout: LinearLayout,
    source: S,
}

impl<S: ItemSource> LayoutList<S> {
    /// Builds the layout and measures enough items to fill the viewport.
    pub fn new(options: LayoutOptions, mut source: S) -> Result<Self, ScrollError> {
        let mut layout = LinearLayout::new(options)?;
        layout.measure_until_full(&mut source, 0)?;
        Ok(Self { layout, source })
    }

    pub fn layout(&self) -> &LinearLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut LinearLayout {
        &mut self.layout
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_parts(self) -> (LinearLayout, S) {
        (self.layout, self.source)
    }

    pub fn scroll_position(&self) -> f32 {
        -self.layout.offset().get(self.layout.axis())
    }

    /// Drops every cached measurement and starts over from the first item.
    ///
    /// Call this when the source's items were replaced.
    pub fn reload(&mut self) -> Result<(), ScrollError> {
        self.layout.cache_mut().clear();
        self.set_scroll_position(0.0);
        self.layout.measure_until_full(&mut self.source, 0)?;
        Ok(())
    }

    fn set_scroll_position(&mut self, position: f32) {
        let axis = self.layout.axis();
        let offset = self.layout.offset().with(axis, -position);
        self.layout.set_offset(offset);
    }

    fn last_measured(&self) -> Option<usize> {
        let cache = self.layout.cache();
        cache.count().checked_sub(1).and_then(|pos| cache.id_at(pos))
    }

    fn measure_next(&mut self) -> Result<bool, LayoutError> {
        let last = self.last_measured();
        let axis = self.layout.axis();
        let next =
            self.layout
                .pre_measure_next(&mut self.source, last.as_slice(), axis, Direction::Forward)?;
        Ok(next.is_some())
    }

    /// Measures forward until `index` is cached. `false` when it cannot be measured.
    fn ensure_measured(&mut self, index: usize) -> Result<bool, LayoutError> {
        while !self.layout.cache().contains(index) {
            if !self.measure_next()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Measures forward until the viewport starting at `position` is covered.
    ///
    /// Returns the end of the content once the last item is measured.
    fn fill_from(&mut self, position: f32) -> Result<Option<f32>, LayoutError> {
        let target = position + self.layout.viewport_extent();
        loop {
            let last = self.last_measured();
            let end = match last {
                Some(id) => self.layout.cache().end_data_offset(id)?,
                None => 0.0,
            };
            if last.map_or(0, |id| id + 1) >= self.source.item_count() {
                return Ok(Some(end));
            }
            if end >= target || !self.measure_next()? {
                return Ok(None);
            }
        }
    }

    fn try_scroll_to(&mut self, position: usize) -> Result<bool, LayoutError> {
        self.layout.layout_children()?;
        if !self.ensure_measured(position)? {
            return Ok(false);
        }
        let target = self.layout.cache().data_offset(position)?;
        self.fill_from(target)?;
        self.set_scroll_position(target);
        Ok(true)
    }

    fn try_scroll_by(&mut self, delta: f32) -> Result<(), LayoutError> {
        self.layout.layout_children()?;
        let first_start = match self.layout.cache().id_at(0) {
            Some(id) => self.layout.cache().start_data_offset(id)?,
            None => 0.0,
        };
        let mut target = (self.scroll_position() + delta).max(first_start);
        if let Some(end) = self.fill_from(target)? {
            let last_start = (end - self.layout.viewport_extent()).max(first_start);
            target = target.min(last_start);
        }
        self.set_scroll_position(target);
        Ok(())
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn reject(&self, error: LayoutError) -> ScrollRequest {
        vwarn!(%error, "layout list could not scroll");
        ScrollRequest::Rejected
    }
}

impl<S: ItemSource> ScrollableList for LayoutList<S> {
    fn item_count(&self) -> usize {
        self.source.item_count()
    }

    fn viewport_width(&self) -> f32 {
        self.layout.viewport_size().x
    }

    fn viewport_height(&self) -> f32 {
        self.layout.viewport_size().y
    }

    fn viewport_depth(&self) -> f32 {
        self.layout.viewport_size().z
    }

    fn current_position(&self) -> usize {
        self.layout.visible_range().start_index
    }

    fn scroll_to_position(&mut self, position: usize) -> ScrollRequest {
        match self.try_scroll_to(position) {
            Ok(true) => ScrollRequest::Finished,
            Ok(false) => {
                vwarn!(position, "item is not available to scroll to");
                ScrollRequest::Rejected
            }
            Err(error) => self.reject(error),
        }
    }

    fn scroll_by_offset(&mut self, offset: ScrollOffset) -> ScrollRequest {
        let Some(delta) = offset.get(self.layout.axis()) else {
            vtrace!(?offset, "no movement on the layout axis");
            return ScrollRequest::Finished;
        };
        match self.try_scroll_by(delta) {
            Ok(()) => ScrollRequest::Finished,
            Err(error) => self.reject(error),
        }
    }
}
