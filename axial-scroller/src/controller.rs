use alloc::sync::Arc;

use crate::{
    FlingIntegrator, ListenerList, OnPageChangedListener, OnScrollListener, ScrollError,
    ScrollOffset, ScrollRequest, ScrollableList, ScrollerOptions,
};

/// Gesture velocity that maps to the largest fling offset.
pub const VELOCITY_MAX: f32 = 30_000.0;

/// Upper bound of a fling offset along one axis.
pub const MAX_FLING_OFFSET: f32 = 500.0;

/// Fling offsets smaller than this are sent as "no movement".
const MIN_FLING_OFFSET: f32 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    Scrolling,
    Flinging,
}

/// What a pending request settles to once the container completes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PendingScroll {
    Item(usize),
    /// Resolved from the container's position on completion.
    Offset,
}

/// Scroll, paging and fling policy over a [`ScrollableList`].
///
/// The controller holds no UI objects. It decides which index or offset to request, hands the
/// request to the list, and tracks the current item once the list reports completion:
/// - synchronously, when the list answers [`ScrollRequest::Finished`]
/// - later, through [`ScrollController::complete_scroll`], when it answers
///   [`ScrollRequest::Pending`]
///
/// Adapters call [`ScrollController::tick`] from their frame loop while a fling is running and
/// forward data-set changes through [`ScrollController::on_data_changed`] and
/// [`ScrollController::on_data_invalidated`].
#[derive(Debug)]
pub struct ScrollController<L> {
    list: L,
    options: ScrollerOptions,
    current_item_index: usize,
    page_count: usize,
    phase: ScrollPhase,
    pending: Option<PendingScroll>,
    fling: FlingIntegrator,
    scroll_listeners: ListenerList<dyn OnScrollListener>,
    page_listeners: ListenerList<dyn OnPageChangedListener>,
}

impl<L: ScrollableList> ScrollController<L> {
    pub fn new(list: L, options: ScrollerOptions) -> Result<Self, ScrollError> {
        options.validate()?;
        let count = list.item_count();
        let current_item_index = resolve_position(
            count,
            &options,
            isize::try_from(list.current_position()).unwrap_or(isize::MAX),
        );
        let page_count = page_count_for(count, options.page_size);
        vdebug!(
            count,
            current_item_index,
            page_count,
            scroll_over = options.scroll_over,
            "ScrollController::new"
        );
        Ok(Self {
            list,
            options,
            current_item_index,
            page_count,
            phase: ScrollPhase::Idle,
            pending: None,
            fling: FlingIntegrator::new(options.fling_deceleration),
            scroll_listeners: ListenerList::new(),
            page_listeners: ListenerList::new(),
        })
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    pub fn into_list(self) -> L {
        self.list
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    pub fn current_item_index(&self) -> usize {
        self.current_item_index
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_scrolling(&self) -> bool {
        self.phase != ScrollPhase::Idle
    }

    /// A request is waiting for [`Self::complete_scroll`].
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn fling_integrator(&self) -> &FlingIntegrator {
        &self.fling
    }

    pub fn add_scroll_listener(&mut self, listener: Arc<dyn OnScrollListener>) -> bool {
        self.scroll_listeners.add(listener)
    }

    pub fn remove_scroll_listener(&mut self, listener: &Arc<dyn OnScrollListener>) -> bool {
        self.scroll_listeners.remove(listener)
    }

    pub fn add_page_changed_listener(&mut self, listener: Arc<dyn OnPageChangedListener>) -> bool {
        self.page_listeners.add(listener)
    }

    pub fn remove_page_changed_listener(
        &mut self,
        listener: &Arc<dyn OnPageChangedListener>,
    ) -> bool {
        self.page_listeners.remove(listener)
    }

    /// Resolves a requested index: wraps (scroll-over) or clamps it into the item range, then
    /// rounds it down to a multiple of `delta_scroll_amount`.
    pub fn valid_position(&self, index: isize) -> usize {
        resolve_position(self.list.item_count(), &self.options, index)
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The page holding the current item; 0 when paging is disabled.
    pub fn current_page(&self) -> usize {
        match self.options.page_size {
            0 => 0,
            size => (self.current_item_index / size).min(self.page_count.saturating_sub(1)),
        }
    }

    pub fn first_item_index_on_page(&self, page: usize) -> usize {
        page.saturating_mul(self.options.page_size)
    }

    /// Returns `None` when the target is already the current item.
    pub fn scroll_to_item(&mut self, index: isize) -> Option<ScrollRequest> {
        let target = self.valid_position(index);
        self.request_item(target, ScrollPhase::Scrolling, false)
    }

    pub fn scroll_to_next_item(&mut self) -> Option<ScrollRequest> {
        let index = self.current_index().saturating_add(self.step());
        self.scroll_to_item(index)
    }

    pub fn scroll_to_prev_item(&mut self) -> Option<ScrollRequest> {
        let index = self.current_index().saturating_sub(self.step());
        self.scroll_to_item(index)
    }

    pub fn scroll_to_beginning(&mut self) -> Option<ScrollRequest> {
        self.scroll_to_item(0)
    }

    pub fn scroll_to_end(&mut self) -> Option<ScrollRequest> {
        let last = isize::try_from(self.list.item_count()).unwrap_or(isize::MAX) - 1;
        self.scroll_to_item(last)
    }

    /// Scrolls to the first item of `page`.
    ///
    /// Out-of-range pages wrap with scroll-over and clamp otherwise.
    pub fn scroll_to_page(&mut self, page: isize) -> Result<Option<ScrollRequest>, ScrollError> {
        if !self.options.paging_enabled() {
            vwarn!(page, "scroll_to_page ignored: paging is disabled");
            return Err(ScrollError::PagingDisabled);
        }
        let page_count = isize::try_from(self.page_count).unwrap_or(isize::MAX);
        let page = if page_count == 0 {
            0
        } else if self.options.scroll_over {
            page.rem_euclid(page_count)
        } else {
            page.clamp(0, page_count - 1)
        };
        let index = self.first_item_index_on_page(page as usize);
        Ok(self.scroll_to_item(isize::try_from(index).unwrap_or(isize::MAX)))
    }

    pub fn scroll_to_next_page(&mut self) -> Result<Option<ScrollRequest>, ScrollError> {
        let page = self.current_page_index().saturating_add(1);
        self.scroll_to_page(page)
    }

    pub fn scroll_to_prev_page(&mut self) -> Result<Option<ScrollRequest>, ScrollError> {
        let page = self.current_page_index().saturating_sub(1);
        self.scroll_to_page(page)
    }

    /// Turns a gesture velocity into a bounded offset scroll.
    ///
    /// Each axis moves by `min(500, extent * 4) * velocity / VELOCITY_MAX`. Flinging along Z
    /// is not supported yet. Returns `None` when no axis would move.
    pub fn fling(
        &mut self,
        velocity_x: f32,
        velocity_y: f32,
        velocity_z: f32,
    ) -> Option<ScrollRequest> {
        if velocity_z != 0.0 && !velocity_z.is_nan() {
            vwarn!(velocity_z, "fling along z is not supported, ignoring it");
        }
        let offset = ScrollOffset {
            x: fling_offset(self.list.viewport_width(), velocity_x),
            y: fling_offset(self.list.viewport_height(), velocity_y),
            z: None,
        };
        if offset.is_empty() {
            vtrace!(velocity_x, velocity_y, "fling too slow to move");
            return None;
        }
        vdebug!(?offset, "fling");
        self.fling.force_finished();
        self.begin(ScrollPhase::Flinging);
        let request = self.list.scroll_by_offset(offset);
        self.settle(request, PendingScroll::Offset);
        Some(request)
    }

    /// Flings through item indexes and scrolls straight to where the fling comes to rest.
    ///
    /// The velocity is normalized by the item count and the integrator is bounded to
    /// `[-count, 2 * count]`; the resting index then goes through [`Self::valid_position`].
    /// Poll the integrator with [`Self::tick`] to animate the motion.
    pub fn fling_to_position(&mut self, velocity: f32, now_ms: u64) -> Option<ScrollRequest> {
        let count = self.list.item_count();
        if count == 0 {
            return None;
        }
        let count = count as f32;
        let velocity = -velocity / count;
        self.fling.force_finished();
        self.fling.fling(
            self.current_item_index as f32,
            velocity,
            -count,
            2.0 * count,
            now_ms,
        );
        let resting = round_to_isize(self.fling.final_position());
        let target = self.valid_position(resting);
        vdebug!(velocity, resting, target, "fling_to_position");
        let request = self.request_item(target, ScrollPhase::Flinging, false);
        if request.is_none() {
            self.phase = self.resting_phase();
        }
        request
    }

    /// Advances the fling integrator.
    ///
    /// Returns the integrator position while a fling is in flight, `None` otherwise. The
    /// controller stays in [`ScrollPhase::Flinging`] until the integrator comes to rest.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let moved = self.fling.compute_offset(now_ms);
        self.leave_fling_phase();
        moved.then(|| self.fling.current())
    }

    pub fn cancel_fling(&mut self) {
        self.fling.force_finished();
        self.leave_fling_phase();
    }

    /// Completes a request the list answered with [`ScrollRequest::Pending`].
    ///
    /// Returns `false` when nothing was pending.
    pub fn complete_scroll(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                self.finish(pending);
                true
            }
            None => false,
        }
    }

    /// The item count changed: recompute pages and pull the current item back into range.
    ///
    /// A pending item request that now points past the end is replaced as well.
    pub fn on_data_changed(&mut self) -> Option<ScrollRequest> {
        let count = self.list.item_count();
        self.page_count = page_count_for(count, self.options.page_size);
        vdebug!(count, page_count = self.page_count, "on_data_changed");
        if count == 0 {
            self.current_item_index = 0;
            return None;
        }
        let stale_target = matches!(self.pending, Some(PendingScroll::Item(t)) if t >= count);
        if self.current_item_index < count && !stale_target {
            return None;
        }
        let last = isize::try_from(count).unwrap_or(isize::MAX) - 1;
        let target = self.valid_position(last);
        self.request_item(target, ScrollPhase::Scrolling, true)
    }

    /// The data set was replaced: recompute pages and go back to the first item.
    pub fn on_data_invalidated(&mut self) -> Option<ScrollRequest> {
        let count = self.list.item_count();
        self.page_count = page_count_for(count, self.options.page_size);
        vdebug!(count, page_count = self.page_count, "on_data_invalidated");
        if count == 0 {
            self.current_item_index = 0;
            return None;
        }
        self.request_item(0, ScrollPhase::Scrolling, true)
    }

    fn current_index(&self) -> isize {
        isize::try_from(self.current_item_index).unwrap_or(isize::MAX)
    }

    fn current_page_index(&self) -> isize {
        isize::try_from(self.current_page()).unwrap_or(isize::MAX)
    }

    fn step(&self) -> isize {
        isize::try_from(self.options.delta_scroll_amount).unwrap_or(isize::MAX)
    }

    fn request_item(
        &mut self,
        target: usize,
        phase: ScrollPhase,
        force: bool,
    ) -> Option<ScrollRequest> {
        if target == self.current_item_index && self.pending.is_none() && !force {
            vtrace!(target, "already at target");
            return None;
        }
        vtrace!(from = self.current_item_index, target, ?phase, "scroll request");
        self.begin(phase);
        let request = self.list.scroll_to_position(target);
        self.settle(request, PendingScroll::Item(target));
        Some(request)
    }

    fn begin(&mut self, phase: ScrollPhase) {
        if phase != ScrollPhase::Flinging {
            self.fling.force_finished();
        }
        self.phase = phase;
        let from = self.current_item_index;
        self.scroll_listeners.for_each(|l| l.on_scroll_started(from));
    }

    fn settle(&mut self, request: ScrollRequest, pending: PendingScroll) {
        match request {
            ScrollRequest::Finished => self.finish(pending),
            ScrollRequest::Pending => self.pending = Some(pending),
            ScrollRequest::Rejected => {
                vwarn!(?pending, "scroll request rejected by the list");
                self.pending = None;
                self.fling.force_finished();
                self.phase = ScrollPhase::Idle;
                let index = self.current_item_index;
                self.scroll_listeners.for_each(|l| l.on_scroll_finished(index));
            }
        }
    }

    fn finish(&mut self, pending: PendingScroll) {
        self.pending = None;
        let old_page = self.current_page();
        // The item count may have changed since the request was sent.
        let last = self.list.item_count().saturating_sub(1);
        let index = match pending {
            PendingScroll::Item(index) => index,
            PendingScroll::Offset => self.list.current_position(),
        };
        self.current_item_index =
            self.valid_position(isize::try_from(index.min(last)).unwrap_or(isize::MAX));
        self.phase = self.resting_phase();

        let index = self.current_item_index;
        self.scroll_listeners.for_each(|l| l.on_scroll_finished(index));

        let page = self.current_page();
        if self.options.paging_enabled() && page != old_page {
            vdebug!(old_page, page, "page changed");
            self.page_listeners.for_each(|l| l.on_page_changed(page));
        }
    }

    /// `Flinging` while the integrator still moves, `Idle` otherwise.
    fn resting_phase(&self) -> ScrollPhase {
        if self.fling.is_finished() {
            ScrollPhase::Idle
        } else {
            ScrollPhase::Flinging
        }
    }

    fn leave_fling_phase(&mut self) {
        if self.phase == ScrollPhase::Flinging && self.pending.is_none() {
            self.phase = self.resting_phase();
        }
    }
}

/// Wraps or clamps `index` into `[0, count)` and rounds it down to a multiple of the step.
fn resolve_position(count: usize, options: &ScrollerOptions, index: isize) -> usize {
    if count == 0 {
        return 0;
    }
    let count = isize::try_from(count).unwrap_or(isize::MAX);
    let position = if options.scroll_over {
        index.rem_euclid(count)
    } else {
        index.clamp(0, count - 1)
    };
    let position = position as usize;
    position - position % options.delta_scroll_amount
}

/// Offset for one axis of [`ScrollController::fling`]; `None` when it would not visibly move.
///
/// NaN extents count as 0.
pub fn fling_offset(extent: f32, velocity: f32) -> Option<f32> {
    let extent = if extent.is_nan() { 0.0 } else { extent };
    let offset = (extent * 4.0).min(MAX_FLING_OFFSET) * velocity / VELOCITY_MAX;
    if offset.is_nan() || (offset < MIN_FLING_OFFSET && offset > -MIN_FLING_OFFSET) {
        None
    } else {
        Some(offset)
    }
}

fn page_count_for(count: usize, page_size: usize) -> usize {
    match page_size {
        0 => 1,
        size => count.div_ceil(size),
    }
}

fn round_to_isize(v: f32) -> isize {
    if v >= 0.0 {
        (v + 0.5) as isize
    } else {
        (v - 0.5) as isize
    }
}
