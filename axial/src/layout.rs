use crate::types::or_zero;
use crate::{Axis, Direction, LayoutError, Vector3};

/// Supplies item count and measurements to a layout.
///
/// This is the boundary to whatever owns the real widgets; the layout never holds them.
pub trait ItemSource {
    fn item_count(&self) -> usize;

    /// Measures the item at `data_index`. NaN components mean "not ready yet".
    fn measure(&mut self, data_index: usize) -> Vector3;
}

/// What a layout can answer about the items it manages.
///
/// [`crate::LinearLayout`] stacks items along one axis; [`AbsoluteLayout`] leaves every item
/// exactly where it was placed and has no directional semantics.
pub trait Layout {
    /// The axis along which child sizes are summed, `None` when every axis takes the max.
    fn orientation_axis(&self) -> Option<Axis>;

    /// Translation applied to the whole managed sequence.
    fn offset(&self) -> Vector3;

    /// Leading coordinate of a child along the orientation axis, before [`Self::offset`].
    fn data_offset(&self, data_index: usize) -> Result<f32, LayoutError>;

    /// Extent of `children` along `axis`; NaN while any child is unmeasured on that axis.
    fn calculate_size(&self, children: &[Vector3], axis: Axis) -> f32;

    fn in_viewport(&self, data_index: usize) -> bool;

    /// Data index of the child nearest to the viewport centre.
    fn center_child(&self) -> usize;

    fn direction_to_child(&self, data_index: usize, axis: Axis) -> Direction;

    /// Signed distance from the viewport centre to the child's centre along `axis`.
    fn distance_to_child(&self, data_index: usize, axis: Axis) -> f32;

    /// Measures one more item beyond `measured` in `direction`, returning its data index.
    ///
    /// Used to look ahead before deciding whether scrolling should stop.
    fn pre_measure_next(
        &mut self,
        source: &mut dyn ItemSource,
        measured: &[usize],
        axis: Axis,
        direction: Direction,
    ) -> Result<Option<usize>, LayoutError>;

    fn layout_child(&self, data_index: usize) -> Result<Vector3, LayoutError> {
        let offset = self.offset();
        let Some(axis) = self.orientation_axis() else {
            return Ok(offset);
        };
        let along = self.data_offset(data_index)? + offset.get(axis);
        Ok(offset.with(axis, along))
    }

    fn calculate_width(&self, children: &[Vector3]) -> f32 {
        self.calculate_size(children, Axis::X)
    }

    fn calculate_height(&self, children: &[Vector3]) -> f32 {
        self.calculate_size(children, Axis::Y)
    }

    fn calculate_depth(&self, children: &[Vector3]) -> f32 {
        self.calculate_size(children, Axis::Z)
    }
}

/// Sums sizes on the orientation axis and takes the max on the others.
///
/// Neighbours share `padding` (half from each side); the two outer edges add the full
/// `padding` only when `outer_padding` is set.
pub fn measure_extent(
    children: &[Vector3],
    axis: Axis,
    orientation_axis: Option<Axis>,
    padding: f32,
    outer_padding: bool,
) -> f32 {
    if children.iter().any(|c| c.get(axis).is_nan()) {
        return f32::NAN;
    }
    if children.is_empty() {
        return 0.0;
    }
    if orientation_axis != Some(axis) {
        return children.iter().map(|c| c.get(axis)).fold(0.0, f32::max);
    }
    let gaps = (children.len() - 1) as f32;
    let mut total: f32 = children.iter().map(|c| c.get(axis)).sum();
    total += gaps * padding;
    if outer_padding {
        total += 2.0 * padding;
    }
    total
}

/// A layout that leaves every item where it was placed.
///
/// Everything is always visible, nothing has a direction or distance, and the centre child is
/// always 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AbsoluteLayout {
    offset: Vector3,
}

impl AbsoluteLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offset(&mut self, offset: Vector3) {
        self.offset = Vector3::new(or_zero(offset.x), or_zero(offset.y), or_zero(offset.z));
    }
}

impl Layout for AbsoluteLayout {
    fn orientation_axis(&self) -> Option<Axis> {
        None
    }

    fn offset(&self) -> Vector3 {
        self.offset
    }

    fn data_offset(&self, _data_index: usize) -> Result<f32, LayoutError> {
        Ok(0.0)
    }

    fn calculate_size(&self, children: &[Vector3], axis: Axis) -> f32 {
        measure_extent(children, axis, None, 0.0, false)
    }

    fn in_viewport(&self, _data_index: usize) -> bool {
        true
    }

    fn center_child(&self) -> usize {
        0
    }

    fn direction_to_child(&self, _data_index: usize, _axis: Axis) -> Direction {
        Direction::None
    }

    fn distance_to_child(&self, _data_index: usize, _axis: Axis) -> f32 {
        0.0
    }

    fn pre_measure_next(
        &mut self,
        _source: &mut dyn ItemSource,
        _measured: &[usize],
        _axis: Axis,
        _direction: Direction,
    ) -> Result<Option<usize>, LayoutError> {
        Ok(None)
    }
}
