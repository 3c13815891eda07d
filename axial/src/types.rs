use core::fmt;

use crate::LayoutError;

/// Stable identity of a cached record. Layouts use the data index as id.
pub type ItemId = usize;

/// One of the three spatial axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl TryFrom<u8> for Axis {
    type Error = LayoutError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            _ => Err(LayoutError::InvalidAxis(raw)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// Binds a layout to the axis along which its items are stacked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
    Stack,
}

impl Orientation {
    /// The axis along which child sizes are summed.
    pub fn axis(self) -> Axis {
        match self {
            Self::Horizontal => Axis::X,
            Self::Vertical => Axis::Y,
            Self::Stack => Axis::Z,
        }
    }

    /// Decodes a raw orientation value, falling back to [`Orientation::Vertical`] for values
    /// outside `0..=2`.
    pub fn from_raw_or_default(raw: u8) -> Self {
        Self::try_from(raw).unwrap_or_else(|_| {
            vwarn!(raw, "unsupported orientation value, falling back to vertical");
            Self::default()
        })
    }
}

impl TryFrom<u8> for Orientation {
    type Error = LayoutError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Horizontal),
            1 => Ok(Self::Vertical),
            2 => Ok(Self::Stack),
            _ => Err(LayoutError::InvalidOrientation(raw)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Ahead of the viewport focus (greater coordinate on the axis).
    Forward,
    /// Behind the viewport focus.
    Backward,
    None,
}

/// Where the laid out block sits inside the viewport when it is shorter than the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gravity {
    #[default]
    Start,
    Center,
    End,
}

/// Which cached fields [`crate::GeometryCache::invalidate`] marks stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Invalidation {
    /// Rebuild the id -> position index.
    Position,
    /// Forget placed offsets; sizes stay.
    Offset,
    /// Forget measured sizes (and the offsets derived from them).
    Size,
    /// Re-derive paddings (and the offsets derived from them).
    Padding,
    #[default]
    All,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// All components unmeasured.
    pub const NAN: Self = Self::new(f32::NAN, f32::NAN, f32::NAN);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    pub fn with(mut self, axis: Axis, value: f32) -> Self {
        self.set(axis, value);
        self
    }

    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

pub(crate) fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}

/// Treats NaN (unknown) extents as zero.
pub(crate) fn or_zero(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v }
}
