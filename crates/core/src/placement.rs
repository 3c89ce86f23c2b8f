//! Placement representation and layout primitives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two permitted 90°-apart footprint placements of a box on a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoxOrientation {
    /// Footprint as `box.length × box.width`.
    Lengthwise,
    /// Footprint rotated 90°, `box.width × box.length`.
    Widthwise,
}

impl BoxOrientation {
    /// Returns the other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Lengthwise => Self::Widthwise,
            Self::Widthwise => Self::Lengthwise,
        }
    }
}

/// One box footprint positioned on a level.
///
/// `x`/`y` address the top-left corner; `length`/`width` are the footprint
/// as placed, so a widthwise placement carries the box's width × length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Top-left x coordinate.
    pub x: f64,
    /// Top-left y coordinate.
    pub y: f64,
    /// Footprint extent along the x axis.
    pub length: f64,
    /// Footprint extent along the y axis.
    pub width: f64,
    /// Which of the two permitted placements this is.
    pub orientation: BoxOrientation,
    /// Segment this placement belongs to; only set in combined stacks.
    pub segment_index: Option<usize>,
}

impl Placement {
    /// Creates a placement at the given position.
    pub fn new(x: f64, y: f64, length: f64, width: f64, orientation: BoxOrientation) -> Self {
        Self {
            x,
            y,
            length,
            width,
            orientation,
            segment_index: None,
        }
    }

    /// Tags the placement with a segment index.
    pub fn with_segment(mut self, index: usize) -> Self {
        self.segment_index = Some(index);
        self
    }

    /// Returns the far x edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.length
    }

    /// Returns the far y edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.width
    }

    /// Returns the footprint area.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Returns the four footprint corners.
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.x, self.y),
            (self.max_x(), self.y),
            (self.x, self.max_y()),
            (self.max_x(), self.max_y()),
        ]
    }
}

/// A placement extruded into the stack: one physical box in 3-D.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedBox {
    /// Top-left x coordinate.
    pub x: f64,
    /// Top-left y coordinate.
    pub y: f64,
    /// Height of the level base this box sits on.
    pub z: f64,
    /// Footprint extent along the x axis.
    pub length: f64,
    /// Footprint extent along the y axis.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Level index (0-based), counted across segments in combined stacks.
    pub level: usize,
    /// Which of the two permitted placements this is.
    pub orientation: BoxOrientation,
    /// Segment this box belongs to; only set in combined stacks.
    pub segment_index: Option<usize>,
}

impl PlacedBox {
    /// Extrudes a footprint placement at the given level.
    pub fn from_placement(placement: &Placement, level: usize, z: f64, height: f64) -> Self {
        Self {
            x: placement.x,
            y: placement.y,
            z,
            length: placement.length,
            width: placement.width,
            height,
            level,
            orientation: placement.orientation,
            segment_index: placement.segment_index,
        }
    }
}

/// Bounding box and occupied area of a level layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutBounds {
    /// Extent along the x axis.
    pub length: f64,
    /// Extent along the y axis.
    pub width: f64,
    /// Summed footprint area of all placements.
    pub area: f64,
}

/// Measures the bounding box and occupied area of a layout.
///
/// The bounds are anchored at the origin: a layout that has already been
/// offset reports the offset as part of its extent.
pub fn measure_layout(layout: &[Placement]) -> LayoutBounds {
    let mut bounds = LayoutBounds::default();
    for placement in layout {
        bounds.length = bounds.length.max(placement.max_x());
        bounds.width = bounds.width.max(placement.max_y());
        bounds.area += placement.area();
    }
    bounds
}

/// Translates every placement by the given offsets.
pub fn offset_layout(layout: &[Placement], offset_x: f64, offset_y: f64) -> Vec<Placement> {
    layout
        .iter()
        .map(|placement| Placement {
            x: placement.x + offset_x,
            y: placement.y + offset_y,
            ..placement.clone()
        })
        .collect()
}

/// Symmetric offsets that center a layout inside a target footprint.
pub fn centering_offsets(
    target_length: f64,
    target_width: f64,
    bounds: &LayoutBounds,
) -> (f64, f64) {
    (
        (target_length - bounds.length) / 2.0,
        (target_width - bounds.width) / 2.0,
    )
}
