//! Solution and batch result representation.

use crate::pallet::{BoxSpec, Pallet};
use crate::placement::{PlacedBox, Placement};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which pallet footprint axis is used as the primary tiling axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PalletOrientation {
    /// The pallet length runs along the tiling x axis.
    LengthFirst,
    /// Length and width are swapped before tiling.
    WidthFirst,
}

impl PalletOrientation {
    /// Returns the wire/display name of the orientation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LengthFirst => "length-first",
            Self::WidthFirst => "width-first",
        }
    }
}

impl std::fmt::Display for PalletOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pallet together with the footprint dimensions actually used after the
/// optimizer may have swapped length and width.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientedPallet {
    /// The validated base pallet.
    pub pallet: Pallet,
    /// Footprint length along the tiling x axis.
    pub oriented_length: f64,
    /// Footprint width along the tiling y axis.
    pub oriented_width: f64,
}

impl OrientedPallet {
    /// Orients a pallet for the given tiling orientation.
    pub fn new(pallet: Pallet, orientation: PalletOrientation) -> Self {
        let (oriented_length, oriented_width) = match orientation {
            PalletOrientation::LengthFirst => (pallet.length, pallet.width),
            PalletOrientation::WidthFirst => (pallet.width, pallet.length),
        };
        Self {
            pallet,
            oriented_length,
            oriented_width,
        }
    }

    /// Returns the oriented footprint area.
    pub fn footprint_area(&self) -> f64 {
        self.oriented_length * self.oriented_width
    }
}

/// Per-solution metrics exposed to rendering and reporting collaborators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metrics {
    /// Boxes placed on a full level.
    pub boxes_per_level: usize,
    /// Levels in the stack, the last one possibly partial.
    pub levels: usize,
    /// Levels that are completely full.
    pub full_levels: usize,
    /// Boxes on the last level.
    pub last_level_boxes: usize,
    /// Cargo bounding-box length on a level.
    pub cargo_length: f64,
    /// Cargo bounding-box width on a level.
    pub cargo_width: f64,
    /// Centering offset along x.
    pub offset_x: f64,
    /// Centering offset along y.
    pub offset_y: f64,
    /// Pallet height plus all levels.
    pub total_height: f64,
    /// Oriented pallet footprint area.
    pub area_total: f64,
    /// Summed footprint area of the placements on a level.
    pub area_occupied: f64,
    /// Occupied area as a percentage of the footprint (0 when empty).
    pub efficiency: f64,
    /// Footprint area left uncovered, never negative.
    pub unused_area: f64,
    /// Weight of the cargo alone.
    pub load_weight: f64,
    /// Cargo weight plus pallet tare.
    pub total_weight: f64,
    /// Boxes actually placed.
    pub total_boxes: usize,
    /// Requested quantity, if one was supplied.
    pub quantity_requested: Option<u32>,
    /// Requested boxes that could not be placed (0 without a request).
    pub quantity_shortfall: u32,
}

/// Column structure of a level, for legends and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arrangement {
    /// Columns tiled lengthwise.
    pub lengthwise_columns: usize,
    /// Boxes per lengthwise column.
    pub lengthwise_per_column: usize,
    /// Columns tiled widthwise in the remaining strip.
    pub widthwise_columns: usize,
    /// Boxes per widthwise column.
    pub widthwise_per_column: usize,
}

/// One box type's contiguous vertical slice within a combined stack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Label of the box type, empty when none was supplied.
    pub label: String,
    /// Display name of the box type.
    pub display_name: String,
    /// Box dimensions and weight.
    pub box_spec: BoxSpec,
    /// Boxes this segment contributes.
    pub total_boxes: usize,
    /// Cargo weight of this segment.
    pub load_weight: f64,
    /// Requested quantity carried over from the source solution.
    pub quantity_requested: Option<u32>,
    /// Shortfall carried over from the source solution.
    pub quantity_shortfall: u32,
    /// Height at which this segment starts.
    pub start_height: f64,
    /// Height at which this segment ends.
    pub end_height: f64,
    /// Levels inside this segment.
    pub levels: usize,
    /// Cargo bounding-box length of this segment's levels.
    pub cargo_length: f64,
    /// Cargo bounding-box width of this segment's levels.
    pub cargo_width: f64,
    /// Occupied footprint area of this segment's levels.
    pub cargo_area: f64,
    /// Source index of the contributing box type.
    pub source_index: usize,
    /// Display color assigned from the segment palette.
    pub color: String,
}

/// Display metadata attached to a solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolutionMeta {
    /// Display name of the box type (or of the combined load).
    pub display_name: String,
    /// Source index of the box type (base segment for combined results).
    pub source_index: usize,
    /// Per-segment metadata; only present in combined results.
    pub segments: Option<Vec<Segment>>,
}

/// A complete stacking solution for one box type, or one combined load.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Pallet with the oriented footprint actually used.
    pub pallet: OrientedPallet,
    /// Echo of the box type that was placed.
    pub box_spec: BoxSpec,
    /// Chosen pallet orientation.
    pub orientation: PalletOrientation,
    /// Derived metrics.
    pub metrics: Metrics,
    /// Column structure of a full level.
    pub arrangement: Arrangement,
    /// One level of placements, centered on the oriented footprint.
    pub layout: Vec<Placement>,
    /// The full 3-D stack.
    pub layout3d: Vec<PlacedBox>,
    /// Display metadata.
    pub meta: SolutionMeta,
}

impl Solution {
    /// Returns true when the solution carries at least one placed box.
    ///
    /// Combination treats anything else as structurally invalid.
    pub fn is_populated(&self) -> bool {
        !self.layout.is_empty() && self.metrics.total_boxes > 0
    }
}

/// Whether a batch solved one box type or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SolveMode {
    /// A single box type.
    Single,
    /// Several box types, solved independently.
    Multi,
}

/// Aggregate totals across all per-box-type results in a batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchSummary {
    /// Boxes placed across all results.
    pub total_boxes: usize,
    /// Number of per-box-type layouts.
    pub total_layouts: usize,
    /// Cargo weight across all results.
    pub total_load_weight: f64,
    /// Cargo weight plus one pallet tare.
    pub total_weight: f64,
    /// Tallest stack across all results (at least the pallet height).
    pub max_height: f64,
    /// Requested boxes that could not be placed, across all results.
    pub unplaced_boxes: u32,
}

impl BatchSummary {
    /// Aggregates a summary from solved results.
    pub fn from_results(results: &[Solution], pallet: &Pallet) -> Self {
        let total_boxes = results.iter().map(|r| r.metrics.total_boxes).sum();
        let total_load_weight: f64 = results.iter().map(|r| r.metrics.load_weight).sum();
        let max_height = results
            .iter()
            .map(|r| r.metrics.total_height)
            .fold(pallet.height, f64::max);
        let unplaced_boxes = results.iter().map(|r| r.metrics.quantity_shortfall).sum();

        Self {
            total_boxes,
            total_layouts: results.len(),
            total_load_weight,
            total_weight: total_load_weight + pallet.weight,
            max_height,
            unplaced_boxes,
        }
    }
}

/// Result of solving a batch of one or more box types.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchResult {
    /// Single or multi box mode.
    pub mode: SolveMode,
    /// The validated input pallet.
    pub pallet: Pallet,
    /// Per-box-type solutions, in input order.
    pub results: Vec<Solution>,
    /// Aggregate totals.
    pub summary: BatchSummary,
}

impl BatchResult {
    /// Returns the solution for a given source index, if present.
    pub fn result_for(&self, source_index: usize) -> Option<&Solution> {
        self.results
            .iter()
            .find(|r| r.meta.source_index == source_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_oriented_pallet() {
        let pallet = Pallet::new(120.0, 80.0, 15.0, 200.0);

        let length_first = OrientedPallet::new(pallet.clone(), PalletOrientation::LengthFirst);
        assert_relative_eq!(length_first.oriented_length, 120.0);
        assert_relative_eq!(length_first.oriented_width, 80.0);

        let width_first = OrientedPallet::new(pallet, PalletOrientation::WidthFirst);
        assert_relative_eq!(width_first.oriented_length, 80.0);
        assert_relative_eq!(width_first.oriented_width, 120.0);
        assert_relative_eq!(width_first.footprint_area(), 9600.0);
    }

    #[test]
    fn test_orientation_display() {
        assert_eq!(PalletOrientation::LengthFirst.to_string(), "length-first");
        assert_eq!(PalletOrientation::WidthFirst.as_str(), "width-first");
    }

    #[test]
    fn test_summary_of_empty_batch() {
        let pallet = Pallet::new(120.0, 80.0, 15.0, 200.0).with_weight(25.0);
        let summary = BatchSummary::from_results(&[], &pallet);
        assert_eq!(summary.total_boxes, 0);
        assert_eq!(summary.total_layouts, 0);
        assert_relative_eq!(summary.total_weight, 25.0);
        // The pallet itself is the height floor.
        assert_relative_eq!(summary.max_height, 15.0);
    }
}
