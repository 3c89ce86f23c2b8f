//! Footprint orientation optimizer.
//!
//! Tiles a rectangular pallet footprint with one box footprint using a
//! two-region split: a block of lengthwise columns followed by a strip of
//! widthwise columns. The number of lengthwise columns is the only free
//! integer variable, so an exhaustive scan over it is an exact search, not a
//! heuristic.

use pallet_stack_core::{BoxType, Pallet, PalletOrientation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The area-maximizing two-orientation tiling of one pallet footprint.
///
/// Computed fresh per box type and per pallet footprint orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FootprintTiling {
    /// Total covered area of this tiling.
    pub cargo_area: f64,
    /// Boxes placed lengthwise.
    pub lengthwise_count: usize,
    /// Boxes placed widthwise.
    pub widthwise_count: usize,
    /// Columns in the lengthwise block.
    pub lengthwise_columns: usize,
    /// Columns in the widthwise strip.
    pub widthwise_columns: usize,
    /// Boxes per lengthwise column.
    pub per_lengthwise_column: usize,
    /// Boxes per widthwise column.
    pub per_widthwise_column: usize,
    /// Pallet footprint length used as the tiling axis.
    pub pallet_len: f64,
    /// Pallet footprint width used as the cross axis.
    pub pallet_width: f64,
}

impl FootprintTiling {
    /// Boxes placed on one full level.
    pub fn boxes_per_level(&self) -> usize {
        self.lengthwise_count + self.widthwise_count
    }
}

/// Finds the area-maximizing mix of lengthwise and widthwise columns for one
/// pallet footprint pairing.
///
/// Scans the lengthwise column count from its maximum down to zero; for each
/// candidate the remaining strip is filled with widthwise columns. Selection
/// is strictly-greater, so ties keep the first candidate encountered: the
/// largest lengthwise block, favoring pure lengthwise tiling over a mix.
///
/// A tiling where nothing fits reports zero area and zero counts; the caller
/// treats that as infeasible.
pub fn tile_footprint(
    pallet_len: f64,
    pallet_width: f64,
    box_length: f64,
    box_width: f64,
) -> FootprintTiling {
    let max_lengthwise_columns = (pallet_len / box_length).floor() as usize;
    let per_widthwise_column = (pallet_width / box_length).floor() as usize;
    let per_lengthwise_column = (pallet_width / box_width).floor() as usize;
    let box_area = box_length * box_width;

    let mut best: Option<FootprintTiling> = None;
    for columns in (0..=max_lengthwise_columns).rev() {
        let remaining = pallet_len - columns as f64 * box_length;
        let widthwise_columns = (remaining / box_width).floor() as usize;
        let lengthwise_count = columns * per_lengthwise_column;
        let widthwise_count = widthwise_columns * per_widthwise_column;
        let cargo_area = box_area * (lengthwise_count + widthwise_count) as f64;

        let better = match &best {
            None => true,
            Some(current) => cargo_area > current.cargo_area,
        };
        if better {
            best = Some(FootprintTiling {
                cargo_area,
                lengthwise_count,
                widthwise_count,
                lengthwise_columns: columns,
                widthwise_columns,
                per_lengthwise_column,
                per_widthwise_column,
                pallet_len,
                pallet_width,
            });
        }
    }

    best.unwrap_or(FootprintTiling {
        cargo_area: 0.0,
        lengthwise_count: 0,
        widthwise_count: 0,
        lengthwise_columns: 0,
        widthwise_columns: 0,
        per_lengthwise_column,
        per_widthwise_column,
        pallet_len,
        pallet_width,
    })
}

/// Tiles both pallet footprint orientations and picks the better one.
///
/// The length-first orientation wins ties, matching the stable behavior
/// callers depend on for re-solves.
pub fn best_orientation(pallet: &Pallet, box_type: &BoxType) -> (FootprintTiling, PalletOrientation) {
    let length_first = tile_footprint(pallet.length, pallet.width, box_type.length, box_type.width);
    let width_first = tile_footprint(pallet.width, pallet.length, box_type.length, box_type.width);

    if length_first.cargo_area >= width_first.cargo_area {
        log::debug!(
            "orientation length-first: {} boxes/level covering {} cm²",
            length_first.boxes_per_level(),
            length_first.cargo_area
        );
        (length_first, PalletOrientation::LengthFirst)
    } else {
        log::debug!(
            "orientation width-first: {} boxes/level covering {} cm²",
            width_first.boxes_per_level(),
            width_first.cargo_area
        );
        (width_first, PalletOrientation::WidthFirst)
    }
}
