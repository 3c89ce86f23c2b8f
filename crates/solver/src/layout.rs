//! Layout geometry builder.
//!
//! Expands an orientation tiling into concrete 2-D placements for one level
//! and extrudes a centered level into the 3-D stack. Placement order is the
//! rendering order; layouts are never reordered after creation.

use crate::orientation::FootprintTiling;
use pallet_stack_core::{BoxOrientation, BoxType, PlacedBox, Placement};

/// Expands a tiling into placements for a single level.
///
/// The lengthwise block is emitted first, column by column, then the
/// widthwise strip starting where the block ends. At most `limit` placements
/// are produced, which realizes a partial last level.
pub fn build_level(tiling: &FootprintTiling, box_type: &BoxType, limit: usize) -> Vec<Placement> {
    let mut layout = Vec::with_capacity(limit.min(tiling.boxes_per_level()));
    let mut remaining = limit;

    if tiling.lengthwise_count > 0 && tiling.per_lengthwise_column > 0 {
        'lengthwise: for column in 0..tiling.lengthwise_columns {
            for row in 0..tiling.per_lengthwise_column {
                if remaining == 0 {
                    break 'lengthwise;
                }
                layout.push(Placement::new(
                    column as f64 * box_type.length,
                    row as f64 * box_type.width,
                    box_type.length,
                    box_type.width,
                    BoxOrientation::Lengthwise,
                ));
                remaining -= 1;
            }
        }
    }

    if remaining > 0 && tiling.widthwise_count > 0 && tiling.per_widthwise_column > 0 {
        let strip_start = tiling.lengthwise_columns as f64 * box_type.length;
        'widthwise: for column in 0..tiling.widthwise_columns {
            for row in 0..tiling.per_widthwise_column {
                if remaining == 0 {
                    break 'widthwise;
                }
                layout.push(Placement::new(
                    strip_start + column as f64 * box_type.width,
                    row as f64 * box_type.length,
                    box_type.width,
                    box_type.length,
                    BoxOrientation::Widthwise,
                ));
                remaining -= 1;
            }
        }
    }

    layout
}

/// Extrudes a level layout into a stack of levels.
///
/// Levels are numbered from `first_level`, each based at
/// `base_z + i · box_height`. Emission stops once `target_boxes` placements
/// exist, so only the last level may be partial. Segment tags on the input
/// placements are carried through.
pub fn extrude_stack(
    layout: &[Placement],
    levels: usize,
    first_level: usize,
    box_height: f64,
    base_z: f64,
    target_boxes: usize,
) -> Vec<PlacedBox> {
    let mut stack = Vec::with_capacity(target_boxes.min(layout.len() * levels));
    let mut remaining = target_boxes;

    for level in 0..levels {
        let z = base_z + level as f64 * box_height;
        for placement in layout {
            if remaining == 0 {
                return stack;
            }
            stack.push(PlacedBox::from_placement(
                placement,
                first_level + level,
                z,
                box_height,
            ));
            remaining -= 1;
        }
    }

    stack
}
