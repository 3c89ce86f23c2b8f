//! Multi-box combiner.
//!
//! Merges several single-box-type solutions that share a pallet footprint
//! into one vertically segmented stack, heaviest box type at the base. A
//! solution whose pallet orientation disagrees with the target is rotated
//! 90° and re-centered before stacking.

use crate::layout::extrude_stack;
use pallet_stack_core::{
    centering_offsets, measure_layout, offset_layout, Arrangement, Error, LayoutBounds, Metrics,
    OrientedPallet, Pallet, PalletOrientation, PlacedBox, Placement, Result, Segment, Solution,
    SolutionMeta,
};

/// Footprint comparison tolerance when checking that solutions share a
/// pallet.
const FOOTPRINT_EPSILON: f64 = 1e-6;

/// Display colors cycled across segments, in stacking order.
pub const SEGMENT_COLORS: [&str; 6] = [
    "#1f6feb", "#d83b7d", "#2da44e", "#bf8700", "#8250df", "#cf222e",
];

/// Which way a layout is rotated to reconcile its pallet orientation with
/// the combined target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    /// Length-first layout adapted to a width-first target.
    Clockwise,
    /// Width-first layout adapted to a length-first target.
    CounterClockwise,
}

impl RotationDirection {
    /// Rotation taking `from` to `to`, or `None` when they already agree.
    pub fn between(from: PalletOrientation, to: PalletOrientation) -> Option<Self> {
        match (from, to) {
            (PalletOrientation::LengthFirst, PalletOrientation::WidthFirst) => {
                Some(Self::Clockwise)
            }
            (PalletOrientation::WidthFirst, PalletOrientation::LengthFirst) => {
                Some(Self::CounterClockwise)
            }
            _ => None,
        }
    }
}

/// Rotates a level layout 90° and re-centers it in the target footprint.
///
/// Every placement is rotated about the origin, the rotated bounding box is
/// recomputed from all four corners of every placement, the minimum corner
/// is translated back to the origin, and every orientation tag flips. The
/// returned bounds are those of the rotated layout before centering, which
/// is the cargo footprint the segment reports.
pub fn rotate_footprint(
    placements: &[Placement],
    direction: RotationDirection,
    target_length: f64,
    target_width: f64,
) -> (Vec<Placement>, LayoutBounds) {
    let rotate = |x: f64, y: f64| -> (f64, f64) {
        match direction {
            RotationDirection::Clockwise => (y, -x),
            RotationDirection::CounterClockwise => (-y, x),
        }
    };

    let mut rotated = Vec::with_capacity(placements.len());
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;

    for placement in placements {
        let corners = placement.corners().map(|(x, y)| rotate(x, y));
        let rect_min_x = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
        let rect_min_y = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
        min_x = min_x.min(rect_min_x);
        min_y = min_y.min(rect_min_y);

        let mut flipped = placement.clone();
        flipped.x = rect_min_x;
        flipped.y = rect_min_y;
        flipped.length = placement.width;
        flipped.width = placement.length;
        flipped.orientation = placement.orientation.flipped();
        rotated.push(flipped);
    }

    if rotated.is_empty() {
        return (rotated, LayoutBounds::default());
    }

    let at_origin = offset_layout(&rotated, -min_x, -min_y);
    let bounds = measure_layout(&at_origin);
    let (offset_x, offset_y) = centering_offsets(target_length, target_width, &bounds);
    (offset_layout(&at_origin, offset_x, offset_y), bounds)
}

/// Merges two or more solved box-type solutions into one stacked load.
///
/// Inputs must be structurally valid (non-empty layouts) and share the same
/// base pallet footprint. Segments stack in descending box-weight order,
/// ties broken by descending occupied area, so heavier freight rides low.
/// When `pallet_override` is given it replaces the base pallet for stacking
/// and combined metrics; its footprint must still match.
///
/// The inputs are never mutated; the combined solution is a fresh tree.
pub fn combine(solutions: &[Solution], pallet_override: Option<&Pallet>) -> Result<Solution> {
    let mut valid: Vec<&Solution> = solutions.iter().filter(|s| s.is_populated()).collect();
    if valid.len() < 2 {
        return Err(Error::Combine(
            "at least two valid solutions are required".into(),
        ));
    }

    let reference = &valid[0].pallet.pallet;
    for solution in &valid[1..] {
        let pallet = &solution.pallet.pallet;
        if (pallet.length - reference.length).abs() > FOOTPRINT_EPSILON
            || (pallet.width - reference.width).abs() > FOOTPRINT_EPSILON
        {
            return Err(Error::Combine(
                "solutions use different pallet footprints".into(),
            ));
        }
    }

    if let Some(pallet) = pallet_override {
        pallet.validate()?;
        if (pallet.length - reference.length).abs() > FOOTPRINT_EPSILON
            || (pallet.width - reference.width).abs() > FOOTPRINT_EPSILON
        {
            return Err(Error::Combine(
                "override pallet footprint does not match the solutions".into(),
            ));
        }
    }

    // Heaviest box type first; occupied area breaks ties.
    valid.sort_by(|a, b| {
        b.box_spec
            .weight
            .total_cmp(&a.box_spec.weight)
            .then(b.metrics.area_occupied.total_cmp(&a.metrics.area_occupied))
    });

    let base = valid[0];
    let target_orientation = base.orientation;
    let target_length = base.pallet.oriented_length;
    let target_width = base.pallet.oriented_width;
    let base_pallet = pallet_override
        .cloned()
        .unwrap_or_else(|| base.pallet.pallet.clone());

    // Reconcile every layout to the target orientation, dropping segments
    // that end up contributing nothing.
    let mut retained: Vec<(&Solution, Vec<Placement>, LayoutBounds)> = Vec::new();
    for solution in valid {
        let (layout, bounds) = if solution.orientation == target_orientation {
            (
                solution.layout.clone(),
                LayoutBounds {
                    length: solution.metrics.cargo_length,
                    width: solution.metrics.cargo_width,
                    area: solution.metrics.area_occupied,
                },
            )
        } else {
            let direction = RotationDirection::between(solution.orientation, target_orientation)
                .ok_or_else(|| Error::Combine("cannot reconcile pallet orientations".into()))?;
            rotate_footprint(&solution.layout, direction, target_length, target_width)
        };

        if layout.is_empty() || solution.metrics.total_boxes == 0 {
            log::warn!(
                "dropping segment \"{}\": no boxes after reconciliation",
                solution.meta.display_name
            );
            continue;
        }
        retained.push((solution, layout, bounds));
    }

    if retained.is_empty() {
        return Err(Error::Combine("no segments contribute any boxes".into()));
    }

    // Stack segments bottom-up, levels numbered across the whole stack.
    let mut segments = Vec::with_capacity(retained.len());
    let mut combined_layout: Vec<Placement> = Vec::new();
    let mut combined_stack: Vec<PlacedBox> = Vec::new();
    let mut cursor = base_pallet.height;
    let mut level_cursor = 0;

    for (index, (solution, layout, bounds)) in retained.iter().enumerate() {
        let tagged: Vec<Placement> = layout
            .iter()
            .map(|p| p.clone().with_segment(index))
            .collect();
        let levels = solution.metrics.levels;
        let box_height = solution.box_spec.height;

        combined_stack.extend(extrude_stack(
            &tagged,
            levels,
            level_cursor,
            box_height,
            cursor,
            solution.metrics.total_boxes,
        ));

        let start_height = cursor;
        let end_height = cursor + levels as f64 * box_height;
        segments.push(Segment {
            label: solution.box_spec.label.clone(),
            display_name: solution.meta.display_name.clone(),
            box_spec: solution.box_spec.clone(),
            total_boxes: solution.metrics.total_boxes,
            load_weight: solution.metrics.load_weight,
            quantity_requested: solution.metrics.quantity_requested,
            quantity_shortfall: solution.metrics.quantity_shortfall,
            start_height,
            end_height,
            levels,
            cargo_length: bounds.length,
            cargo_width: bounds.width,
            cargo_area: bounds.area,
            source_index: solution.meta.source_index,
            color: SEGMENT_COLORS[index % SEGMENT_COLORS.len()].to_string(),
        });

        combined_layout.extend(tagged);
        cursor = end_height;
        level_cursor += levels;
    }

    let total_boxes: usize = segments.iter().map(|s| s.total_boxes).sum();
    let load_weight: f64 = segments.iter().map(|s| s.load_weight).sum();
    // Footprint metrics take the widest segment; a known approximation that
    // under-counts waste when segments differ in footprint.
    let cargo_length = segments.iter().map(|s| s.cargo_length).fold(0.0, f64::max);
    let cargo_width = segments.iter().map(|s| s.cargo_width).fold(0.0, f64::max);
    let area_occupied = segments.iter().map(|s| s.cargo_area).fold(0.0, f64::max);
    let area_total = target_length * target_width;
    let efficiency = if area_total == 0.0 {
        0.0
    } else {
        area_occupied / area_total * 100.0
    };

    let any_quantity = segments.iter().any(|s| s.quantity_requested.is_some());
    let quantity_requested = if any_quantity {
        Some(segments.iter().filter_map(|s| s.quantity_requested).sum())
    } else {
        None
    };
    let quantity_shortfall = if any_quantity {
        segments.iter().map(|s| s.quantity_shortfall).sum()
    } else {
        0
    };

    let boxes_per_level = retained
        .iter()
        .map(|(s, _, _)| s.metrics.boxes_per_level)
        .max()
        .unwrap_or(0);
    let full_levels: usize = retained.iter().map(|(s, _, _)| s.metrics.full_levels).sum();
    let last_level_boxes = retained
        .last()
        .map(|(s, _, _)| s.metrics.last_level_boxes)
        .unwrap_or(0);

    let bounds = LayoutBounds {
        length: cargo_length,
        width: cargo_width,
        area: area_occupied,
    };
    let (offset_x, offset_y) = centering_offsets(target_length, target_width, &bounds);

    let metrics = Metrics {
        boxes_per_level,
        levels: level_cursor,
        full_levels,
        last_level_boxes,
        cargo_length,
        cargo_width,
        offset_x,
        offset_y,
        total_height: cursor,
        area_total,
        area_occupied,
        efficiency,
        unused_area: (area_total - area_occupied).max(0.0),
        load_weight,
        total_weight: load_weight + base_pallet.weight,
        total_boxes,
        quantity_requested,
        quantity_shortfall,
    };

    let arrangement: Arrangement = base.arrangement;
    let display_name = format!("Combined load ({} box types)", segments.len());
    let source_index = base.meta.source_index;
    let box_spec = base.box_spec.clone();

    Ok(Solution {
        pallet: OrientedPallet::new(base_pallet, target_orientation),
        box_spec,
        orientation: target_orientation,
        metrics,
        arrangement,
        layout: combined_layout,
        layout3d: combined_stack,
        meta: SolutionMeta {
            display_name,
            source_index,
            segments: Some(segments),
        },
    })
}
