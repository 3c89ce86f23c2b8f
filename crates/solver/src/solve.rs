//! Solution assembly and the public solve entry points.

use crate::layout::{build_level, extrude_stack};
use crate::levels::{level_capacity, plan_quantity};
use crate::orientation::{best_orientation, FootprintTiling};
use pallet_stack_core::{
    centering_offsets, measure_layout, offset_layout, validate_dimensions, Arrangement,
    BatchResult, BatchSummary, BoxSpec, BoxType, Error, Metrics, OrientedPallet, Pallet,
    PalletOrientation, Result, Solution, SolutionMeta, SolveMode,
};

/// Assembles a full solution from a chosen tiling.
fn format_solution(
    tiling: &FootprintTiling,
    orientation: PalletOrientation,
    pallet: &Pallet,
    box_type: &BoxType,
) -> Result<Solution> {
    let boxes_per_level = tiling.boxes_per_level();
    if boxes_per_level == 0 {
        return Err(Error::NoFit(
            "No boxes fit on the pallet with the provided dimensions".into(),
        ));
    }

    let capacity_levels = level_capacity(pallet, box_type, boxes_per_level);
    if capacity_levels == 0 {
        return Err(Error::NoFit(
            "No stack levels can be placed on the pallet with the provided limits".into(),
        ));
    }

    let plan = plan_quantity(boxes_per_level, capacity_levels, box_type.quantity);
    if plan.target_boxes == 0 {
        return Err(Error::NoFit(
            "No boxes fit on the pallet with the provided dimensions".into(),
        ));
    }

    let per_level_limit = boxes_per_level.min(plan.target_boxes);
    let base_layout = build_level(tiling, box_type, per_level_limit);
    if base_layout.is_empty() {
        return Err(Error::NoFit(
            "No boxes fit on the pallet with the provided dimensions".into(),
        ));
    }

    let oriented = OrientedPallet::new(pallet.clone(), orientation);
    let bounds = measure_layout(&base_layout);
    let (offset_x, offset_y) =
        centering_offsets(oriented.oriented_length, oriented.oriented_width, &bounds);
    let layout = offset_layout(&base_layout, offset_x, offset_y);

    let area_total = oriented.footprint_area();
    let efficiency = if area_total == 0.0 {
        0.0
    } else {
        bounds.area / area_total * 100.0
    };
    let load_weight = plan.target_boxes as f64 * box_type.weight;
    let layout3d = extrude_stack(
        &layout,
        plan.levels,
        0,
        box_type.height,
        pallet.height,
        plan.target_boxes,
    );

    let metrics = Metrics {
        boxes_per_level,
        levels: plan.levels,
        full_levels: plan.full_levels,
        last_level_boxes: plan.last_level_boxes,
        cargo_length: bounds.length,
        cargo_width: bounds.width,
        offset_x,
        offset_y,
        total_height: pallet.height + plan.levels as f64 * box_type.height,
        area_total,
        area_occupied: bounds.area,
        efficiency,
        unused_area: (area_total - bounds.area).max(0.0),
        load_weight,
        total_weight: load_weight + pallet.weight,
        total_boxes: plan.target_boxes,
        quantity_requested: plan.quantity_requested,
        quantity_shortfall: plan.quantity_shortfall,
    };

    Ok(Solution {
        pallet: oriented,
        box_spec: BoxSpec::from_box(box_type),
        orientation,
        metrics,
        arrangement: Arrangement {
            lengthwise_columns: tiling.lengthwise_columns,
            lengthwise_per_column: tiling.per_lengthwise_column,
            widthwise_columns: tiling.widthwise_columns,
            widthwise_per_column: tiling.per_widthwise_column,
        },
        layout,
        layout3d,
        meta: SolutionMeta {
            display_name: box_type.display_name(),
            source_index: box_type.source_index,
            segments: None,
        },
    })
}

/// Solves the stacking problem for a single box type.
///
/// Validates the inputs, tiles both pallet footprint orientations, keeps the
/// better one, and assembles the solution. All failures abort the call; no
/// partial solution is ever returned.
pub fn solve_single(pallet: &Pallet, box_type: &BoxType) -> Result<Solution> {
    validate_dimensions(pallet, box_type)?;
    let (tiling, orientation) = best_orientation(pallet, box_type);
    format_solution(&tiling, orientation, pallet, box_type)
}

/// Solves the stacking problem for one or more box types on the same pallet.
///
/// Each box type is solved independently; results preserve input order and
/// carry their source index. The summary aggregates totals across all
/// results.
pub fn solve(pallet: &Pallet, boxes: &[BoxType]) -> Result<BatchResult> {
    pallet.validate()?;
    if boxes.is_empty() {
        return Err(Error::InvalidBox("At least one box type is required".into()));
    }

    let results = boxes
        .iter()
        .map(|box_type| solve_single(pallet, box_type))
        .collect::<Result<Vec<_>>>()?;

    let summary = BatchSummary::from_results(&results, pallet);
    Ok(BatchResult {
        mode: if results.len() > 1 {
            SolveMode::Multi
        } else {
            SolveMode::Single
        },
        pallet: pallet.clone(),
        results,
        summary,
    })
}
