//! End-to-end tests for the pallet stacking solver.

use approx::assert_relative_eq;
use pallet_stack_core::{BoxOrientation, BoxType, Error, Pallet, PalletOrientation, SolveMode};
use pallet_stack_solver::{combine, solve, solve_single};

fn euro_pallet() -> Pallet {
    Pallet::new(120.0, 80.0, 15.0, 200.0)
        .with_weight(25.0)
        .with_max_weight(1000.0)
}

fn standard_box() -> BoxType {
    BoxType::new(40.0, 30.0, 20.0, 10.0)
}

mod single_box {
    use super::*;

    #[test]
    fn fills_the_pallet_to_capacity() {
        let solution = solve_single(&euro_pallet(), &standard_box()).unwrap();

        assert_eq!(solution.orientation, PalletOrientation::LengthFirst);
        let m = &solution.metrics;
        assert_eq!(m.boxes_per_level, 8);
        assert_eq!(m.levels, 9);
        assert_eq!(m.total_boxes, 72);
        assert_relative_eq!(m.efficiency, 100.0, epsilon = 1e-9);
        assert_relative_eq!(m.total_height, 195.0);
        assert_relative_eq!(m.total_weight, 745.0);
        assert_relative_eq!(m.load_weight, 720.0);
        assert_eq!(m.quantity_requested, None);
        assert_eq!(m.quantity_shortfall, 0);

        assert_eq!(solution.layout.len(), 8);
        assert_eq!(solution.layout3d.len(), 72);
        assert_relative_eq!(solution.pallet.oriented_length, 120.0);
        assert_eq!(solution.meta.display_name, "40×30×20 cm");
        assert!(solution.meta.segments.is_none());
    }

    #[test]
    fn clamps_to_a_requested_quantity() {
        let solution =
            solve_single(&euro_pallet(), &standard_box().with_quantity(50)).unwrap();

        let m = &solution.metrics;
        assert_eq!(m.total_boxes, 50);
        assert_eq!(m.levels, 7);
        assert_eq!(m.full_levels, 6);
        assert_eq!(m.last_level_boxes, 2);
        assert_eq!(m.quantity_requested, Some(50));
        assert_eq!(m.quantity_shortfall, 0);
        assert_eq!(solution.layout3d.len(), 50);
        assert_relative_eq!(m.total_height, 15.0 + 7.0 * 20.0);
    }

    #[test]
    fn reports_shortfall_instead_of_failing() {
        let solution =
            solve_single(&euro_pallet(), &standard_box().with_quantity(100)).unwrap();

        let m = &solution.metrics;
        assert_eq!(m.total_boxes, 72);
        assert_eq!(m.quantity_shortfall, 28);
        // Conservation: placed + shortfall == requested.
        assert_eq!(
            m.total_boxes as u32 + m.quantity_shortfall,
            m.quantity_requested.unwrap()
        );
    }

    #[test]
    fn rejects_an_oversized_footprint() {
        let oversized = BoxType::new(150.0, 30.0, 20.0, 10.0);
        let err = solve_single(&euro_pallet(), &oversized).unwrap_err();
        assert!(matches!(err, Error::InvalidBox(_)));
        assert!(err.to_string().contains("larger than the pallet"));
    }

    #[test]
    fn rejects_a_box_taller_than_the_ceiling() {
        let too_tall = BoxType::new(40.0, 30.0, 190.0, 10.0);
        assert!(solve_single(&euro_pallet(), &too_tall).is_err());
    }

    #[test]
    fn rejects_a_zero_quantity() {
        let err =
            solve_single(&euro_pallet(), &standard_box().with_quantity(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidBox(_)));
    }

    #[test]
    fn fails_when_weight_forbids_any_level() {
        let weak = Pallet::new(120.0, 80.0, 15.0, 200.0)
            .with_weight(25.0)
            .with_max_weight(60.0);
        let err = solve_single(&weak, &standard_box()).unwrap_err();
        assert!(matches!(err, Error::NoFit(_)));
    }

    #[test]
    fn picks_width_first_when_strictly_better() {
        let solution =
            solve_single(&euro_pallet(), &BoxType::new(50.0, 30.0, 20.0, 10.0)).unwrap();
        assert_eq!(solution.orientation, PalletOrientation::WidthFirst);
        assert_eq!(solution.metrics.boxes_per_level, 6);
        assert_relative_eq!(solution.pallet.oriented_length, 80.0);
        assert_relative_eq!(solution.pallet.oriented_width, 120.0);
    }
}

mod batches {
    use super::*;

    #[test]
    fn single_entry_batch() {
        let batch = solve(&euro_pallet(), &[standard_box()]).unwrap();
        assert_eq!(batch.mode, SolveMode::Single);
        assert_eq!(batch.results.len(), 1);
        assert_eq!(batch.summary.total_boxes, 72);
        assert_relative_eq!(batch.summary.total_load_weight, 720.0);
        assert_relative_eq!(batch.summary.total_weight, 745.0);
        assert_relative_eq!(batch.summary.max_height, 195.0);
    }

    #[test]
    fn multi_entry_batch_aggregates_totals() {
        let boxes = vec![
            standard_box().with_source_index(0),
            BoxType::new(50.0, 30.0, 20.0, 5.0)
                .with_quantity(100)
                .with_source_index(1),
        ];
        let batch = solve(&euro_pallet(), &boxes).unwrap();
        assert_eq!(batch.mode, SolveMode::Multi);
        assert_eq!(batch.summary.total_layouts, 2);

        let first = &batch.results[0].metrics;
        let second = &batch.results[1].metrics;
        assert_eq!(
            batch.summary.total_boxes,
            first.total_boxes + second.total_boxes
        );
        assert_eq!(batch.summary.unplaced_boxes, second.quantity_shortfall);
        assert_relative_eq!(
            batch.summary.total_load_weight,
            first.load_weight + second.load_weight
        );
    }

    #[test]
    fn one_bad_box_fails_the_whole_batch() {
        let boxes = vec![standard_box(), BoxType::new(150.0, 30.0, 20.0, 10.0)];
        assert!(solve(&euro_pallet(), &boxes).is_err());
    }
}

mod combining {
    use super::*;

    #[test]
    fn stacks_two_orientations_into_one_load() {
        // The lighter 50×30 box type solves width-first on the same pallet,
        // so combining forces an orientation reconciliation.
        let heavy = solve_single(
            &euro_pallet(),
            &standard_box().with_quantity(8).with_source_index(0),
        )
        .unwrap();
        let light = solve_single(
            &euro_pallet(),
            &BoxType::new(50.0, 30.0, 20.0, 5.0)
                .with_quantity(6)
                .with_source_index(1),
        )
        .unwrap();
        assert_ne!(heavy.orientation, light.orientation);

        let combined = combine(&[light, heavy], None).unwrap();
        let segments = combined.meta.segments.as_ref().unwrap();

        assert_eq!(segments.len(), 2);
        assert_eq!(combined.orientation, PalletOrientation::LengthFirst);
        assert_relative_eq!(segments[0].start_height, 15.0);
        assert_relative_eq!(segments[1].start_height, segments[0].end_height);
        assert_eq!(combined.metrics.total_boxes, 14);

        // Descending weight order.
        assert!(segments[0].box_spec.weight >= segments[1].box_spec.weight);

        // Every placed box carries its segment tag.
        assert!(combined
            .layout3d
            .iter()
            .all(|b| b.segment_index.is_some()));
    }

    #[test]
    fn rotated_segment_fits_the_target_footprint() {
        let heavy = solve_single(&euro_pallet(), &standard_box()).unwrap();
        let light =
            solve_single(&euro_pallet(), &BoxType::new(50.0, 30.0, 20.0, 5.0)).unwrap();
        let combined = combine(&[heavy, light], None).unwrap();

        // All footprint placements lie inside the oriented pallet.
        for placement in &combined.layout {
            assert!(placement.x >= -1e-9);
            assert!(placement.y >= -1e-9);
            assert!(placement.max_x() <= combined.pallet.oriented_length + 1e-9);
            assert!(placement.max_y() <= combined.pallet.oriented_width + 1e-9);
        }

        // The rotated segment's tags are all flipped to the target axes.
        let segments = combined.meta.segments.as_ref().unwrap();
        let rotated_area = segments[1].cargo_area;
        assert!(rotated_area > 0.0);
    }

    #[test]
    fn combine_is_fatal_on_footprint_mismatch() {
        let a = solve_single(&euro_pallet(), &standard_box()).unwrap();
        let other = Pallet::new(100.0, 80.0, 15.0, 200.0).with_weight(25.0);
        let b = solve_single(&other, &BoxType::new(40.0, 30.0, 20.0, 5.0)).unwrap();
        let err = combine(&[a, b], None).unwrap_err();
        assert!(matches!(err, Error::Combine(_)));
    }

    #[test]
    fn orientation_tags_survive_extrusion() {
        let combined = {
            let a = solve_single(&euro_pallet(), &standard_box()).unwrap();
            let b = solve_single(&euro_pallet(), &standard_box().with_quantity(4)).unwrap();
            combine(&[a, b], None).unwrap()
        };
        for placed in &combined.layout3d {
            assert!(matches!(
                placed.orientation,
                BoxOrientation::Lengthwise | BoxOrientation::Widthwise
            ));
        }
    }
}
