//! Level capacity and quantity planning.

use pallet_stack_core::{BoxType, Pallet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of full levels allowed by the pallet limits.
///
/// Height bounds the stack first; when a weight ceiling is set, the number of
/// levels the remaining weight allowance can carry bounds it further. A
/// weight allowance that is already negative, or a height allowance smaller
/// than one box, yields zero levels.
pub fn level_capacity(pallet: &Pallet, box_type: &BoxType, boxes_per_level: usize) -> usize {
    if boxes_per_level == 0 {
        return 0;
    }

    let by_height = (pallet.height_allowance() / box_type.height).floor();
    if by_height <= 0.0 {
        return 0;
    }
    let by_height = by_height as usize;

    let Some(weight_allowance) = pallet.weight_allowance() else {
        return by_height;
    };
    if weight_allowance < 0.0 {
        return 0;
    }

    let level_weight = boxes_per_level as f64 * box_type.weight;
    if level_weight <= 0.0 {
        // Weightless boxes never exhaust the allowance.
        return by_height;
    }

    let by_weight = (weight_allowance / level_weight).floor();
    if by_weight <= 0.0 {
        return 0;
    }

    by_height.min(by_weight as usize)
}

/// Realized level structure after clamping to a requested quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelPlan {
    /// Boxes actually placed.
    pub target_boxes: usize,
    /// Levels used, the last one possibly partial.
    pub levels: usize,
    /// Levels that are completely full.
    pub full_levels: usize,
    /// Boxes on the last level.
    pub last_level_boxes: usize,
    /// Requested quantity, if one was supplied.
    pub quantity_requested: Option<u32>,
    /// Requested boxes that did not fit (0 without a request).
    pub quantity_shortfall: u32,
}

/// Clamps capacity to an optional requested quantity and recomputes the
/// realized level structure.
///
/// A shortfall is a recoverable condition reported in the plan, never an
/// error; quantity validity (> 0) is enforced at input validation.
pub fn plan_quantity(boxes_per_level: usize, levels: usize, quantity: Option<u32>) -> LevelPlan {
    let capacity = boxes_per_level * levels;
    let target_boxes = match quantity {
        Some(requested) => capacity.min(requested as usize),
        None => capacity,
    };

    let full_levels = if boxes_per_level == 0 {
        0
    } else {
        target_boxes / boxes_per_level
    };
    let remainder = target_boxes - full_levels * boxes_per_level;
    let levels = if remainder > 0 { full_levels + 1 } else { full_levels };
    let last_level_boxes = if remainder > 0 { remainder } else { boxes_per_level };

    let quantity_shortfall = match quantity {
        Some(requested) => requested.saturating_sub(target_boxes as u32),
        None => 0,
    };

    LevelPlan {
        target_boxes,
        levels,
        full_levels,
        last_level_boxes,
        quantity_requested: quantity,
        quantity_shortfall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pallet() -> Pallet {
        Pallet::new(120.0, 80.0, 15.0, 200.0)
            .with_weight(25.0)
            .with_max_weight(1000.0)
    }

    #[test]
    fn test_height_bound() {
        // 185 cm of height allowance fits nine 20 cm levels; weight allows
        // twelve, so height governs.
        let levels = level_capacity(&pallet(), &BoxType::new(40.0, 30.0, 20.0, 10.0), 8);
        assert_eq!(levels, 9);
    }

    #[test]
    fn test_weight_bound() {
        // Heavy boxes: 975 kg allowance / (8 × 50 kg) = 2 levels.
        let levels = level_capacity(&pallet(), &BoxType::new(40.0, 30.0, 20.0, 50.0), 8);
        assert_eq!(levels, 2);
    }

    #[test]
    fn test_unlimited_weight() {
        let unlimited = Pallet::new(120.0, 80.0, 15.0, 200.0).with_weight(25.0);
        let levels = level_capacity(&unlimited, &BoxType::new(40.0, 30.0, 20.0, 999.0), 8);
        assert_eq!(levels, 9);
    }

    #[test]
    fn test_negative_weight_allowance() {
        let overloaded = Pallet::new(120.0, 80.0, 15.0, 200.0)
            .with_weight(60.0)
            .with_max_weight(50.0);
        let levels = level_capacity(&overloaded, &BoxType::new(40.0, 30.0, 20.0, 1.0), 8);
        assert_eq!(levels, 0);
    }

    #[test]
    fn test_weightless_boxes() {
        let levels = level_capacity(&pallet(), &BoxType::new(40.0, 30.0, 20.0, 0.0), 8);
        assert_eq!(levels, 9);
    }

    #[test]
    fn test_no_boxes_per_level() {
        assert_eq!(
            level_capacity(&pallet(), &BoxType::new(40.0, 30.0, 20.0, 10.0), 0),
            0
        );
    }

    #[test]
    fn test_height_monotonicity() {
        // Raising the ceiling never lowers the level count.
        let box_type = BoxType::new(40.0, 30.0, 20.0, 10.0);
        let mut previous = 0;
        for max_height in [50.0_f64, 100.0, 150.0, 200.0, 400.0] {
            let pallet = Pallet::new(120.0, 80.0, 15.0, max_height)
                .with_weight(25.0)
                .with_max_weight(10_000.0);
            let levels = level_capacity(&pallet, &box_type, 8);
            assert!(levels >= previous);
            previous = levels;
        }
    }

    #[test]
    fn test_weight_monotonicity() {
        // Heavier boxes under a fixed ceiling never raise the level count.
        let mut previous = usize::MAX;
        for weight in [1.0_f64, 5.0, 10.0, 50.0, 200.0] {
            let levels = level_capacity(&pallet(), &BoxType::new(40.0, 30.0, 20.0, weight), 8);
            assert!(levels <= previous);
            previous = levels;
        }
    }

    #[test]
    fn test_plan_without_quantity() {
        let plan = plan_quantity(8, 9, None);
        assert_eq!(plan.target_boxes, 72);
        assert_eq!(plan.levels, 9);
        assert_eq!(plan.full_levels, 9);
        assert_eq!(plan.last_level_boxes, 8);
        assert_eq!(plan.quantity_shortfall, 0);
        assert_eq!(plan.quantity_requested, None);
    }

    #[test]
    fn test_plan_with_partial_last_level() {
        let plan = plan_quantity(8, 9, Some(50));
        assert_eq!(plan.target_boxes, 50);
        assert_eq!(plan.full_levels, 6);
        assert_eq!(plan.levels, 7);
        assert_eq!(plan.last_level_boxes, 2);
        assert_eq!(plan.quantity_shortfall, 0);
    }

    #[test]
    fn test_plan_with_shortfall() {
        let plan = plan_quantity(8, 9, Some(100));
        assert_eq!(plan.target_boxes, 72);
        assert_eq!(plan.quantity_shortfall, 28);
        // Conservation: placed + shortfall == requested.
        assert_eq!(
            plan.target_boxes as u32 + plan.quantity_shortfall,
            plan.quantity_requested.unwrap()
        );
    }

    #[test]
    fn test_quantity_conservation_sweep() {
        for requested in 1..=120_u32 {
            let plan = plan_quantity(8, 9, Some(requested));
            assert_eq!(plan.target_boxes as u32 + plan.quantity_shortfall, requested);
        }
    }
}
