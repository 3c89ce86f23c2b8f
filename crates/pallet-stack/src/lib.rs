//! # Pallet Stack
//!
//! Engine for tiling and stacking rectangular boxes on a pallet under height
//! and weight limits, and for merging several per-box-type solutions into
//! one physically stacked load.
//!
//! ## Quick Start
//!
//! ```rust
//! use pallet_stack::{solve_single, BoxType, Pallet};
//!
//! let pallet = Pallet::new(120.0, 80.0, 15.0, 200.0)
//!     .with_weight(25.0)
//!     .with_max_weight(1000.0);
//! let box_type = BoxType::new(40.0, 30.0, 20.0, 10.0);
//!
//! let solution = solve_single(&pallet, &box_type)?;
//! assert_eq!(solution.metrics.total_boxes, 72);
//! # Ok::<(), pallet_stack::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for all input and output types

/// Value types, validation, and layout primitives.
pub use pallet_stack_core as core;

/// The packing/stacking engine.
pub use pallet_stack_solver as solver;

// Re-export commonly used types at root level
pub use pallet_stack_core::{
    BatchResult, BatchSummary, BoxOrientation, BoxType, Error, Metrics, Pallet,
    PalletOrientation, PlacedBox, Placement, Result, Segment, Solution, SolveMode,
};
pub use pallet_stack_solver::{combine, solve, solve_single};
