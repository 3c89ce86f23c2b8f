//! # Pallet Stack Solver
//!
//! The packing/stacking engine: orientation optimizer, level and quantity
//! calculator, layout geometry builder, solution formatter, and multi-box
//! combiner.
//!
//! Everything here is a pure function over immutable inputs: each call
//! validates its arguments, runs a bounded search, and either returns a
//! fresh solution tree or fails with a descriptive error. There is no shared
//! state, so concurrent callers need no coordination.
//!
//! ## Core Components
//!
//! - [`orientation`]: area-maximizing two-orientation tiling per footprint
//! - [`levels`]: height/weight level bounds and quantity clamping
//! - [`layout`]: level expansion and 3-D extrusion
//! - [`solve`]: validation, orientation choice, and solution assembly
//! - [`combine`]: merging per-box-type solutions into one stacked load
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod combine;
pub mod layout;
pub mod levels;
pub mod orientation;
pub mod solve;

// Re-exports
pub use combine::{combine, rotate_footprint, RotationDirection, SEGMENT_COLORS};
pub use layout::{build_level, extrude_stack};
pub use levels::{level_capacity, plan_quantity, LevelPlan};
pub use orientation::{best_orientation, tile_footprint, FootprintTiling};
pub use solve::{solve, solve_single};
