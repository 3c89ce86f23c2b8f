//! # Pallet Stack Core
//!
//! Value types and layout primitives for the pallet stacking engine.
//!
//! This crate provides the foundational types shared by the solver: validated
//! pallet and box inputs, placements and their 3-D extrusions, and the
//! solution/metrics structures handed to rendering and reporting
//! collaborators.
//!
//! ## Core Components
//!
//! - **Inputs**: [`Pallet`], [`BoxType`] with field-scoped validation
//! - **Layout primitives**: [`Placement`], [`PlacedBox`], [`LayoutBounds`]
//! - **Results**: [`Solution`], [`BatchResult`], [`Metrics`], [`Segment`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod pallet;
pub mod placement;
pub mod result;

// Re-exports
pub use error::{Error, Result};
pub use pallet::{validate_dimensions, BoxSpec, BoxType, Pallet};
pub use placement::{
    centering_offsets, measure_layout, offset_layout, BoxOrientation, LayoutBounds, PlacedBox,
    Placement,
};
pub use result::{
    Arrangement, BatchResult, BatchSummary, Metrics, OrientedPallet, PalletOrientation, Segment,
    Solution, SolutionMeta, SolveMode,
};
