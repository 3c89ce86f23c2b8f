//! Error types for pallet stacking.

use thiserror::Error;

/// Result type alias for pallet stacking operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while solving or combining stacking layouts.
#[derive(Debug, Error)]
pub enum Error {
    /// Pallet input failed validation.
    #[error("Invalid pallet: {0}")]
    InvalidPallet(String),

    /// Box type input failed validation.
    #[error("Invalid box: {0}")]
    InvalidBox(String),

    /// The inputs are valid but nothing fits under the stated limits.
    #[error("{0}")]
    NoFit(String),

    /// Combining per-box-type solutions failed.
    #[error("Cannot combine solutions: {0}")]
    Combine(String),
}
