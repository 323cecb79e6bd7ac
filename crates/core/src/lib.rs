//! # Shiftbook Core
//!
//! Domain layer for the shiftbook staff rostering service. This crate is
//! framework-free: it holds the shared data models, the error taxonomy,
//! and the pure engine logic that the API layer orchestrates against the
//! database layer.
//!
//! ## Engine pieces
//!
//! - [`cycle`]: the per-cell shift state machine (absent → full → half → none → full)
//! - [`payroll`]: worked-unit counts and total pay over a date window
//! - [`week`]: period grid construction from already-loaded records
//! - [`ordering`]: drag-reorder reconciliation of role display order

/// Shift cell state machine
pub mod cycle;
/// Error types shared across crates
pub mod errors;
/// Request, response, and entity models
pub mod models;
/// Role display-order reconciliation
pub mod ordering;
/// Per-employee payroll aggregation
pub mod payroll;
/// Period grid (week view) construction
pub mod week;
