//! Core types shared across Shoal crates.
//!
//! This crate holds the pieces that carry no I/O and no solver state:
//!
//! - [`constraint`] — numeric invariants checked once at construction
//! - [`LimiterStrategy`] — the closed set of slope limiters a run can select
//! - [`Diagnostics`] — the reporting collaborator for recoverable problems

pub mod constraint;
mod diagnostics;
mod limiter;

pub use diagnostics::Diagnostics;
pub use limiter::{LimiterStrategy, UnknownLimiter};
