//! Validating resolver for the "Solver" configuration block.
//!
//! The input is a list of label/value pairs already split out of a
//! configuration file. [`resolve()`] interprets them into a caller-owned
//! [`SolverSettings`]: every value is converted and range-checked, the limiter
//! name is mapped to a [`LimiterStrategy`], unset fields fall back to
//! [`DEFAULTS`], and the time window is checked for consistency.
//!
//! Problems come in two severities. Unknown labels and unknown limiter or
//! restart tokens are reported to a [`Diagnostics`] sink and resolution
//! continues. Everything else is a [`FatalError`], returned at the point of
//! detection.
//!
//! # Example
//!
//! ```
//! use shoal_settings::{LabelValuePair, RecordedDiagnostics, SolverSettings, resolve};
//!
//! let pairs = [
//!     LabelValuePair::new("CFL", "0.3"),
//!     LabelValuePair::new("t end", "10.0"),
//! ];
//! let mut settings = SolverSettings::new("harbour.cfg");
//! let mut diagnostics = RecordedDiagnostics::default();
//!
//! resolve(&pairs, &mut settings, &mut diagnostics).unwrap();
//!
//! assert_eq!(settings.cfl, 0.3);
//! assert_eq!(settings.t_end, Some(10.0));
//! assert!(diagnostics.is_empty());
//! ```
//!
//! [`LimiterStrategy`]: shoal_core::LimiterStrategy
//! [`Diagnostics`]: shoal_core::Diagnostics

mod defaults;
mod diagnostics;
mod error;
mod label;
mod resolve;
mod settings;
mod value;

pub use defaults::{DEFAULTS, Defaults};
pub use diagnostics::{RecordedDiagnostics, TracingDiagnostics};
pub use error::FatalError;
pub use label::{Label, LabelValuePair};
pub use resolve::resolve;
pub use settings::SolverSettings;
