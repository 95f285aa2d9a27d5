use shoal_core::constraint::ConstraintError;
use thiserror::Error;

use crate::Label;

/// An unrecoverable problem in the Solver block.
///
/// Every message names the configuration file. Resolution stops at the first
/// fatal problem and the settings must not be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FatalError {
    #[error("{source_file}: '{label}' value {value} is out of range; expected {}", .label.requirement())]
    OutOfRange {
        source_file: String,
        label: Label,
        value: String,
        #[source]
        reason: ConstraintError,
    },

    #[error("{source_file}: '{label}' value '{value}' is malformed; expected {}", .label.requirement())]
    Malformed {
        source_file: String,
        label: Label,
        value: String,
    },

    #[error("{source_file}: required label 't end' is missing from the Solver block")]
    MissingEndTime { source_file: String },

    #[error("{source_file}: 't start' ({t_start}) is later than 't end' ({t_end})")]
    StartAfterEnd {
        source_file: String,
        t_start: f64,
        t_end: f64,
    },
}

impl FatalError {
    /// Returns the configuration file the error refers to.
    #[must_use]
    pub fn source_file(&self) -> &str {
        match self {
            Self::OutOfRange { source_file, .. }
            | Self::Malformed { source_file, .. }
            | Self::MissingEndTime { source_file }
            | Self::StartAfterEnd { source_file, .. } => source_file,
        }
    }

    /// Returns the offending label, if the error concerns a single field.
    #[must_use]
    pub fn label(&self) -> Option<Label> {
        match self {
            Self::OutOfRange { label, .. } | Self::Malformed { label, .. } => Some(*label),
            Self::MissingEndTime { .. } => Some(Label::TEnd),
            Self::StartAfterEnd { .. } => None,
        }
    }
}
