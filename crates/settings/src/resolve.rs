//! Interpretation of the Solver block.
//!
//! Resolution is a single pass over the pairs followed by default filling and
//! one cross-field check:
//!
//! ```text
//! pairs ─▶ lookup label ─▶ convert + validate ─▶ defaults ─▶ t start ≤ t end
//! ```

#[cfg(test)]
mod tests;

use shoal_core::{
    Diagnostics, LimiterStrategy,
    constraint::{AboveOne, ConstraintError, CourantRange, StrictlyPositive},
};
use tracing::{debug, info};

use crate::{DEFAULTS, FatalError, Label, LabelValuePair, SolverSettings, value::Entry};

/// Interprets `pairs` into `settings`.
///
/// # Algorithm
///
/// 1. For each pair, look up the label ignoring case. Unknown labels are
///    reported through [`Diagnostics::label_unrecognized`] and skipped.
/// 2. Convert and validate the value, writing it into `settings`. When a label
///    repeats, the later value wins.
///    Unknown `limiter` or `restart` tokens are reported through
///    [`Diagnostics::warning`] and replaced by the default.
/// 3. Apply [`DEFAULTS`] to every field the input did not set.
/// 4. Check that `t start ≤ t end`.
///
/// Fields are written as they are read, so a failed call can leave `settings`
/// partially updated; such a record must not be used.
///
/// # Errors
///
/// Returns a [`FatalError`] at the first of:
///
/// - a value that cannot be converted to its field's type,
/// - a value outside its field's range,
/// - a missing `t end`,
/// - `t start` later than `t end`.
pub fn resolve<D: Diagnostics + ?Sized>(
    pairs: &[LabelValuePair],
    settings: &mut SolverSettings,
    diagnostics: &mut D,
) -> Result<(), FatalError> {
    let source_file = settings.source_file.clone();
    let mut assigned = Assigned::default();

    for pair in pairs {
        let Some(label) = Label::lookup(&pair.label) else {
            diagnostics.label_unrecognized(pair.label.trim(), &source_file);
            continue;
        };

        if !assigned.insert(label) {
            debug!(%label, "label repeated, later value overrides");
        }

        apply(Entry::new(label, &pair.value, &source_file), settings, diagnostics)?;
    }

    for label in Label::ALL {
        if assigned.contains(label) {
            continue;
        }
        if label == Label::TEnd {
            return Err(missing_end_time(settings));
        }
        DEFAULTS.apply(label, settings);
    }

    let Some(t_end) = settings.t_end else {
        return Err(missing_end_time(settings));
    };
    if settings.t_start > t_end {
        return Err(FatalError::StartAfterEnd {
            source_file: settings.source_file.clone(),
            t_start: settings.t_start,
            t_end,
        });
    }

    info!(source_file = %settings.source_file, "resolved solver settings:\n{settings}");
    Ok(())
}

/// Converts, validates, and stores a single recognized entry.
fn apply<D: Diagnostics + ?Sized>(
    entry: Entry<'_>,
    settings: &mut SolverSettings,
    diagnostics: &mut D,
) -> Result<(), FatalError> {
    match entry.label {
        Label::Limiter => {
            let limiter = LimiterStrategy::from_token(entry.value).unwrap_or_else(|| {
                diagnostics.warning(&entry.unrecognized(DEFAULTS.limiter.name()));
                DEFAULTS.limiter
            });
            settings.limiter = limiter;
            settings.limiter_name = limiter.name().to_owned();
        }
        Label::HeightThreshold => {
            settings.height_threshold = entry.check::<StrictlyPositive, _>(entry.real()?)?;
        }
        Label::SpongeStrength => {
            let strength = entry.check::<StrictlyPositive, _>(entry.real()?)?;
            settings.sponge_strength = Some(strength);
        }
        Label::TileBuffer => {
            let cells = entry.check::<AboveOne, _>(entry.integer()?)?;
            settings.tile_buffer = usize::try_from(cells)
                .map_err(|_| entry.out_of_range(ConstraintError::AboveMaximum))?;
        }
        Label::Cfl => settings.cfl = entry.check::<CourantRange, _>(entry.real()?)?,
        Label::MaxDt => settings.max_dt = entry.check::<StrictlyPositive, _>(entry.real()?)?,
        Label::TStart => settings.t_start = entry.finite_real()?,
        Label::TEnd => settings.t_end = Some(entry.finite_real()?),
        Label::Restart => {
            settings.restart = entry.switch().unwrap_or_else(|| {
                let fallback = if DEFAULTS.restart { "on" } else { "off" };
                diagnostics.warning(&entry.unrecognized(fallback));
                DEFAULTS.restart
            });
        }
        Label::InitialCondition => settings.initial_condition = entry.value.to_owned(),
    }

    debug!(label = %entry.label, value = entry.value, "applied solver setting");
    Ok(())
}

fn missing_end_time(settings: &SolverSettings) -> FatalError {
    FatalError::MissingEndTime {
        source_file: settings.source_file.clone(),
    }
}

/// Which labels the input has set so far.
#[derive(Debug, Default)]
struct Assigned([bool; Label::ALL.len()]);

impl Assigned {
    /// Marks `label` as set, returning `false` if it already was.
    fn insert(&mut self, label: Label) -> bool {
        !std::mem::replace(&mut self.0[label as usize], true)
    }

    fn contains(&self, label: Label) -> bool {
        self.0[label as usize]
    }
}
