use std::fmt;

use shoal_core::{Diagnostics, LimiterStrategy};

use crate::{DEFAULTS, FatalError, LabelValuePair, resolve};

/// Run-control settings read from the Solver block.
///
/// The record is created by the caller before the block is read, carrying the
/// name of the configuration file for diagnostics, and is filled in by
/// [`resolve()`]. After a successful resolve:
///
/// - `height_threshold > 0` and `max_dt > 0`
/// - `sponge_strength`, when present, is `> 0`
/// - `tile_buffer > 1`
/// - `0 < cfl ≤ 0.5`
/// - `t_end` is `Some` and `t_start ≤ t_end`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverSettings {
    pub source_file: String,
    pub limiter_name: String,
    pub limiter: LimiterStrategy,
    pub height_threshold: f64,
    /// Damping strength of the sponge layer; `None` disables the layer.
    pub sponge_strength: Option<f64>,
    pub tile_buffer: usize,
    pub cfl: f64,
    /// Largest time step; `f64::INFINITY` leaves the step unbounded.
    #[cfg_attr(feature = "serde", serde(with = "unbounded"))]
    pub max_dt: f64,
    pub t_start: f64,
    pub t_end: Option<f64>,
    pub restart: bool,
    pub initial_condition: String,
}

impl SolverSettings {
    /// Creates an unresolved record for the given configuration file.
    ///
    /// Optional fields start at their defaults and `t_end` is unset.
    pub fn new(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            limiter_name: DEFAULTS.limiter.name().to_owned(),
            limiter: DEFAULTS.limiter,
            height_threshold: DEFAULTS.height_threshold,
            sponge_strength: None,
            tile_buffer: DEFAULTS.tile_buffer,
            cfl: DEFAULTS.cfl,
            max_dt: DEFAULTS.max_dt,
            t_start: DEFAULTS.t_start,
            t_end: None,
            restart: DEFAULTS.restart,
            initial_condition: DEFAULTS.initial_condition.to_owned(),
        }
    }

    /// Returns `true` if a sponge strength was supplied.
    #[must_use]
    pub fn sponge_layer_enabled(&self) -> bool {
        self.sponge_strength.is_some()
    }

    /// Resolves `pairs` into this record.
    ///
    /// Shorthand for [`resolve()`].
    ///
    /// # Errors
    ///
    /// Returns a [`FatalError`] under the same conditions as [`resolve()`].
    pub fn resolve<D: Diagnostics + ?Sized>(
        &mut self,
        pairs: &[LabelValuePair],
        diagnostics: &mut D,
    ) -> Result<(), FatalError> {
        resolve(pairs, self, diagnostics)
    }
}

/// Serializes an unbounded (infinite) step as `None`, since formats such as
/// JSON have no infinity.
#[cfg(feature = "serde")]
mod unbounded {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let bounded = if value.is_infinite() { None } else { Some(*value) };
        bounded.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// One `label = value` line per field, using the input labels.
impl fmt::Display for SolverSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "limiter = {}", self.limiter_name)?;
        writeln!(f, "height threshold = {}", self.height_threshold)?;
        match self.sponge_strength {
            Some(strength) => writeln!(f, "sponge strength = {strength}")?,
            None => writeln!(f, "sponge strength = off")?,
        }
        writeln!(f, "tile buffer = {}", self.tile_buffer)?;
        writeln!(f, "cfl = {}", self.cfl)?;
        writeln!(f, "max dt = {}", self.max_dt)?;
        writeln!(f, "t start = {}", self.t_start)?;
        match self.t_end {
            Some(t_end) => writeln!(f, "t end = {t_end}")?,
            None => writeln!(f, "t end = unset")?,
        }
        writeln!(f, "restart = {}", if self.restart { "on" } else { "off" })?;
        write!(f, "initial condition = {}", self.initial_condition)
    }
}
