use shoal_core::LimiterStrategy;

use crate::{Label, SolverSettings};

/// Values applied to fields the input leaves unset.
///
/// `t end` has no default; its absence is an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub limiter: LimiterStrategy,
    pub height_threshold: f64,
    pub tile_buffer: usize,
    pub cfl: f64,
    pub max_dt: f64,
    pub t_start: f64,
    pub restart: bool,
    pub initial_condition: &'static str,
}

/// The process-wide defaults for the Solver block.
///
/// The sponge layer is disabled unless a strength is given.
pub const DEFAULTS: Defaults = Defaults {
    limiter: LimiterStrategy::MinMod2,
    height_threshold: 1e-6,
    tile_buffer: 3,
    cfl: 0.25,
    max_dt: f64::INFINITY,
    t_start: 0.0,
    restart: false,
    initial_condition: "",
};

impl Default for Defaults {
    fn default() -> Self {
        DEFAULTS
    }
}

impl Defaults {
    /// Writes the default for `label` into `settings`.
    pub(crate) fn apply(&self, label: Label, settings: &mut SolverSettings) {
        match label {
            Label::Limiter => {
                settings.limiter = self.limiter;
                settings.limiter_name = self.limiter.name().to_owned();
            }
            Label::HeightThreshold => settings.height_threshold = self.height_threshold,
            Label::SpongeStrength => settings.sponge_strength = None,
            Label::TileBuffer => settings.tile_buffer = self.tile_buffer,
            Label::Cfl => settings.cfl = self.cfl,
            Label::MaxDt => settings.max_dt = self.max_dt,
            Label::TStart => settings.t_start = self.t_start,
            // Mandatory; the resolver rejects its absence before getting here.
            Label::TEnd => {}
            Label::Restart => settings.restart = self.restart,
            Label::InitialCondition => {
                settings.initial_condition = self.initial_condition.to_owned();
            }
        }
    }
}
