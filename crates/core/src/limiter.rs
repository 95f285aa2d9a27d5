use std::{fmt, str::FromStr};

use thiserror::Error;

/// The slope limiter a run applies during reconstruction.
///
/// The concrete limiter numerics live with the solver; this enum is the
/// selector that travels with the settings and is matched wherever the solver
/// needs to dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LimiterStrategy {
    MinMod1,
    #[default]
    MinMod2,
    VanAlbada,
    #[cfg_attr(feature = "serde", serde(rename = "WENO"))]
    Weno,
    None,
}

/// Returned when a token names no known limiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown limiter '{token}'")]
pub struct UnknownLimiter {
    pub token: String,
}

/// Accepted input tokens, already case-folded.
const TOKENS: [(&str, LimiterStrategy); 6] = [
    ("minmod1", LimiterStrategy::MinMod1),
    ("minmod2", LimiterStrategy::MinMod2),
    ("van albada", LimiterStrategy::VanAlbada),
    ("albada", LimiterStrategy::VanAlbada),
    ("weno", LimiterStrategy::Weno),
    ("none", LimiterStrategy::None),
];

impl LimiterStrategy {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::MinMod1,
        Self::MinMod2,
        Self::VanAlbada,
        Self::Weno,
        Self::None,
    ];

    /// Looks up a limiter by its input token.
    ///
    /// Matching ignores case and surrounding whitespace but is otherwise
    /// exact: `"Van Albada"` and `"albada"` match, `"vanalbada"` does not.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        TOKENS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, strategy)| strategy)
    }

    /// Returns the canonical display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MinMod1 => "MinMod1",
            Self::MinMod2 => "MinMod2",
            Self::VanAlbada => "VanAlbada",
            Self::Weno => "WENO",
            Self::None => "None",
        }
    }
}

impl fmt::Display for LimiterStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LimiterStrategy {
    type Err = UnknownLimiter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownLimiter {
            token: s.to_owned(),
        })
    }
}
