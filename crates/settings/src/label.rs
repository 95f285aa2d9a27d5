use std::fmt;

/// A field of the Solver block, identified by its input label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Limiter,
    HeightThreshold,
    SpongeStrength,
    TileBuffer,
    Cfl,
    MaxDt,
    TStart,
    TEnd,
    Restart,
    InitialCondition,
}

impl Label {
    /// Every recognized label, in the order defaults are applied.
    pub const ALL: [Self; 10] = [
        Self::Limiter,
        Self::HeightThreshold,
        Self::SpongeStrength,
        Self::TileBuffer,
        Self::Cfl,
        Self::MaxDt,
        Self::TStart,
        Self::TEnd,
        Self::Restart,
        Self::InitialCondition,
    ];

    /// Returns the literal input label, lowercase.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Limiter => "limiter",
            Self::HeightThreshold => "height threshold",
            Self::SpongeStrength => "sponge strength",
            Self::TileBuffer => "tile buffer",
            Self::Cfl => "cfl",
            Self::MaxDt => "max dt",
            Self::TStart => "t start",
            Self::TEnd => "t end",
            Self::Restart => "restart",
            Self::InitialCondition => "initial condition",
        }
    }

    /// Describes the values this label accepts.
    #[must_use]
    pub fn requirement(self) -> &'static str {
        match self {
            Self::Limiter => "one of minmod1, minmod2, van albada, albada, weno, none",
            Self::HeightThreshold | Self::SpongeStrength | Self::MaxDt => {
                "a real number greater than zero"
            }
            Self::TileBuffer => "an integer greater than 1",
            Self::Cfl => "a real number in (0, 0.5]",
            Self::TStart | Self::TEnd => "a finite real number",
            Self::Restart => "on or off",
            Self::InitialCondition => "any text",
        }
    }

    /// Finds the label matching `label`, ignoring case.
    ///
    /// Matching is exact after case folding and trimming; abbreviations are
    /// not recognized.
    #[must_use]
    pub fn lookup(label: &str) -> Option<Self> {
        let folded = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|l| l.as_str() == folded)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tokenized line of the Solver block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelValuePair {
    pub label: String,
    pub value: String,
}

impl LabelValuePair {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl<L: Into<String>, V: Into<String>> From<(L, V)> for LabelValuePair {
    fn from((label, value): (L, V)) -> Self {
        Self::new(label, value)
    }
}
