//! Fixtures shared by the end-to-end tests.

pub mod blocks {
    use shoal_settings::LabelValuePair;

    /// Splits `label = value` lines into pairs, skipping blanks and `#` comments.
    ///
    /// Stands in for the configuration reader, which lives outside the
    /// resolver.
    #[must_use]
    pub fn tokenize(block: &str) -> Vec<LabelValuePair> {
        block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(label, value)| LabelValuePair::new(label.trim(), value.trim()))
            .collect()
    }

    /// A typical estuary run.
    pub const ESTUARY: &str = "
        # Solver block
        Limiter           = Van Albada
        Height Threshold  = 1e-3
        Sponge Strength   = 0.8
        Tile Buffer       = 4
        CFL               = 0.45
        Max dt            = 2.5
        t start           = 0
        t end             = 86400
        Restart           = off
        Initial Condition = still water
    ";

    /// A block with every recoverable problem and no fatal one.
    pub const SLOPPY: &str = "
        limiter    = superbee
        restart    = maybe
        friction   = 0.025
        t end      = 60
    ";
}
