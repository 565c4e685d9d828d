//! Game configuration types.
//!
//! A Klondike table is configured once, before dealing:
//! - `DrawCount`: how many cards each discard turns over
//! - `KlondikeConfig`: draw count plus optional rule hardening
//!
//! Rules that are not configurable (pile counts, stacking rules) live in
//! `crate::rules`.

use serde::{Deserialize, Serialize};

/// Number of cards moved from stock to waste per discard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawCount {
    /// Standard draw: one card at a time.
    #[default]
    One,
    /// Three-card draw.
    Three,
}

impl DrawCount {
    /// Cards turned over per discard.
    #[must_use]
    pub const fn batch(self) -> usize {
        match self {
            DrawCount::One => 1,
            DrawCount::Three => 3,
        }
    }
}

/// Configuration for a single Klondike game.
///
/// ```
/// use rust_klondike::core::{DrawCount, KlondikeConfig};
///
/// let config = KlondikeConfig::default()
///     .with_draw_count(DrawCount::Three)
///     .strict();
///
/// assert_eq!(config.draw_count.batch(), 3);
/// assert!(config.strict_runs);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlondikeConfig {
    /// Cards per discard.
    #[serde(default)]
    pub draw_count: DrawCount,

    /// Require every lifted run to be face up, alternating in colour and
    /// descending by one. Off by default: tableau moves only check the card
    /// that lands on the destination.
    #[serde(default)]
    pub strict_runs: bool,
}

impl KlondikeConfig {
    /// Create the standard draw-one configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw count.
    #[must_use]
    pub fn with_draw_count(mut self, draw_count: DrawCount) -> Self {
        self.draw_count = draw_count;
        self
    }

    /// Enable full run validation on tableau moves.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict_runs = true;
        self
    }
}
