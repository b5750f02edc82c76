//! Game configuration.
//!
//! Hosts configure the engine at match start. The only knob today is the
//! size of the color pad; the classic game uses four pads.

use serde::{Deserialize, Serialize};

/// Configuration for one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of distinct colors on the pad. Drawn colors lie in
    /// `0..color_count`.
    color_count: u8,
}

impl GameConfig {
    /// Create a configuration with the given pad size.
    ///
    /// Panics if `color_count < 2`: with fewer than two colors the
    /// reproduction game is degenerate.
    #[must_use]
    pub fn new(color_count: u8) -> Self {
        assert!(color_count >= 2, "Must have at least 2 colors");
        Self { color_count }
    }

    /// Get the pad size.
    #[must_use]
    pub const fn color_count(&self) -> u8 {
        self.color_count
    }
}

impl Default for GameConfig {
    /// Classic four-pad Simon.
    fn default() -> Self {
        Self { color_count: 4 }
    }
}
