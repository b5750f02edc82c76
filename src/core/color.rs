//! Color codes for the Simon pad.
//!
//! The engine never interprets color codes beyond equality - they're
//! opaque identifiers into the pad domain configured by [`GameConfig`].
//!
//! [`GameConfig`]: super::config::GameConfig

use serde::{Deserialize, Serialize};

/// A color code in the fixed pad domain.
///
/// Codes are 0-based: a classic four-pad game uses `0..4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    /// Create a new color code.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Get the raw code value.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}
