//! Notice font sizing
//!
//! Free text on a notice shrinks through five discrete tiers as it gets
//! longer. Length is the Unicode character count, so accented or CJK text
//! is not pushed into a smaller tier by its UTF-8 byte length.

use serde::{Deserialize, Serialize};

/// Discrete font size bucket, `Tier1` is the largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSizeTier {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Tier5,
}

impl FontSizeTier {
    /// Resolve the tier for `text`. Total: the empty string is tier 1.
    pub fn resolve(text: &str) -> Self {
        match text.chars().count() {
            0..20 => FontSizeTier::Tier1,
            20..40 => FontSizeTier::Tier2,
            40..80 => FontSizeTier::Tier3,
            80..120 => FontSizeTier::Tier4,
            _ => FontSizeTier::Tier5,
        }
    }

    /// Tier number, 1 (largest) to 5 (smallest)
    pub fn level(self) -> u8 {
        match self {
            FontSizeTier::Tier1 => 1,
            FontSizeTier::Tier2 => 2,
            FontSizeTier::Tier3 => 3,
            FontSizeTier::Tier4 => 4,
            FontSizeTier::Tier5 => 5,
        }
    }

    /// Print size in points
    pub fn points(self) -> u32 {
        match self {
            FontSizeTier::Tier1 => 96,
            FontSizeTier::Tier2 => 72,
            FontSizeTier::Tier3 => 60,
            FontSizeTier::Tier4 => 48,
            FontSizeTier::Tier5 => 36,
        }
    }
}
