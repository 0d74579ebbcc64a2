//! Rendered label fragments

use serde::{Deserialize, Serialize};
use shared::models::LabelType;

use crate::font::FontSizeTier;

/// Shelf strip text size (pt)
pub const SHELF_FONT_PT: u32 = 24;
/// Generic bin text size (pt)
pub const BIN_FONT_PT: u32 = 48;
/// Shoe bin row text size (pt)
pub const SHOE_FONT_PT: u32 = 28;

pub const CATEGORY_PLACEHOLDER: &str = "Category";
pub const LABEL_TEXT_PLACEHOLDER: &str = "Label Text";
pub const NOTICE_TEXT_PLACEHOLDER: &str = "Notice Text";

/// Display content of one physical label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FragmentContent {
    Shelf {
        size: String,
        category: String,
    },
    Bin {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Shoe {
        season: String,
        size_range: String,
        category: String,
    },
    Notice {
        text: String,
        tier: FontSizeTier,
    },
}

impl FragmentContent {
    /// Main text size in points
    pub fn font_points(&self) -> u32 {
        match self {
            FragmentContent::Shelf { .. } => SHELF_FONT_PT,
            FragmentContent::Bin { .. } => BIN_FONT_PT,
            FragmentContent::Shoe { .. } => SHOE_FONT_PT,
            FragmentContent::Notice { tier, .. } => tier.points(),
        }
    }
}

/// One physical label instance ready for layout
///
/// Recomputed on every composition pass and never mutated afterwards,
/// apart from the planner setting `forced_break_after`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedFragment {
    /// Per-instance identity (`{source_label_id}-{instance}`), not displayed
    pub key: String,
    pub source_label_id: u64,
    #[serde(rename = "type")]
    pub label_type: LabelType,
    pub content: FragmentContent,
    pub forced_break_after: bool,
}

impl RenderedFragment {
    pub fn new(
        source_label_id: u64,
        label_type: LabelType,
        instance: usize,
        content: FragmentContent,
    ) -> Self {
        Self {
            key: format!("{source_label_id}-{instance}"),
            source_label_id,
            label_type,
            content,
            forced_break_after: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_key() {
        let fragment = RenderedFragment::new(
            7,
            LabelType::Bin,
            2,
            FragmentContent::Bin {
                text: "Scarves".to_string(),
            },
        );
        assert_eq!(fragment.key, "7-2");
        assert!(!fragment.forced_break_after);
    }

    #[test]
    fn test_fragment_json() {
        let fragment = RenderedFragment::new(
            1,
            LabelType::Shoe,
            0,
            FragmentContent::Shoe {
                season: "Fall/Winter".to_string(),
                size_range: "9 & 9.5".to_string(),
                category: "Heels".to_string(),
            },
        );

        let value = serde_json::to_value(&fragment).unwrap();
        assert_eq!(value["type"], "shoe");
        assert_eq!(value["sourceLabelId"], 1);
        assert_eq!(value["forcedBreakAfter"], false);
        assert_eq!(value["content"]["kind"], "shoe");
        assert_eq!(value["content"]["sizeRange"], "9 & 9.5");
    }

    #[test]
    fn test_font_points() {
        let notice = FragmentContent::Notice {
            text: "Closed".to_string(),
            tier: FontSizeTier::Tier2,
        };
        assert_eq!(notice.font_points(), 72);
        assert_eq!(
            FragmentContent::Bin {
                text: String::new()
            }
            .font_points(),
            BIN_FONT_PT
        );
    }
}
