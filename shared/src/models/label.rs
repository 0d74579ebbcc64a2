//! Label catalog and print-queue descriptors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default copies per queued label
pub const DEFAULT_QUANTITY: i64 = 1;

/// Characters of notice text shown in a queue preview
const NOTICE_PREVIEW_CHARS: usize = 30;

fn default_quantity() -> i64 {
    DEFAULT_QUANTITY
}

/// Declares a fixed catalog of display values.
///
/// Values outside the catalog deserialize into `Other` and keep the raw
/// string, so a stale or hand-edited template still renders.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
        default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Value outside the catalog, rendered verbatim
            Other(String),
        }

        impl $name {
            /// Catalog values in display order
            pub const VALUES: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            /// Whether the value belongs to the catalog
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($text => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

catalog_enum! {
    /// Clothing size printed on a shelf label
    ShelfSize {
        Xs => "XS",
        S => "S",
        M => "M",
        L => "L",
        Xl => "XL",
        Plus => "Plus",
    }
    default = M
}

catalog_enum! {
    /// Shoe bin season row
    Season {
        SpringSummer => "Spring/Summer",
        FallWinter => "Fall/Winter",
    }
    default = SpringSummer
}

catalog_enum! {
    /// Shoe bin size band row
    ShoeSizeRange {
        SixAndBelow => "6 and below",
        Seven => "7 & 7.5",
        Eight => "8 & 8.5",
        Nine => "9 & 9.5",
        Ten => "10 & 10.5",
        ElevenAndAbove => "11 and above",
    }
    default = Eight
}

catalog_enum! {
    /// Shoe bin category row
    ShoeCategory {
        CasualFlats => "Casual Flats",
        Heels => "Heels",
        ShortBoots => "Short Boots",
        TallBoots => "Tall Boots",
        ProfessionalFlats => "Professional Flats",
        Athletic => "Athletic",
        ProfessionalHeels => "Professional Heels",
    }
    default = CasualFlats
}

/// Label type catalog
///
/// Closed set: a new type needs a renderer and a packing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum LabelType {
    /// 10in × 1in shelf strip
    Shelf,
    /// 5in × 5in generic bin label
    Bin,
    /// 5in × 5in shoe bin label
    Shoe,
    /// Full-page notice
    Notice,
}

impl LabelType {
    pub const ALL: [LabelType; 4] = [
        LabelType::Shelf,
        LabelType::Bin,
        LabelType::Shoe,
        LabelType::Notice,
    ];

    /// Wire name (`shelf`, `bin`, `shoe`, `notice`)
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelType::Shelf => "shelf",
            LabelType::Bin => "bin",
            LabelType::Shoe => "shoe",
            LabelType::Notice => "notice",
        }
    }

    /// Human-readable name used in queue listings
    pub fn display_name(&self) -> &'static str {
        match self {
            LabelType::Shelf => "Shelf",
            LabelType::Bin => "Generic Bin",
            LabelType::Shoe => "Shoe Bin",
            LabelType::Notice => "Notice",
        }
    }
}

impl fmt::Display for LabelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a catalog label type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown label type: {0}")]
pub struct UnknownLabelType(pub String);

impl FromStr for LabelType {
    type Err = UnknownLabelType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shelf" => Ok(LabelType::Shelf),
            "bin" => Ok(LabelType::Bin),
            "shoe" => Ok(LabelType::Shoe),
            "notice" => Ok(LabelType::Notice),
            other => Err(UnknownLabelType(other.to_string())),
        }
    }
}

/// Shelf label: size and category on one strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfLabel {
    #[serde(default)]
    pub size: ShelfSize,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// Generic bin label: one free-text line at a fixed large size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinLabel {
    #[serde(default)]
    pub label_text: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// Shoe bin label: season, size band and category stacked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeLabel {
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub size_range: ShoeSizeRange,
    #[serde(default)]
    pub category: ShoeCategory,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// Full-page notice with length-dependent font size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeLabel {
    #[serde(default)]
    pub notice_text: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// Type-tagged label content
///
/// ```json
/// { "type": "bin", "data": { "labelText": "Scarves", "quantity": 3 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum LabelPayload {
    Shelf(ShelfLabel),
    Bin(BinLabel),
    Shoe(ShoeLabel),
    Notice(NoticeLabel),
}

impl LabelPayload {
    pub fn label_type(&self) -> LabelType {
        match self {
            LabelPayload::Shelf(_) => LabelType::Shelf,
            LabelPayload::Bin(_) => LabelType::Bin,
            LabelPayload::Shoe(_) => LabelType::Shoe,
            LabelPayload::Notice(_) => LabelType::Notice,
        }
    }

    pub fn quantity(&self) -> i64 {
        match self {
            LabelPayload::Shelf(l) => l.quantity,
            LabelPayload::Bin(l) => l.quantity,
            LabelPayload::Shoe(l) => l.quantity,
            LabelPayload::Notice(l) => l.quantity,
        }
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        match self {
            LabelPayload::Shelf(l) => l.quantity = quantity,
            LabelPayload::Bin(l) => l.quantity = quantity,
            LabelPayload::Shoe(l) => l.quantity = quantity,
            LabelPayload::Notice(l) => l.quantity = quantity,
        }
    }

    /// One-line summary for queue listings
    pub fn preview(&self) -> String {
        match self {
            LabelPayload::Shelf(l) => format!("Size: {} - {}", l.size, l.category),
            LabelPayload::Bin(l) => l.label_text.clone(),
            LabelPayload::Shoe(l) => {
                format!("{} | {} | {}", l.season, l.size_range, l.category)
            }
            LabelPayload::Notice(l) => {
                let head: String = l.notice_text.chars().take(NOTICE_PREVIEW_CHARS).collect();
                format!("{head}...")
            }
        }
    }

    /// Merge the fields of `patch` that apply to this label type.
    ///
    /// The label type never changes; fields for other types are ignored.
    pub fn apply_patch(&mut self, patch: &LabelPatch) {
        match self {
            LabelPayload::Shelf(l) => {
                if let Some(size) = &patch.size {
                    l.size = size.clone();
                }
                if let Some(category) = &patch.category {
                    l.category = category.clone();
                }
            }
            LabelPayload::Bin(l) => {
                if let Some(text) = &patch.label_text {
                    l.label_text = text.clone();
                }
            }
            LabelPayload::Shoe(l) => {
                if let Some(season) = &patch.season {
                    l.season = season.clone();
                }
                if let Some(range) = &patch.size_range {
                    l.size_range = range.clone();
                }
                if let Some(category) = &patch.category {
                    l.category = ShoeCategory::from(category.as_str());
                }
            }
            LabelPayload::Notice(l) => {
                if let Some(text) = &patch.notice_text {
                    l.notice_text = text.clone();
                }
            }
        }
        if let Some(quantity) = patch.quantity {
            self.set_quantity(quantity);
        }
    }

    /// Rebuild a payload from a stored template's type and `data` JSON.
    pub fn from_template_data(
        label_type: LabelType,
        data: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match label_type {
            LabelType::Shelf => LabelPayload::Shelf(serde_json::from_value(data)?),
            LabelType::Bin => LabelPayload::Bin(serde_json::from_value(data)?),
            LabelType::Shoe => LabelPayload::Shoe(serde_json::from_value(data)?),
            LabelType::Notice => LabelPayload::Notice(serde_json::from_value(data)?),
        })
    }
}

/// Partial payload update
///
/// `category` is free text for shelf labels and a catalog value for shoe labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPatch {
    pub size: Option<ShelfSize>,
    pub category: Option<String>,
    pub label_text: Option<String>,
    pub season: Option<Season>,
    pub size_range: Option<ShoeSizeRange>,
    pub notice_text: Option<String>,
    pub quantity: Option<i64>,
}

/// One queued request to print `quantity` copies of a label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDescriptor {
    /// Assigned by the queue; never reused
    pub id: u64,
    pub label: LabelPayload,
    /// Insertion time (millis), informational only
    pub added_at: i64,
}

impl LabelDescriptor {
    pub fn label_type(&self) -> LabelType {
        self.label.label_type()
    }

    pub fn quantity(&self) -> i64 {
        self.label.quantity()
    }
}
