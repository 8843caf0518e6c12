//! Color palettes attached to each emotion category.

use super::EmotionCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `#RRGGBB` color value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `#RRGGBB` string. The stored form is upper-case.
    pub fn parse(value: &str) -> Result<Self, String> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| format!("color {value:?} must start with '#'"))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color {value:?} must be #RRGGBB"));
        }
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// Built-in literals only; skips validation.
    pub(super) fn trusted(value: &str) -> Self {
        Self(value.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exactly three colors driving a soulscape render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub [HexColor; 3]);

impl Palette {
    pub fn colors(&self) -> &[HexColor; 3] {
        &self.0
    }
}

/// Palette per category. `mixed` is mandatory and doubles as the fallback
/// for any category without its own entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteTable {
    #[serde(default)]
    pub joy: Option<Palette>,
    #[serde(default)]
    pub calm: Option<Palette>,
    #[serde(default)]
    pub sadness: Option<Palette>,
    #[serde(default)]
    pub anger: Option<Palette>,
    #[serde(default)]
    pub fear: Option<Palette>,
    pub mixed: Palette,
}

impl PaletteTable {
    /// Palette for `category`, falling back to the `mixed` palette.
    pub fn get(&self, category: EmotionCategory) -> &Palette {
        let entry = match category {
            EmotionCategory::Joy => self.joy.as_ref(),
            EmotionCategory::Calm => self.calm.as_ref(),
            EmotionCategory::Sadness => self.sadness.as_ref(),
            EmotionCategory::Anger => self.anger.as_ref(),
            EmotionCategory::Fear => self.fear.as_ref(),
            EmotionCategory::Mixed => None,
        };
        entry.unwrap_or(&self.mixed)
    }
}
