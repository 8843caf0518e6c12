//! Emotion categories and the immutable lookup tables the scorer runs on.
//!
//! The table set is built once at startup, either from the built-in data
//! ([`EmotionTables::default`]) or from a TOML file, and then shared by
//! reference. Nothing in this module is mutated after construction.

mod defaults;
pub mod palette;

use crate::error::{Result, SoulscapeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use palette::{HexColor, Palette, PaletteTable};

/// Top-level classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Joy,
    Calm,
    Sadness,
    Anger,
    Fear,
    /// Weak or ambiguous signal. Never keyword-matched directly.
    Mixed,
}

impl EmotionCategory {
    /// Keyword-scored categories in declaration order. Ranking ties keep
    /// this order.
    pub const PRIMARY: [EmotionCategory; 5] = [
        EmotionCategory::Joy,
        EmotionCategory::Calm,
        EmotionCategory::Sadness,
        EmotionCategory::Anger,
        EmotionCategory::Fear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Calm => "calm",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Mixed => "mixed",
        }
    }

    /// Subtype namespace consulted when this category wins. `calm` and
    /// `mixed` have none.
    pub fn subtype_family(self) -> Option<SubtypeFamily> {
        match self {
            Self::Joy => Some(SubtypeFamily::Joy),
            Self::Sadness => Some(SubtypeFamily::Sadness),
            Self::Anger => Some(SubtypeFamily::Anger),
            Self::Fear => Some(SubtypeFamily::Fear),
            Self::Calm | Self::Mixed => None,
        }
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionCategory {
    type Err = SoulscapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "joy" => Ok(Self::Joy),
            "calm" => Ok(Self::Calm),
            "sadness" => Ok(Self::Sadness),
            "anger" => Ok(Self::Anger),
            "fear" => Ok(Self::Fear),
            "mixed" => Ok(Self::Mixed),
            other => Err(SoulscapeError::InvalidInput(format!(
                "unknown emotion category: {other}"
            ))),
        }
    }
}

/// Feelings-wheel namespace holding subtype labels.
///
/// Broader than [`EmotionCategory`]: `powerful`, `disgusted` and
/// `surprised` exist only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtypeFamily {
    Joy,
    Sadness,
    Anger,
    Fear,
    Powerful,
    Peaceful,
    Disgusted,
    Surprised,
}

impl SubtypeFamily {
    pub const ALL: [SubtypeFamily; 8] = [
        SubtypeFamily::Joy,
        SubtypeFamily::Sadness,
        SubtypeFamily::Anger,
        SubtypeFamily::Fear,
        SubtypeFamily::Powerful,
        SubtypeFamily::Peaceful,
        SubtypeFamily::Disgusted,
        SubtypeFamily::Surprised,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Powerful => "powerful",
            Self::Peaceful => "peaceful",
            Self::Disgusted => "disgusted",
            Self::Surprised => "surprised",
        }
    }
}

impl fmt::Display for SubtypeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trigger words per primary category. There is no `mixed`
/// entry: that category is derived, never matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTable {
    pub joy: Vec<String>,
    pub calm: Vec<String>,
    pub sadness: Vec<String>,
    pub anger: Vec<String>,
    pub fear: Vec<String>,
}

impl KeywordTable {
    /// Words for `category`; empty for `mixed`.
    pub fn words(&self, category: EmotionCategory) -> &[String] {
        match category {
            EmotionCategory::Joy => &self.joy,
            EmotionCategory::Calm => &self.calm,
            EmotionCategory::Sadness => &self.sadness,
            EmotionCategory::Anger => &self.anger,
            EmotionCategory::Fear => &self.fear,
            EmotionCategory::Mixed => &[],
        }
    }

    /// `(category, words)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, &[String])> + '_ {
        EmotionCategory::PRIMARY
            .into_iter()
            .map(|category| (category, self.words(category)))
    }

    fn lists_mut(&mut self) -> [&mut Vec<String>; 5] {
        [
            &mut self.joy,
            &mut self.calm,
            &mut self.sadness,
            &mut self.anger,
            &mut self.fear,
        ]
    }
}

/// One subtype label and the phrases that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypeEntry {
    pub label: String,
    pub phrases: Vec<String>,
}

/// Subtype labels per family, in declaration order. Phrase lists may
/// overlap across labels and families.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtypeTable {
    pub joy: Vec<SubtypeEntry>,
    pub sadness: Vec<SubtypeEntry>,
    pub anger: Vec<SubtypeEntry>,
    pub fear: Vec<SubtypeEntry>,
    pub powerful: Vec<SubtypeEntry>,
    pub peaceful: Vec<SubtypeEntry>,
    pub disgusted: Vec<SubtypeEntry>,
    pub surprised: Vec<SubtypeEntry>,
}

impl SubtypeTable {
    pub fn family(&self, family: SubtypeFamily) -> &[SubtypeEntry] {
        match family {
            SubtypeFamily::Joy => &self.joy,
            SubtypeFamily::Sadness => &self.sadness,
            SubtypeFamily::Anger => &self.anger,
            SubtypeFamily::Fear => &self.fear,
            SubtypeFamily::Powerful => &self.powerful,
            SubtypeFamily::Peaceful => &self.peaceful,
            SubtypeFamily::Disgusted => &self.disgusted,
            SubtypeFamily::Surprised => &self.surprised,
        }
    }

    fn families_mut(&mut self) -> [&mut Vec<SubtypeEntry>; 8] {
        [
            &mut self.joy,
            &mut self.sadness,
            &mut self.anger,
            &mut self.fear,
            &mut self.powerful,
            &mut self.peaceful,
            &mut self.disgusted,
            &mut self.surprised,
        ]
    }
}

/// The full scorer table set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionTables {
    pub keywords: KeywordTable,
    #[serde(default)]
    pub subtypes: SubtypeTable,
    pub palettes: PaletteTable,
}

impl EmotionTables {
    /// Parse a TOML table file, lower-case every trigger and validate.
    ///
    /// # Errors
    ///
    /// Returns [`SoulscapeError::Tables`] if the TOML is malformed or the
    /// tables violate an invariant.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut tables: Self =
            toml::from_str(content).map_err(|e| SoulscapeError::Tables(e.to_string()))?;
        tables.normalize();
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let tables = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded emotion tables");
        Ok(tables)
    }

    /// Serialize to TOML (the same shape [`from_toml_str`](Self::from_toml_str) reads).
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SoulscapeError::Tables(e.to_string()))
    }

    /// Check table invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SoulscapeError::Tables`] naming the first violation.
    pub fn validate(&self) -> Result<()> {
        for (category, words) in self.keywords.iter() {
            if words.is_empty() {
                return Err(SoulscapeError::Tables(format!(
                    "keyword list for {category} is empty"
                )));
            }
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(SoulscapeError::Tables(format!(
                    "keyword list for {category} contains a blank entry"
                )));
            }
        }

        for family in SubtypeFamily::ALL {
            for entry in self.subtypes.family(family) {
                if entry.label.trim().is_empty() {
                    return Err(SoulscapeError::Tables(format!(
                        "subtype in {family} has a blank label"
                    )));
                }
                if entry.phrases.iter().any(|p| p.trim().is_empty()) {
                    return Err(SoulscapeError::Tables(format!(
                        "subtype {family}.{} contains a blank phrase",
                        entry.label
                    )));
                }
            }
        }

        Ok(())
    }

    fn normalize(&mut self) {
        for list in self.keywords.lists_mut() {
            for word in list.iter_mut() {
                *word = word.to_lowercase();
            }
        }
        for family in self.subtypes.families_mut() {
            for entry in family.iter_mut() {
                for phrase in entry.phrases.iter_mut() {
                    *phrase = phrase.to_lowercase();
                }
            }
        }
    }
}

impl Default for EmotionTables {
    fn default() -> Self {
        defaults::emotion_tables()
    }
}
