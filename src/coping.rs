//! Non-clinical coping suggestions keyed by emotion and intensity.

use crate::emotion::EmotionCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intensity at or above which suggestions lead with grounding steps.
pub const HIGH_INTENSITY: f64 = 0.7;

/// Intensity at or above which the tier is `medium`.
pub const MEDIUM_INTENSITY: f64 = 0.45;

/// Suggestions returned for a high-intensity entry, urgent ones included.
const HIGH_TIER_LEN: usize = 4;

/// Suggestions returned for medium and low intensity.
const BASE_TIER_LEN: usize = 3;

/// One short exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopingSuggestion {
    pub title: String,
    pub description: String,
    pub minutes: u32,
}

impl CopingSuggestion {
    fn new(title: &str, description: &str, minutes: u32) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            minutes,
        }
    }
}

/// Intensity bucket used to tailor suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityTier {
    Low,
    Medium,
    High,
}

impl IntensityTier {
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity >= HIGH_INTENSITY {
            Self::High
        } else if intensity >= MEDIUM_INTENSITY {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for IntensityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Base suggestions per category plus the urgent set prepended at high
/// intensity. An empty category list falls back to `mixed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopingTable {
    pub joy: Vec<CopingSuggestion>,
    pub calm: Vec<CopingSuggestion>,
    pub sadness: Vec<CopingSuggestion>,
    pub anger: Vec<CopingSuggestion>,
    pub fear: Vec<CopingSuggestion>,
    pub mixed: Vec<CopingSuggestion>,
    pub urgent: Vec<CopingSuggestion>,
}

impl CopingTable {
    pub fn base(&self, category: EmotionCategory) -> &[CopingSuggestion] {
        let list = match category {
            EmotionCategory::Joy => &self.joy,
            EmotionCategory::Calm => &self.calm,
            EmotionCategory::Sadness => &self.sadness,
            EmotionCategory::Anger => &self.anger,
            EmotionCategory::Fear => &self.fear,
            EmotionCategory::Mixed => &self.mixed,
        };
        if list.is_empty() { &self.mixed } else { list }
    }
}

impl Default for CopingTable {
    fn default() -> Self {
        Self {
            joy: vec![
                CopingSuggestion::new(
                    "Savor the moment",
                    "Take 60 seconds to notice what's making you feel good. Name three details out loud.",
                    1,
                ),
                CopingSuggestion::new(
                    "Share the feeling",
                    "Tell someone briefly about something good that happened; it strengthens connection.",
                    2,
                ),
                CopingSuggestion::new(
                    "Note it down",
                    "Write one line about this moment so you can revisit it on a harder day.",
                    2,
                ),
            ],
            calm: vec![
                CopingSuggestion::new(
                    "Breathing reset",
                    "Try 4-4-6 breathing: inhale 4s, hold 4s, exhale 6s. Repeat 4 times.",
                    3,
                ),
                CopingSuggestion::new(
                    "Gentle movement",
                    "Stand and stretch or take a 5-minute walk to keep balance and clarity.",
                    5,
                ),
                CopingSuggestion::new(
                    "Body scan",
                    "Move your attention slowly from your feet to your head, noticing sensations without changing them.",
                    4,
                ),
            ],
            sadness: vec![
                CopingSuggestion::new(
                    "Grounding 5-4-3-2-1",
                    "Name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, 1 you can taste.",
                    3,
                ),
                CopingSuggestion::new(
                    "Soothing breakpoint",
                    "If feeling very low, try a short self-soothing routine: warm drink, comfy seat, slow breathing.",
                    10,
                ),
                CopingSuggestion::new(
                    "Reach out",
                    "Consider messaging a trusted friend or professional when intensity is high.",
                    5,
                ),
            ],
            anger: vec![
                CopingSuggestion::new(
                    "Pause & breathe",
                    "Step away for a minute, do 6 slow breaths focusing on exhalation.",
                    2,
                ),
                CopingSuggestion::new(
                    "Channel energy",
                    "Do a short physical activity (walk, push-ups) to release tension safely.",
                    5,
                ),
                CopingSuggestion::new(
                    "Name the need",
                    "Write one sentence on what set this off and one on what you need right now.",
                    3,
                ),
            ],
            fear: vec![
                CopingSuggestion::new(
                    "Box breathing",
                    "Inhale 4s, hold 4s, exhale 4s, hold 4s. Repeat 4 times to calm the nervous system.",
                    3,
                ),
                CopingSuggestion::new(
                    "Reality check",
                    "Name evidence that supports and contradicts the fear. Write two lines for each.",
                    5,
                ),
                CopingSuggestion::new(
                    "Worry window",
                    "Set a 10-minute timer, write every worry down, then close the page until tomorrow.",
                    10,
                ),
            ],
            mixed: vec![
                CopingSuggestion::new(
                    "Check-in journaling",
                    "Spend 5 minutes writing what you feel and one small next step you can take.",
                    5,
                ),
                CopingSuggestion::new(
                    "Mini self-care",
                    "Pick one kind thing to do for yourself now (hydrate, step outside, call someone).",
                    5,
                ),
                CopingSuggestion::new(
                    "Breathing reset",
                    "Try 4-4-6 breathing: inhale 4s, hold 4s, exhale 6s. Repeat 4 times.",
                    3,
                ),
            ],
            urgent: vec![
                CopingSuggestion::new(
                    "Grounding exercise",
                    "If you feel overwhelmed, use grounding (5-4-3-2-1) or box breathing now.",
                    3,
                ),
                CopingSuggestion::new(
                    "Contact support",
                    "Consider reaching out to a trusted person or a professional. If immediate danger, call local emergency services.",
                    5,
                ),
            ],
        }
    }
}

/// Picks suggestions from a borrowed [`CopingTable`].
#[derive(Debug, Clone, Copy)]
pub struct CopingSelector<'a> {
    table: &'a CopingTable,
}

impl<'a> CopingSelector<'a> {
    pub fn new(table: &'a CopingTable) -> Self {
        Self { table }
    }

    /// High tier: urgent suggestions first, then the category's base list,
    /// cut to four. Otherwise the first three base suggestions.
    pub fn select(&self, category: EmotionCategory, intensity: f64) -> Vec<CopingSuggestion> {
        let base = self.table.base(category);
        match IntensityTier::from_intensity(intensity) {
            IntensityTier::High => self
                .table
                .urgent
                .iter()
                .chain(base)
                .take(HIGH_TIER_LEN.max(self.table.urgent.len()))
                .cloned()
                .collect(),
            IntensityTier::Medium | IntensityTier::Low => {
                base.iter().take(BASE_TIER_LEN).cloned().collect()
            }
        }
    }
}
