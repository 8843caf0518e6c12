//! Self-harm and suicidal language detection.
//!
//! Runs independently of the emotion scorer: explicit crisis language can
//! appear in text that keyword-scores as `mixed` or low intensity, so the
//! caller always runs both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tier of detected self-harm language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

impl RiskSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detector output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub found: bool,
    /// Highest tier among the matches; `None` when nothing matched.
    pub severity: Option<RiskSeverity>,
    /// Matched phrases, deduplicated, high tier first.
    pub matches: Vec<String>,
}

/// Phrase lists per tier. Phrases are matched against normalized text, so
/// they should be lower-case with no punctuation other than apostrophes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPhrases {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl RiskPhrases {
    /// Tiers in scan order.
    fn tiers(&self) -> [(RiskSeverity, &[String]); 3] {
        [
            (RiskSeverity::High, self.high.as_slice()),
            (RiskSeverity::Medium, self.medium.as_slice()),
            (RiskSeverity::Low, self.low.as_slice()),
        ]
    }
}

const HIGH: &[&str] = &[
    "kill myself",
    "end my life",
    "i want to end my life",
    "i want to die",
    "i wanna die",
    "i want to kill myself",
    "i'll kill myself",
    "i will kill myself",
    "i'll end it",
    "i will end it",
    "i want to end it",
];

const MEDIUM: &[&str] = &[
    "no point in living",
    "no point",
    "can't go on",
    "cant go on",
    "i can't go on",
    "i cant go on",
    "i want to die by suicide",
    "suicidal",
];

// "self-harm" cannot survive normalization; it is kept so custom phrase
// sets copied from this list stay equivalent.
const LOW: &[&str] = &[
    "hurt myself",
    "self harm",
    "self-harm",
    "cut myself",
    "cutting myself",
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| (*p).to_owned()).collect()
}

impl Default for RiskPhrases {
    fn default() -> Self {
        Self {
            high: owned(HIGH),
            medium: owned(MEDIUM),
            low: owned(LOW),
        }
    }
}

/// Self-harm phrase detector over a borrowed phrase set.
#[derive(Debug, Clone, Copy)]
pub struct RiskDetector<'a> {
    phrases: &'a RiskPhrases,
}

impl<'a> RiskDetector<'a> {
    pub fn new(phrases: &'a RiskPhrases) -> Self {
        Self { phrases }
    }

    /// Scan `text` for risk phrases. Never fails; empty text finds nothing.
    ///
    /// Every tier is always scanned. Severity is the highest tier with at
    /// least one match, independent of scan order.
    pub fn detect(&self, text: &str) -> RiskAssessment {
        let normalized = normalize(text);
        let mut matches: Vec<String> = Vec::new();
        let mut severity: Option<RiskSeverity> = None;

        for (tier, phrases) in self.phrases.tiers() {
            for phrase in phrases {
                if !normalized.contains(phrase.as_str()) {
                    continue;
                }
                severity = severity.max(Some(tier));
                if !matches.contains(phrase) {
                    matches.push(phrase.clone());
                }
            }
        }

        if let Some(severity) = severity {
            tracing::warn!(%severity, matches = matches.len(), "self-harm language detected");
        }

        RiskAssessment {
            found: !matches.is_empty(),
            severity,
            matches,
        }
    }

    /// [`detect`](Self::detect) treating absent text as empty.
    pub fn detect_opt(&self, text: Option<&str>) -> RiskAssessment {
        self.detect(text.unwrap_or_default())
    }
}

/// Lower-case, replace everything except letters, digits, whitespace and
/// apostrophes with a space, collapse whitespace and trim. Typographic
/// apostrophes fold to `'`.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '\u{02BC}' => '\'',
            c if c.is_alphanumeric() || c.is_whitespace() || c == '\'' => c,
            _ => ' ',
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
