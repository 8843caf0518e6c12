//! Typed boundary response.
//!
//! [`AnalysisResponse`] is what the HTTP and stdio boundaries send back: the
//! scorer output, the risk fields folded into the explanation, an optional
//! support block, coping suggestions and the fixed protective strings.

use crate::coping::CopingSuggestion;
use crate::emotion::{EmotionCategory, Palette};
use crate::risk::{RiskAssessment, RiskSeverity};
use crate::scorer::{EmotionAnalysis, Explanation, SubtypeMatch};
use serde::{Deserialize, Serialize};

/// Intensity at which a sad or fearful entry gets the gentle support prompt.
pub const ELEVATED_INTENSITY: f64 = 0.7;

pub const NOTE: &str =
    "This is an automated analysis and not a substitute for professional mental health care.";

pub const DISCLAIMER: &str =
    "Soulscape isn\u{2019}t a replacement for support\u{2014}just a place to pause.";

const HIGH_RISK_MESSAGE: &str = "We detected language that may indicate risk of self-harm or \
     suicidal thinking. If you are in immediate danger, contacting local emergency services or a \
     crisis line can help.";

const DISTRESS_MESSAGE: &str = "We detected language that may indicate significant distress. \
     Reaching out to a trusted person or a crisis line may help.";

const ELEVATED_MESSAGE: &str = "You appear to be experiencing intense feelings. Reaching out to \
     someone you trust or a mental health professional may help.";

/// Severity carried by a support block: a risk tier, or `elevated` for
/// intense sadness/fear without explicit risk language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    Low,
    Medium,
    High,
    Elevated,
}

impl From<RiskSeverity> for SupportLevel {
    fn from(severity: RiskSeverity) -> Self {
        match severity {
            RiskSeverity::Low => Self::Low,
            RiskSeverity::Medium => Self::Medium,
            RiskSeverity::High => Self::High,
        }
    }
}

/// One crisis contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisResource {
    pub label: String,
    pub url: String,
    pub note: String,
}

const CRISIS_RESOURCES: &[(&str, &str, &str)] = &[
    (
        "US: National Suicide & Crisis Lifeline",
        "tel:988",
        "Call or text 988 (US)",
    ),
    (
        "Samaritans (UK & ROI)",
        "https://www.samaritans.org/",
        "Call +44 (0)8457 90 90 90 or see website",
    ),
    (
        "Befrienders Worldwide",
        "https://www.befrienders.org/",
        "International directory of helplines",
    ),
    (
        "WHO: Mental Health",
        "https://www.who.int/teams/mental-health-and-substance-use",
        "Global mental health resources",
    ),
];

/// The static crisis contact list, always in the same order.
pub fn crisis_resources() -> Vec<CrisisResource> {
    CRISIS_RESOURCES
        .iter()
        .map(|(label, url, note)| CrisisResource {
            label: (*label).to_owned(),
            url: (*url).to_owned(),
            note: (*note).to_owned(),
        })
        .collect()
}

/// Supportive prompt attached when risk language is found or an entry is
/// intensely sad or fearful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportBlock {
    pub message: String,
    pub severity: SupportLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<CrisisResource>,
}

impl SupportBlock {
    /// Block for detected risk language, with the full resource list.
    pub fn crisis(severity: RiskSeverity) -> Self {
        let message = match severity {
            RiskSeverity::High => HIGH_RISK_MESSAGE,
            RiskSeverity::Medium | RiskSeverity::Low => DISTRESS_MESSAGE,
        };
        Self {
            message: message.to_owned(),
            severity: severity.into(),
            resources: crisis_resources(),
        }
    }

    /// Gentle block without hotlines.
    pub fn elevated() -> Self {
        Self {
            message: ELEVATED_MESSAGE.to_owned(),
            severity: SupportLevel::Elevated,
            resources: Vec::new(),
        }
    }

    /// Risk takes precedence; otherwise intense sadness or fear gets the
    /// elevated block.
    pub fn for_result(
        risk: &RiskAssessment,
        emotion: EmotionCategory,
        intensity: f64,
    ) -> Option<Self> {
        if let (true, Some(severity)) = (risk.found, risk.severity) {
            return Some(Self::crisis(severity));
        }
        let distressing = matches!(emotion, EmotionCategory::Sadness | EmotionCategory::Fear);
        (distressing && intensity >= ELEVATED_INTENSITY).then(Self::elevated)
    }
}

/// Scorer explanation plus the self-harm fields, present only when risk
/// language was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseExplanation {
    #[serde(flatten)]
    pub scoring: Explanation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_harm_matches: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_harm_severity: Option<RiskSeverity>,
}

/// Full response for one journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub emotion: EmotionCategory,
    pub intensity: f64,
    pub confidence: f64,
    pub palette: Palette,
    pub subtypes: Vec<SubtypeMatch>,
    pub explanation: ResponseExplanation,
    pub summary: String,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<SupportBlock>,
    pub disclaimer: String,
    pub coping: Vec<CopingSuggestion>,
}

impl AnalysisResponse {
    pub fn compose(
        analysis: EmotionAnalysis,
        risk: RiskAssessment,
        coping: Vec<CopingSuggestion>,
    ) -> Self {
        let support = SupportBlock::for_result(&risk, analysis.emotion, analysis.intensity);
        let summary = summary(analysis.emotion, analysis.confidence, analysis.intensity);
        let (self_harm_matches, self_harm_severity) = if risk.found {
            (Some(risk.matches), risk.severity)
        } else {
            (None, None)
        };

        Self {
            emotion: analysis.emotion,
            intensity: analysis.intensity,
            confidence: analysis.confidence,
            palette: analysis.palette,
            subtypes: analysis.subtypes,
            explanation: ResponseExplanation {
                scoring: analysis.explanation,
                self_harm_matches,
                self_harm_severity,
            },
            summary,
            note: NOTE.to_owned(),
            support,
            disclaimer: DISCLAIMER.to_owned(),
            coping,
        }
    }
}

/// `Detected sadness (confidence 82%) with intensity 0.76`
pub fn summary(emotion: EmotionCategory, confidence: f64, intensity: f64) -> String {
    format!(
        "Detected {emotion} (confidence {}%) with intensity {intensity:.2}",
        (confidence * 100.0).round()
    )
}
