//! Analysis entry point shared by every boundary.
//!
//! [`Analyzer`] owns the immutable table set and the polarity source, built
//! once at startup. Each call borrows them into a fresh scorer, detector and
//! coping selector, so concurrent requests share nothing mutable.

use crate::config::SoulscapeConfig;
use crate::coping::{CopingSelector, CopingTable};
use crate::emotion::EmotionTables;
use crate::error::{Result, SoulscapeError};
use crate::response::AnalysisResponse;
use crate::risk::{RiskDetector, RiskPhrases};
use crate::scorer::EmotionScorer;
use crate::sentiment::{LexiconPolarity, PolarityScorer};

/// Message returned for missing, non-string or blank text.
pub const TEXT_REQUIRED: &str = "Text is required";

pub struct Analyzer {
    tables: EmotionTables,
    risk_phrases: RiskPhrases,
    coping: CopingTable,
    polarity: Box<dyn PolarityScorer>,
}

impl Analyzer {
    pub fn new(
        tables: EmotionTables,
        risk_phrases: RiskPhrases,
        coping: CopingTable,
        polarity: Box<dyn PolarityScorer>,
    ) -> Self {
        Self {
            tables,
            risk_phrases,
            coping,
            polarity,
        }
    }

    /// Built-in tables, or the emotion tables file named in the config.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured tables file cannot be read or
    /// fails validation.
    pub fn from_config(config: &SoulscapeConfig) -> Result<Self> {
        let tables = match &config.tables.emotion_tables {
            Some(path) => EmotionTables::from_file(path)?,
            None => EmotionTables::default(),
        };
        Ok(Self {
            tables,
            ..Self::default()
        })
    }

    pub fn tables(&self) -> &EmotionTables {
        &self.tables
    }

    pub fn scorer(&self) -> EmotionScorer<'_> {
        EmotionScorer::new(&self.tables, self.polarity.as_ref())
    }

    pub fn detector(&self) -> RiskDetector<'_> {
        RiskDetector::new(&self.risk_phrases)
    }

    pub fn coping(&self) -> CopingSelector<'_> {
        CopingSelector::new(&self.coping)
    }

    /// Score `text`, scan it for risk language and compose the response.
    /// Defined on every string; callers validate first.
    pub fn analyze(&self, text: &str) -> AnalysisResponse {
        let analysis = self.scorer().score(text);
        let risk = self.detector().detect(text);
        let coping = self.coping().select(analysis.emotion, analysis.intensity);
        AnalysisResponse::compose(analysis, risk, coping)
    }

    /// Validate a request body (`{"text": "..."}`) and analyze it.
    ///
    /// # Errors
    ///
    /// Returns [`SoulscapeError::InvalidInput`] if `text` is absent, not a
    /// string or blank.
    pub fn analyze_request(&self, body: &serde_json::Value) -> Result<AnalysisResponse> {
        let text = required_text(body.get("text"))?;
        Ok(self.analyze(text))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(
            EmotionTables::default(),
            RiskPhrases::default(),
            CopingTable::default(),
            Box::new(LexiconPolarity::default()),
        )
    }
}

/// The `text` field as a non-blank string.
///
/// # Errors
///
/// Returns [`SoulscapeError::InvalidInput`] otherwise.
pub fn required_text(value: Option<&serde_json::Value>) -> Result<&str> {
    match value.and_then(serde_json::Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(SoulscapeError::InvalidInput(TEXT_REQUIRED.to_owned())),
    }
}
