//! Soulscape: emotion scoring and self-harm risk detection for journal text.
//!
//! A journal entry goes through three independent stages that share one
//! immutable table set:
//! - **Scorer**: keyword hits blended with sentiment polarity pick one of
//!   six emotion categories, a palette, confidence, intensity and subtypes
//! - **Risk detector**: tiered self-harm phrase matching on normalized text
//! - **Coping selector**: short non-clinical exercises by category and
//!   intensity
//!
//! [`Analyzer`] runs all three and composes an [`AnalysisResponse`], served
//! over HTTP by [`server::AnalysisServer`] or over stdio by
//! [`host::stdio::run_stdio_bridge`].

pub mod analyzer;
pub mod config;
pub mod coping;
pub mod emotion;
pub mod error;
pub mod host;
pub mod response;
pub mod risk;
pub mod scorer;
pub mod sentiment;
pub mod server;

pub use analyzer::Analyzer;
pub use config::SoulscapeConfig;
pub use emotion::{EmotionCategory, EmotionTables};
pub use error::{Result, SoulscapeError};
pub use response::AnalysisResponse;
pub use risk::{RiskAssessment, RiskSeverity};
pub use scorer::{EmotionAnalysis, EmotionScorer};
