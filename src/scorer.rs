//! Keyword + sentiment emotion scorer.
//!
//! Scoring is a pure function of the input text, the table set and the
//! polarity source:
//!
//! 1. **Keyword hits**: each category keyword found as a case-insensitive
//!    substring counts once. Matching is not tokenized, so "happy" hits
//!    inside "unhappy".
//! 2. **Sentiment blend**: polarity above 1 boosts `joy`, below -1 boosts
//!    `sadness`, `anger` and `fear`, by `min(2, |polarity| / 2)`.
//! 3. **Ranking**: descending by adjusted score, ties in declaration order.
//!    A zero top score or a gap under [`MIXED_GAP_THRESHOLD`] to the runner
//!    up yields [`EmotionCategory::Mixed`].
//! 4. **Confidence / intensity**: saturating blends of the gap, the total
//!    signal and the absolute polarity, clamped to [`CONFIDENCE_RANGE`] and
//!    [`INTENSITY_RANGE`].

use crate::emotion::{EmotionCategory, EmotionTables, Palette, SubtypeFamily, SubtypeTable};
use crate::sentiment::PolarityScorer;
use serde::{Deserialize, Serialize};

/// Minimum lead the top category needs over the runner up.
pub const MIXED_GAP_THRESHOLD: f64 = 0.75;

/// Bounds of [`EmotionAnalysis::confidence`].
pub const CONFIDENCE_RANGE: (f64, f64) = (0.15, 0.99);

/// Bounds of [`EmotionAnalysis::intensity`].
pub const INTENSITY_RANGE: (f64, f64) = (0.2, 0.95);

/// Maximum number of subtypes reported.
pub const MAX_SUBTYPES: usize = 2;

/// Number of ranked candidates echoed in the explanation.
const TOP_CANDIDATES: usize = 3;

/// Raw keyword hits for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub category: EmotionCategory,
    pub hits: usize,
    pub matched_words: Vec<String>,
}

/// A subtype label found in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtypeMatch {
    pub subtype: String,
    pub hits: usize,
    /// `hits / phrases in the subtype list`, capped at 1.
    pub confidence: f64,
}

/// A keyword that contributed to a category score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedKeyword {
    pub emotion: EmotionCategory,
    pub word: String,
}

/// A ranked category and its adjusted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub emotion: EmotionCategory,
    pub score: f64,
}

/// How the classification was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub sentiment_score: i32,
    /// Flattened in ranking order.
    pub matched_keywords: Vec<MatchedKeyword>,
    pub top_candidates: Vec<Candidate>,
}

/// Result of scoring one entry. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionAnalysis {
    pub emotion: EmotionCategory,
    pub intensity: f64,
    pub confidence: f64,
    pub palette: Palette,
    pub subtypes: Vec<SubtypeMatch>,
    pub explanation: Explanation,
}

/// Emotion classifier over a borrowed table set and polarity source.
#[derive(Clone, Copy)]
pub struct EmotionScorer<'a> {
    tables: &'a EmotionTables,
    polarity: &'a dyn PolarityScorer,
}

impl<'a> EmotionScorer<'a> {
    pub fn new(tables: &'a EmotionTables, polarity: &'a dyn PolarityScorer) -> Self {
        Self { tables, polarity }
    }

    /// Classify `text`. Defined on every string, including empty.
    pub fn score(&self, text: &str) -> EmotionAnalysis {
        let lower = text.to_lowercase();
        let sentiment_score = self.polarity.polarity(text);

        let mut ranked: Vec<(ScoreResult, f64)> = self
            .keyword_hits(&lower)
            .into_iter()
            .map(|result| {
                let adjusted =
                    result.hits as f64 + sentiment_boost(result.category, sentiment_score);
                (result, adjusted)
            })
            .collect();
        // Stable: equal scores keep declaration order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let (top_category, top_score) = ranked
            .first()
            .map_or((EmotionCategory::Mixed, 0.0), |(r, s)| (r.category, *s));
        let next_score = ranked.get(1).map_or(0.0, |(_, s)| *s);
        let gap = top_score - next_score;
        let total_signal: f64 = ranked.iter().map(|(_, s)| s).sum();

        let emotion = if top_score <= 0.0 || gap < MIXED_GAP_THRESHOLD {
            EmotionCategory::Mixed
        } else {
            top_category
        };

        let confidence = clamp(
            0.15 + (gap / (1.0 + total_signal) + (total_signal / 6.0).min(0.6)).min(0.85),
            CONFIDENCE_RANGE,
        );
        let polarity_charge = (f64::from(sentiment_score).abs() / 6.0).min(1.0);
        let intensity = clamp(
            0.2 + 0.75 * (top_score / 4.0 + polarity_charge).min(1.0),
            INTENSITY_RANGE,
        );

        let subtypes = self.detect_subtypes(emotion, text);

        let explanation = Explanation {
            sentiment_score,
            matched_keywords: ranked
                .iter()
                .flat_map(|(r, _)| {
                    r.matched_words.iter().map(|word| MatchedKeyword {
                        emotion: r.category,
                        word: word.clone(),
                    })
                })
                .collect(),
            top_candidates: ranked
                .iter()
                .take(TOP_CANDIDATES)
                .map(|(r, score)| Candidate {
                    emotion: r.category,
                    score: *score,
                })
                .collect(),
        };

        tracing::debug!(
            %emotion,
            confidence,
            intensity,
            sentiment_score,
            subtypes = subtypes.len(),
            "scored entry"
        );

        EmotionAnalysis {
            emotion,
            intensity,
            confidence,
            palette: self.tables.palettes.get(emotion).clone(),
            subtypes,
            explanation,
        }
    }

    /// Keyword hits per primary category, in declaration order. `lower`
    /// must already be lower-cased.
    pub fn keyword_hits(&self, lower: &str) -> Vec<ScoreResult> {
        self.tables
            .keywords
            .iter()
            .map(|(category, words)| {
                let matched_words: Vec<String> = words
                    .iter()
                    .filter(|w| lower.contains(w.as_str()))
                    .cloned()
                    .collect();
                ScoreResult {
                    category,
                    hits: matched_words.len(),
                    matched_words,
                }
            })
            .collect()
    }

    /// Subtypes of `category` present in `text`; empty for `calm` and `mixed`.
    pub fn detect_subtypes(&self, category: EmotionCategory, text: &str) -> Vec<SubtypeMatch> {
        category
            .subtype_family()
            .map(|family| detect_subtypes(&self.tables.subtypes, family, text))
            .unwrap_or_default()
    }
}

/// Up to [`MAX_SUBTYPES`] subtype labels of `family` found in `text`,
/// ordered by raw hit count. Equal counts keep table order.
pub fn detect_subtypes(
    table: &SubtypeTable,
    family: SubtypeFamily,
    text: &str,
) -> Vec<SubtypeMatch> {
    let lower = text.to_lowercase();
    let mut detected: Vec<SubtypeMatch> = table
        .family(family)
        .iter()
        .filter_map(|entry| {
            let hits = entry
                .phrases
                .iter()
                .filter(|p| lower.contains(p.as_str()))
                .count();
            if hits == 0 {
                return None;
            }
            let confidence = if entry.phrases.is_empty() {
                0.0
            } else {
                (hits as f64 / entry.phrases.len() as f64).min(1.0)
            };
            Some(SubtypeMatch {
                subtype: entry.label.clone(),
                hits,
                confidence,
            })
        })
        .collect();
    detected.sort_by(|a, b| b.hits.cmp(&a.hits));
    detected.truncate(MAX_SUBTYPES);
    detected
}

fn sentiment_boost(category: EmotionCategory, sentiment: i32) -> f64 {
    let boost = (f64::from(sentiment).abs() / 2.0).min(2.0);
    match category {
        EmotionCategory::Joy if sentiment > 1 => boost,
        EmotionCategory::Sadness | EmotionCategory::Anger | EmotionCategory::Fear
            if sentiment < -1 =>
        {
            boost
        }
        _ => 0.0,
    }
}

fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::emotion::SubtypeEntry;
    use crate::sentiment::LexiconPolarity;

    struct Fixed(i32);

    impl PolarityScorer for Fixed {
        fn polarity(&self, _text: &str) -> i32 {
            self.0
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_text_is_mixed_at_floor() {
        let tables = EmotionTables::default();
        let polarity = LexiconPolarity::default();
        let scorer = EmotionScorer::new(&tables, &polarity);
        for text in ["", "   ", "\n\t"] {
            let analysis = scorer.score(text);
            assert_eq!(analysis.emotion, EmotionCategory::Mixed);
            assert!(approx(analysis.intensity, 0.2));
            assert!(approx(analysis.confidence, 0.15));
            assert!(analysis.subtypes.is_empty());
            assert!(analysis.explanation.matched_keywords.is_empty());
            assert_eq!(analysis.palette, tables.palettes.mixed);
        }
    }

    #[test]
    fn keyword_hits_count_each_word_once() {
        let tables = EmotionTables::default();
        let fixed = Fixed(0);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let hits = scorer.keyword_hits("sad sad sad");
        let sadness = hits
            .iter()
            .find(|r| r.category == EmotionCategory::Sadness)
            .unwrap();
        assert_eq!(sadness.hits, 1);
        assert_eq!(sadness.matched_words, vec!["sad".to_owned()]);
    }

    #[test]
    fn substring_match_is_not_tokenized() {
        let tables = EmotionTables::default();
        let fixed = Fixed(0);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let hits = scorer.keyword_hits("unhappy");
        assert_eq!(hits[0].category, EmotionCategory::Joy);
        assert_eq!(hits[0].hits, 1);
    }

    #[test]
    fn one_keyword_each_from_two_categories_is_mixed() {
        let tables = EmotionTables::default();
        let fixed = Fixed(0);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let analysis = scorer.score("angry and scared");
        assert_eq!(analysis.emotion, EmotionCategory::Mixed);
        assert!(analysis.subtypes.is_empty());
        let top: Vec<_> = analysis
            .explanation
            .top_candidates
            .iter()
            .map(|c| c.emotion)
            .collect();
        assert_eq!(
            top,
            vec![EmotionCategory::Anger, EmotionCategory::Fear, EmotionCategory::Joy]
        );
    }

    #[test]
    fn clear_lead_wins() {
        let tables = EmotionTables::default();
        let fixed = Fixed(0);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let analysis = scorer.score("furious, so angry and irritated");
        assert_eq!(analysis.emotion, EmotionCategory::Anger);
        assert_eq!(analysis.palette, *tables.palettes.get(EmotionCategory::Anger));
        // gap 3, total 3: 0.15 + min(0.85, 3/4 + 0.5) = 1.0 -> clamped
        assert!(approx(analysis.confidence, 0.99));
        // 0.2 + 0.75 * min(1, 3/4) = 0.7625
        assert!(approx(analysis.intensity, 0.7625));
    }

    #[test]
    fn single_keyword_confidence_saturates_slowly() {
        let tables = EmotionTables::default();
        let fixed = Fixed(0);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let analysis = scorer.score("lonely");
        assert_eq!(analysis.emotion, EmotionCategory::Sadness);
        // 0.15 + 1/2 + 1/6
        assert!(approx(analysis.confidence, 0.15 + 0.5 + 1.0 / 6.0));
        assert!(approx(analysis.intensity, 0.2 + 0.75 * 0.25));
    }

    #[test]
    fn positive_polarity_boosts_joy_only() {
        let tables = EmotionTables::default();
        let fixed = Fixed(3);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let analysis = scorer.score("nothing in the tables here");
        assert_eq!(analysis.emotion, EmotionCategory::Joy);
        assert!(approx(analysis.explanation.top_candidates[0].score, 1.5));
        assert!(approx(analysis.explanation.top_candidates[1].score, 0.0));
    }

    #[test]
    fn polarity_of_one_is_ignored() {
        let tables = EmotionTables::default();
        let fixed = Fixed(1);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let analysis = scorer.score("plain words");
        assert_eq!(analysis.emotion, EmotionCategory::Mixed);
        assert!(approx(analysis.intensity, 0.2 + 0.75 / 6.0));
    }

    #[test]
    fn negative_polarity_boosts_three_categories_equally() {
        let tables = EmotionTables::default();
        let fixed = Fixed(-10);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let analysis = scorer.score("nothing matched");
        // sadness, anger and fear tie at 2.0, so the result is mixed
        assert_eq!(analysis.emotion, EmotionCategory::Mixed);
        let top: Vec<_> = analysis
            .explanation
            .top_candidates
            .iter()
            .map(|c| (c.emotion, c.score))
            .collect();
        assert_eq!(
            top,
            vec![
                (EmotionCategory::Sadness, 2.0),
                (EmotionCategory::Anger, 2.0),
                (EmotionCategory::Fear, 2.0),
            ]
        );
        assert!(approx(analysis.intensity, 0.2 + 0.75 * 1.0));
    }

    #[test]
    fn gap_of_one_is_decisive() {
        let tables = EmotionTables::default();
        let fixed = Fixed(0);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let analysis = scorer.score("happy and glad but calm");
        assert_eq!(analysis.emotion, EmotionCategory::Joy);
        let top = &analysis.explanation.top_candidates;
        assert!(approx(top[0].score - top[1].score, 1.0));
    }

    #[test]
    fn half_point_gap_is_mixed() {
        let tables = EmotionTables::default();
        // joy: boost min(2, 3/2) = 1.5; calm: "calm" = 1
        let fixed = Fixed(3);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let analysis = scorer.score("calm");
        assert_eq!(analysis.emotion, EmotionCategory::Mixed);
        assert_eq!(analysis.explanation.top_candidates[0].emotion, EmotionCategory::Joy);
        assert!(approx(analysis.explanation.top_candidates[0].score, 1.5));
    }

    #[test]
    fn matched_keywords_follow_ranking_order() {
        let tables = EmotionTables::default();
        let fixed = Fixed(0);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let analysis = scorer.score("calm but angry, furious and mad");
        let words: Vec<_> = analysis
            .explanation
            .matched_keywords
            .iter()
            .map(|m| (m.emotion, m.word.as_str()))
            .collect();
        assert_eq!(
            words,
            vec![
                (EmotionCategory::Anger, "angry"),
                (EmotionCategory::Anger, "mad"),
                (EmotionCategory::Anger, "furious"),
                (EmotionCategory::Calm, "calm"),
            ]
        );
    }

    #[test]
    fn confidence_never_decreases_with_more_hits() {
        let tables = EmotionTables::default();
        let fixed = Fixed(0);
        let scorer = EmotionScorer::new(&tables, &fixed);
        let words = ["sad", "lonely", "tired", "exhausted", "heavy", "hopeless"];
        let mut previous = 0.0;
        for n in 1..=words.len() {
            let text = words[..n].join(" ");
            let analysis = scorer.score(&text);
            assert_eq!(analysis.emotion, EmotionCategory::Sadness);
            assert!(analysis.confidence >= previous, "dropped at {n} hits");
            previous = analysis.confidence;
        }
    }

    #[test]
    fn bounds_hold_for_extreme_polarity() {
        let tables = EmotionTables::default();
        for polarity in [i32::MIN, -1000, 1000, i32::MAX] {
            let fixed = Fixed(polarity);
            let scorer = EmotionScorer::new(&tables, &fixed);
            let analysis = scorer.score("happy sad angry scared calm");
            assert!(analysis.intensity >= 0.2 && analysis.intensity <= 0.95);
            assert!(analysis.confidence >= 0.15 && analysis.confidence <= 0.99);
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let tables = EmotionTables::default();
        let polarity = LexiconPolarity::default();
        let scorer = EmotionScorer::new(&tables, &polarity);
        let text = "I'm exhausted and lonely, I feel let down";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn happy_and_grateful_is_joy_with_grateful_subtype() {
        let tables = EmotionTables::default();
        let polarity = LexiconPolarity::default();
        let scorer = EmotionScorer::new(&tables, &polarity);
        let analysis = scorer.score("I feel happy and grateful today");
        assert_eq!(analysis.emotion, EmotionCategory::Joy);
        assert_eq!(analysis.explanation.sentiment_score, 6);
        // 2 hits + min(2, 3) boost
        assert!(approx(analysis.explanation.top_candidates[0].score, 4.0));
        assert!(approx(analysis.intensity, 0.95));
        assert_eq!(analysis.subtypes[0].subtype, "grateful");
        assert!(approx(analysis.subtypes[0].confidence, 1.0 / 3.0));
    }

    #[test]
    fn calm_winner_reports_no_subtypes() {
        let tables = EmotionTables::default();
        let fixed = Fixed(0);
        let scorer = EmotionScorer::new(&tables, &fixed);
        // every word here is a peaceful-family phrase
        let analysis = scorer.score("relaxed and balanced, feeling grounded");
        assert_eq!(analysis.emotion, EmotionCategory::Calm);
        assert!(analysis.subtypes.is_empty());
        assert!(scorer.detect_subtypes(EmotionCategory::Calm, "calm and serene").is_empty());
        // the family itself is still reachable by name
        let peaceful = detect_subtypes(&tables.subtypes, SubtypeFamily::Peaceful, "calm and serene");
        assert!(!peaceful.is_empty());
    }

    #[test]
    fn subtypes_rank_by_hits_then_declaration_order() {
        let table = SubtypeTable {
            anger: vec![
                SubtypeEntry {
                    label: "first".to_owned(),
                    phrases: vec!["alpha".to_owned()],
                },
                SubtypeEntry {
                    label: "second".to_owned(),
                    phrases: vec!["alpha".to_owned(), "beta".to_owned(), "gamma".to_owned()],
                },
                SubtypeEntry {
                    label: "third".to_owned(),
                    phrases: vec!["beta".to_owned()],
                },
            ],
            ..SubtypeTable::default()
        };
        let found = detect_subtypes(&table, SubtypeFamily::Anger, "ALPHA beta");
        let labels: Vec<_> = found.iter().map(|s| (s.subtype.as_str(), s.hits)).collect();
        assert_eq!(labels, vec![("second", 2), ("first", 1)]);
        // confidence is hits / list length, not the ranking key
        assert!(approx(found[0].confidence, 2.0 / 3.0));
        assert!(approx(found[1].confidence, 1.0));
    }

    #[test]
    fn duplicate_phrases_count_twice() {
        let tables = EmotionTables::default();
        let found = detect_subtypes(&tables.subtypes, SubtypeFamily::Joy, "satisfied");
        assert_eq!(found[0].subtype, "content");
        assert_eq!(found[0].hits, 2);
        assert!(approx(found[0].confidence, 0.5));
        assert_eq!(found[1].subtype, "satisfied");
    }

    #[test]
    fn empty_phrase_lists_never_match() {
        let table = SubtypeTable {
            fear: vec![SubtypeEntry {
                label: "void".to_owned(),
                phrases: Vec::new(),
            }],
            ..SubtypeTable::default()
        };
        assert!(detect_subtypes(&table, SubtypeFamily::Fear, "anything").is_empty());
    }

    #[test]
    fn secondary_families_are_reachable_directly() {
        let tables = EmotionTables::default();
        let found = detect_subtypes(
            &tables.subtypes,
            SubtypeFamily::Powerful,
            "I feel brave and determined",
        );
        let labels: Vec<_> = found.iter().map(|s| s.subtype.as_str()).collect();
        assert_eq!(labels, vec!["brave", "determined"]);
    }

    #[test]
    fn substituted_tables_drive_scoring() {
        let mut tables = EmotionTables::default();
        tables.keywords.fear = vec!["spiders".to_owned()];
        let fixed = Fixed(0);
        let scorer = EmotionScorer::new(&tables, &fixed);
        assert_eq!(scorer.score("spiders everywhere").emotion, EmotionCategory::Fear);
        assert_eq!(scorer.score("scared").emotion, EmotionCategory::Mixed);
    }
}
