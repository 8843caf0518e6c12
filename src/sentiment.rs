//! Sentiment polarity source for the emotion scorer.
//!
//! The scorer only needs a signed integer: positive for positive text,
//! negative for negative text, usually small. [`PolarityScorer`] is the seam;
//! [`LexiconPolarity`] is the built-in implementation, a word-valence sum
//! over a subset of the AFINN-165 lexicon with single-token negation.

use std::collections::HashMap;

/// Generic text → polarity function.
pub trait PolarityScorer: Send + Sync {
    /// Signed polarity of `text`. Must not panic on any input.
    fn polarity(&self, text: &str) -> i32;
}

/// Tokens that flip the valence of the token immediately after them.
const NEGATORS: &[&str] = &[
    "cant", "can't", "dont", "don't", "doesnt", "doesn't", "not", "non", "wont", "won't",
    "isnt", "isn't", "never", "didn't", "didnt", "wasn't", "wasnt", "aren't", "arent",
];

/// Characters replaced by a space before tokenizing.
const STRIPPED: &[char] = &[
    '.', ',', '/', '#', '!', '?', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`',
    '"', '~', '(', ')',
];

// AFINN-165 subset: every default keyword that carries valence plus common
// English affect vocabulary.
const LEXICON: &[(&str, i32)] = &[
    // positive
    ("accomplished", 2),
    ("admire", 3),
    ("adore", 3),
    ("amazing", 4),
    ("awesome", 4),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("bless", 2),
    ("blessed", 2),
    ("blissful", 3),
    ("brave", 2),
    ("bright", 1),
    ("brilliant", 4),
    ("calm", 2),
    ("care", 2),
    ("cheer", 2),
    ("cheerful", 2),
    ("comfortable", 2),
    ("confident", 2),
    ("courageous", 2),
    ("delight", 3),
    ("delighted", 3),
    ("determined", 2),
    ("eager", 2),
    ("ease", 2),
    ("energetic", 2),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("fantastic", 4),
    ("fine", 2),
    ("free", 1),
    ("fulfilled", 2),
    ("fun", 4),
    ("funny", 4),
    ("glad", 3),
    ("good", 3),
    ("grateful", 3),
    ("great", 3),
    ("happiness", 3),
    ("happy", 3),
    ("hope", 2),
    ("hopeful", 2),
    ("inspired", 2),
    ("joy", 3),
    ("joyful", 3),
    ("kind", 2),
    ("laugh", 1),
    ("like", 2),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("lucky", 3),
    ("nice", 3),
    ("optimistic", 2),
    ("peaceful", 2),
    ("perfect", 3),
    ("playful", 2),
    ("pleased", 3),
    ("proud", 2),
    ("relaxed", 2),
    ("relief", 1),
    ("safe", 1),
    ("satisfied", 2),
    ("smile", 2),
    ("strong", 2),
    ("success", 2),
    ("successful", 3),
    ("super", 3),
    ("support", 2),
    ("thankful", 2),
    ("thrilled", 5),
    ("triumph", 4),
    ("win", 4),
    ("wonderful", 4),
    ("yes", 1),
    // negative
    ("abandoned", -2),
    ("afraid", -2),
    ("aggressive", -2),
    ("alone", -2),
    ("anger", -3),
    ("angry", -3),
    ("annoyed", -2),
    ("anxiety", -2),
    ("anxious", -2),
    ("ashamed", -2),
    ("awful", -3),
    ("bad", -3),
    ("betrayed", -3),
    ("bitter", -2),
    ("blame", -2),
    ("bored", -2),
    ("broken", -1),
    ("cry", -1),
    ("crying", -2),
    ("dead", -3),
    ("depressed", -2),
    ("despair", -3),
    ("devastated", -2),
    ("die", -3),
    ("disappointed", -2),
    ("disgusted", -3),
    ("dread", -2),
    ("embarrassed", -2),
    ("empty", -1),
    ("exhausted", -2),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fear", -2),
    ("frustrated", -2),
    ("frustration", -2),
    ("furious", -3),
    ("grief", -2),
    ("guilty", -3),
    ("hate", -3),
    ("heartbroken", -3),
    ("helpless", -2),
    ("hopeless", -2),
    ("horrible", -3),
    ("hostile", -2),
    ("hurt", -2),
    ("insecure", -2),
    ("irritated", -3),
    ("isolated", -1),
    ("jealous", -2),
    ("kill", -3),
    ("lonely", -2),
    ("lose", -3),
    ("loss", -3),
    ("lost", -3),
    ("mad", -3),
    ("miserable", -3),
    ("nervous", -2),
    ("no", -1),
    ("overwhelmed", -2),
    ("pain", -2),
    ("panic", -3),
    ("panicked", -3),
    ("rage", -2),
    ("regret", -2),
    ("resentful", -2),
    ("sad", -2),
    ("scared", -2),
    ("shame", -2),
    ("sick", -2),
    ("sorry", -1),
    ("stress", -1),
    ("stressed", -2),
    ("stuck", -2),
    ("suffer", -2),
    ("suicidal", -2),
    ("terrible", -3),
    ("terrified", -3),
    ("tired", -2),
    ("uncertain", -1),
    ("uneasy", -2),
    ("upset", -2),
    ("useless", -2),
    ("worried", -3),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("worthless", -2),
    ("wrong", -2),
];

/// Word-valence polarity scorer.
#[derive(Debug, Clone)]
pub struct LexiconPolarity {
    valences: HashMap<String, i32>,
}

impl LexiconPolarity {
    /// Scorer over a caller-supplied word → valence map. Keys are
    /// lower-cased.
    pub fn with_lexicon(valences: HashMap<String, i32>) -> Self {
        Self {
            valences: valences
                .into_iter()
                .map(|(word, valence)| (word.to_lowercase(), valence))
                .collect(),
        }
    }

    pub fn valence(&self, word: &str) -> Option<i32> {
        self.valences.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for LexiconPolarity {
    fn default() -> Self {
        Self {
            valences: LEXICON
                .iter()
                .map(|(word, valence)| ((*word).to_owned(), *valence))
                .collect(),
        }
    }
}

impl PolarityScorer for LexiconPolarity {
    fn polarity(&self, text: &str) -> i32 {
        let tokens = tokenize(text);
        let mut score: i32 = 0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.valence(token) else {
                continue;
            };
            if i > 0 && NEGATORS.contains(&tokens[i - 1].as_str()) {
                valence = valence.saturating_neg();
            }
            score = score.saturating_add(valence);
        }
        score
    }
}

/// Lower-case, blank out punctuation (apostrophes and hyphens survive) and
/// split on whitespace.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace(STRIPPED, " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn empty_and_blank_text_is_neutral() {
        let scorer = LexiconPolarity::default();
        assert_eq!(scorer.polarity(""), 0);
        assert_eq!(scorer.polarity("   \n\t "), 0);
    }

    #[test]
    fn sums_word_valences() {
        let scorer = LexiconPolarity::default();
        assert_eq!(scorer.polarity("I feel happy and grateful today"), 6);
        assert_eq!(scorer.polarity("sad and lonely"), -4);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let scorer = LexiconPolarity::default();
        assert_eq!(scorer.polarity("HAPPY!!! (so glad)"), 6);
    }

    #[test]
    fn negator_flips_next_token() {
        let scorer = LexiconPolarity::default();
        assert_eq!(scorer.polarity("not happy"), -3);
        assert_eq!(scorer.polarity("I don't hate it"), 3);
    }

    #[test]
    fn negator_only_reaches_one_token() {
        let scorer = LexiconPolarity::default();
        assert_eq!(scorer.polarity("not very happy"), 3);
    }

    #[test]
    fn unknown_words_score_zero() {
        let scorer = LexiconPolarity::default();
        assert_eq!(scorer.polarity("the quick brown fox"), 0);
    }

    #[test]
    fn custom_lexicon_replaces_builtin() {
        let scorer = LexiconPolarity::with_lexicon(HashMap::from([("Sunny".to_owned(), 2)]));
        assert_eq!(scorer.len(), 1);
        assert_eq!(scorer.polarity("sunny sunny happy"), 4);
    }

    #[test]
    fn empty_lexicon_scores_zero() {
        let scorer = LexiconPolarity::with_lexicon(HashMap::new());
        assert!(scorer.is_empty());
        assert_eq!(scorer.polarity("happy sad furious"), 0);
    }

    #[test]
    fn hyphenated_tokens_are_kept_whole() {
        let scorer = LexiconPolarity::with_lexicon(HashMap::from([("Self-Harm".to_owned(), -3)]));
        assert_eq!(scorer.polarity("self-harm"), -3);
    }
}
