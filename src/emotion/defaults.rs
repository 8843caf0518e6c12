//! Built-in keyword, subtype and palette data.

use super::{
    EmotionTables, HexColor, KeywordTable, Palette, PaletteTable, SubtypeEntry, SubtypeTable,
};

const JOY: &[&str] = &[
    "happy", "joy", "excited", "grateful", "grace", "love", "glad", "bright", "peaceful",
];
const CALM: &[&str] = &[
    "calm", "content", "okay", "fine", "steady", "soft", "chill", "relaxed", "balanced",
];
const SADNESS: &[&str] = &[
    "sad",
    "down",
    "blue",
    "lonely",
    "tired",
    "exhausted",
    "heavy",
    "cry",
    "loss",
    "hopeless",
    "worthless",
];
const ANGER: &[&str] = &[
    "angry",
    "mad",
    "frustrated",
    "upset",
    "irritated",
    "annoyed",
    "rage",
    "furious",
    "resent",
];
const FEAR: &[&str] = &[
    "anxious",
    "scared",
    "afraid",
    "worried",
    "nervous",
    "panic",
    "uneasy",
    "uncertain",
    "terrified",
];

type SubtypeData = &'static [(&'static str, &'static [&'static str])];

const ANGER_SUBTYPES: SubtypeData = &[
    (
        "frustrated",
        &["frustrated", "frustration", "stuck", "blocked", "can't figure", "helpless"],
    ),
    ("irritated", &["irritated", "irritation", "annoyed", "bothered"]),
    ("annoyed", &["annoyed", "peeved", "irritated"]),
    ("enraged", &["rage", "enraged", "furious", "livid", "explosive"]),
    ("resentful", &["resent", "resentful", "bitter", "betrayed"]),
    ("bitter", &["bitter", "resentful", "sour"]),
    ("hostile", &["hostile", "antagonistic", "aggressive"]),
    ("jealous", &["jealous", "envy", "envious"]),
];

const SADNESS_SUBTYPES: SubtypeData = &[
    (
        "lonely",
        &["lonely", "alone", "isolated", "left out", "abandoned", "forgotten"],
    ),
    (
        "disappointed",
        &["disappointed", "let down", "letdown", "failed", "regretful", "regret"],
    ),
    (
        "hopeless",
        &["hopeless", "no point", "give up", "can't go on", "meaningless", "worthless"],
    ),
    ("discouraged", &["discouraged", "disheartened", "demoralized"]),
    (
        "grief_stricken",
        &["grief", "grieving", "heartbroken", "mourning", "devastated"],
    ),
    ("ashamed", &["ashamed", "embarrassed", "humiliated"]),
    ("guilty", &["guilty", "remorse", "sorry for", "regretful"]),
    ("regretful", &["regretful", "regret", "should have", "wish i had"]),
];

const FEAR_SUBTYPES: SubtypeData = &[
    ("anxious", &["anxious", "anxiety", "anxiousness"]),
    ("worried", &["worried", "worry", "concerned"]),
    ("nervous", &["nervous", "jitters", "butterflies"]),
    (
        "insecure",
        &["insecure", "unsure", "inadequate", "not good enough"],
    ),
    (
        "overwhelmed",
        &["overwhelmed", "overwhelm", "too much", "can't handle"],
    ),
    ("helpless", &["helpless", "powerless", "can't do anything"]),
    ("scared", &["scared", "afraid", "terrified"]),
    ("panicked", &["panic", "panicked", "panicking"]),
];

// "satisfied" is listed twice under `content`; both entries count.
const JOY_SUBTYPES: SubtypeData = &[
    ("content", &["content", "contentment", "satisfied", "satisfied"]),
    ("proud", &["proud", "pride", "accomplished"]),
    ("excited", &["excited", "thrilled", "pumped", "energized"]),
    ("playful", &["playful", "funny", "silly"]),
    ("grateful", &["grateful", "thankful", "blessed"]),
    ("hopeful", &["hopeful", "optimistic", "hope"]),
    ("peaceful", &["peaceful", "calm", "serene"]),
    ("satisfied", &["satisfied", "fulfilled"]),
];

const POWERFUL_SUBTYPES: SubtypeData = &[
    ("brave", &["brave", "courageous", "undaunted"]),
    ("capable", &["capable", "competent", "able"]),
    ("determined", &["determined", "resolute", "decided"]),
    ("motivated", &["motivated", "driven", "energized"]),
    ("inspired", &["inspired", "inspirational"]),
    ("successful", &["successful", "victorious", "triumphant"]),
    ("respected", &["respected", "valued", "esteemed"]),
];

const PEACEFUL_SUBTYPES: SubtypeData = &[
    ("calm", &["calm", "tranquil", "relaxed"]),
    ("relaxed", &["relaxed", "laid back", "at ease"]),
    ("safe", &["safe", "secure", "protected"]),
    ("balanced", &["balanced", "centered", "grounded"]),
    ("accepted", &["accepted", "included"]),
    ("centered", &["centered", "grounded"]),
];

const DISGUSTED_SUBTYPES: SubtypeData = &[
    ("uncomfortable", &["uncomfortable", "uneasy"]),
    ("repulsed", &["repulsed", "disgusted", "grossed out"]),
    ("judgmental", &["judgmental", "critical"]),
    ("uneasy", &["uneasy", "off"]),
    ("disapproving", &["disapproving", "disapprove"]),
];

const SURPRISED_SUBTYPES: SubtypeData = &[
    ("shocked", &["shocked", "shocking"]),
    ("confused", &["confused", "perplexed"]),
    ("curious", &["curious", "interested"]),
    ("amazed", &["amazed", "astonished", "wow"]),
    ("startled", &["startled", "jumpy"]),
];

// (joy, calm, sadness, anger, fear, mixed)
const PALETTES: [[&str; 3]; 6] = [
    ["#FFB347", "#FF7A7A", "#FFD166"],
    ["#75C9C8", "#5E8BFF", "#B8E1FF"],
    ["#4D6DE3", "#1B1F3B", "#7A8BA3"],
    ["#E63946", "#F3722C", "#9B2226"],
    ["#9E77ED", "#2D2A4A", "#6C63FF"],
    ["#F4A261", "#2A9D8F", "#8AB17D"],
];

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_owned()).collect()
}

fn subtypes(data: SubtypeData) -> Vec<SubtypeEntry> {
    data.iter()
        .map(|(label, phrases)| SubtypeEntry {
            label: (*label).to_owned(),
            phrases: words(phrases),
        })
        .collect()
}

fn palette(colors: [&str; 3]) -> Palette {
    Palette(colors.map(HexColor::trusted))
}

pub(super) fn emotion_tables() -> EmotionTables {
    let [joy, calm, sadness, anger, fear, mixed] = PALETTES;
    EmotionTables {
        keywords: KeywordTable {
            joy: words(JOY),
            calm: words(CALM),
            sadness: words(SADNESS),
            anger: words(ANGER),
            fear: words(FEAR),
        },
        subtypes: SubtypeTable {
            joy: subtypes(JOY_SUBTYPES),
            sadness: subtypes(SADNESS_SUBTYPES),
            anger: subtypes(ANGER_SUBTYPES),
            fear: subtypes(FEAR_SUBTYPES),
            powerful: subtypes(POWERFUL_SUBTYPES),
            peaceful: subtypes(PEACEFUL_SUBTYPES),
            disgusted: subtypes(DISGUSTED_SUBTYPES),
            surprised: subtypes(SURPRISED_SUBTYPES),
        },
        palettes: PaletteTable {
            joy: Some(palette(joy)),
            calm: Some(palette(calm)),
            sadness: Some(palette(sadness)),
            anger: Some(palette(anger)),
            fear: Some(palette(fear)),
            mixed: palette(mixed),
        },
    }
}
