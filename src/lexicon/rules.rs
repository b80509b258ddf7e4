//! Fixed rule tables for the valence heuristics
//!
//! Constants and word lists follow the published VADER rule set so scores
//! stay comparable with the reference analyzer.

/// Added to a valence when preceded by an intensifier
pub const B_INCR: f64 = 0.293;
/// Added to a valence when preceded by a dampener
pub const B_DECR: f64 = -0.293;
/// Extra emphasis for an ALL-CAPS word in mixed-case text
pub const C_INCR: f64 = 0.733;
/// Multiplier applied to a negated valence
pub const N_SCALAR: f64 = -0.74;

/// Normalization constant for the compound score (approximates the max expected sum)
pub const NORMALIZE_ALPHA: f64 = 15.0;

/// Per-'!' emphasis and the number of marks that count
pub const EXCLAMATION_INCR: f64 = 0.292;
pub const EXCLAMATION_MAX: usize = 4;
/// Per-'?' emphasis (only when more than one is present)
pub const QUESTION_INCR: f64 = 0.18;
pub const QUESTION_MAX: usize = 3;
/// Flat emphasis once there are more than `QUESTION_MAX` question marks
pub const QUESTION_CAP: f64 = 0.96;

/// Weights for words before / after a contrastive "but"
pub const BUT_BEFORE_WEIGHT: f64 = 0.5;
pub const BUT_AFTER_WEIGHT: f64 = 1.5;

/// Modifier dampening by distance from the scored word (1, 2, 3 tokens back)
pub const DISTANCE_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

/// "never so good" and similar
pub const NEVER_SO_NEAR: f64 = 1.5;
pub const NEVER_SO_FAR: f64 = 1.25;

/// Words that negate the valence of a following word
pub const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent", "isnt",
    "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't",
    "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
    "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't", "shouldn't",
    "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't", "rarely",
    "seldom", "despite",
];

/// Intensifiers (positive) and dampeners (negative)
pub const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerable", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("effing", B_INCR),
    ("enormous", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptional", B_INCR),
    ("exceptionally", B_INCR),
    ("extreme", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("flipping", B_INCR),
    ("flippin", B_INCR),
    ("frackin", B_INCR),
    ("fracking", B_INCR),
    ("fricking", B_INCR),
    ("frickin", B_INCR),
    ("frigging", B_INCR),
    ("friggin", B_INCR),
    ("fully", B_INCR),
    ("fuckin", B_INCR),
    ("fucking", B_INCR),
    ("fuggin", B_INCR),
    ("fugging", B_INCR),
    ("greatly", B_INCR),
    ("hella", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredible", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("major", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("total", B_INCR),
    ("totally", B_INCR),
    ("tremendous", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utter", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("just enough", B_DECR),
    ("kind of", B_DECR),
    ("kinda", B_DECR),
    ("kindof", B_DECR),
    ("kind-of", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginal", B_DECR),
    ("marginally", B_DECR),
    ("occasional", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarce", B_DECR),
    ("scarcely", B_DECR),
    ("slight", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sort of", B_DECR),
    ("sorta", B_DECR),
    ("sortof", B_DECR),
    ("sort-of", B_DECR),
];

/// Multi-word expressions whose meaning overrides their parts
pub const IDIOMS: &[(&str, f64)] = &[
    ("the shit", 3.0),
    ("the bomb", 3.0),
    ("bad ass", 1.5),
    ("bus stop", 0.0),
    ("yeah right", -2.0),
    ("kiss of death", -1.5),
    ("to die for", 3.0),
    ("beating heart", 3.1),
    ("broken heart", -2.9),
    ("cut the mustard", 2.0),
    ("hand to mouth", -2.0),
    ("back handed", -2.0),
    ("blow smoke", -2.0),
    ("blowing smoke", -2.0),
    ("upper hand", 1.0),
    ("break a leg", 2.0),
    ("cooking with gas", 2.0),
    ("in the black", 2.0),
    ("in the red", -2.0),
    ("on the ball", 2.0),
    ("under the weather", -2.0),
];

/// Booster delta for a lowercase word or bigram, if it is one
pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, delta)| *delta)
}

/// Idiom valence for a lowercase space-joined phrase, if it is one
pub fn idiom(phrase: &str) -> Option<f64> {
    IDIOMS
        .iter()
        .find(|(p, _)| *p == phrase)
        .map(|(_, valence)| *valence)
}

/// Whether a single lowercase word negates.
///
/// Contractions ending in "n't" count even when not listed.
pub fn is_negation(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}
