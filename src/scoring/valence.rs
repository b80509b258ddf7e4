//! Per-token valence with modifier rules
//!
//! Walks the tokens left to right. Each lexicon word starts from its base
//! valence and is adjusted by up to three preceding non-lexicon tokens
//! (boosters, dampeners, negations), by ALL-CAPS emphasis, by idioms, and
//! finally by a contrastive "but" anywhere in the text.

use super::tokenizer::{SentiText, Token};
use crate::lexicon::rules::{
    self, BUT_AFTER_WEIGHT, BUT_BEFORE_WEIGHT, B_DECR, C_INCR, DISTANCE_DAMPING, NEVER_SO_FAR,
    NEVER_SO_NEAR, N_SCALAR,
};
use crate::lexicon::Lexicon;

/// How far back a modifier can reach
const LOOKBACK: usize = 3;

/// Adjusted valence for every token, in token order.
///
/// Modifier words themselves contribute 0.0 but still occupy a slot, so
/// they count toward the neutral share.
pub fn token_valences(text: &SentiText<'_>, lexicon: &Lexicon) -> Vec<f64> {
    let words = &text.tokens;
    let mut valences = Vec::with_capacity(words.len());

    for (i, word) in words.iter().enumerate() {
        let kind_of =
            word.lower == "kind" && words.get(i + 1).is_some_and(|next| next.lower == "of");
        if kind_of || rules::booster(&word.lower).is_some() {
            valences.push(0.0);
            continue;
        }
        valences.push(word_valence(text, lexicon, i));
    }

    apply_but_weighting(words, &mut valences);
    valences
}

fn word_valence(text: &SentiText<'_>, lexicon: &Lexicon, i: usize) -> f64 {
    let words = &text.tokens;
    let word = &words[i];
    let Some(base) = lexicon.get(&word.lower) else {
        return 0.0;
    };
    let mut valence = base;

    // "no" directly before a lexicon word acts as a negation, not as a word of its own
    if word.lower == "no" && words.get(i + 1).is_some_and(|next| lexicon.contains(&next.lower)) {
        valence = 0.0;
    }
    if negated_by_no(words, i) {
        valence = base * N_SCALAR;
    }

    if word.is_shouting() && text.is_cap_diff {
        valence = shift_toward(valence, valence, C_INCR);
    }

    for distance in 0..LOOKBACK {
        if i <= distance {
            break;
        }
        let prev = &words[i - distance - 1];
        if lexicon.contains(&prev.lower) {
            continue;
        }

        valence += booster_scalar(prev, valence, text.is_cap_diff) * DISTANCE_DAMPING[distance];
        valence = negation_check(words, valence, distance, i);
        if distance == 2 {
            valence = idiom_check(words, valence, i);
        }
    }

    least_check(words, lexicon, valence, i)
}

fn negated_by_no(words: &[Token<'_>], i: usize) -> bool {
    let lower = |k: usize| words[k].lower.as_str();
    (i > 0 && lower(i - 1) == "no")
        || (i > 1 && lower(i - 2) == "no")
        || (i > 2 && lower(i - 3) == "no" && matches!(lower(i - 1), "or" | "nor"))
}

/// Booster contribution of `word` toward a word of the given valence
fn booster_scalar(word: &Token<'_>, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(mut scalar) = rules::booster(&word.lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if word.is_shouting() && is_cap_diff {
        scalar = shift_toward(scalar, valence, C_INCR);
    }
    scalar
}

/// Move `value` by `amount` in the direction of `sign`; zero counts as negative
fn shift_toward(value: f64, sign: f64, amount: f64) -> f64 {
    if sign > 0.0 {
        value + amount
    } else {
        value - amount
    }
}

fn negation_check(words: &[Token<'_>], valence: f64, distance: usize, i: usize) -> f64 {
    let lower = |k: usize| words[k].lower.as_str();
    let so_or_this = |k: usize| matches!(lower(k), "so" | "this");

    match distance {
        0 => {
            if rules::is_negation(lower(i - 1)) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if lower(i - 2) == "never" && so_or_this(i - 1) {
                return valence * NEVER_SO_NEAR;
            }
            if rules::is_negation(lower(i - 2)) {
                return valence * N_SCALAR;
            }
        }
        _ => {
            if lower(i - 3) == "never" && (so_or_this(i - 2) || so_or_this(i - 1)) {
                return valence * NEVER_SO_FAR;
            }
            if rules::is_negation(lower(i - 3)) {
                return valence * N_SCALAR;
            }
        }
    }
    valence
}

/// Idioms ending at, spanning, or starting at word `i`. Requires `i >= 3`.
fn idiom_check(words: &[Token<'_>], valence: f64, i: usize) -> f64 {
    let lower = |k: usize| words[k].lower.as_str();
    let mut valence = valence;

    let three_two = format!("{} {}", lower(i - 3), lower(i - 2));
    let two_one = format!("{} {}", lower(i - 2), lower(i - 1));
    let preceding = [
        format!("{} {}", lower(i - 1), lower(i)),
        format!("{} {} {}", lower(i - 2), lower(i - 1), lower(i)),
        two_one.clone(),
        format!("{} {} {}", lower(i - 3), lower(i - 2), lower(i - 1)),
        three_two.clone(),
    ];
    if let Some(v) = preceding.iter().find_map(|seq| rules::idiom(seq)) {
        valence = v;
    }

    if i + 1 < words.len() {
        if let Some(v) = rules::idiom(&format!("{} {}", lower(i), lower(i + 1))) {
            valence = v;
        }
    }
    if i + 2 < words.len() {
        if let Some(v) = rules::idiom(&format!("{} {} {}", lower(i), lower(i + 1), lower(i + 2))) {
            valence = v;
        }
    }

    // Dampening bigrams such as "sort of" / "kind of"
    if rules::booster(&three_two).is_some() || rules::booster(&two_one).is_some() {
        valence += B_DECR;
    }
    valence
}

/// "least" negates ("least favorite") unless it reads "at least" / "very least"
fn least_check(words: &[Token<'_>], lexicon: &Lexicon, valence: f64, i: usize) -> f64 {
    if i == 0 {
        return valence;
    }
    let prev = words[i - 1].lower.as_str();
    if prev != "least" || lexicon.contains(prev) {
        return valence;
    }
    if i > 1 && matches!(words[i - 2].lower.as_str(), "at" | "very") {
        return valence;
    }
    valence * N_SCALAR
}

/// Sentiment before the first "but" is halved, after it boosted by half
fn apply_but_weighting(words: &[Token<'_>], valences: &mut [f64]) {
    let Some(but_idx) = words.iter().position(|w| w.lower == "but") else {
        return;
    };
    for (idx, valence) in valences.iter_mut().enumerate() {
        if idx < but_idx {
            *valence *= BUT_BEFORE_WEIGHT;
        } else if idx > but_idx {
            *valence *= BUT_AFTER_WEIGHT;
        }
    }
}
