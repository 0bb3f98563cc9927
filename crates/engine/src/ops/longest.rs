// crates/engine/src/ops/longest.rs
use crate::error::{EngineError, Result};
use crate::sentence::Sentence;

/// Returns the first word of maximum character length.
///
/// Length is counted in Unicode scalar values, not bytes. Ties are broken
/// by first occurrence in sentence order.
///
/// # Errors
///
/// Returns [`EngineError::EmptySentence`] when the sentence has no words.
pub fn longest_word(sentence: &Sentence) -> Result<&str> {
    let mut best: Option<(&str, usize)> = None;
    for word in sentence.words() {
        let len = word.chars().count();
        // Strict comparison keeps the earliest word on ties.
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((word, len));
        }
    }
    let (word, len) = best.ok_or(EngineError::EmptySentence)?;
    log::debug!("longest_word: {} words scanned, best len {len}", sentence.len());
    Ok(word)
}

/// Returns the word at position 1 of a stable length-descending sort.
///
/// When several words tie for the maximum length the result is itself a
/// maximum-length word, not one of a strictly smaller length. This is the
/// documented contract, not an accident; callers wanting distinct-length
/// semantics must deduplicate lengths first.
///
/// # Errors
///
/// Returns [`EngineError::NotEnoughWords`] when fewer than two words are
/// present.
pub fn second_longest_word(sentence: &Sentence) -> Result<&str> {
    let words = sentence.words();
    if words.len() < 2 {
        return Err(EngineError::NotEnoughWords {
            required: 2,
            found: words.len(),
        });
    }
    let mut by_len: Vec<&String> = words.iter().collect();
    // sort_by is stable: equal lengths keep their original relative order.
    by_len.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    Ok(by_len[1])
}
