// crates/engine/src/ops/vowels.rs
use crate::sentence::Sentence;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Case-insensitive vowel count (a e i o u), counting repeats.
#[inline]
pub fn vowel_count(word: &str) -> usize {
    word.chars()
        .filter(|c| VOWELS.contains(&c.to_ascii_lowercase()))
        .count()
}

/// Returns the ordered subsequence of words whose vowel count equals
/// `target`. Total over all sentences; no matches yields an empty list.
pub fn words_with_vowel_count(sentence: &Sentence, target: usize) -> Vec<&str> {
    let matches: Vec<&str> = sentence
        .words()
        .iter()
        .filter(|w| vowel_count(w) == target)
        .map(String::as_str)
        .collect();
    log::debug!(
        "words_with_vowel_count: target={target}, {} of {} words matched",
        matches.len(),
        sentence.len()
    );
    matches
}
