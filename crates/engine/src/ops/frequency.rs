// crates/engine/src/ops/frequency.rs
use hashbrown::HashMap;

use crate::sentence::Sentence;

/// Counts occurrences of each distinct word.
///
/// The map is rebuilt on every call; iteration order is unspecified, so
/// presenters sort keys before rendering. An empty sentence yields an empty
/// map.
pub fn word_frequencies(sentence: &Sentence) -> HashMap<String, usize> {
    let mut freq: HashMap<String, usize> = HashMap::with_capacity(sentence.len());
    for word in sentence.words() {
        *freq.entry_ref(word.as_str()).or_insert(0) += 1;
    }
    log::debug!(
        "word_frequencies: {} words, {} distinct",
        sentence.len(),
        freq.len()
    );
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeats() {
        let freq = word_frequencies(&Sentence::parse("a b a a b c"));
        assert_eq!(freq.get("a"), Some(&3));
        assert_eq!(freq.get("b"), Some(&2));
        assert_eq!(freq.get("c"), Some(&1));
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn empty_sentence_yields_empty_map() {
        assert!(word_frequencies(&Sentence::parse("")).is_empty());
    }

    #[test]
    fn words_are_case_sensitive() {
        let freq = word_frequencies(&Sentence::parse("Java java"));
        assert_eq!(freq.len(), 2);
    }
}
