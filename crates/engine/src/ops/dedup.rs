// crates/engine/src/ops/dedup.rs
use hashbrown::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// 重複文字を除去し、初出順の文字列を返す。
///
/// The unit of "character" is the extended grapheme cluster, so combining
/// sequences survive as a single unit. For ASCII input this is identical to
/// per-`char` de-duplication. Empty input yields an empty string.
pub fn dedup_chars(text: &str) -> String {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        if seen.insert(grapheme) {
            out.push_str(grapheme);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        assert_eq!(dedup_chars("dabaafde"), "dabfe");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(dedup_chars(""), "");
    }

    #[test]
    fn already_unique_is_unchanged() {
        assert_eq!(dedup_chars("abc"), "abc");
    }

    #[test]
    fn grapheme_clusters_stay_whole() {
        // é as e + combining acute, twice
        let text = "e\u{301}e\u{301}";
        assert_eq!(dedup_chars(text), "e\u{301}");
    }
}
