// crates/engine/src/sentence.rs
use std::fmt;

/// 空白区切りで分割した単語列（不変）。
///
/// Splitting uses `str::split_whitespace`, so runs of whitespace collapse
/// and leading/trailing whitespace never produces empty words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    words: Vec<String>,
}

impl Sentence {
    pub fn parse(text: &str) -> Self {
        let words = text.split_whitespace().map(str::to_owned).collect();
        Self { words }
    }

    #[inline]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<&str> for Sentence {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_collapses_whitespace() {
        let s = Sentence::parse("  a\t b\n  c ");
        assert_eq!(s.words(), &["a", "b", "c"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(Sentence::parse("").is_empty());
        assert!(Sentence::parse("   \t\n").is_empty());
    }

    #[test]
    fn display_joins_with_single_space() {
        let s = Sentence::parse("a  b   c");
        assert_eq!(s.to_string(), "a b c");
    }
}
