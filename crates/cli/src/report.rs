// crates/cli/src/report.rs
use std::collections::BTreeMap;

use serde::Serialize;
use stream_ops_engine::{
    ParityGroups, Sentence, dedup_chars, longest_word, partition_by_parity, second_longest_word,
    word_frequencies, words_with_vowel_count,
};

use crate::error::Result;

/// Inputs for a full report run. Defaults live in `args.rs`; nothing here is
/// hardcoded.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub sentence: &'a str,
    pub text: &'a str,
    pub numbers: &'a [i64],
    pub vowel_target: usize,
}

/// Results of the six transformations, in the order they are executed and
/// printed. Field order doubles as serialization order.
#[derive(Debug, Serialize)]
pub struct Report {
    pub longest: String,
    pub deduped: String,
    pub second_longest: String,
    pub frequencies: BTreeMap<String, usize>,
    pub vowel_target: usize,
    pub vowel_matches: Vec<String>,
    pub parity: ParityGroups,
}

/// Runs the six transformations sequentially against the given inputs.
///
/// # Errors
///
/// Fails when the sentence is empty (longest word) or has fewer than two
/// words (second-longest word). The remaining transformations are total.
pub fn build(inputs: &ReportInputs<'_>) -> Result<Report> {
    let sentence = Sentence::parse(inputs.sentence);

    let longest = longest_word(&sentence)?.to_owned();
    let deduped = dedup_chars(inputs.text);
    let second_longest = second_longest_word(&sentence)?.to_owned();
    let frequencies: BTreeMap<String, usize> =
        word_frequencies(&sentence).into_iter().collect();
    let vowel_matches = words_with_vowel_count(&sentence, inputs.vowel_target)
        .into_iter()
        .map(str::to_owned)
        .collect();
    let parity = partition_by_parity(inputs.numbers);

    Ok(Report {
        longest,
        deduped,
        second_longest,
        frequencies,
        vowel_target: inputs.vowel_target,
        vowel_matches,
        parity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::error::AppError;
    use stream_ops_engine::EngineError;

    fn reference_inputs() -> ReportInputs<'static> {
        ReportInputs {
            sentence: args::DEFAULT_SENTENCE,
            text: args::DEFAULT_TEXT,
            numbers: &[1, 2, 3, 4, 7, 6, 8],
            vowel_target: 2,
        }
    }

    #[test]
    fn reference_report() {
        let report = build(&reference_inputs()).unwrap();
        assert_eq!(report.longest, "learning");
        assert_eq!(report.deduped, "dabfe");
        assert_eq!(report.second_longest, "stream");
        assert_eq!(report.frequencies.get("java"), Some(&2));
        assert_eq!(report.vowel_matches, vec!["java", "java"]);
        assert_eq!(report.parity.evens, vec![2, 4, 6, 8]);
        assert_eq!(report.parity.odds, vec![1, 3, 7]);
    }

    #[test]
    fn empty_sentence_fails_early() {
        let mut inputs = reference_inputs();
        inputs.sentence = "";
        let err = build(&inputs).unwrap_err();
        assert!(matches!(
            err,
            AppError::Engine(EngineError::EmptySentence)
        ));
    }

    #[test]
    fn reference_report_is_deterministic() {
        let inputs = reference_inputs();
        let a = serde_json::to_string(&build(&inputs).unwrap()).unwrap();
        let b = serde_json::to_string(&build(&inputs).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
