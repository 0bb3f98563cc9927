// crates/engine/tests/second_longest.rs
use stream_ops_engine::{EngineError, Sentence, second_longest_word};

#[test]
fn reference_sentence() {
    // Stable length-descending sort:
    // ["learning", "stream", "java", "java", "am", "in", "I"]
    let s = Sentence::parse("I am learning java stream in java");
    assert_eq!(second_longest_word(&s).unwrap(), "stream");
}

#[test]
fn duplicate_maximum_returns_tied_word() {
    // Both maxima survive the sort; position 1 is still a longest word.
    let s = Sentence::parse("apple melon fig");
    assert_eq!(second_longest_word(&s).unwrap(), "melon");
}

#[test]
fn equal_lengths_keep_original_order() {
    let s = Sentence::parse("aa bb cc");
    assert_eq!(second_longest_word(&s).unwrap(), "bb");
}

#[test]
fn fewer_than_two_words_is_an_error() {
    assert_eq!(
        second_longest_word(&Sentence::parse("solo")).unwrap_err(),
        EngineError::NotEnoughWords {
            required: 2,
            found: 1
        }
    );
    assert_eq!(
        second_longest_word(&Sentence::parse("")).unwrap_err(),
        EngineError::NotEnoughWords {
            required: 2,
            found: 0
        }
    );
}
