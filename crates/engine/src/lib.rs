// crates/engine/src/lib.rs
pub mod error;
pub mod ops;
pub mod sentence;

pub use error::{EngineError, Result};
pub use sentence::Sentence;

pub use ops::dedup::dedup_chars;
pub use ops::frequency::word_frequencies;
pub use ops::longest::{longest_word, second_longest_word};
pub use ops::parity::{ParityGroups, partition_by_parity};
pub use ops::vowels::{vowel_count, words_with_vowel_count};
