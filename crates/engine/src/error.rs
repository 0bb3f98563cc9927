// crates/engine/src/error.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Sentence contains no words")]
    EmptySentence,

    #[error("Not enough words: required {required}, found {found}")]
    NotEnoughWords { required: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
