// crates/engine/src/ops.rs
pub mod dedup;
pub mod frequency;
pub mod longest;
pub mod parity;
pub mod vowels;
