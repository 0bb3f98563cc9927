// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod parsers;
pub mod presentation;
pub mod report;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
