// crates/cli/src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;

/// Presentation settings resolved from the parsed arguments.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub format: OutputFormat,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            format: args.format,
        }
    }
}
