// crates/cli/src/parsers.rs
use std::str::FromStr;

/// Wrapper type to parse comma-separated integer lists (e.g. 1,2,3 or "1, -2, 3").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberList(pub Vec<i64>);

impl FromStr for NumberList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|part| {
                part.parse::<i64>()
                    .map_err(|err| format!("Invalid integer '{part}': {err}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(numbers))
    }
}
