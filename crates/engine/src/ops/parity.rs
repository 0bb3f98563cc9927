// crates/engine/src/ops/parity.rs
use serde::{Deserialize, Serialize};

/// Integers grouped by parity, each side in original relative order.
///
/// Callers address the groups by field name; there is no meaningful order
/// *between* the two groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityGroups {
    pub evens: Vec<i64>,
    pub odds: Vec<i64>,
}

impl ParityGroups {
    #[inline]
    pub fn len(&self) -> usize {
        self.evens.len() + self.odds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.evens.is_empty() && self.odds.is_empty()
    }
}

/// Splits `numbers` into even and odd groups, preserving relative order
/// within each group. Negative values follow `n % 2 == 0`, so -4 is even
/// and -3 is odd.
pub fn partition_by_parity(numbers: &[i64]) -> ParityGroups {
    let mut groups = ParityGroups::default();
    for &n in numbers {
        if n % 2 == 0 {
            groups.evens.push(n);
        } else {
            groups.odds.push(n);
        }
    }
    groups
}
