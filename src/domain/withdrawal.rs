use super::money::{Amount, Denomination};
use std::collections::BTreeMap;
use std::fmt;

/// One way to pay out a requested amount: a bill count per denomination.
///
/// Denominations with a zero count are never stored. The total is always
/// recomputed from the combination, which absorbs floating-point drift in the
/// requested amount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WithdrawalOption {
    combination: BTreeMap<Denomination, u32>,
}

impl WithdrawalOption {
    pub fn new(combination: impl IntoIterator<Item = (Denomination, u32)>) -> Self {
        let mut merged = BTreeMap::new();
        for (denomination, count) in combination {
            *merged.entry(denomination).or_insert(0) += count;
        }
        merged.retain(|_, count| *count > 0);
        Self {
            combination: merged,
        }
    }

    pub fn combination(&self) -> &BTreeMap<Denomination, u32> {
        &self.combination
    }

    pub fn count_of(&self, denomination: Denomination) -> u32 {
        self.combination.get(&denomination).copied().unwrap_or(0)
    }

    pub fn total_amount(&self) -> Amount {
        self.combination
            .iter()
            .map(|(denomination, count)| denomination.amount() * *count)
            .sum()
    }

    pub fn bill_count(&self) -> u32 {
        self.combination.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.combination.is_empty()
    }
}

impl fmt::Display for WithdrawalOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let parts: Vec<String> = self
            .combination
            .iter()
            .rev()
            .map(|(denomination, count)| format!("{count}x {denomination}"))
            .collect();
        write!(f, "{} ( {} )", self.total_amount(), parts.join(" + "))
    }
}
