//! Derived balances.
//!
//! Totals are folded from signed amounts of decided bets only. Opponents are
//! grouped by their trimmed name (case preserved) and listed in a locale-style
//! order so the output is stable for identical input.

use crate::domain::entities::bet::Bet;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Grouping key for bets with a blank opponent.
pub const UNKNOWN_OPPONENT: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpponentBalance {
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BalanceSummary {
    pub total: f64,
    pub per_opponent: Vec<OpponentBalance>,
}

impl BalanceSummary {
    pub fn from_bets(bets: &[Bet]) -> Self {
        let mut total = 0.0;
        let mut groups: HashMap<&str, f64> = HashMap::new();

        for bet in bets.iter().filter(|b| !b.is_pending()) {
            let amount = bet.signed_amount();
            total += amount;

            let name = match bet.opponent.trim() {
                "" => UNKNOWN_OPPONENT,
                name => name,
            };
            *groups.entry(name).or_insert(0.0) += amount;
        }

        let mut per_opponent: Vec<OpponentBalance> = groups
            .into_iter()
            .map(|(name, balance)| OpponentBalance {
                name: name.to_string(),
                balance,
            })
            .collect();
        per_opponent.sort_by(|a, b| locale_compare(&a.name, &b.name));

        Self {
            total,
            per_opponent,
        }
    }

    pub fn balance_for(&self, opponent: &str) -> Option<f64> {
        self.per_opponent
            .iter()
            .find(|o| o.name == opponent)
            .map(|o| o.balance)
    }
}

/// Approximates a default-locale collation: letters compare case-insensitively
/// first, then lowercase sorts before uppercase, then raw code points break
/// any remaining tie.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a.to_lowercase().cmp(&b.to_lowercase());
    if primary != Ordering::Equal {
        return primary;
    }
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    a.cmp(b)
}
