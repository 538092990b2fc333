//! Entry-point validation for new bets and inline edits.
//!
//! Unlike [`Bet::normalize`](crate::domain::entities::bet::Bet::normalize),
//! which silently coerces, these reject bad input with a message naming the
//! offending field and leave the ledger untouched.

use crate::domain::error::DomainError;
use crate::domain::values::bet_date::{is_valid_mm_dd_yyyy, normalize_date_input};
use crate::domain::values::number::parse_number_text;
use crate::domain::values::outcome::Outcome;
use serde_json::{json, Value};

/// A new bet as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct BetInput {
    pub week: String,
    pub date: String,
    pub description: String,
    pub opponent: String,
    pub outcome: String,
    pub amount: String,
}

impl BetInput {
    /// Validate field by field, in form order. The wager is stored as a
    /// magnitude; its sign comes from the outcome.
    pub fn validate(&self) -> Result<Value, DomainError> {
        let week = parse_number_text(&self.week)
            .filter(|w| w.fract() == 0.0 && *w > 0.0)
            .ok_or_else(|| {
                invalid("Please enter a valid football week (positive whole number).")
            })?;

        let date = normalize_date_input(&self.date);
        if !is_valid_mm_dd_yyyy(&date) {
            return Err(invalid("Please enter a valid date in MM/DD/YYYY format."));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(invalid("Please enter a description."));
        }

        let opponent = self.opponent.trim();
        if opponent.is_empty() {
            return Err(invalid("Please enter an opponent name."));
        }

        let outcome: Outcome = self
            .outcome
            .parse()
            .map_err(|_| invalid("Please choose a valid outcome."))?;

        let amount = parse_number_text(&self.amount).ok_or_else(|| {
            invalid(
                "Please enter a valid amount \
                 (just the wager size; sign will be determined by outcome).",
            )
        })?;

        Ok(json!({
            "week": week,
            "date": date,
            "description": description,
            "opponent": opponent,
            "outcome": outcome.as_str(),
            "amount": amount.abs(),
        }))
    }
}

/// An inline edit of an existing bet. Only outcome and amount are editable.
#[derive(Debug, Clone)]
pub struct BetEdit {
    pub outcome: String,
    pub amount: String,
}

impl BetEdit {
    /// Produce the patch to merge over the stored bet.
    pub fn validate(&self) -> Result<Value, DomainError> {
        let amount = parse_number_text(&self.amount)
            .ok_or_else(|| invalid("Please enter a valid amount."))?;
        let outcome: Outcome = self
            .outcome
            .parse()
            .map_err(|_| invalid("Please choose a valid outcome."))?;
        Ok(json!({ "outcome": outcome.as_str(), "amount": amount.abs() }))
    }
}

fn invalid(msg: &str) -> DomainError {
    DomainError::InvalidInput(msg.to_string())
}
