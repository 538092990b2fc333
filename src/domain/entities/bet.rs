use crate::domain::values::bet_date::normalize_date_input;
use crate::domain::values::number::parse_number_text;
use crate::domain::values::outcome::Outcome;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One tracked wager against an opponent.
///
/// `amount` is the wager magnitude; the balance contribution is derived from
/// `outcome` via [`Bet::signed_amount`] and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    pub week: u32,
    pub date: String,
    pub description: String,
    pub opponent: String,
    pub outcome: Outcome,
    pub amount: f64,
}

impl Bet {
    /// Coerce an arbitrary JSON value into a well-formed bet.
    ///
    /// Never fails. Missing or malformed fields fall back to their defaults:
    /// `0` for numbers, `""` for text, `pending` for the outcome. Dates given
    /// as `YYYY-MM-DD` are rewritten to `MM/DD/YYYY` without calendar checks;
    /// numeric dates are kept as their text.
    pub fn normalize(raw: &Value) -> Self {
        let week = coerce_number(field(raw, "week"));
        let week = if week >= 1.0 { week.trunc() as u32 } else { 0 };

        let outcome: Outcome = field(raw, "outcome")
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            week,
            date: normalize_date_input(&coerce_date_text(field(raw, "date"))),
            description: coerce_text(field(raw, "description")),
            opponent: coerce_text(field(raw, "opponent")),
            outcome,
            amount: coerce_number(field(raw, "amount")),
        }
    }

    pub fn signed_amount(&self) -> f64 {
        self.outcome.signed(self.amount)
    }

    pub fn is_pending(&self) -> bool {
        self.outcome == Outcome::Pending
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "week": self.week,
            "date": self.date,
            "description": self.description,
            "opponent": self.opponent,
            "outcome": self.outcome.as_str(),
            "amount": self.amount,
        })
    }
}

fn field<'a>(raw: &'a Value, name: &str) -> &'a Value {
    raw.get(name).unwrap_or(&Value::Null)
}

fn coerce_text(value: &Value) -> String {
    value.as_str().map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Numeric coercion with the usual loose rules for hand-edited JSON:
/// numeric strings parse, booleans count as 0/1, everything else
/// (and anything non-finite) is 0.
fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => parse_number_text(s).unwrap_or(0.0),
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Dates keep scalar input as text (`20240905` stays `"20240905"`). Zero,
/// `false` and structured values count as no date.
fn coerce_date_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(0), _, _) => String::new(),
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            (None, None, Some(f)) if f == 0.0 => String::new(),
            (None, None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            (None, None, Some(f)) => f.to_string(),
            _ => String::new(),
        },
        _ => String::new(),
    }
}
