use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    #[default]
    Pending,
}

impl Outcome {
    /// Apply the outcome's sign to a wager magnitude. Pending bets carry no balance.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            Outcome::Win => amount,
            Outcome::Loss => -amount,
            Outcome::Pending => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Pending => "pending",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Exact match only: "Win" or " win" are not outcomes.
impl FromStr for Outcome {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Outcome::Win),
            "loss" => Ok(Outcome::Loss),
            "pending" => Ok(Outcome::Pending),
            _ => Err(format!("Unknown outcome: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_amounts() {
        assert_eq!(Outcome::Win.signed(10.0), 10.0);
        assert_eq!(Outcome::Loss.signed(10.0), -10.0);
        assert_eq!(Outcome::Pending.signed(10.0), 0.0);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("loss".parse::<Outcome>(), Ok(Outcome::Loss));
        assert!("Win".parse::<Outcome>().is_err());
        assert!(" win".parse::<Outcome>().is_err());
        assert!("push".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Outcome::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
