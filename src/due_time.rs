//! Payment timing within a period

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FinancialError;

/// When payments are due
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDueTime {
    /// Payments due at the beginning of a period (1)
    Begin,
    /// Payments due at the end of a period (0)
    #[default]
    End,
}

impl PaymentDueTime {
    /// Multiplier `w` used in the annuity equation
    pub fn multiplier(self) -> f64 {
        match self {
            PaymentDueTime::Begin => 1.0,
            PaymentDueTime::End => 0.0,
        }
    }

    pub fn is_begin(self) -> bool {
        matches!(self, PaymentDueTime::Begin)
    }
}

impl fmt::Display for PaymentDueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentDueTime::Begin => f.write_str("begin"),
            PaymentDueTime::End => f.write_str("end"),
        }
    }
}

impl FromStr for PaymentDueTime {
    type Err = FinancialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "begin" | "1" => Ok(PaymentDueTime::Begin),
            "end" | "0" => Ok(PaymentDueTime::End),
            _ => Err(FinancialError::InvalidDueTime(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_end() {
        assert_eq!(PaymentDueTime::default(), PaymentDueTime::End);
        assert_eq!(PaymentDueTime::default().multiplier(), 0.0);
        assert_eq!(PaymentDueTime::Begin.multiplier(), 1.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("begin".parse::<PaymentDueTime>().unwrap(), PaymentDueTime::Begin);
        assert_eq!("END".parse::<PaymentDueTime>().unwrap(), PaymentDueTime::End);
        assert_eq!("1".parse::<PaymentDueTime>().unwrap(), PaymentDueTime::Begin);
        assert_eq!(" 0 ".parse::<PaymentDueTime>().unwrap(), PaymentDueTime::End);

        let err = "middle".parse::<PaymentDueTime>().unwrap_err();
        assert!(matches!(err, FinancialError::InvalidDueTime(ref s) if s == "middle"));
    }

    #[test]
    fn test_display_matches_parse() {
        for when in [PaymentDueTime::Begin, PaymentDueTime::End] {
            assert_eq!(when.to_string().parse::<PaymentDueTime>().unwrap(), when);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&PaymentDueTime::Begin).unwrap();
        assert_eq!(json, "\"begin\"");

        let when: PaymentDueTime = serde_json::from_str("\"end\"").unwrap();
        assert_eq!(when, PaymentDueTime::End);
    }
}
