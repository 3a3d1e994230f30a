// src/money.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type AmountValue = f64;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount {
    value: AmountValue,
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Amount::from_str(&text)
            .map_err(serde::de::Error::custom)
    }
}

impl Amount {
    pub fn new(value: AmountValue) -> Self {
        Amount { value }
    }

    pub fn value(&self) -> AmountValue {
        self.value
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole amounts keep one decimal so the bid log reads "$100.0"
        if self.value.fract() == 0.0 {
            write!(f, "${:.1}", self.value)
        } else {
            write!(f, "${}", self.value)
        }
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let text = text.strip_prefix('$').unwrap_or(text);

        let value = text.parse::<AmountValue>()
            .map_err(|_| MoneyError::InvalidAmount(s.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyError::InvalidAmount(s.to_string()));
        }

        Ok(Amount { value })
    }
}
