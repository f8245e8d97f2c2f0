use crate::{CalcError, format_number};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two numeric inputs of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(f64);

impl Operand {
    /// Wraps a raw value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw value.
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Operand> for f64 {
    fn from(operand: Operand) -> Self {
        operand.0
    }
}

impl FromStr for Operand {
    type Err = CalcError;

    /// Parses user text, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|_| CalcError::InvalidOperand { input: s.to_string() })
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.0))
    }
}
