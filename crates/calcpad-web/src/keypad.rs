//! Keypad interaction state.
//!
//! The keypad holds no mutable globals: each key press consumes the current
//! [`KeypadState`] and returns the next one.

use calcpad_calculator::{CalculationRequest, Calculator, Operand, Operation, format_number};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const INITIAL_DISPLAY: &str = "0";
pub const ERROR_DISPLAY: &str = "Error";

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `0`-`9` or `.`
    Digit(char),
    Operation(Operation),
    Equals,
    Clear,
}

impl Key {
    pub fn is_digit_char(c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown key '{0}'")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if Self::is_digit_char(c) {
                return Ok(Self::Digit(c));
            }
        }
        match s {
            "=" | "equals" => Ok(Self::Equals),
            "C" | "clear" => Ok(Self::Clear),
            other => other.parse().map(Self::Operation).map_err(|_| UnknownKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeypadState {
    pub display: String,
    pub first_operand: Option<f64>,
    pub operation: Option<Operation>,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self { display: INITIAL_DISPLAY.to_string(), first_operand: None, operation: None }
    }
}

impl KeypadState {
    /// Applies one key press.
    ///
    /// Disabled operations are inert, as is `=` with nothing pending.
    #[must_use]
    pub fn press(self, key: Key, calculator: &Calculator) -> Self {
        match key {
            Key::Digit(c) => self.append_digit(c),
            Key::Operation(operation) if calculator.is_enabled(operation) => {
                self.select_operation(operation)
            }
            Key::Operation(operation) => {
                debug!(%operation, "ignoring disabled operation key");
                self
            }
            Key::Equals => self.equals(calculator),
            Key::Clear => Self::default(),
        }
    }

    fn append_digit(self, c: char) -> Self {
        if !Key::is_digit_char(c) {
            return self;
        }
        let display = if self.display == INITIAL_DISPLAY || self.display == ERROR_DISPLAY {
            c.to_string()
        } else {
            format!("{}{c}", self.display)
        };
        Self { display, ..self }
    }

    fn select_operation(self, operation: Operation) -> Self {
        match self.display.parse::<Operand>() {
            Ok(first) => Self {
                display: INITIAL_DISPLAY.to_string(),
                first_operand: Some(first.value()),
                operation: Some(operation),
            },
            Err(err) => {
                debug!(%err, "display is not a number");
                Self { display: ERROR_DISPLAY.to_string(), ..self }
            }
        }
    }

    fn equals(self, calculator: &Calculator) -> Self {
        let (Some(first), Some(operation)) = (self.first_operand, self.operation) else {
            return self;
        };
        let second = match self.display.parse::<Operand>() {
            Ok(second) => second,
            // Pending operand and operation survive so the user can retype.
            Err(_) => return Self { display: ERROR_DISPLAY.to_string(), ..self },
        };

        let display = match calculator.evaluate(CalculationRequest::new(first, second, operation)) {
            Ok(result) => format_number(result),
            Err(_) => ERROR_DISPLAY.to_string(),
        };
        Self { display, first_operand: None, operation: None }
    }
}
