use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of binary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, failing on a zero divisor
    Divide,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Identifier used in configuration files, URLs and JSON payloads.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Label shown next to the menu number.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    /// Noun used in status lines ("Currently supports: Addition and Subtraction").
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
        }
    }

    /// Display symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Number of this operation in the CLI menu (`0` is reserved for exit).
    pub const fn menu_number(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Subtract => 2,
            Self::Multiply => 3,
            Self::Divide => 4,
        }
    }

    /// Inverse of [`Operation::menu_number`].
    pub const fn from_menu_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Add),
            2 => Some(Self::Subtract),
            3 => Some(Self::Multiply),
            4 => Some(Self::Divide),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << (self.menu_number() - 1)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an operation identifier is not one of `add`, `subtract`,
/// `multiply` or `divide`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation '{input}', expected one of: add, subtract, multiply, divide")]
pub struct ParseOperationError {
    /// The rejected identifier.
    pub input: String,
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(wanted) || op.symbol() == wanted)
            .ok_or_else(|| ParseOperationError { input: s.to_string() })
    }
}

/// The subset of operations enabled in a build or variant.
///
/// Serialized as a list of operation identifiers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Operation>", into = "Vec<Operation>")]
pub struct OperationSet(u8);

impl OperationSet {
    /// No operation enabled.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All four operations enabled.
    pub const fn all() -> Self {
        Self(0b1111)
    }

    /// Builds a set from a fixed list, usable in `const` context.
    pub const fn of(operations: &[Operation]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < operations.len() {
            bits |= operations[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Whether `operation` is enabled.
    pub const fn contains(self, operation: Operation) -> bool {
        self.0 & operation.bit() != 0
    }

    /// Enables `operation`.
    pub fn insert(&mut self, operation: Operation) {
        self.0 |= operation.bit();
    }

    /// Returns a copy with `operation` enabled.
    #[must_use]
    pub const fn with(self, operation: Operation) -> Self {
        Self(self.0 | operation.bit())
    }

    /// Whether no operation is enabled.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of enabled operations.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Enabled operations in menu order.
    pub fn iter(self) -> impl Iterator<Item = Operation> {
        Operation::ALL.into_iter().filter(move |op| self.contains(*op))
    }
}

impl fmt::Debug for OperationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Operation> for OperationSet {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        let mut set = Self::empty();
        for operation in iter {
            set.insert(operation);
        }
        set
    }
}

impl From<Vec<Operation>> for OperationSet {
    fn from(operations: Vec<Operation>) -> Self {
        operations.into_iter().collect()
    }
}

impl From<OperationSet> for Vec<Operation> {
    fn from(set: OperationSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_round_trip_and_reject_out_of_range() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_menu_number(op.menu_number()), Some(op));
        }
        assert_eq!(Operation::from_menu_number(0), None);
        assert_eq!(Operation::from_menu_number(5), None);
    }

    #[test]
    fn parses_names_and_symbols() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!(" Multiply ".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("÷".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!("-".parse::<Operation>(), Ok(Operation::Subtract));
        assert!("modulo".parse::<Operation>().is_err());
    }

    #[test]
    fn set_iterates_in_menu_order() {
        let set: OperationSet = [Operation::Multiply, Operation::Add].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Operation::Add, Operation::Multiply]);
        assert_eq!(set.len(), 2);
        assert!(!set.contains(Operation::Divide));
        assert!(set.with(Operation::Divide).contains(Operation::Divide));
    }

    #[test]
    fn const_constructor_matches_collect() {
        const BASIC: OperationSet = OperationSet::of(&[Operation::Add, Operation::Subtract]);
        let collected: OperationSet = vec![Operation::Subtract, Operation::Add].into();
        assert_eq!(BASIC, collected);
        assert!(OperationSet::empty().is_empty());
        assert_eq!(OperationSet::all().len(), 4);
    }
}
