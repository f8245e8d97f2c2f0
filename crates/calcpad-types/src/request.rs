use crate::{CalcError, Operand, Operation};
use std::fmt;

/// An ephemeral `(first, second, operation)` triple, built for one
/// calculation and consumed by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    /// Left-hand operand.
    pub first: Operand,
    /// Right-hand operand.
    pub second: Operand,
    /// Selected operation.
    pub operation: Operation,
}

impl CalculationRequest {
    /// Creates a request from already-parsed operands.
    pub fn new(
        first: impl Into<Operand>,
        second: impl Into<Operand>,
        operation: Operation,
    ) -> Self {
        Self { first: first.into(), second: second.into(), operation }
    }

    /// Parses both operands from user text.
    pub fn parse(first: &str, second: &str, operation: Operation) -> Result<Self, CalcError> {
        Ok(Self { first: first.parse()?, second: second.parse()?, operation })
    }
}

/// Renders as `<a> <symbol> <b>`, e.g. `4.0 + 5.0`.
impl fmt::Display for CalculationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.operation.symbol(), self.second)
    }
}
