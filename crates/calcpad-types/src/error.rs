use crate::Operation;
use thiserror::Error;

/// Everything that can go wrong with a single calculation.
///
/// None of these is fatal: frontends catch them at their boundary and render
/// a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Operand text did not parse as a number.
    #[error("invalid operand: {input:?} is not a number")]
    InvalidOperand {
        /// The text that failed to parse.
        input: String,
    },

    /// The operation is not enabled in this build.
    #[error("operation '{0}' is not yet implemented")]
    UnsupportedOperation(Operation),

    /// Division with a zero divisor.
    #[error("cannot divide by zero")]
    DivisionByZero,
}

impl CalcError {
    /// Short category used as a structured logging field.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidOperand { .. } => "invalid_operand",
            Self::UnsupportedOperation(_) => "unsupported_operation",
            Self::DivisionByZero => "division_by_zero",
        }
    }

    /// Stable machine-readable code for API responses.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidOperand { .. } => "INVALID_OPERAND",
            Self::UnsupportedOperation(_) => "UNSUPPORTED_OPERATION",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}
