//! Division of two operands.

use calcpad_types::CalcError;

/// Returns `a / b`.
///
/// # Errors
/// [`CalcError::DivisionByZero`] when `b` is zero (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
