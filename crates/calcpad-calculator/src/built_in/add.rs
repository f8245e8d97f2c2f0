//! Addition of two operands.

/// Returns `a + b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}
