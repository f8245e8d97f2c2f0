/// Returns `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}
