//! Built-in operations and the table that dispatches to them.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;

use calcpad_types::{CalcError, Operation};

pub use add::add;
pub use divide::divide;
pub use multiply::multiply;
pub use subtract::subtract;

/// Signature shared by every entry of the dispatch table.
pub type EvaluatorFn = fn(f64, f64) -> Result<f64, CalcError>;

/// Looks up the function implementing `operation`.
pub fn evaluator_for(operation: Operation) -> EvaluatorFn {
    match operation {
        Operation::Add => |a, b| Ok(add(a, b)),
        Operation::Subtract => |a, b| Ok(subtract(a, b)),
        Operation::Multiply => |a, b| Ok(multiply(a, b)),
        Operation::Divide => divide,
    }
}
