//! Calcpad Types
//!
//! This crate defines the data model shared by the calcpad evaluator and its
//! frontends: operands, the closed set of arithmetic operations, the enabled
//! subset of a build, the per-calculation request and the error taxonomy.

#![deny(clippy::all)]
#![deny(missing_docs)]

mod error;
mod format;
mod operand;
mod operation;
mod request;

pub use error::CalcError;
pub use format::format_number;
pub use operand::Operand;
pub use operation::{Operation, OperationSet, ParseOperationError};
pub use request::CalculationRequest;
