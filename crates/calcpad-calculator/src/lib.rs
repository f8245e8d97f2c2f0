//! The arithmetic evaluator behind every calcpad frontend.
//!
//! This crate provides the built-in operations, the dispatch table mapping an
//! [`Operation`] to its function, the [`Calculator`] that enforces the enabled
//! subset of a build, and the configuration shared by the frontends.

pub mod built_in;
pub mod calculator;
pub mod config;

pub use calcpad_types::{
    CalcError, CalculationRequest, Operand, Operation, OperationSet, format_number,
};
pub use calculator::{Calculator, DEFAULT_ENABLED};
pub use config::{CalcpadConfig, ConfigError, OperationsConfig, WebConfig};
