use crate::built_in::evaluator_for;
use crate::config::CalcpadConfig;
use calcpad_types::{CalcError, CalculationRequest, Operation, OperationSet};
use tracing::{debug, warn};

/// Operations enabled when nothing else is configured. Divide is declared and
/// implemented but ships as a "coming soon" placeholder.
pub const DEFAULT_ENABLED: OperationSet =
    OperationSet::of(&[Operation::Add, Operation::Subtract, Operation::Multiply]);

/// Evaluates calculation requests against the enabled subset of operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    enabled: OperationSet,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DEFAULT_ENABLED)
    }
}

impl Calculator {
    pub fn new(enabled: OperationSet) -> Self {
        Self { enabled }
    }

    pub fn from_config(config: &CalcpadConfig) -> Self {
        Self::new(config.operations.enabled)
    }

    pub fn enabled(&self) -> OperationSet {
        self.enabled
    }

    pub fn is_enabled(&self, operation: Operation) -> bool {
        self.enabled.contains(operation)
    }

    /// Applies the request's operation to its operands.
    ///
    /// Fails with [`CalcError::UnsupportedOperation`] when the operation is not
    /// enabled, or with whatever the operation itself reports.
    pub fn evaluate(&self, request: CalculationRequest) -> Result<f64, CalcError> {
        let CalculationRequest { first, second, operation } = request;

        if !self.is_enabled(operation) {
            let err = CalcError::UnsupportedOperation(operation);
            warn!(category = err.category(), %operation, "operation is disabled");
            return Err(err);
        }

        let result = evaluator_for(operation)(first.value(), second.value());
        match &result {
            Ok(value) => debug!(
                %operation,
                first = first.value(),
                second = second.value(),
                result = value,
                "evaluated"
            ),
            Err(err) => warn!(category = err.category(), %operation, %err, "calculation failed"),
        }
        result
    }

    /// Human-readable summary of the enabled operations, e.g.
    /// `Currently supports: Addition and Subtraction`.
    pub fn status_line(&self) -> String {
        let nouns: Vec<&str> = self.enabled.iter().map(Operation::noun).collect();
        let list = match nouns.as_slice() {
            [] => return "No operations are currently available".to_string(),
            [only] => (*only).to_string(),
            [init @ .., last] => format!("{} and {last}", init.join(", ")),
        };
        format!("Currently supports: {list}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_leaves_divide_as_placeholder() {
        let calculator = Calculator::default();
        assert!(calculator.is_enabled(Operation::Multiply));
        assert!(!calculator.is_enabled(Operation::Divide));
    }

    #[test]
    fn disabled_operation_is_rejected_before_evaluation() {
        let calculator = Calculator::new(OperationSet::of(&[Operation::Add]));
        let request = CalculationRequest::new(1.0, 0.0, Operation::Divide);
        assert_eq!(
            calculator.evaluate(request),
            Err(CalcError::UnsupportedOperation(Operation::Divide))
        );
    }

    #[test]
    fn status_line_lists_enabled_operations() {
        let basic = Calculator::new(OperationSet::of(&[Operation::Add, Operation::Subtract]));
        assert_eq!(basic.status_line(), "Currently supports: Addition and Subtraction");

        assert_eq!(
            Calculator::default().status_line(),
            "Currently supports: Addition, Subtraction and Multiplication"
        );
        assert_eq!(
            Calculator::new(OperationSet::of(&[Operation::Divide])).status_line(),
            "Currently supports: Division"
        );
        assert_eq!(
            Calculator::new(OperationSet::empty()).status_line(),
            "No operations are currently available"
        );
    }
}
