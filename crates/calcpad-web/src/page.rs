use crate::keypad::KeypadState;
use askama::Template;
use calcpad_calculator::{Calculator, Operation, format_number};

const DIGIT_ROWS: [&[char]; 4] =
    [&['7', '8', '9'], &['4', '5', '6'], &['1', '2', '3'], &['0', '.']];
const DISABLED_COLOR: &str = "#cccccc";

pub struct OperationButton {
    pub name: &'static str,
    pub symbol: &'static str,
    pub enabled: bool,
    pub color: &'static str,
}

impl OperationButton {
    fn new(operation: Operation, calculator: &Calculator) -> Self {
        let enabled = calculator.is_enabled(operation);
        let color = match operation {
            _ if !enabled => DISABLED_COLOR,
            Operation::Add => "#4CAF50",
            Operation::Subtract => "#FF9800",
            Operation::Multiply => "#9C27B0",
            Operation::Divide => "#3F51B5",
        };
        Self { name: operation.name(), symbol: operation.symbol(), enabled, color }
    }
}

/// The keypad page, carrying its state in hidden form fields.
#[derive(Template)]
#[template(path = "keypad.html")]
pub struct KeypadPage {
    pub display: String,
    /// Round-trippable first operand, empty when none is pending.
    pub first_operand: String,
    /// Pending operation identifier, empty when none.
    pub operation: String,
    /// e.g. `12.0 +`, shown above the display.
    pub pending: String,
    pub digit_rows: Vec<Vec<char>>,
    pub operations: Vec<OperationButton>,
    pub status: String,
}

impl KeypadPage {
    pub fn new(state: &KeypadState, calculator: &Calculator) -> Self {
        let pending = match (state.first_operand, state.operation) {
            (Some(first), Some(operation)) => {
                format!("{} {}", format_number(first), operation.symbol())
            }
            _ => String::new(),
        };
        Self {
            display: state.display.clone(),
            first_operand: state.first_operand.map(|v| v.to_string()).unwrap_or_default(),
            operation: state.operation.map(|op| op.name().to_string()).unwrap_or_default(),
            pending,
            digit_rows: DIGIT_ROWS.iter().map(|row| row.to_vec()).collect(),
            operations: Operation::ALL
                .into_iter()
                .map(|operation| OperationButton::new(operation, calculator))
                .collect(),
            status: calculator.status_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcpad_calculator::OperationSet;

    #[test]
    fn renders_disabled_operations_as_inert_buttons() {
        let calculator = Calculator::new(OperationSet::of(&[Operation::Add, Operation::Subtract]));
        let html = KeypadPage::new(&KeypadState::default(), &calculator).render().unwrap();

        assert!(html.contains(r#"<output id="display">0</output>"#), "{html}");
        assert!(html.contains(r#"value="add""#));
        assert!(html.contains(r#"value="subtract""#));
        assert!(!html.contains(r#"value="multiply""#));
        assert!(!html.contains(r#"value="divide""#));
        assert_eq!(html.matches(" disabled>").count(), 2);
        assert!(html.contains("Currently supports: Addition and Subtraction"));
    }

    #[test]
    fn pending_state_is_carried_in_hidden_fields() {
        let state = KeypadState {
            display: "3".to_string(),
            first_operand: Some(7.0),
            operation: Some(Operation::Add),
        };
        let html = KeypadPage::new(&state, &Calculator::default()).render().unwrap();

        assert!(html.contains(r#"<input type="hidden" name="display" value="3">"#), "{html}");
        assert!(html.contains(r#"<input type="hidden" name="first" value="7">"#));
        assert!(html.contains(r#"<input type="hidden" name="op" value="add">"#));
        assert!(html.contains("7.0 +"));
    }

    #[test]
    fn idle_state_omits_pending_fields() {
        let page = KeypadPage::new(&KeypadState::default(), &Calculator::default());
        let html = page.render().unwrap();
        assert!(!html.contains(r#"name="first""#));
        assert!(!html.contains(r#"name="op""#));
    }
}
