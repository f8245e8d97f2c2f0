use crate::error::ApiError;
use crate::keypad::{INITIAL_DISPLAY, Key, KeypadState, UnknownKey};
use crate::page::KeypadPage;
use axum::{
    Json,
    extract::{Query, State},
};
use calcpad_calculator::{
    CalcError, CalculationRequest, Calculator, Operand, Operation, format_number,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub async fn index(State(calculator): State<Calculator>) -> KeypadPage {
    KeypadPage::new(&KeypadState::default(), &calculator)
}

/// Query string sent by every keypad button: the current state plus the key.
#[derive(Debug, Deserialize)]
pub struct PressQuery {
    pub key: String,
    pub display: Option<String>,
    pub first: Option<String>,
    pub op: Option<String>,
}

impl PressQuery {
    /// Missing or unreadable pending fields count as nothing pending, and so
    /// does a pending operation this calculator has disabled.
    fn state(&self, calculator: &Calculator) -> KeypadState {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
        let operation = non_empty(&self.op)
            .and_then(|v| v.parse::<Operation>().ok())
            .filter(|op| calculator.is_enabled(*op));
        KeypadState {
            display: non_empty(&self.display).unwrap_or_else(|| INITIAL_DISPLAY.to_string()),
            first_operand: operation.and(non_empty(&self.first)).and_then(|v| v.parse().ok()),
            operation,
        }
    }

    fn key(&self) -> Result<Key, UnknownKey> {
        // A bare `+` in a query string decodes to a space.
        match self.key.as_str() {
            " " => Ok(Key::Operation(Operation::Add)),
            other => other.parse(),
        }
    }
}

pub async fn press(
    State(calculator): State<Calculator>,
    Query(query): Query<PressQuery>,
) -> Result<KeypadPage, ApiError> {
    let key = query.key()?;
    let next = query.state(&calculator).press(key, &calculator);
    debug!(?key, display = %next.display, "key pressed");
    Ok(KeypadPage::new(&next, &calculator))
}

/// An operand given either as a JSON number or as text to be parsed.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OperandValue {
    Number(f64),
    Text(String),
}

impl TryFrom<OperandValue> for Operand {
    type Error = CalcError;

    fn try_from(value: OperandValue) -> Result<Self, Self::Error> {
        match value {
            OperandValue::Number(n) => Ok(Operand::new(n)),
            OperandValue::Text(text) => text.parse(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CalculateBody {
    pub a: OperandValue,
    pub b: OperandValue,
    pub operation: Operation,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// `null` when the result is not finite.
    pub result: f64,
    pub display: String,
    pub expression: String,
}

pub async fn calculate(
    State(calculator): State<Calculator>,
    Json(body): Json<CalculateBody>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let first = Operand::try_from(body.a)?;
    let second = Operand::try_from(body.b)?;
    let request = CalculationRequest::new(first, second, body.operation);
    let result = calculator.evaluate(request)?;
    Ok(Json(CalculateResponse {
        result,
        display: format_number(result),
        expression: request.to_string(),
    }))
}
