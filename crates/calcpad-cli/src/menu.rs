use calcpad_calculator::{Calculator, Operation};
use std::fmt::Write as _;

pub const TITLE: &str = "Simple Calculator";
pub const CHOICE_PROMPT: &str = "Enter your choice (0-4): ";
pub const FIRST_OPERAND_PROMPT: &str = "Enter first number: ";
pub const SECOND_OPERAND_PROMPT: &str = "Enter second number: ";

pub const INVALID_CHOICE: &str = "Invalid choice. Please select 0-4.";
pub const INVALID_INPUT: &str = "Invalid input. Please enter valid numbers.";
pub const NOT_IMPLEMENTED: &str = "This operation is not yet implemented!";
pub const DIVISION_BY_ZERO: &str = "Error: Cannot divide by zero.";
pub const FAREWELL: &str = "Goodbye!";

/// A single, fully parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Operation(Operation),
}

impl MenuChoice {
    /// Parses a menu line; `None` for anything outside `0..=4`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            0 => Some(Self::Exit),
            n => Operation::from_menu_number(n).map(Self::Operation),
        }
    }
}

/// Renders the menu, marking disabled operations as coming soon.
pub fn render(calculator: &Calculator) -> String {
    let mut menu = format!("{TITLE}\n0. Exit\n");
    for operation in Operation::ALL {
        let _ = write!(menu, "{}. {}", operation.menu_number(), operation.label());
        if !calculator.is_enabled(operation) {
            menu.push_str(" (coming soon)");
        }
        menu.push('\n');
    }
    menu
}
