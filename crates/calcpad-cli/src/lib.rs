//! Command-line frontend for calcpad.
//!
//! A numbered menu loop: pick an operation, enter two numbers, read the
//! result. Line input goes through a [`Prompter`] so the loop can run against
//! a real terminal or a scripted transcript.

pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::MenuChoice;
pub use prompt::{LinePrompter, PromptError, Prompter, RustylinePrompter, ScriptedPrompter};
pub use session::Session;
