use calcpad_cli::menu::{
    CHOICE_PROMPT, DIVISION_BY_ZERO, FAREWELL, FIRST_OPERAND_PROMPT, INVALID_CHOICE,
    INVALID_INPUT, NOT_IMPLEMENTED, SECOND_OPERAND_PROMPT,
};
use calcpad_cli::{LinePrompter, ScriptedPrompter, Session};
use calcpad_calculator::{Calculator, Operation, OperationSet};
use std::io::{self, Cursor, Write};

fn run_with(calculator: Calculator, prompter: ScriptedPrompter) -> (ScriptedPrompter, String) {
    let mut session = Session::new(calculator, prompter, Vec::new());
    session.run().unwrap();
    let (prompter, out) = session.into_parts();
    (prompter, String::from_utf8(out).unwrap())
}

fn run(lines: &[&str]) -> (ScriptedPrompter, String) {
    run_with(Calculator::default(), ScriptedPrompter::new(lines.iter().copied()))
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn addition_prints_formatted_result() {
    let (prompter, out) = run(&["1", "4", "5", "0"]);
    assert!(out.contains("Result: 4.0 + 5.0 = 9.0\n"), "{out}");
    assert_eq!(
        prompter.prompts(),
        [CHOICE_PROMPT, FIRST_OPERAND_PROMPT, SECOND_OPERAND_PROMPT, CHOICE_PROMPT]
    );
    assert!(out.ends_with(&format!("{FAREWELL}\n")));
}

#[test]
fn subtraction_and_multiplication_use_their_symbols() {
    let (_, out) = run(&["2", "10", "2.5", "3", "6", "7", "0"]);
    assert!(out.contains("Result: 10.0 - 2.5 = 7.5\n"), "{out}");
    assert!(out.contains("Result: 6.0 × 7.0 = 42.0\n"), "{out}");
}

#[test]
fn non_numeric_operand_reports_and_returns_to_menu() {
    let (prompter, out) = run(&["1", "abc", "1", "2", "3", "0"]);
    assert_eq!(count(&out, INVALID_INPUT), 1);
    assert!(out.contains("Result: 2.0 + 3.0 = 5.0"), "{out}");
    assert_eq!(
        prompter.prompts(),
        [
            CHOICE_PROMPT,
            FIRST_OPERAND_PROMPT,
            CHOICE_PROMPT,
            FIRST_OPERAND_PROMPT,
            SECOND_OPERAND_PROMPT,
            CHOICE_PROMPT,
        ]
    );
}

#[test]
fn bad_second_operand_is_rejected_too() {
    let (_, out) = run(&["3", "2", "two", "0"]);
    assert_eq!(count(&out, INVALID_INPUT), 1);
    assert!(!out.contains("Result:"));
}

#[test]
fn disabled_operation_skips_operand_prompts() {
    let (prompter, out) = run(&["4", "0"]);
    assert_eq!(count(&out, NOT_IMPLEMENTED), 1);
    assert_eq!(prompter.prompts(), [CHOICE_PROMPT, CHOICE_PROMPT]);
    assert!(out.contains("4. Divide (coming soon)"));
}

#[test]
fn each_invalid_choice_prints_exactly_one_message() {
    let (_, out) = run(&["9", "1", "1", "1", "0"]);
    assert_eq!(count(&out, INVALID_CHOICE), 1);
    assert_eq!(count(&out, NOT_IMPLEMENTED), 0);
    assert!(out.contains("Result: 1.0 + 1.0 = 2.0"));

    let (_, out) = run(&["x", "", "0"]);
    assert_eq!(count(&out, INVALID_CHOICE), 2);
}

#[test]
fn valid_choice_never_prints_invalid_message() {
    let (_, out) = run(&["1", "1", "2", "2", "5", "3", "3", "2", "2", "0"]);
    assert_eq!(count(&out, INVALID_CHOICE), 0);
    assert_eq!(count(&out, "Result:"), 3);
}

#[test]
fn division_when_enabled() {
    let calculator = Calculator::new(OperationSet::all());
    let (_, out) = run_with(calculator, ScriptedPrompter::new(["4", "7", "2", "4", "1", "0", "0"]));
    assert!(out.contains("Result: 7.0 ÷ 2.0 = 3.5"), "{out}");
    assert_eq!(count(&out, DIVISION_BY_ZERO), 1);
}

#[test]
fn interrupt_says_goodbye_and_ends_cleanly() {
    let prompter = ScriptedPrompter::new(["1", "4"]).then_interrupt();
    let (prompter, out) = run_with(Calculator::default(), prompter);
    assert_eq!(prompter.prompts(), [CHOICE_PROMPT, FIRST_OPERAND_PROMPT, SECOND_OPERAND_PROMPT]);
    assert!(!out.contains("Result:"));
    assert!(out.ends_with(&format!("{FAREWELL}\n")));
}

#[test]
fn end_of_input_at_menu_says_goodbye() {
    let (_, out) = run(&[]);
    assert_eq!(count(&out, FAREWELL), 1);
}

#[test]
fn restricted_build_lists_coming_soon_entries() {
    let calculator = Calculator::new(OperationSet::of(&[Operation::Add, Operation::Subtract]));
    let (_, out) = run_with(calculator, ScriptedPrompter::new(["3", "0"]));
    assert!(out.contains("3. Multiply (coming soon)"));
    assert_eq!(count(&out, NOT_IMPLEMENTED), 1);
}

#[test]
fn piped_input_still_shows_every_prompt() {
    let prompter = LinePrompter::new(Cursor::new("1\n4\n5\n0\n"), Vec::new());
    let mut session = Session::new(Calculator::default(), prompter, Vec::new());
    session.run().unwrap();
    let (prompter, out) = session.into_parts();

    let prompts = String::from_utf8(prompter.into_writer()).unwrap();
    assert_eq!(
        prompts,
        format!("{CHOICE_PROMPT}{FIRST_OPERAND_PROMPT}{SECOND_OPERAND_PROMPT}{CHOICE_PROMPT}")
    );
    assert!(String::from_utf8(out).unwrap().contains("Result: 4.0 + 5.0 = 9.0\n"));
}

struct FailingOutput(io::ErrorKind);

impl Write for FailingOutput {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(self.0.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn closed_output_ends_the_session_cleanly() {
    let prompter = ScriptedPrompter::new(["1", "4", "5", "0"]);
    let out = FailingOutput(io::ErrorKind::BrokenPipe);
    assert!(Session::new(Calculator::default(), prompter, out).run().is_ok());

    let prompter = ScriptedPrompter::new(["0"]);
    let out = FailingOutput(io::ErrorKind::PermissionDenied);
    assert!(Session::new(Calculator::default(), prompter, out).run().is_err());
}
