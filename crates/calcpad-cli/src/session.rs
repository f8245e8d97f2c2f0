use crate::menu::{self, MenuChoice};
use crate::prompt::{PromptError, Prompter};
use anyhow::Result;
use calcpad_calculator::{
    CalcError, CalculationRequest, Calculator, Operand, Operation, format_number,
};
use std::io::{self, Write};
use tracing::{debug, info};

enum Flow {
    Continue,
    Quit,
}

enum OperandInput {
    Value(Operand),
    Rejected,
    Closed,
}

/// One interactive run of the menu loop.
///
/// Calculation errors are printed and the loop carries on; only exit (`0`),
/// Ctrl-C, end of input, or a broken terminal end the session.
pub struct Session<P, W> {
    calculator: Calculator,
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> Session<P, W> {
    pub fn new(calculator: Calculator, prompter: P, out: W) -> Self {
        Self { calculator, prompter, out }
    }

    /// Runs until exit. Output closing under the session (`| head`) also
    /// ends it cleanly.
    pub fn run(&mut self) -> Result<()> {
        match self.run_loop() {
            Err(err) if is_broken_pipe(&err) => {
                debug!("output closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    pub fn into_parts(self) -> (P, W) {
        (self.prompter, self.out)
    }

    fn run_loop(&mut self) -> Result<()> {
        info!(enabled = ?self.calculator.enabled(), "calculator session started");
        loop {
            writeln!(self.out)?;
            write!(self.out, "{}", menu::render(&self.calculator))?;
            self.out.flush()?;

            let Some(line) = self.read(menu::CHOICE_PROMPT)? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                None => {
                    debug!(input = %line.trim(), "invalid menu choice");
                    writeln!(self.out, "{}", menu::INVALID_CHOICE)?;
                    Flow::Continue
                }
                Some(MenuChoice::Exit) => Flow::Quit,
                Some(MenuChoice::Operation(operation)) => {
                    if self.calculator.is_enabled(operation) {
                        self.calculate(operation)?
                    } else {
                        writeln!(self.out, "{}", menu::NOT_IMPLEMENTED)?;
                        Flow::Continue
                    }
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(self.out, "{}", menu::FAREWELL)?;
        self.out.flush()?;
        info!("calculator session ended");
        Ok(())
    }

    fn calculate(&mut self, operation: Operation) -> Result<Flow> {
        let first = match self.read_operand(menu::FIRST_OPERAND_PROMPT)? {
            OperandInput::Value(operand) => operand,
            OperandInput::Rejected => return Ok(Flow::Continue),
            OperandInput::Closed => return Ok(Flow::Quit),
        };
        let second = match self.read_operand(menu::SECOND_OPERAND_PROMPT)? {
            OperandInput::Value(operand) => operand,
            OperandInput::Rejected => return Ok(Flow::Continue),
            OperandInput::Closed => return Ok(Flow::Quit),
        };

        let request = CalculationRequest::new(first, second, operation);
        match self.calculator.evaluate(request) {
            Ok(result) => writeln!(self.out, "Result: {request} = {}", format_number(result))?,
            Err(CalcError::DivisionByZero) => writeln!(self.out, "{}", menu::DIVISION_BY_ZERO)?,
            Err(err) => writeln!(self.out, "Error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn read_operand(&mut self, prompt: &str) -> Result<OperandInput> {
        let Some(line) = self.read(prompt)? else {
            return Ok(OperandInput::Closed);
        };
        match line.parse::<Operand>() {
            Ok(operand) => Ok(OperandInput::Value(operand)),
            Err(err) => {
                debug!(%err, "rejected operand");
                writeln!(self.out, "{}", menu::INVALID_INPUT)?;
                Ok(OperandInput::Rejected)
            }
        }
    }

    /// `None` on Ctrl-C or end of input.
    fn read(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.prompter.read_line(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(PromptError::Interrupted) => {
                debug!("interrupted at prompt");
                writeln!(self.out)?;
                Ok(None)
            }
            Err(PromptError::Eof) => {
                writeln!(self.out)?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}
