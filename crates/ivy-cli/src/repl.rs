//! Interactive read-eval-print loop.
//!
//! `spec.md` §6: prompt `"> "`, each line treated as a complete program; a
//! non-`Null` result that isn't an assignment or function declaration is
//! printed as `=> <display>`; errors go to stderr and the prompt resumes.

use ivy_eval::Evaluator;
use ivy_par::Parser;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

pub fn run<R: BufRead, W: Write, E: Write>(mut input: R, mut output: W, mut errors: E) -> io::Result<()> {
    let mut evaluator = Evaluator::new();
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        if line.trim().is_empty() {
            continue;
        }

        match eval_line(&mut evaluator, &line) {
            Ok(Some(display)) => writeln!(output, "=> {}", display)?,
            Ok(None) => {}
            Err(message) => writeln!(errors, "{}", message)?,
        }
    }
}

/// Evaluates one line as a complete program. Returns the display form to
/// print, or `None` when the last statement's result should be suppressed
/// (an assignment, a function declaration, or a `Null` value).
fn eval_line(evaluator: &mut Evaluator, line: &str) -> Result<Option<String>, String> {
    let mut parser = Parser::new(line).map_err(|e| e.render_as_cli_message())?;
    let program = parser.parse_program().map_err(|e| e.render_as_cli_message())?;
    let steps = evaluator.eval_program_steps(&program).map_err(|e| e.render())?;
    match steps.last() {
        Some((value, suppress)) if !suppress && !matches!(value, ivy_eval::Value::Null) => {
            Ok(Some(value.to_display_string()))
        }
        _ => Ok(None),
    }
}

trait RenderAsCliMessage {
    fn render_as_cli_message(&self) -> String;
}

impl RenderAsCliMessage for ivy_par::ParseError {
    fn render_as_cli_message(&self) -> String {
        format!("Error at line {}, column {}: {}", self.span.line, self.span.column, self.message)
    }
}
