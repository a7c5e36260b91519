use std::io::{self, BufRead, Write};

use crate::commands::{Value, ValueKind};
use crate::error::{CommandResult, GeotestError};

/// Line-oriented console used to ask the user for missing parameters.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Shows `message` and reads lines until one parses as `kind`.
    ///
    /// Blank lines re-prompt silently; unparsable lines re-prompt after an
    /// error line. End of input aborts with [`GeotestError::PromptAborted`].
    pub fn ask(
        &mut self,
        param: &'static str,
        message: &str,
        kind: ValueKind,
    ) -> CommandResult<Value> {
        loop {
            write!(self.output, "{message}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Err(GeotestError::PromptAborted(param));
            }

            let answer = line.trim_end_matches(['\r', '\n']);
            if answer.trim().is_empty() {
                continue;
            }

            match kind.parse(answer) {
                Some(value) => return Ok(value),
                None => {
                    tracing::debug!(param, answer, "rejected prompt answer");
                    writeln!(
                        self.output,
                        "Error: '{answer}' is not a valid {}.",
                        kind.describe()
                    )?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn reads_integer_on_first_try() {
        let mut console = console("42\n");
        let value = console
            .ask("age", "How old are you?", ValueKind::Int)
            .unwrap();

        assert_eq!(value, Value::Int(42));
        assert_eq!(
            String::from_utf8(console.into_output()).unwrap(),
            "How old are you?: "
        );
    }

    #[test]
    fn reprompts_after_invalid_and_blank_answers() {
        let mut console = console("abc\n\n 7 \n");
        let value = console
            .ask("age", "How old are you?", ValueKind::Int)
            .unwrap();

        assert_eq!(value, Value::Int(7));
        assert_eq!(
            String::from_utf8(console.into_output()).unwrap(),
            "How old are you?: Error: 'abc' is not a valid integer.\n\
             How old are you?: How old are you?: "
        );
    }

    #[test]
    fn accepts_answer_without_trailing_newline() {
        let mut console = console("-3");
        let value = console
            .ask("age", "How old are you?", ValueKind::Int)
            .unwrap();
        assert_eq!(value, Value::Int(-3));
    }

    #[test]
    fn end_of_input_aborts() {
        let mut console = console("nope\n");
        let err = console
            .ask("age", "How old are you?", ValueKind::Int)
            .unwrap_err();

        assert!(matches!(err, GeotestError::PromptAborted("age")));
    }

    #[test]
    fn string_answers_are_kept_verbatim() {
        let mut console = console("  Ada Lovelace\n");
        let value = console
            .ask("name", "Who are you?", ValueKind::Str)
            .unwrap();
        assert_eq!(value, Value::Str("  Ada Lovelace".to_string()));
    }
}
