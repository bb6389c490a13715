use crate::config::OutputFormat;
use crate::core::{GcdOutcome, OperandSource, ResultSink};
use crate::domain::model::OperandLabel;
use crate::utils::error::{GcdError, Result};
use crate::utils::validation::parse_operand;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Prompts on `output` and reads whitespace-separated integers from `input`.
/// Blank lines are skipped and extra tokens on a line are kept for the next read.
pub struct ConsoleReader<R: BufRead, W: Write> {
    input: R,
    output: W,
    pending: VecDeque<Vec<u8>>,
}

impl<R: BufRead, W: Write> ConsoleReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn next_token(&mut self) -> Result<Option<Vec<u8>>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(|byte| byte.is_ascii_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }
        Ok(self.pending.pop_front())
    }
}

impl<R: BufRead, W: Write> OperandSource for ConsoleReader<R, W> {
    fn read_operand(&mut self, label: OperandLabel) -> Result<i64> {
        writeln!(self.output, "Enter the {} number : ", label)?;
        self.output.flush()?;

        let token = self
            .next_token()?
            .ok_or(GcdError::UnexpectedEof { label })?;
        let text = std::str::from_utf8(&token)
            .map_err(|source| GcdError::InvalidEncoding { label, source })?;

        let value = parse_operand(label, text)?;
        tracing::debug!("Parsed {} operand: {}", label, value);
        Ok(value)
    }
}

/// Uses operands given up front and defers to `fallback` for missing ones.
pub struct PresetSource<S: OperandSource> {
    first: Option<i64>,
    second: Option<i64>,
    fallback: S,
}

impl<S: OperandSource> PresetSource<S> {
    pub fn new(first: Option<i64>, second: Option<i64>, fallback: S) -> Self {
        Self {
            first,
            second,
            fallback,
        }
    }
}

impl<S: OperandSource> OperandSource for PresetSource<S> {
    fn read_operand(&mut self, label: OperandLabel) -> Result<i64> {
        let preset = match label {
            OperandLabel::First => self.first,
            OperandLabel::Second => self.second,
        };

        match preset {
            Some(value) => {
                tracing::debug!("Using {} operand from command line: {}", label, value);
                Ok(value)
            }
            None => self.fallback.read_operand(label),
        }
    }
}

pub struct ConsolePrinter<W: Write> {
    output: W,
    format: OutputFormat,
    show_steps: bool,
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(output: W, format: OutputFormat, show_steps: bool) -> Self {
        Self {
            output,
            format,
            show_steps,
        }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> ResultSink for ConsolePrinter<W> {
    fn emit(&mut self, outcome: &GcdOutcome) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                if self.show_steps {
                    for step in &outcome.steps {
                        writeln!(self.output, "gcd({}, {})", step.a, step.b)?;
                    }
                }
                writeln!(self.output, "The gcf of the two numbers is : {} ", outcome.result)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.output, outcome)?;
                writeln!(self.output)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }
}
