//! Implementations of [`LineUi`]

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use crate::traits::LineUi;

/// A UI that reads lines from a reader and writes to a writer (usually stdin and stdout)
pub struct TerminalUi<R: BufRead, W: Write> {
    input: R,
    output: W,
    /// Set once the input has been exhausted
    input_closed: bool,
}

impl TerminalUi<BufReader<Stdin>, Stdout> {
    /// A UI over the standard input and output
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, input_closed: false }
    }

    /// Whether the end of the input has been reached
    pub fn is_input_closed(&self) -> bool {
        self.input_closed
    }
}

impl<R: BufRead, W: Write> LineUi for TerminalUi<R, W> {
    fn show_to_user(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{}", text).and_then(|_| self.output.flush()) {
            log::warn!("Unable to write to the terminal: {}", err);
        }
    }

    fn get_user_input(&mut self) -> String {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                log::debug!("End of user input");
                self.input_closed = true;
            },
            Ok(_) => (),
            Err(err) => {
                log::warn!("Unable to read user input: {}", err);
                self.input_closed = true;
            },
        }
        line.trim_end_matches(&['\n', '\r'][..]).to_string()
    }
}



/// A UI that replays pre-recorded lines, and records everything it is asked to show.
///
/// This is mostly useful in tests
#[derive(Clone, Debug, Default)]
pub struct ScriptedUi {
    inputs: VecDeque<String>,
    shown: Vec<String>,
    n_reads: usize,
}

impl ScriptedUi {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            shown: Vec::new(),
            n_reads: 0,
        }
    }

    /// Everything that has been shown so far
    pub fn shown(&self) -> &[String] { &self.shown }
    /// How many lines have been requested so far
    pub fn n_reads(&self) -> usize { self.n_reads }
}

impl LineUi for ScriptedUi {
    fn show_to_user(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }

    fn get_user_input(&mut self) -> String {
        self.n_reads += 1;
        self.inputs.pop_front().unwrap_or_default()
    }
}
