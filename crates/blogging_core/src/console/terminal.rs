//! Line-oriented terminal wrapper over arbitrary reader/writer pairs.

use std::io::{BufRead, Write};

pub struct Terminal<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Terminal<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Writes one full line.
    pub fn say(&mut self, line: impl AsRef<str>) -> std::io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Reads one line without its terminator; `None` once input is exhausted.
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        strip_line_terminator(&mut line);
        Ok(Some(line))
    }

    /// Prints `label` without a newline and reads the answer.
    ///
    /// Exhausted input reads as an empty answer.
    pub fn prompt(&mut self, label: &str) -> std::io::Result<String> {
        write!(self.output, "{label}")?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    #[cfg(test)]
    fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}

fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Terminal;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_unix_and_windows_terminators() {
        let mut terminal = Terminal::new(Cursor::new("one\r\ntwo\nthree"), Vec::new());
        let mut next = || terminal.read_line().expect("in-memory read should succeed");
        assert_eq!(next().as_deref(), Some("one"));
        assert_eq!(next().as_deref(), Some("two"));
        assert_eq!(next().as_deref(), Some("three"));
        assert_eq!(next(), None);
    }

    #[test]
    fn prompt_keeps_surrounding_spaces_and_treats_eof_as_empty() {
        let mut terminal = Terminal::new(Cursor::new("  padded  \n"), Vec::new());
        let first = terminal.prompt("Name: ").expect("prompt should read a line");
        let second = terminal.prompt("Again: ").expect("prompt at EOF should succeed");
        assert_eq!(first, "  padded  ");
        assert_eq!(second, "");

        let (_, output) = terminal.into_parts();
        let rendered = String::from_utf8(output).expect("prompts should be valid UTF-8");
        assert_eq!(rendered, "Name: Again: ");
    }
}
