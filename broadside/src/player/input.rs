//! Line oriented console access for manual players.

use std::io::{self, BufRead, Write};

use crate::player::PlayerError;

/// A console a person plays through: messages go out, lines of input come back.
pub trait LineInput {
    /// Show a line of text to the player.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Show the prompt and read one line of input, without the line terminator.
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Repeatedly prompt until the checker accepts the trimmed input. Each rejection
    /// message returned by the checker is shown before prompting again.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> Result<T, PlayerError>
    where
        Self: Sized,
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            let line = self.read_line(prompt)?.ok_or(PlayerError::InputClosed)?;
            match checker(line.trim()) {
                Ok(val) => return Ok(val),
                Err(msg) => self.write_line(&msg)?,
            }
        }
    }
}

/// Reads from the process's stdin and writes to its stdout.
///
/// Stdin is locked only for the duration of a single read, so any number of
/// terminals can share the console.
#[derive(Debug, Default, Copy, Clone)]
pub struct Terminal;

impl LineInput for Terminal {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", text)?;
        out.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write!(out, "{}", prompt)?;
            out.flush()?;
        }
        let stdin = io::stdin();
        let mut stdin = stdin.lock();
        read_trimmed_line(&mut stdin)
    }
}

/// Console backed by any buffered reader, with everything written kept in memory.
/// Handy for driving manual players from a script.
#[derive(Debug)]
pub struct Scripted<B> {
    read: B,
    output: String,
}

impl<B: BufRead> Scripted<B> {
    /// Create a console that reads its input from `read`.
    pub fn new(read: B) -> Self {
        Self {
            read,
            output: String::new(),
        }
    }

    /// Everything shown to the player so far, prompts included.
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl<'a> Scripted<io::Cursor<&'a [u8]>> {
    /// Create a console that replays the given text as its input.
    pub fn from_script(script: &'a str) -> Self {
        Self::new(io::Cursor::new(script.as_bytes()))
    }
}

impl<B: BufRead> LineInput for Scripted<B> {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.push_str(prompt);
        let line = read_trimmed_line(&mut self.read)?;
        if let Some(line) = &line {
            self.output.push_str(line);
        }
        self.output.push('\n');
        Ok(line)
    }
}

/// Read one line, stripping the trailing newline. `None` at end of input.
fn read_trimmed_line<B: BufRead + ?Sized>(read: &mut B) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if read.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let len = buf.trim_end_matches(|c| c == '\n' || c == '\r').len();
    buf.truncate(len);
    Ok(Some(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_lines_are_replayed_then_closed() {
        let mut input = Scripted::from_script("first\r\nsecond\n");
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(input.read_line("> ").unwrap(), None);
        assert_eq!(input.output(), "> first\n> second\n> \n");
    }

    #[test]
    fn read_input_reprompts_until_accepted() {
        let mut input = Scripted::from_script("x\n  7 \n");
        let val = input
            .read_input("number? ", |line| {
                line.parse::<u32>().map_err(|_| format!("{:?} is not a number", line))
            })
            .unwrap();
        assert_eq!(val, 7);
        assert!(input.output().contains("\"x\" is not a number"));
    }

    #[test]
    fn read_input_fails_when_input_closes() {
        let mut input = Scripted::from_script("nope\n");
        let res = input.read_input("number? ", |line| line.parse::<u32>().map_err(|e| e.to_string()));
        assert!(matches!(res, Err(PlayerError::InputClosed)));
    }
}
