use std::io::{self, BufRead, Write};

/// Line-oriented terminal the ordering session talks through.
pub trait Console {
    /// Write `line` followed by a newline.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Write `prompt` as-is, then read one line of input.
    ///
    /// Returns `Ok(None)` once input is exhausted. The line terminator is
    /// stripped; nothing else is trimmed.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// [`Console`] over any buffered reader and writer.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineConsole<io::StdinLock<'static>, io::StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }

        if input.ends_with('\n') {
            input.pop();
            if input.ends_with('\r') {
                input.pop();
            }
        }
        Ok(Some(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_strips_only_line_terminator() {
        let mut console = LineConsole::new(&b" 7 \r\nnext\n"[..], Vec::new());

        assert_eq!(console.ask("? ").unwrap().as_deref(), Some(" 7 "));
        assert_eq!(console.ask("? ").unwrap().as_deref(), Some("next"));
        assert_eq!(console.ask("? ").unwrap(), None);
    }

    #[test]
    fn test_ask_writes_prompt_without_newline() {
        let mut console = LineConsole::new(&b"q\n"[..], Vec::new());
        console.ask("Type menu number: ").unwrap();
        console.say("done").unwrap();

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "Type menu number: done\n");
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut console = LineConsole::new(&b"n"[..], Vec::new());
        assert_eq!(console.ask("").unwrap().as_deref(), Some("n"));
    }
}
