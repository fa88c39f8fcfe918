//! Terminal prompting
//!
//! The interactive flows read through an injected reader/writer pair so they
//! can be exercised against in-memory buffers instead of a live terminal.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    /// Prompter wired to the process terminal
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over explicit input/output handles
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line, trimmed
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Like [`ask`](Self::ask), but also strips the quotes shells and file
    /// managers wrap around pasted paths
    pub fn ask_path(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.ask(prompt)?.replace('"', "").trim().to_string())
    }

    /// Ask a yes/no question; any answer starting with `y` or `Y` is yes
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(answer.to_lowercase().starts_with('y'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<&str>, Vec<u8>> {
        Prompter::new(Cursor::new(input), Vec::new())
    }

    #[test]
    fn test_ask_trims_whitespace() {
        let mut p = prompter("  /home/repos  \n");
        assert_eq!(p.ask("path: ").unwrap(), "/home/repos");
    }

    #[test]
    fn test_ask_writes_prompt() {
        let mut p = prompter("x\n");
        p.ask("choose: ").unwrap();
        assert_eq!(p.output, b"choose: ");
    }

    #[test]
    fn test_ask_path_strips_quotes() {
        let mut p = prompter("\"/home/user/my repos\"\n");
        assert_eq!(p.ask_path("path: ").unwrap(), "/home/user/my repos");
    }

    #[test]
    fn test_confirm_yes_variants() {
        for input in ["y\n", "Y\n", "yes\n", "Yes please\n"] {
            let mut p = prompter(input);
            assert!(p.confirm("ok? ").unwrap(), "expected yes for {:?}", input);
        }
    }

    #[test]
    fn test_confirm_no_variants() {
        for input in ["n\n", "no\n", "\n", "maybe\n"] {
            let mut p = prompter(input);
            assert!(!p.confirm("ok? ").unwrap(), "expected no for {:?}", input);
        }
    }
}
