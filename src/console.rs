//! Line-oriented terminal prompts.

use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::{debug, instrument};

/// What the game needs from a terminal.
pub trait Terminal {
    /// Prints a message prefixed with `=> `.
    fn say(&mut self, message: &str) -> io::Result<()>;

    /// Prints text verbatim.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Prints a question and returns the trimmed answer.
    ///
    /// End of input is an [`io::ErrorKind::UnexpectedEof`] error.
    fn ask(&mut self, question: &str) -> io::Result<String>;

    /// Clears the screen, if the terminal supports it.
    fn clear(&mut self) -> io::Result<()>;

    /// Asks until the answer is `y` or `n`.
    fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        let mut answer = self.ask(question)?.to_lowercase();
        while answer != "y" && answer != "n" {
            self.say("Please enter y or n")?;
            answer = self.ask(question)?.to_lowercase();
        }
        Ok(answer == "y")
    }
}

/// [`Terminal`] over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console that never clears the screen.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enables or disables screen clearing.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Consumes the console, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "=> {}", message)
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    #[instrument(skip(self))]
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "=> {} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        let answer = line.trim().to_string();
        debug!(%answer, "Read answer");
        Ok(answer)
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

/// Joins items for a prompt: `a, b, or c`.
///
/// Two items are joined with just the word (`a or b`).
pub fn join_or<S: AsRef<str>>(items: &[S], separator: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {} {}", first.as_ref(), word, second.as_ref()),
        [rest @ .., last] => {
            let head: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();
            format!("{}{}{} {}", head.join(separator), separator, word, last.as_ref())
        }
    }
}
