//! Line-oriented console used by the interactive menu
//!
//! On a terminal, input goes through dialoguer so the user gets line editing.
//! When stdin is piped, prompts are written to stdout and lines are read
//! straight from stdin, which keeps the menu scriptable.

use std::io::{self, BufRead, IsTerminal};

use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};

/// The terminal surface the menu, viewer and prompts talk to
pub trait Console {
    /// Show `prompt` and read one line. `None` means input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Write one line of output
    fn print_line(&mut self, text: &str) -> io::Result<()>;

    /// Clear the screen
    fn clear(&mut self) -> io::Result<()>;
}

/// Console bound to the process's stdin/stdout
pub struct TermConsole {
    term: Term,
    interactive: bool,
    theme: ColorfulTheme,
}

impl TermConsole {
    pub fn new() -> Self {
        let term = Term::stdout();
        let interactive = term.is_term() && io::stdin().is_terminal();
        Self {
            term,
            interactive,
            theme: ColorfulTheme::default(),
        }
    }

    fn read_piped(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.term.write_str(prompt)?;
        self.term.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            // Keep the transcript readable when input runs out mid-prompt
            self.term.write_line("")?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !self.interactive {
            return self.read_piped(prompt);
        }

        let label = prompt.trim_end().trim_end_matches(':');
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.interactive {
            self.term.clear_screen()?;
        }
        Ok(())
    }
}
