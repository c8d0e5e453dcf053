use crate::app::ports::ConsolePort;
use crate::error::{LocatorError, Result};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Console backed by the real terminal.
///
/// Uses `dialoguer` when stdin is a TTY and falls back to line reads so the
/// tool can also be driven from a pipe.
pub struct TerminalConsole {
    interactive: bool,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl ConsolePort for TerminalConsole {
    fn prompt(&mut self, message: &str) -> Result<String> {
        if self.interactive {
            return Input::<String>::new()
                .with_prompt(message)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| LocatorError::Prompt(e.to_string()));
        }

        print!("{message}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}
