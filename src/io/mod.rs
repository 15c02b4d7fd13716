//! Input/output abstractions
//!
//! Provides traits for input and output operations, enabling testing
//! by allowing mock implementations.

use std::io::{self, BufRead, Write};

use crate::models::errors::{GameError, GameResult};

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user with a prompt.
    ///
    /// Returns `GameError::InputClosed` once no further lines are available.
    fn read_line(&mut self, prompt: &str) -> GameResult<String>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> GameResult<String> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
