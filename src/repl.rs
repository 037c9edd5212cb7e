//! Read-eval-print loop.
//!
//! Generic over its reader and writer so a whole session can be driven from
//! a byte buffer in tests.

use crate::assistant::Assistant;
use crate::commands::Reply;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Banner printed before the first prompt.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Run the loop until `exit`/`close` or end of input.
pub fn run<R: BufRead, W: Write>(
    assistant: &mut Assistant,
    mut input: R,
    output: &mut W,
    prompt: &str,
) -> io::Result<()> {
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("Input closed");
            writeln!(output)?;
            return Ok(());
        }

        match assistant.handle_line(&line) {
            None => continue,
            Some(Reply::Message(message)) => writeln!(output, "{}", message)?,
            Some(Reply::Lines(lines)) => {
                for entry in lines {
                    writeln!(output, "{}", entry)?;
                }
            }
            Some(Reply::Exit(farewell)) => {
                writeln!(output, "{}", farewell)?;
                return Ok(());
            }
        }
    }
}
