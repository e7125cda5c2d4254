use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::{BufRead, IsTerminal, Write};
use terminal_size::{terminal_size, Width};

const DIVIDER_DEFAULT: usize = 60;
const DIVIDER_MAX: usize = 70;

/// Prompt user with a message and return their trimmed input.
///
/// An exhausted stdin (EOF) is an error rather than an empty answer, so
/// validation loops can't spin forever on a closed pipe.
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("Input ended unexpectedly");
    }
    Ok(input.trim().to_string())
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// A horizontal rule sized to the terminal, capped so wide terminals don't
/// get a runway.
pub fn divider(ch: char) -> String {
    let width = terminal_size()
        .map(|(Width(w), _)| (w as usize).min(DIVIDER_MAX))
        .unwrap_or(DIVIDER_DEFAULT);
    ch.to_string().repeat(width)
}

/// Positive feedback after an accepted value.
pub fn accepted(message: &str, use_colors: bool) {
    if use_colors {
        println!("{}  {}", "+".green(), message);
    } else {
        println!("+  {}", message);
    }
}

/// Corrective feedback before re-prompting.
pub fn rejected(message: &str, use_colors: bool) {
    if use_colors {
        println!("{}  {}", "!".yellow(), message);
    } else {
        println!("!  {}", message);
    }
}
