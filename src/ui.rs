use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

/// Semantic emphasis for a displayed line. The terminal maps these to
/// colors; test doubles ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warn,
    Success,
    Error,
}

/// The game's one window on the outside world: show a line, ask for a line,
/// pause for pacing, clear the screen. The round engine never touches the
/// console directly, so tests drive it with a scripted implementation.
pub trait Ui {
    fn show(&mut self, tone: Tone, msg: &str);

    /// Prompt for one line of input and return it trimmed. Fails only when
    /// stdin is gone.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;

    /// Cosmetic delay between beats of play. Never affects game state.
    fn pause(&mut self, len: Duration);

    fn clear(&mut self);
}

/// Real terminal: ANSI colors, blocking stdin reads, thread sleeps.
pub struct Terminal {
    fast: bool,
}

impl Terminal {
    /// `fast` turns every pause into a no-op.
    pub fn new(fast: bool) -> Self {
        Terminal { fast }
    }
}

impl Ui for Terminal {
    fn show(&mut self, tone: Tone, msg: &str) {
        let line = match tone {
            Tone::Info => msg.cyan(),
            Tone::Warn => msg.yellow(),
            Tone::Success => msg.green(),
            Tone::Error => msg.red(),
        };
        println!("{line}");
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{} ", prompt.yellow());
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(line.trim().to_string())
    }

    fn pause(&mut self, len: Duration) {
        if !self.fast {
            thread::sleep(len);
        }
    }

    fn clear(&mut self) {
        print!("\x1B[2J\x1B[1;1H");
        let _ = io::stdout().flush();
    }
}

/// Scripted stand-in for tests: serves canned input lines and records
/// everything shown.
#[cfg(test)]
pub struct Script {
    lines: std::collections::VecDeque<String>,
    pub shown: Vec<String>,
}

#[cfg(test)]
impl Script {
    pub fn new(lines: &[&str]) -> Self {
        Script {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            shown: Vec::new(),
        }
    }

    pub fn saw(&self, fragment: &str) -> bool {
        self.shown.iter().any(|line| line.contains(fragment))
    }
}

#[cfg(test)]
impl Ui for Script {
    fn show(&mut self, _tone: Tone, msg: &str) {
        self.shown.push(msg.to_string());
    }

    fn ask(&mut self, _prompt: &str) -> io::Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn pause(&mut self, _len: Duration) {}

    fn clear(&mut self) {}
}
