//! Stdin command parsing.

use std::str::FromStr;
use std::time::Duration;

use widgetdom::{Event, Key};

use crate::error::CommandError;

/// One line of host input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `click <id>`
    Click(String),
    /// `tap <x> <y>`: click at a position, resolved by hit testing.
    Tap(u16, u16),
    /// `key <id> enter|space`
    Key(String, Key),
    /// `frame`: print the current frame.
    Frame,
    /// `wait <ms>`: let time pass while background work runs.
    Wait(Duration),
    Quit,
}

impl Command {
    /// The input event for commands that produce one.
    pub fn event(&self) -> Option<Event> {
        match self {
            Command::Click(id) => Some(Event::click_on(id.as_str())),
            Command::Tap(x, y) => Some(Event::click_at(*x, *y)),
            Command::Key(id, key) => Some(Event::key_on(id.as_str(), *key)),
            Command::Frame | Command::Wait(_) | Command::Quit => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };

        let mut arg = |command: &'static str, argument: &'static str| {
            words
                .next()
                .ok_or(CommandError::MissingArgument { command, argument })
        };

        match name {
            "click" => Ok(Command::Click(arg("click", "id")?.to_string())),
            "tap" => {
                let x = number(arg("tap", "x")?)?;
                let y = number(arg("tap", "y")?)?;
                Ok(Command::Tap(x, y))
            }
            "key" => {
                let id = arg("key", "id")?.to_string();
                let key = match arg("key", "key")? {
                    "enter" => Key::Enter,
                    "space" => Key::Char(' '),
                    other => return Err(CommandError::InvalidKey(other.to_string())),
                };
                Ok(Command::Key(id, key))
            }
            "frame" => Ok(Command::Frame),
            "wait" => Ok(Command::Wait(Duration::from_millis(number(arg("wait", "ms")?)?))),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn number<T: FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))
}
