//! Console log sink.
//!
//! Every user-visible outcome of a command goes through a [`Console`].
//! The boundary crate provides the browser implementation; tests and
//! embedders capture output with [`BufferedConsole`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use serde::{Deserialize, Serialize};

/// Log severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Error,
}

impl Level {
    /// Name passed to host log sinks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Error => "error",
        }
    }
}

/// Two-severity log sink.
pub trait Console {
    /// Write one line at the given level.
    fn write(&self, level: Level, text: &str);

    fn info(&self, text: &str) {
        self.write(Level::Info, text);
    }

    fn error(&self, text: &str) {
        self.write(Level::Error, text);
    }
}

/// Console that records every line in memory.
#[derive(Default)]
pub struct BufferedConsole {
    lines: RefCell<Vec<(Level, String)>>,
}

impl BufferedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded lines.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Recorded lines of one level, text only.
    pub fn texts(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Drain recorded lines.
    pub fn take(&self) -> Vec<(Level, String)> {
        core::mem::take(&mut *self.lines.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Console for BufferedConsole {
    fn write(&self, level: Level, text: &str) {
        self.lines.borrow_mut().push((level, text.to_string()));
    }
}
