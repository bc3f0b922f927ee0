//! `echo` - print text, or write it to a file with `text > file`.

use crate::command::{Command, ShellContext};
use crate::error::ShellError;

/// Echo command instance.
pub static ECHO: EchoCommand = EchoCommand;

pub struct EchoCommand;

/// The `content > target` form of an echo argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect<'a> {
    /// Text before the first `>`, trailing spaces/tabs removed
    pub content: &'a str,
    /// Text after the first `>`, leading spaces/tabs removed
    pub target: &'a str,
}

impl<'a> Redirect<'a> {
    /// Split at the first `>`; `None` when there is no redirect.
    pub fn parse(argument: &'a str) -> Option<Self> {
        let (content, target) = argument.split_once('>')?;
        Some(Self {
            content: content.trim_end_matches(is_blank),
            target: target.trim_start_matches(is_blank),
        })
    }
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn usage(&self) -> &'static str {
        "Usage: echo <text> [> filename]"
    }

    fn execute(&self, ctx: &ShellContext<'_>, argument: &str) -> Result<(), ShellError> {
        match Redirect::parse(argument) {
            None => {
                ctx.console.info(argument);
                Ok(())
            }
            Some(redirect) => ctx
                .vfs
                .write_file(redirect.target, redirect.content.as_bytes())
                .map_err(|e| ShellError::io("Failed to open file for writing", redirect.target, e)),
        }
    }
}
