//! Command trait and invocation parsing.

use wsh_vfs::VfsService;

use crate::console::Console;
use crate::error::ShellError;
use crate::{STATUS_ERR, STATUS_OK};

/// A raw line split into command name and argument.
///
/// The split happens at the first space character only. Tabs and other
/// whitespace stay part of the name or the argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandInvocation<'a> {
    /// Token before the first space (the whole line if there is none)
    pub name: &'a str,
    /// Everything after the first space, untouched
    pub argument: &'a str,
}

impl<'a> CommandInvocation<'a> {
    /// Split a raw line.
    ///
    /// # Examples
    ///
    /// ```
    /// use wsh_shell::CommandInvocation;
    ///
    /// let inv = CommandInvocation::parse("echo hi > out.txt");
    /// assert_eq!(inv.name, "echo");
    /// assert_eq!(inv.argument, "hi > out.txt");
    ///
    /// let inv = CommandInvocation::parse("ls");
    /// assert_eq!(inv.argument, "");
    /// ```
    pub fn parse(line: &'a str) -> Self {
        match line.split_once(' ') {
            Some((name, argument)) => Self { name, argument },
            None => Self {
                name: line,
                argument: "",
            },
        }
    }
}

/// What a command gets to work with.
#[derive(Clone, Copy)]
pub struct ShellContext<'a> {
    pub vfs: &'a dyn VfsService,
    pub console: &'a dyn Console,
}

impl<'a> ShellContext<'a> {
    pub fn new(vfs: &'a dyn VfsService, console: &'a dyn Console) -> Self {
        Self { vfs, console }
    }
}

/// Trait for built-in commands.
///
/// Commands are registered statically and looked up by exact name.
pub trait Command: Sync {
    /// Command name as typed by the user.
    fn name(&self) -> &'static str;

    /// One-line usage string.
    fn usage(&self) -> &'static str;

    /// Execute with the raw argument string.
    fn execute(&self, ctx: &ShellContext<'_>, argument: &str) -> Result<(), ShellError>;

    /// Execute and collapse the outcome to a status code.
    ///
    /// Failures are logged at error level before returning [`STATUS_ERR`].
    fn run(&self, ctx: &ShellContext<'_>, argument: &str) -> i32 {
        match self.execute(ctx, argument) {
            Ok(()) => STATUS_OK,
            Err(e) => {
                ctx.console.error(&alloc::format!("{}", e));
                STATUS_ERR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_at_first_space() {
        assert_eq!(
            CommandInvocation::parse("cat a b"),
            CommandInvocation {
                name: "cat",
                argument: "a b"
            }
        );
    }

    #[test]
    fn test_parse_without_space() {
        assert_eq!(
            CommandInvocation::parse("ls"),
            CommandInvocation {
                name: "ls",
                argument: ""
            }
        );
    }

    #[test]
    fn test_parse_keeps_argument_whitespace() {
        let inv = CommandInvocation::parse("echo   padded  ");
        assert_eq!(inv.name, "echo");
        assert_eq!(inv.argument, "  padded  ");
    }

    #[test]
    fn test_parse_only_splits_on_space_character() {
        let inv = CommandInvocation::parse("ls\t/tmp");
        assert_eq!(inv.name, "ls\t/tmp");
        assert_eq!(inv.argument, "");
    }

    #[test]
    fn test_parse_leading_space_gives_empty_name() {
        let inv = CommandInvocation::parse(" ls");
        assert_eq!(inv.name, "");
        assert_eq!(inv.argument, "ls");
    }
}
