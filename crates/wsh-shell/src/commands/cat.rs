//! `cat` - print a file.

use alloc::string::String;

use crate::command::{Command, ShellContext};
use crate::error::ShellError;

/// Cat command instance.
pub static CAT: CatCommand = CatCommand;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn usage(&self) -> &'static str {
        "Usage: cat <filename>"
    }

    fn execute(&self, ctx: &ShellContext<'_>, argument: &str) -> Result<(), ShellError> {
        if argument.is_empty() {
            return Err(ShellError::Usage(self.usage()));
        }

        let content = ctx
            .vfs
            .read_file(argument)
            .map_err(|e| ShellError::io("Failed to open file", argument, e))?;

        // Whole file as one message; invalid UTF-8 is replaced, NUL bytes are kept.
        ctx.console.info(&String::from_utf8_lossy(&content));
        Ok(())
    }
}
