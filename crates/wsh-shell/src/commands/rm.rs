//! `rm` - delete a file.

use crate::command::{Command, ShellContext};
use crate::error::ShellError;

/// Remove command instance.
pub static RM: RmCommand = RmCommand;

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn usage(&self) -> &'static str {
        "Usage: rm <filename>"
    }

    fn execute(&self, ctx: &ShellContext<'_>, argument: &str) -> Result<(), ShellError> {
        if argument.is_empty() {
            return Err(ShellError::Usage(self.usage()));
        }

        ctx.vfs
            .remove(argument)
            .map_err(|e| ShellError::io("Failed to delete file", argument, e))
    }
}
