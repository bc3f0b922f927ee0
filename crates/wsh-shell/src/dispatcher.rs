//! Dispatcher - routes a raw line to its command.

use crate::command::{CommandInvocation, ShellContext};
use crate::error::ShellError;
use crate::registry;
use crate::STATUS_ERR;

/// Execute a command line.
///
/// Splits the line at the first space, resolves the name in the registry
/// and returns the command's status unchanged. Unknown names are logged and
/// fail without touching the filesystem.
pub fn dispatch(ctx: &ShellContext<'_>, line: &str) -> i32 {
    let invocation = CommandInvocation::parse(line);

    match registry::resolve(invocation.name) {
        Some(cmd) => cmd.run(ctx, invocation.argument),
        None => {
            let err = ShellError::UnknownCommand(invocation.name.into());
            ctx.console.error(&alloc::format!("{}", err));
            STATUS_ERR
        }
    }
}
