//! wsh Shell
//!
//! Command execution for the wsh WebAssembly shell:
//!
//! - `console` - Two-severity log sink every outcome is reported through
//! - `command` - The `Command` trait and the parsed `CommandInvocation`
//! - `registry` - Static table of built-in commands
//! - `dispatcher` - Splits a raw line and routes it to a command
//! - `commands` - `ls`, `cat`, `echo`, `rm`
//!
//! Commands report success and failure as integer status codes
//! ([`STATUS_OK`] / [`STATUS_ERR`]) plus a log line; nothing structured
//! leaves the shell.

#![no_std]
extern crate alloc;

pub mod command;
pub mod commands;
pub mod console;
pub mod dispatcher;
pub mod error;
pub mod registry;

pub use command::{Command, CommandInvocation, ShellContext};
pub use console::{BufferedConsole, Console, Level};
pub use dispatcher::dispatch;
pub use error::ShellError;
pub use registry::{all_commands, resolve};

/// Status returned by a command that succeeded.
pub const STATUS_OK: i32 = 0;

/// Status returned by every failure, whatever its kind.
pub const STATUS_ERR: i32 = -1;
