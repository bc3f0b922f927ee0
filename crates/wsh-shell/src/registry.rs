//! Command registry - static command registration and lookup.

use crate::command::Command;
use crate::commands;

/// Static array of all registered commands.
///
/// Built at compile time and never mutated.
static COMMANDS: &[&dyn Command] = &[
    &commands::LS,
    &commands::CAT,
    &commands::ECHO,
    &commands::RM,
];

/// Find a command by exact name.
pub fn resolve(name: &str) -> Option<&'static dyn Command> {
    COMMANDS.iter().copied().find(|cmd| cmd.name() == name)
}

/// Get all registered commands.
pub fn all_commands() -> &'static [&'static dyn Command] {
    COMMANDS
}
