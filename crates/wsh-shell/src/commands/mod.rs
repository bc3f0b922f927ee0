//! Built-in commands.

mod cat;
mod echo;
mod ls;
mod rm;

pub use cat::{CatCommand, CAT};
pub use echo::{EchoCommand, Redirect, ECHO};
pub use ls::{LsCommand, LS};
pub use rm::{RmCommand, RM};
