//! Error Types for the Shell
//!
//! Failures a command can hit. They never leave the shell: the command
//! boundary logs them and turns them into [`STATUS_ERR`](crate::STATUS_ERR).

use alloc::string::String;
use core::fmt;
use wsh_vfs::VfsError;

/// Errors that can occur while running a command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellError {
    /// Required argument missing; carries the usage line
    Usage(&'static str),

    /// No command registered under this name
    UnknownCommand(String),

    /// Filesystem operation failed
    Io {
        /// What was being attempted
        message: &'static str,
        /// Path as the user typed it
        path: String,
        /// Underlying filesystem error
        reason: VfsError,
    },
}

impl ShellError {
    /// Create an I/O error for `path`.
    pub fn io(message: &'static str, path: impl Into<String>, reason: VfsError) -> Self {
        ShellError::Io {
            message,
            path: path.into(),
            reason,
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Usage(usage) => write!(f, "{}", usage),
            ShellError::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            ShellError::Io {
                message,
                path,
                reason,
            } => write!(f, "{}: {} ({})", message, path, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(
            ShellError::Usage("Usage: cat <filename>").to_string(),
            "Usage: cat <filename>"
        );
        assert_eq!(
            ShellError::UnknownCommand(String::from("foo")).to_string(),
            "Unknown command: foo"
        );
        assert_eq!(
            ShellError::io("Failed to open file", "x.txt", VfsError::NotFound).to_string(),
            "Failed to open file: x.txt (No such file or directory)"
        );
    }
}
