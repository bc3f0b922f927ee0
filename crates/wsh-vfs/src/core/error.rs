//! Error types for the VFS layer.

use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Errors from VFS operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VfsError {
    /// Path not found
    NotFound,

    /// Path already exists
    AlreadyExists,

    /// Not a directory
    NotADirectory,

    /// Not a file
    NotAFile,

    /// Directory not empty
    DirectoryNotEmpty,

    /// Operation refused (removing the root)
    PermissionDenied,

    /// Invalid path format
    InvalidPath(String),
}

impl VfsError {
    /// Create an invalid path error with message.
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Check if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, VfsError::NotFound)
    }
}

impl fmt::Display for VfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfsError::NotFound => write!(f, "No such file or directory"),
            VfsError::AlreadyExists => write!(f, "File exists"),
            VfsError::NotADirectory => write!(f, "Not a directory"),
            VfsError::NotAFile => write!(f, "Is a directory"),
            VfsError::DirectoryNotEmpty => write!(f, "Directory not empty"),
            VfsError::PermissionDenied => write!(f, "Permission denied"),
            VfsError::InvalidPath(msg) => write!(f, "Invalid path: {}", msg),
        }
    }
}
