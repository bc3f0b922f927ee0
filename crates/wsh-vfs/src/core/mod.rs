//! Core VFS types and utilities

mod error;
mod path;
mod types;

pub use error::VfsError;
pub use path::{filename, join_path, parent_path, resolve_path, validate_path, ROOT};
pub use types::{DirEntry, Inode, InodeType};
