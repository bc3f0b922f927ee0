//! Filesystem operations the shell and the boundary layer rely on.

use alloc::vec::Vec;

use crate::core::{DirEntry, Inode, VfsError};

/// Filesystem interface.
///
/// Paths are canonicalized with [`resolve_path`](crate::resolve_path)
/// before use, so a relative path names an entry under `/`. Implementations
/// use interior mutability; every method takes `&self`.
pub trait VfsService {
    /// Create one directory inside an existing directory.
    fn mkdir(&self, path: &str) -> Result<(), VfsError>;

    /// Create a directory along with any missing ancestors. Existing
    /// directories on the way are fine.
    fn mkdir_p(&self, path: &str) -> Result<(), VfsError>;

    /// `.`, `..`, then the direct children in name order.
    fn readdir(&self, path: &str) -> Result<Vec<DirEntry>, VfsError>;

    /// Replace the file content, creating the file if needed. The parent
    /// directory must exist.
    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), VfsError>;

    fn read_file(&self, path: &str) -> Result<Vec<u8>, VfsError>;

    /// Remove a file or an empty directory. The root cannot be removed.
    fn remove(&self, path: &str) -> Result<(), VfsError>;

    fn stat(&self, path: &str) -> Result<Inode, VfsError>;

    /// Whether anything lives at `path`. Only malformed paths are errors.
    fn exists(&self, path: &str) -> Result<bool, VfsError>;
}
