//! Filesystem metadata.

use alloc::string::String;
use serde::{Deserialize, Serialize};

use super::path::{filename, parent_path};

/// Metadata record for one file or directory, keyed by canonical path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Inode {
    pub path: String,
    pub parent_path: String,
    /// Last path component; empty for the root
    pub name: String,
    pub inode_type: InodeType,
    /// Modification counter value at the last change
    pub modified_at: u64,
    /// Content length in bytes, 0 for directories
    pub size: u64,
}

impl Inode {
    /// Record for canonical `path`. Parent and name are derived from it.
    pub fn new(path: &str, inode_type: InodeType, size: u64, now: u64) -> Self {
        Self {
            path: String::from(path),
            parent_path: parent_path(path),
            name: String::from(filename(path)),
            inode_type,
            modified_at: now,
            size,
        }
    }

    pub fn directory(path: &str, now: u64) -> Self {
        Self::new(path, InodeType::Directory, 0, now)
    }

    pub fn file(path: &str, size: u64, now: u64) -> Self {
        Self::new(path, InodeType::File, size, now)
    }

    pub fn is_directory(&self) -> bool {
        self.inode_type == InodeType::Directory
    }

    pub fn is_file(&self) -> bool {
        self.inode_type == InodeType::File
    }
}

/// Kind of filesystem entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InodeType {
    File,
    Directory,
}

/// One item of a directory listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirEntry {
    /// Name as yielded by iteration (`.` and `..` included)
    pub name: String,
    /// Canonical path the entry refers to
    pub path: String,
    pub is_directory: bool,
    pub size: u64,
}

impl DirEntry {
    /// Entry for `inode` listed under a different name (`.` or `..`).
    pub fn alias(name: &str, inode: &Inode) -> Self {
        Self {
            name: String::from(name),
            ..Self::from(inode)
        }
    }
}

impl From<&Inode> for DirEntry {
    fn from(inode: &Inode) -> Self {
        Self {
            name: inode.name.clone(),
            path: inode.path.clone(),
            is_directory: inode.is_directory(),
            size: inode.size,
        }
    }
}
