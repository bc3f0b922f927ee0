//! wsh Virtual Filesystem Layer
//!
//! The filesystem the shell and the host boundary operate on. A wasm32 guest
//! has no ambient filesystem, so this crate provides a small POSIX-flavoured
//! one that lives entirely in linear memory:
//!
//! - **Types**: Inode, InodeType, DirEntry for filesystem metadata
//! - **Path**: Path validation and resolution against the working directory `/`
//! - **Service**: VfsService trait for filesystem operations
//! - **MemoryVfs**: BTreeMap-backed implementation of the service
//! - **Bootstrap**: Default directory layout created at kernel init
//!
//! # Semantics
//!
//! 1. **Relative paths** resolve against `/`
//! 2. **`..` clamps at the root**: `/..` is `/`
//! 3. **Directory iteration** yields `.` and `..` before the real entries
//! 4. **Removal** follows `remove(3)`: files and empty directories only
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 VfsService                   │
//! │  stat / exists / readdir                     │
//! │  read_file / write_file / remove / mkdir     │
//! └──────────────────────┬───────────────────────┘
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │                 MemoryVfs                    │
//! │  inodes:  path -> Inode                      │
//! │  content: path -> Vec<u8>                    │
//! └──────────────────────────────────────────────┘
//! ```

#![no_std]
extern crate alloc;

pub mod bootstrap;
pub mod core;
pub mod memory_vfs;
pub mod service;

pub use bootstrap::{bootstrap_filesystem, DEFAULT_DIRECTORIES};
pub use crate::core::{filename, join_path, parent_path, resolve_path, validate_path, ROOT};
pub use crate::core::{DirEntry, Inode, InodeType, VfsError};
pub use memory_vfs::MemoryVfs;
pub use service::VfsService;
