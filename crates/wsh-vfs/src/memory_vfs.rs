//! In-memory VFS implementation.
//!
//! Provides a BTreeMap-based VFS that lives in linear memory for the
//! lifetime of the guest instance.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::core::{parent_path, resolve_path, DirEntry, Inode, VfsError, ROOT};
use crate::service::VfsService;

/// In-memory VFS.
pub struct MemoryVfs {
    /// Inode storage (path -> inode)
    inodes: RefCell<BTreeMap<String, Inode>>,
    /// Content storage (path -> content)
    content: RefCell<BTreeMap<String, Vec<u8>>>,
    /// Modification counter
    now: Cell<u64>,
}

impl Default for MemoryVfs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryVfs {
    /// Create a new VFS containing only the root directory.
    pub fn new() -> Self {
        let vfs = Self {
            inodes: RefCell::new(BTreeMap::new()),
            content: RefCell::new(BTreeMap::new()),
            now: Cell::new(1),
        };

        vfs.inodes
            .borrow_mut()
            .insert(String::from(ROOT), Inode::directory(ROOT, 0));

        vfs
    }

    /// Get current counter value and advance it.
    fn tick(&self) -> u64 {
        let current = self.now.get();
        self.now.set(current + 1);
        current
    }

    /// Require that `path` names an existing directory.
    fn require_directory(&self, path: &str) -> Result<(), VfsError> {
        match self.inodes.borrow().get(path) {
            Some(i) if i.is_directory() => Ok(()),
            Some(_) => Err(VfsError::NotADirectory),
            None => Err(VfsError::NotFound),
        }
    }

    /// Direct children of a canonical directory path, in name order.
    fn children(&self, path: &str) -> Vec<Inode> {
        let prefix = if path == ROOT {
            String::from(ROOT)
        } else {
            alloc::format!("{}/", path)
        };

        self.inodes
            .borrow()
            .range(prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&prefix))
            .filter(|(k, _)| {
                let rest = &k[prefix.len()..];
                !rest.is_empty() && !rest.contains('/')
            })
            .map(|(_, inode)| inode.clone())
            .collect()
    }

    /// Number of inodes, root included.
    pub fn inode_count(&self) -> usize {
        self.inodes.borrow().len()
    }
}

impl VfsService for MemoryVfs {
    fn mkdir(&self, path: &str) -> Result<(), VfsError> {
        let path = resolve_path(path)?;

        if self.inodes.borrow().contains_key(&path) {
            return Err(VfsError::AlreadyExists);
        }

        self.require_directory(&parent_path(&path))?;

        let inode = Inode::directory(&path, self.tick());
        self.inodes.borrow_mut().insert(path, inode);

        Ok(())
    }

    fn mkdir_p(&self, path: &str) -> Result<(), VfsError> {
        let path = resolve_path(path)?;

        let mut current = String::new();
        for component in path.split('/').filter(|c| !c.is_empty()) {
            current.push('/');
            current.push_str(component);

            let existing = self.inodes.borrow().get(&current).map(Inode::is_directory);
            match existing {
                Some(true) => continue,
                Some(false) => return Err(VfsError::NotADirectory),
                None => {
                    let inode = Inode::directory(&current, self.tick());
                    self.inodes.borrow_mut().insert(current.clone(), inode);
                }
            }
        }

        Ok(())
    }

    fn readdir(&self, path: &str) -> Result<Vec<DirEntry>, VfsError> {
        let path = resolve_path(path)?;
        self.require_directory(&path)?;

        let mut entries = Vec::new();
        {
            let inodes = self.inodes.borrow();
            let this = inodes.get(&path).ok_or(VfsError::NotFound)?;
            let parent = inodes.get(&this.parent_path).ok_or(VfsError::NotFound)?;
            entries.push(DirEntry::alias(".", this));
            entries.push(DirEntry::alias("..", parent));
        }

        entries.extend(self.children(&path).iter().map(DirEntry::from));
        Ok(entries)
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<(), VfsError> {
        // A trailing slash names a directory, never a file to create.
        if path.ends_with('/') {
            return Err(VfsError::NotAFile);
        }
        let path = resolve_path(path)?;

        if let Some(existing) = self.inodes.borrow().get(&path) {
            if existing.is_directory() {
                return Err(VfsError::NotAFile);
            }
        }

        self.require_directory(&parent_path(&path))?;

        let inode = Inode::file(&path, content.len() as u64, self.tick());

        self.inodes.borrow_mut().insert(path.clone(), inode);
        self.content.borrow_mut().insert(path, content.to_vec());

        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>, VfsError> {
        let path = resolve_path(path)?;

        match self.inodes.borrow().get(&path) {
            Some(i) if i.is_file() => {}
            Some(_) => return Err(VfsError::NotAFile),
            None => return Err(VfsError::NotFound),
        }

        self.content
            .borrow()
            .get(&path)
            .cloned()
            .ok_or(VfsError::NotFound)
    }

    fn remove(&self, path: &str) -> Result<(), VfsError> {
        let path = resolve_path(path)?;

        if path == ROOT {
            return Err(VfsError::PermissionDenied);
        }

        let is_directory = match self.inodes.borrow().get(&path) {
            Some(i) => i.is_directory(),
            None => return Err(VfsError::NotFound),
        };

        if is_directory && !self.children(&path).is_empty() {
            return Err(VfsError::DirectoryNotEmpty);
        }

        self.inodes.borrow_mut().remove(&path);
        self.content.borrow_mut().remove(&path);

        Ok(())
    }

    fn stat(&self, path: &str) -> Result<Inode, VfsError> {
        let path = resolve_path(path)?;

        self.inodes
            .borrow()
            .get(&path)
            .cloned()
            .ok_or(VfsError::NotFound)
    }

    fn exists(&self, path: &str) -> Result<bool, VfsError> {
        let path = resolve_path(path)?;
        Ok(self.inodes.borrow().contains_key(&path))
    }
}
