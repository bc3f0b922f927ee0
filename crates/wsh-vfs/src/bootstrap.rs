//! Filesystem bootstrap for the VFS layer.
//!
//! Creates the default directory layout at kernel init.

use crate::core::VfsError;
use crate::service::VfsService;

/// Directory layout a browser-hosted POSIX filesystem starts with.
///
/// ```text
/// /
/// ├── tmp/
/// └── home/
///     └── web_user/
/// ```
pub const DEFAULT_DIRECTORIES: &[&str] = &["/tmp", "/home", "/home/web_user"];

/// Bootstrap the filesystem with the given directories.
///
/// This function is idempotent - directories that already exist are left
/// alone, together with everything inside them.
pub fn bootstrap_filesystem<V, S>(vfs: &V, directories: &[S]) -> Result<(), VfsError>
where
    V: VfsService,
    S: AsRef<str>,
{
    for dir in directories {
        vfs.mkdir_p(dir.as_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryVfs;

    #[test]
    fn test_bootstrap_default_layout() {
        let vfs = MemoryVfs::new();

        bootstrap_filesystem(&vfs, DEFAULT_DIRECTORIES).unwrap();

        assert!(vfs.stat("/tmp").unwrap().is_directory());
        assert!(vfs.stat("/home").unwrap().is_directory());
        assert!(vfs.stat("/home/web_user").unwrap().is_directory());
    }

    #[test]
    fn test_bootstrap_is_idempotent() {
        let vfs = MemoryVfs::new();

        bootstrap_filesystem(&vfs, DEFAULT_DIRECTORIES).unwrap();
        vfs.write_file("/tmp/keep.txt", b"still here").unwrap();
        bootstrap_filesystem(&vfs, DEFAULT_DIRECTORIES).unwrap();

        assert_eq!(vfs.read_file("/tmp/keep.txt").unwrap(), b"still here");
    }

    #[test]
    fn test_bootstrap_fails_on_file_in_the_way() {
        let vfs = MemoryVfs::new();

        vfs.write_file("/tmp", b"not a dir").unwrap();
        assert_eq!(
            bootstrap_filesystem(&vfs, &["/tmp"]),
            Err(VfsError::NotADirectory)
        );
    }
}
