//! `ls` - list directory contents.

use alloc::format;
use wsh_vfs::{join_path, ROOT};

use crate::command::{Command, ShellContext};
use crate::error::ShellError;

/// List command instance.
pub static LS: LsCommand = LsCommand;

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn usage(&self) -> &'static str {
        "Usage: ls [path]"
    }

    fn execute(&self, ctx: &ShellContext<'_>, argument: &str) -> Result<(), ShellError> {
        let path = if argument.is_empty() { ROOT } else { argument };

        ctx.console.info(&format!("Listing directory: {}", path));

        let entries = ctx
            .vfs
            .readdir(path)
            .map_err(|e| ShellError::io("Failed to open directory", path, e))?;

        for entry in entries {
            let full_path = join_path(path, &entry.name);
            match ctx.vfs.stat(&full_path) {
                Ok(inode) => {
                    let marker = if inode.is_directory() { "d" } else { "-" };
                    ctx.console.info(&format!("{} {}", marker, entry.name));
                }
                Err(_) => ctx.console.info(&entry.name),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;
    use crate::console::Level;
    use crate::{STATUS_ERR, STATUS_OK};
    use alloc::string::String;
    use alloc::vec::Vec;
    use wsh_vfs::{DirEntry, Inode, MemoryVfs, VfsError, VfsService};

    fn info(h: &Harness) -> Vec<String> {
        h.console.texts(Level::Info)
    }

    #[test]
    fn test_ls_defaults_to_root() {
        let h = Harness::new();
        h.vfs.mkdir("/tmp").unwrap();
        h.vfs.write_file("/readme", b"hi").unwrap();

        assert_eq!(LS.run(&h.ctx(), ""), STATUS_OK);
        assert_eq!(
            info(&h),
            ["Listing directory: /", "d .", "d ..", "- readme", "d tmp"]
        );
    }

    #[test]
    fn test_ls_subdirectory_without_trailing_slash() {
        let h = Harness::new();
        h.vfs.mkdir_p("/home/web_user").unwrap();
        h.vfs.write_file("/home/web_user/a.txt", b"a").unwrap();

        assert_eq!(LS.run(&h.ctx(), "/home/web_user"), STATUS_OK);
        assert_eq!(
            info(&h),
            [
                "Listing directory: /home/web_user",
                "d .",
                "d ..",
                "- a.txt"
            ]
        );
    }

    #[test]
    fn test_ls_relative_path() {
        let h = Harness::new();
        h.vfs.mkdir("/tmp").unwrap();

        assert_eq!(LS.run(&h.ctx(), "tmp"), STATUS_OK);
        assert_eq!(info(&h), ["Listing directory: tmp", "d .", "d .."]);
    }

    /// Filesystem whose `stat` fails for one path.
    struct UnstatableEntry<'a> {
        inner: &'a MemoryVfs,
        hidden: &'a str,
    }

    impl VfsService for UnstatableEntry<'_> {
        fn mkdir(&self, path: &str) -> Result<(), VfsError> {
            self.inner.mkdir(path)
        }

        fn mkdir_p(&self, path: &str) -> Result<(), VfsError> {
            self.inner.mkdir_p(path)
        }

        fn readdir(&self, path: &str) -> Result<Vec<DirEntry>, VfsError> {
            self.inner.readdir(path)
        }

        fn write_file(&self, path: &str, content: &[u8]) -> Result<(), VfsError> {
            self.inner.write_file(path, content)
        }

        fn read_file(&self, path: &str) -> Result<Vec<u8>, VfsError> {
            self.inner.read_file(path)
        }

        fn remove(&self, path: &str) -> Result<(), VfsError> {
            self.inner.remove(path)
        }

        fn stat(&self, path: &str) -> Result<Inode, VfsError> {
            if path == self.hidden {
                return Err(VfsError::PermissionDenied);
            }
            self.inner.stat(path)
        }

        fn exists(&self, path: &str) -> Result<bool, VfsError> {
            self.inner.exists(path)
        }
    }

    #[test]
    fn test_ls_entry_without_metadata_is_bare_name() {
        let h = Harness::new();
        h.vfs.mkdir("/tmp").unwrap();
        h.vfs.write_file("/secret", b"s").unwrap();
        let vfs = UnstatableEntry {
            inner: &h.vfs,
            hidden: "/secret",
        };
        let ctx = ShellContext::new(&vfs, &h.console);

        assert_eq!(LS.run(&ctx, "/"), STATUS_OK);
        assert_eq!(
            info(&h),
            ["Listing directory: /", "d .", "d ..", "secret", "d tmp"]
        );
        assert!(h.console.texts(Level::Error).is_empty());
    }

    #[test]
    fn test_ls_missing_directory() {
        let h = Harness::new();

        assert_eq!(LS.run(&h.ctx(), "/nope"), STATUS_ERR);
        assert_eq!(
            h.console.texts(Level::Error),
            ["Failed to open directory: /nope (No such file or directory)"]
        );
    }

    #[test]
    fn test_ls_on_file_fails() {
        let h = Harness::new();
        h.vfs.write_file("/file", b"x").unwrap();

        assert_eq!(LS.run(&h.ctx(), "/file"), STATUS_ERR);
        assert_eq!(
            h.console.texts(Level::Error),
            ["Failed to open directory: /file (Not a directory)"]
        );
    }
}
