//! The kernel aggregate behind the host exports.
//!
//! Owns the filesystem, the log sink and the lifecycle state. Every method
//! takes `&self`; the export layer keeps one instance per thread.

use std::cell::Cell;

use wsh_shell::{dispatch, Console, ShellContext, ShellError, STATUS_ERR, STATUS_OK};
use wsh_vfs::{bootstrap_filesystem, MemoryVfs, VfsService};

use crate::config::KernelConfig;
use crate::console::{BrowserConsole, GlobalLog, HostSink, MirroredConsole};
use crate::state::KernelState;

macro_rules! version_literal {
    () => {
        "0.1.0-wasm"
    };
}

/// Version string reported to the host.
pub const VERSION: &str = version_literal!();

/// [`VERSION`] followed by a NUL byte.
pub const VERSION_CSTR: &str = concat!(version_literal!(), "\0");

/// Shell kernel.
pub struct Kernel<C = BrowserConsole, H = GlobalLog> {
    vfs: MemoryVfs,
    console: MirroredConsole<C, H>,
    state: Cell<KernelState>,
}

impl Kernel {
    /// Kernel logging to the browser console and `globalThis.log`.
    pub fn new() -> Self {
        Self::with_sinks(BrowserConsole, GlobalLog)
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console, H: HostSink> Kernel<C, H> {
    /// Kernel with explicit log sinks. Starts in [`KernelState::Booting`]
    /// with an empty filesystem.
    pub fn with_sinks(console: C, host: H) -> Self {
        Self {
            vfs: MemoryVfs::new(),
            console: MirroredConsole::new(console, host),
            state: Cell::new(KernelState::Booting),
        }
    }

    pub fn state(&self) -> KernelState {
        self.state.get()
    }

    pub fn vfs(&self) -> &MemoryVfs {
        &self.vfs
    }

    /// Local log sink.
    pub fn console(&self) -> &C {
        self.console.console()
    }

    /// Mirror sink.
    pub fn host(&self) -> &H {
        self.console.host()
    }

    fn shell(&self) -> ShellContext<'_> {
        ShellContext::new(&self.vfs, &self.console)
    }

    /// Bring the kernel up.
    ///
    /// The first call turns on host mirroring (if configured), creates the
    /// configured directories and moves to [`KernelState::Running`]. Later
    /// calls change nothing.
    pub fn init(&self, config: &KernelConfig) -> KernelState {
        if self.state.get() != KernelState::Booting {
            return self.state.get();
        }

        if config.mirror_to_host {
            self.console.enable_mirror();
        }

        self.console.info("Kernel initializing...");

        if let Err(e) = bootstrap_filesystem(&self.vfs, &config.directories) {
            self.console
                .error(&format!("Failed to create default directories: {}", e));
        }

        self.console.info("This is an experimental WASM kernel");
        self.state.set(KernelState::Running);
        KernelState::Running
    }

    pub fn version(&self) -> &'static str {
        self.console.info("Version requested");
        VERSION
    }

    /// Run one command line through the dispatcher.
    pub fn execute(&self, line: &str) -> i32 {
        if line.is_empty() {
            self.console.error("Empty or invalid command");
            return STATUS_ERR;
        }
        dispatch(&self.shell(), line)
    }

    /// Create or truncate `path` with exactly `content`.
    pub fn write_file(&self, path: &str, content: &[u8]) -> i32 {
        match self.vfs.write_file(path, content) {
            Ok(()) => {
                self.console.info("File written successfully");
                STATUS_OK
            }
            Err(e) => self.fail(ShellError::io("Failed to open file for writing", path, e)),
        }
    }

    pub fn read_file(&self, path: &str) -> Option<Vec<u8>> {
        match self.vfs.read_file(path) {
            Ok(content) => Some(content),
            Err(e) => {
                self.fail(ShellError::io("Failed to open file for reading", path, e));
                None
            }
        }
    }

    /// 1 if `path` names a file or directory, 0 otherwise. Never logs.
    pub fn file_exists(&self, path: &str) -> i32 {
        match self.vfs.stat(path) {
            Ok(_) => 1,
            Err(_) => 0,
        }
    }

    pub fn delete_file(&self, path: &str) -> i32 {
        match self.vfs.remove(path) {
            Ok(()) => {
                self.console.info("File deleted successfully");
                STATUS_OK
            }
            Err(e) => self.fail(ShellError::io("Failed to delete file", path, e)),
        }
    }

    /// Entry names of a directory, each followed by `\n`, `.` and `..`
    /// first.
    pub fn list_directory(&self, path: &str) -> Option<String> {
        match self.vfs.readdir(path) {
            Ok(entries) => {
                let mut listing = String::new();
                for entry in &entries {
                    listing.push_str(&entry.name);
                    listing.push('\n');
                }
                Some(listing)
            }
            Err(e) => {
                self.fail(ShellError::io("Failed to open directory", path, e));
                None
            }
        }
    }

    /// Log a boundary-level failure.
    pub fn report(&self, message: &str) {
        self.console.error(message);
    }

    fn fail(&self, err: ShellError) -> i32 {
        self.console.error(&err.to_string());
        STATUS_ERR
    }
}
