//! wsh Kernel - host boundary for the WebAssembly shell
//!
//! This crate is the only part of the shell the host page talks to. It
//! owns the in-memory filesystem and exposes a fixed set of raw exports.
//!
//! ## Module Structure
//!
//! - `abi` - `extern "C"` exports and the per-thread kernel instance
//! - `kernel` - The [`Kernel`] aggregate the exports delegate to
//! - `buffer` - Owned-buffer transfer and input staging
//! - `console` - Browser console and `globalThis.log` sinks
//! - `config` - Host-supplied [`KernelConfig`]
//! - `state` - [`KernelState`] lifecycle codes
//! - `error` - [`BoundaryError`]
//!
//! ## Architecture
//!
//! ```text
//! host ──► abi ──► Kernel ──┬──► wsh-shell dispatcher ──► commands
//!                           │                               │
//!                           └──► wsh-vfs MemoryVfs ◄────────┘
//! ```
//!
//! `Kernel` is plain Rust and is tested natively; `abi` only converts
//! pointers and lengths and maps failures to -1 / null.

pub mod abi;
pub mod buffer;
pub mod config;
pub mod console;
pub mod error;
pub mod kernel;
pub mod state;

pub use buffer::OwnedBuffer;
pub use config::KernelConfig;
pub use console::{BrowserConsole, GlobalLog, HostSink, MirroredConsole, RecordingSink};
pub use error::BoundaryError;
pub use kernel::{Kernel, VERSION};
pub use state::KernelState;
