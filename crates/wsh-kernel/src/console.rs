//! Browser log sinks.
//!
//! [`BrowserConsole`] writes to the devtools console (stdout/stderr when
//! running natively). [`GlobalLog`] forwards to a host-provided
//! `globalThis.log(text, level)` function. [`MirroredConsole`] joins the
//! two once the kernel has initialized.

use std::cell::Cell;

use wsh_shell::{Console, Level};

/// Destination for mirrored log lines.
pub trait HostSink {
    /// Forward one line. Must not fail; a missing sink drops the line.
    fn forward(&self, level: Level, text: &str);
}

/// Devtools console.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConsole;

impl Console for BrowserConsole {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, level: Level, text: &str) {
        let value = wasm_bindgen::JsValue::from_str(text);
        match level {
            Level::Info => web_sys::console::log_1(&value),
            Level::Error => web_sys::console::error_1(&value),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, level: Level, text: &str) {
        match level {
            Level::Info => println!("{}", text),
            Level::Error => eprintln!("{}", text),
        }
    }
}

/// `globalThis.log(text, level)`, looked up on every call so the page can
/// install it at any time.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalLog;

impl HostSink for GlobalLog {
    #[cfg(target_arch = "wasm32")]
    fn forward(&self, level: Level, text: &str) {
        use wasm_bindgen::{JsCast, JsValue};

        let global = js_sys::global();
        let log_fn = match js_sys::Reflect::get(&global, &"log".into()) {
            Ok(f) => match f.dyn_into::<js_sys::Function>() {
                Ok(func) => func,
                Err(_) => return,
            },
            Err(_) => return,
        };

        let _ = log_fn.call2(
            &JsValue::UNDEFINED,
            &JsValue::from_str(text),
            &JsValue::from_str(level.as_str()),
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn forward(&self, _level: Level, _text: &str) {}
}

/// Console that writes every line to `console` and, once enabled, also to
/// `host`.
pub struct MirroredConsole<C, H> {
    console: C,
    host: H,
    mirrored: Cell<bool>,
}

impl<C: Console, H: HostSink> MirroredConsole<C, H> {
    /// Create with mirroring off.
    pub fn new(console: C, host: H) -> Self {
        Self {
            console,
            host,
            mirrored: Cell::new(false),
        }
    }

    /// Start duplicating lines to the host sink. Idempotent.
    pub fn enable_mirror(&self) {
        self.mirrored.set(true);
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored.get()
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<C: Console, H: HostSink> Console for MirroredConsole<C, H> {
    fn write(&self, level: Level, text: &str) {
        self.console.write(level, text);
        if self.mirrored.get() {
            self.host.forward(level, text);
        }
    }
}

/// Host sink that records forwarded lines.
#[derive(Default)]
pub struct RecordingSink {
    lines: std::cell::RefCell<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of forwarded lines.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }
}

impl HostSink for RecordingSink {
    fn forward(&self, level: Level, text: &str) {
        self.lines.borrow_mut().push((level, text.to_string()));
    }
}
