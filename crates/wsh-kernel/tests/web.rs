//! Browser-only checks, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use wsh_kernel::{GlobalLog, HostSink, Kernel, KernelConfig};
use wsh_shell::Level;

wasm_bindgen_test_configure!(run_in_browser);

/// Install `globalThis.log` collecting `level:text` into `globalThis.__lines`.
fn install_log_hook() {
    let global = js_sys::global();
    let lines = js_sys::Array::new();
    js_sys::Reflect::set(&global, &"__lines".into(), &lines).unwrap();

    let hook = js_sys::Function::new_with_args(
        "text, level",
        "globalThis.__lines.push(level + ':' + text);",
    );
    js_sys::Reflect::set(&global, &"log".into(), &hook).unwrap();
}

fn collected() -> Vec<String> {
    let lines = js_sys::Reflect::get(&js_sys::global(), &"__lines".into()).unwrap();
    js_sys::Array::from(&lines)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

/// A missing `globalThis.log` drops lines silently.
#[wasm_bindgen_test]
fn test_forward_without_hook() {
    js_sys::Reflect::set(&js_sys::global(), &"log".into(), &JsValue::UNDEFINED).unwrap();
    GlobalLog.forward(Level::Info, "dropped");
}

/// After init, kernel lines reach `globalThis.log` with their level.
#[wasm_bindgen_test]
fn test_init_mirrors_to_global_log() {
    install_log_hook();

    let kernel = Kernel::new();
    kernel.init(&KernelConfig::default());
    kernel.execute("nope");

    assert_eq!(
        collected(),
        [
            "info:Kernel initializing...",
            "info:This is an experimental WASM kernel",
            "error:Unknown command: nope",
        ]
    );
}
