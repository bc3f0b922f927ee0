//! Raw exports for the host.
//!
//! Every export works on one per-thread [`Kernel`], created on first use,
//! so file exports are usable before `init`. Inputs are `(ptr, len)` pairs
//! of host-staged bytes; outputs are [`OwnedBuffer`]s whose length is
//! written through `out_len`. Failures are logged and reported as -1 or
//! null.
//!
//! | Export | Returns |
//! |--------|---------|
//! | `init` / `init_with_config` | [`KernelState`](crate::KernelState) code (`Running`), or -1 on a bad config |
//! | `kernel_state` | [`KernelState`](crate::KernelState) code |
//! | `get_version` | static C string |
//! | `execute` / `write_file` / `delete_file` | command status |
//! | `file_exists` | 1 or 0 |
//! | `read_file` / `list_directory` | owned buffer or null |
//! | `guest_alloc` / `guest_free` | input staging memory |
//! | `buffer_free` | releases an owned buffer |
//!
//! Symbol names are only assigned on `wasm32`; natively the functions keep
//! their Rust names so they can be called from tests.

use std::ptr;

use wsh_shell::STATUS_ERR;

use crate::buffer::{self, OwnedBuffer};
use crate::config::KernelConfig;
use crate::error::BoundaryError;
use crate::kernel::{Kernel, VERSION_CSTR};

thread_local! {
    static KERNEL: Kernel = new_kernel();
}

fn new_kernel() -> Kernel {
    // Set up panic hook for better error messages
    #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))]
    console_error_panic_hook::set_once();

    Kernel::new()
}

fn with_kernel<R>(f: impl FnOnce(&Kernel) -> R) -> R {
    KERNEL.with(f)
}

/// Log a boundary failure.
fn report(kernel: &Kernel, context: &str, err: &BoundaryError) {
    kernel.report(&format!("{}: {}", context, err));
}

/// Hand `content` to the host, writing its length to `out_len`.
///
/// # Safety
/// `out_len` must be null or valid for one `u32` write.
unsafe fn hand_over(kernel: &Kernel, content: &[u8], out_len: *mut u32) -> *mut u8 {
    let len = match u32::try_from(content.len()) {
        Ok(len) => len,
        Err(_) => {
            kernel.report(&BoundaryError::Allocation.to_string());
            return ptr::null_mut();
        }
    };

    match OwnedBuffer::from_bytes(content) {
        Ok(buffer) => {
            if !out_len.is_null() {
                *out_len = len;
            }
            buffer.into_raw().0
        }
        Err(e) => {
            kernel.report(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Initialize with the default configuration. Returns the resulting
/// state code.
#[cfg_attr(target_arch = "wasm32", export_name = "init")]
pub extern "C" fn wsh_init() -> i32 {
    with_kernel(|k| k.init(&KernelConfig::default()).code())
}

/// Initialize with a JSON [`KernelConfig`]. Returns the resulting state
/// code, or -1 when the config cannot be read.
///
/// # Safety
/// `json_ptr` must point to `json_len` readable bytes.
#[cfg_attr(target_arch = "wasm32", export_name = "init_with_config")]
pub unsafe extern "C" fn wsh_init_with_config(json_ptr: *const u8, json_len: u32) -> i32 {
    with_kernel(|k| {
        let config = buffer::input_str(json_ptr, json_len as usize)
            .and_then(KernelConfig::from_json);
        match config {
            Ok(config) => k.init(&config).code(),
            Err(e) => {
                report(k, "init_with_config", &e);
                STATUS_ERR
            }
        }
    })
}

/// Current [`KernelState`](crate::KernelState) code.
#[cfg_attr(target_arch = "wasm32", export_name = "kernel_state")]
pub extern "C" fn wsh_kernel_state() -> i32 {
    with_kernel(|k| k.state().code())
}

/// Static NUL-terminated version string. Not owned by the host.
#[cfg_attr(target_arch = "wasm32", export_name = "get_version")]
pub extern "C" fn wsh_get_version() -> *const u8 {
    with_kernel(|k| {
        k.version();
        VERSION_CSTR.as_ptr()
    })
}

/// Run one command line.
///
/// # Safety
/// `ptr` must point to `len` readable bytes.
#[cfg_attr(target_arch = "wasm32", export_name = "execute")]
pub unsafe extern "C" fn wsh_execute(ptr: *const u8, len: u32) -> i32 {
    with_kernel(|k| match buffer::input_str(ptr, len as usize) {
        Ok(line) => k.execute(line),
        Err(_) => {
            k.report("Empty or invalid command");
            STATUS_ERR
        }
    })
}

/// Create or truncate a file with exactly `data_len` bytes.
///
/// # Safety
/// Both pointers must point to their lengths in readable bytes.
#[cfg_attr(target_arch = "wasm32", export_name = "write_file")]
pub unsafe extern "C" fn wsh_write_file(
    path_ptr: *const u8,
    path_len: u32,
    data_ptr: *const u8,
    data_len: u32,
) -> i32 {
    with_kernel(|k| {
        let path = match buffer::input_str(path_ptr, path_len as usize) {
            Ok(path) => path,
            Err(e) => {
                report(k, "write_file", &e);
                return STATUS_ERR;
            }
        };
        let data = match buffer::input_bytes(data_ptr, data_len as usize) {
            Ok(data) => data,
            Err(e) => {
                report(k, "write_file", &e);
                return STATUS_ERR;
            }
        };
        k.write_file(path, data)
    })
}

/// Read a whole file into an owned buffer.
///
/// # Safety
/// `path_ptr` must point to `path_len` readable bytes; `out_len` must be
/// null or writable.
#[cfg_attr(target_arch = "wasm32", export_name = "read_file")]
pub unsafe extern "C" fn wsh_read_file(
    path_ptr: *const u8,
    path_len: u32,
    out_len: *mut u32,
) -> *mut u8 {
    with_kernel(|k| {
        let path = match buffer::input_str(path_ptr, path_len as usize) {
            Ok(path) => path,
            Err(e) => {
                report(k, "read_file", &e);
                return ptr::null_mut();
            }
        };
        match k.read_file(path) {
            Some(content) => hand_over(k, &content, out_len),
            None => ptr::null_mut(),
        }
    })
}

/// 1 if the path exists, 0 otherwise (including unreadable input).
///
/// # Safety
/// `path_ptr` must point to `path_len` readable bytes.
#[cfg_attr(target_arch = "wasm32", export_name = "file_exists")]
pub unsafe extern "C" fn wsh_file_exists(path_ptr: *const u8, path_len: u32) -> i32 {
    with_kernel(|k| match buffer::input_str(path_ptr, path_len as usize) {
        Ok(path) => k.file_exists(path),
        Err(_) => 0,
    })
}

/// Remove a file or an empty directory.
///
/// # Safety
/// `path_ptr` must point to `path_len` readable bytes.
#[cfg_attr(target_arch = "wasm32", export_name = "delete_file")]
pub unsafe extern "C" fn wsh_delete_file(path_ptr: *const u8, path_len: u32) -> i32 {
    with_kernel(|k| match buffer::input_str(path_ptr, path_len as usize) {
        Ok(path) => k.delete_file(path),
        Err(e) => {
            report(k, "delete_file", &e);
            STATUS_ERR
        }
    })
}

/// Newline-terminated entry names of a directory, as an owned buffer.
///
/// # Safety
/// `path_ptr` must point to `path_len` readable bytes; `out_len` must be
/// null or writable.
#[cfg_attr(target_arch = "wasm32", export_name = "list_directory")]
pub unsafe extern "C" fn wsh_list_directory(
    path_ptr: *const u8,
    path_len: u32,
    out_len: *mut u32,
) -> *mut u8 {
    with_kernel(|k| {
        let path = match buffer::input_str(path_ptr, path_len as usize) {
            Ok(path) => path,
            Err(e) => {
                report(k, "list_directory", &e);
                return ptr::null_mut();
            }
        };
        match k.list_directory(path) {
            Some(listing) => hand_over(k, listing.as_bytes(), out_len),
            None => ptr::null_mut(),
        }
    })
}

/// Allocate `len` bytes for the host to stage input in.
#[cfg_attr(target_arch = "wasm32", export_name = "guest_alloc")]
pub extern "C" fn wsh_guest_alloc(len: u32) -> *mut u8 {
    match buffer::stage(len as usize) {
        Ok(ptr) => ptr,
        Err(e) => {
            with_kernel(|k| report(k, "guest_alloc", &e));
            ptr::null_mut()
        }
    }
}

/// Release memory from `guest_alloc`.
///
/// # Safety
/// `ptr` and `len` must come from one `guest_alloc` call not yet released.
#[cfg_attr(target_arch = "wasm32", export_name = "guest_free")]
pub unsafe extern "C" fn wsh_guest_free(ptr: *mut u8, len: u32) {
    if !ptr.is_null() {
        buffer::unstage(ptr, len as usize);
    }
}

/// Release an owned buffer returned by `read_file` or `list_directory`.
///
/// # Safety
/// `ptr` must be a buffer returned by this module and `len` the length
/// reported for it. Each buffer may be released once.
#[cfg_attr(target_arch = "wasm32", export_name = "buffer_free")]
pub unsafe extern "C" fn wsh_buffer_free(ptr: *mut u8, len: u32) {
    if !ptr.is_null() {
        drop(OwnedBuffer::from_raw(ptr, len as usize));
    }
}
