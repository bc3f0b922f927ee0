//! Path utilities for the VFS layer.
//!
//! Provides path validation and resolution. The working directory is always
//! the root, so relative paths resolve against `/`.

use alloc::string::String;
use alloc::vec::Vec;

use super::error::VfsError;

/// The root directory.
pub const ROOT: &str = "/";

/// Validate that a path is well-formed.
pub fn validate_path(path: &str) -> Result<(), VfsError> {
    if path.is_empty() {
        return Err(VfsError::invalid_path("Empty path"));
    }

    if path.contains('\0') {
        return Err(VfsError::invalid_path("Path contains null character"));
    }

    Ok(())
}

/// Resolve a path to its canonical absolute form.
///
/// Drops `.` components and redundant slashes. `..` pops the previous
/// component and stops at the root, so `/..` resolves to `/`.
pub fn resolve_path(path: &str) -> Result<String, VfsError> {
    validate_path(path)?;

    let mut components: Vec<&str> = Vec::new();

    for component in path.split('/') {
        match component {
            "" | "." => continue,
            ".." => {
                components.pop();
            }
            c => components.push(c),
        }
    }

    if components.is_empty() {
        return Ok(String::from(ROOT));
    }

    let mut result = String::new();
    for component in components {
        result.push('/');
        result.push_str(component);
    }
    Ok(result)
}

/// Get the parent path of a canonical path.
pub fn parent_path(path: &str) -> String {
    if path == ROOT {
        return String::from(ROOT);
    }

    match path.rfind('/') {
        Some(0) | None => String::from(ROOT),
        Some(pos) => String::from(&path[..pos]),
    }
}

/// Get the filename (last component) of a canonical path.
pub fn filename(path: &str) -> &str {
    if path == ROOT {
        return "";
    }

    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Join a directory path and an entry name.
///
/// A separator is inserted only when `base` does not already end in one.
pub fn join_path(base: &str, name: &str) -> String {
    if base.ends_with('/') {
        alloc::format!("{}{}", base, name)
    } else {
        alloc::format!("{}/{}", base, name)
    }
}
