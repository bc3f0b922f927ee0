//! Byte transfer across the host boundary.
//!
//! Outbound data travels in an [`OwnedBuffer`]: the guest allocates it,
//! leaks it to the host as `(ptr, len)`, and the host hands it back exactly
//! once through `buffer_free`. Every buffer carries one extra NUL byte past
//! `len` so hosts that treat it as a C string still find a terminator;
//! hosts that read `len` bytes see binary content unchanged.
//!
//! Inbound data is read from host-staged memory through [`input_bytes`] and
//! [`input_str`]. Hosts without their own allocator stage it with
//! [`stage`] / [`unstage`].

use std::ptr;

use crate::error::BoundaryError;

/// Guest-allocated bytes handed to the host.
#[derive(Debug, PartialEq, Eq)]
pub struct OwnedBuffer {
    /// Content followed by one NUL byte
    bytes: Box<[u8]>,
}

impl OwnedBuffer {
    /// Copy `content` into a new buffer.
    pub fn from_bytes(content: &[u8]) -> Result<Self, BoundaryError> {
        let size = content.len().checked_add(1).ok_or(BoundaryError::Allocation)?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|_| BoundaryError::Allocation)?;
        bytes.extend_from_slice(content);
        bytes.push(0);

        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Content length, terminator excluded.
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Leak to the host. Returns the pointer and the content length.
    pub fn into_raw(self) -> (*mut u8, usize) {
        let len = self.len();
        let ptr = Box::into_raw(self.bytes) as *mut u8;
        (ptr, len)
    }

    /// Reclaim a buffer previously leaked by [`into_raw`](Self::into_raw).
    ///
    /// # Safety
    /// `ptr` and `len` must be exactly what `into_raw` returned, and the
    /// buffer must not have been reclaimed already.
    pub unsafe fn from_raw(ptr: *mut u8, len: usize) -> Self {
        let slice = ptr::slice_from_raw_parts_mut(ptr, len + 1);
        Self {
            bytes: Box::from_raw(slice),
        }
    }
}

/// Allocate `len` zeroed bytes for the host to write input into.
pub fn stage(len: usize) -> Result<*mut u8, BoundaryError> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| BoundaryError::Allocation)?;
    bytes.resize(len, 0);
    Ok(Box::into_raw(bytes.into_boxed_slice()) as *mut u8)
}

/// Release memory obtained from [`stage`].
///
/// # Safety
/// `ptr` and `len` must come from one `stage` call that has not been
/// released yet.
pub unsafe fn unstage(ptr: *mut u8, len: usize) {
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, len)));
}

/// View host memory as bytes. A zero length never dereferences `ptr`.
///
/// # Safety
/// When `len > 0`, `ptr` must point to `len` readable bytes that stay
/// valid and unmodified for `'a`.
pub unsafe fn input_bytes<'a>(ptr: *const u8, len: usize) -> Result<&'a [u8], BoundaryError> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(BoundaryError::NullPointer);
    }
    Ok(std::slice::from_raw_parts(ptr, len))
}

/// View host memory as UTF-8 text.
///
/// # Safety
/// Same contract as [`input_bytes`].
pub unsafe fn input_str<'a>(ptr: *const u8, len: usize) -> Result<&'a str, BoundaryError> {
    let bytes = input_bytes(ptr, len)?;
    std::str::from_utf8(bytes).map_err(|_| BoundaryError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_nul_terminated() {
        let buffer = OwnedBuffer::from_bytes(b"hi").unwrap();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.as_bytes(), b"hi");

        let (ptr, len) = buffer.into_raw();
        let raw = unsafe { std::slice::from_raw_parts(ptr, len + 1) };
        assert_eq!(raw, b"hi\0");

        let back = unsafe { OwnedBuffer::from_raw(ptr, len) };
        assert_eq!(back.as_bytes(), b"hi");
    }

    #[test]
    fn test_buffer_keeps_interior_nul() {
        let content = b"a\0b\0";
        let (ptr, len) = OwnedBuffer::from_bytes(content).unwrap().into_raw();
        assert_eq!(len, 4);

        let back = unsafe { OwnedBuffer::from_raw(ptr, len) };
        assert_eq!(back.as_bytes(), content);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = OwnedBuffer::from_bytes(b"").unwrap();
        assert!(buffer.is_empty());

        let (ptr, len) = buffer.into_raw();
        assert!(!ptr.is_null());
        assert_eq!(unsafe { *ptr }, 0);
        drop(unsafe { OwnedBuffer::from_raw(ptr, len) });
    }

    #[test]
    fn test_stage_and_read_back() {
        let ptr = stage(3).unwrap();
        unsafe {
            ptr::copy_nonoverlapping(b"abc".as_ptr(), ptr, 3);
            assert_eq!(input_str(ptr, 3).unwrap(), "abc");
            unstage(ptr, 3);
        }

        let empty = stage(0).unwrap();
        unsafe { unstage(empty, 0) };
    }

    #[test]
    fn test_input_rejects_null_and_bad_utf8() {
        unsafe {
            assert_eq!(input_bytes(ptr::null(), 0).unwrap(), b"");
            assert_eq!(input_bytes(ptr::null(), 4), Err(BoundaryError::NullPointer));

            let bad = [0xffu8, 0xfe];
            assert_eq!(
                input_str(bad.as_ptr(), bad.len()),
                Err(BoundaryError::InvalidUtf8)
            );
        }
    }
}
