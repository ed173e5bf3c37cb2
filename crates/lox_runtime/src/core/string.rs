//! Immutable string objects.

use super::heap::out_of_memory;
use std::alloc::Layout;
use std::fmt;
use std::str;

/// String payload of a heap object.
///
/// `chars` holds the content followed by a single NUL byte, so the buffer is
/// always `len() + 1` bytes long. Neither the bytes nor the hash change after
/// construction.
pub struct LoxString {
    chars: Box<[u8]>,
    hash: u32,
}

impl LoxString {
    /// Adopt a caller-owned buffer.
    ///
    /// The allocation is kept as is only when the capacity is exactly
    /// `len + 1`. A full buffer (`len == capacity`, as `to_vec` gives) must grow
    /// for the terminator, and surplus capacity is shrunk away by
    /// `into_boxed_slice`; either may move the content once.
    pub(crate) fn from_owned(mut buffer: Vec<u8>, hash: u32) -> Self {
        if buffer.try_reserve_exact(1).is_err() {
            out_of_memory(byte_layout(buffer.len() + 1));
        }
        buffer.push(0);
        Self {
            chars: buffer.into_boxed_slice(),
            hash,
        }
    }

    /// Copy `source` into a fresh buffer of `source.len() + 1` bytes.
    pub(crate) fn from_slice(source: &[u8], hash: u32) -> Self {
        let mut buffer = Vec::new();
        if buffer.try_reserve_exact(source.len() + 1).is_err() {
            out_of_memory(byte_layout(source.len() + 1));
        }
        buffer.extend_from_slice(source);
        buffer.push(0);
        Self {
            chars: buffer.into_boxed_slice(),
            hash,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn hash(&self) -> u32 {
        self.hash
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars[..self.len()]
    }

    /// Content plus the trailing NUL.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.chars
    }

    #[inline]
    pub fn as_str(&self) -> Result<&str, str::Utf8Error> {
        str::from_utf8(self.as_bytes())
    }
}

impl fmt::Debug for LoxString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoxString")
            .field("chars", &String::from_utf8_lossy(self.as_bytes()))
            .field("hash", &self.hash)
            .finish()
    }
}

pub(crate) fn byte_layout(len: usize) -> Layout {
    Layout::array::<u8>(len).unwrap_or(Layout::new::<u8>())
}
