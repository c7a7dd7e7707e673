//! Fixed capacity line buffer.
//!
//! A buffer with capacity `N` holds at most `N - 1` bytes of content,
//! followed by a NUL terminator. Content is plain bytes, no encoding is
//! assumed.

use core::str::{from_utf8, Utf8Error};

/// Backing storage for [`LineBuffer`]. The storage length is the
/// capacity of the line buffer.
pub trait Buffer {
    fn storage(&self) -> &[u8];
    fn storage_mut(&mut self) -> &mut [u8];
}

/// Placeholder buffer without any storage
pub struct NoBuffer {}

impl Buffer for NoBuffer {
    fn storage(&self) -> &[u8] {
        &[]
    }

    fn storage_mut(&mut self) -> &mut [u8] {
        &mut []
    }
}

/// Buffer borrowing a slice
pub type SliceBuffer<'a> = &'a mut [u8];

impl Buffer for &mut [u8] {
    fn storage(&self) -> &[u8] {
        self
    }

    fn storage_mut(&mut self) -> &mut [u8] {
        self
    }
}

/// Buffer owning an array
pub type StaticBuffer<const N: usize> = [u8; N];

impl<const N: usize> Buffer for [u8; N] {
    fn storage(&self) -> &[u8] {
        self.as_slice()
    }

    fn storage_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

pub struct LineBuffer<B: Buffer> {
    buf: B,
    len: usize,
}

impl<B: Buffer> LineBuffer<B> {
    pub fn new(buf: B) -> Self {
        let mut this = Self { buf, len: 0 };
        this.terminate();
        this
    }

    /// Total number of bytes in the storage, terminator included
    pub fn capacity(&self) -> usize {
        self.buf.storage().len()
    }

    /// Maximum content length
    pub fn max_len(&self) -> usize {
        self.capacity().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.max_len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf.storage()[..self.len]
    }

    /// Content followed by the NUL terminator. Empty if capacity is zero.
    pub fn as_slice_with_nul(&self) -> &[u8] {
        let storage = self.buf.storage();
        &storage[..(self.len + 1).min(storage.len())]
    }

    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        from_utf8(self.as_slice())
    }

    fn terminate(&mut self) {
        let len = self.len;

        if let Some(byte) = self.buf.storage_mut().get_mut(len) {
            *byte = 0;
        }
    }

    pub fn truncate(&mut self) {
        self.len = 0;
        self.terminate();
    }

    /// Insert byte at `index`, shifting the bytes after it one step
    /// right. Returns the byte back if the buffer is full.
    pub fn insert_byte(&mut self, index: usize, byte: u8) -> Result<(), u8> {
        if self.is_full() {
            return Err(byte);
        }

        let len = self.len;
        let index = index.min(len);
        let storage = self.buf.storage_mut();

        storage.copy_within(index..len, index + 1);
        storage[index] = byte;

        self.len += 1;
        self.terminate();

        Ok(())
    }

    /// Remove byte at `index`, shifting the bytes after it one step left
    pub fn remove_byte(&mut self, index: usize) -> Option<u8> {
        if index >= self.len {
            return None;
        }

        let len = self.len;
        let storage = self.buf.storage_mut();
        let byte = storage[index];

        storage.copy_within((index + 1)..len, index);

        self.len -= 1;
        self.terminate();

        Some(byte)
    }

    /// Start of the word before `index`: the position right after the
    /// last space found before `index - 1`, or 0.
    pub fn previous_word_start(&self, index: usize) -> usize {
        let index = index.min(self.len);

        if index == 0 {
            return 0;
        }

        self.as_slice()[..(index - 1)]
            .iter()
            .rposition(|&b| b == b' ')
            .map_or(0, |pos| pos + 1)
    }

    /// Position of the first space after `index`, or the end of the line
    pub fn next_word_end(&self, index: usize) -> usize {
        if index >= self.len {
            return self.len;
        }

        self.as_slice()[(index + 1)..]
            .iter()
            .position(|&b| b == b' ')
            .map_or(self.len, |pos| index + 1 + pos)
    }
}

impl<'a> LineBuffer<SliceBuffer<'a>> {
    pub fn from_slice(buffer: &'a mut [u8]) -> Self {
        Self::new(buffer)
    }
}

impl<const N: usize> LineBuffer<StaticBuffer<N>> {
    pub fn new_static() -> Self {
        Self::new([0; N])
    }
}

#[cfg(any(test, feature = "alloc"))]
mod feature_alloc {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Buffer owning a heap allocation of fixed size
    pub type AllocBuffer = Vec<u8>;

    impl Buffer for Vec<u8> {
        fn storage(&self) -> &[u8] {
            self.as_slice()
        }

        fn storage_mut(&mut self) -> &mut [u8] {
            self.as_mut_slice()
        }
    }

    impl LineBuffer<AllocBuffer> {
        pub fn with_capacity(capacity: usize) -> Self {
            Self::new(vec![0; capacity])
        }

        /// Consume line buffer and return the content
        pub fn into_vec(self) -> Vec<u8> {
            let mut buf = self.buf;
            buf.truncate(self.len);
            buf
        }
    }
}

#[cfg(any(test, feature = "alloc"))]
pub use feature_alloc::*;
