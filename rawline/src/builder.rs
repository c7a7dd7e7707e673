//! Builder for editors

use crate::{
    line_buffer::{Buffer, LineBuffer, NoBuffer, SliceBuffer, StaticBuffer},
    sync_editor,
};

#[cfg(any(test, feature = "alloc"))]
use crate::line_buffer::AllocBuffer;

/// Builder for [`sync_editor::Editor`].
///
/// The buffer decides the line capacity: a buffer of `N` bytes holds a
/// line of at most `N - 1` bytes plus a terminator.
///
/// # Example
/// ```
/// use rawline::builder::EditorBuilder;
///
/// let mut buffer = [0; 100];
/// let editor = EditorBuilder::from_slice(&mut buffer).build();
///
/// assert_eq!(editor.buffer().max_len(), 99);
/// ```
pub struct EditorBuilder<B: Buffer> {
    line_buffer: LineBuffer<B>,
}

impl EditorBuilder<NoBuffer> {
    /// Create builder for editor with a borrowed buffer
    pub fn from_slice(buffer: &mut [u8]) -> EditorBuilder<SliceBuffer<'_>> {
        EditorBuilder {
            line_buffer: LineBuffer::from_slice(buffer),
        }
    }

    /// Create builder for editor with an owned array of `N` bytes
    ///
    /// # Example
    /// ```
    /// use rawline::builder::EditorBuilder;
    ///
    /// let builder = EditorBuilder::new_static::<256>();
    /// ```
    pub fn new_static<const N: usize>() -> EditorBuilder<StaticBuffer<N>> {
        EditorBuilder {
            line_buffer: LineBuffer::new_static(),
        }
    }

    #[cfg(any(test, feature = "alloc"))]
    /// Create builder for editor with a heap allocated buffer of
    /// `capacity` bytes
    pub fn with_capacity(capacity: usize) -> EditorBuilder<AllocBuffer> {
        EditorBuilder {
            line_buffer: LineBuffer::with_capacity(capacity),
        }
    }
}

impl<B: Buffer> EditorBuilder<B> {
    /// Build [`sync_editor::Editor`]. Is equivalent of calling [`sync_editor::Editor::new()`].
    pub fn build(self) -> sync_editor::Editor<B> {
        sync_editor::Editor::new(self.line_buffer)
    }
}
