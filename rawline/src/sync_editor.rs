//! Line editor for synchronous IO.
//!
//! The editor takes an [`IO`] wrapping a reader implementing
//! [`embedded_io::Read`] and a writer implementing [`embedded_io::Write`].
//! The terminal is expected to already be in non-canonical, no-echo
//! mode.
//!
//! Use the [`crate::builder::EditorBuilder`] to build an editor.

use crate::core::Line;
use crate::error::RawlineError;
use crate::input::KeyDecoder;
use crate::line_buffer::{Buffer, LineBuffer};
use crate::output::{Output, OutputItem};
use crate::sync_io::IO;

/// Line editor for synchronous IO
///
/// It is recommended to use [`crate::builder::EditorBuilder`] to build an Editor.
pub struct Editor<B: Buffer> {
    buffer: LineBuffer<B>,
}

impl<B: Buffer> Editor<B> {
    /// Create line editor using `buffer` for storage
    pub fn new(buffer: LineBuffer<B>) -> Self {
        Self { buffer }
    }

    fn handle_output<R, W>(output: Output<'_>, io: &mut IO<R, W>) -> Result<bool, RawlineError>
    where
        R: embedded_io::Read,
        W: embedded_io::Write,
    {
        let mut done = false;

        for item in output {
            if let Some(bytes) = item.get_bytes() {
                io.write(bytes)?;
            }

            if let OutputItem::EndOfLine = item {
                done = true;
            }
        }

        io.flush()?;

        Ok(done)
    }

    /// Read a line, redrawing it after every key. Returns the content
    /// once a line feed is read.
    ///
    /// Keys are pulled with [`KeyDecoder::next_key`]. A decoder is
    /// created per call, so an escape sequence left unfinished by an
    /// earlier failed call does not leak into the next line.
    pub fn readline<'b, R, W>(&'b mut self, io: &mut IO<R, W>) -> Result<&'b [u8], RawlineError>
    where
        R: embedded_io::Read,
        W: embedded_io::Write,
    {
        let mut decoder = KeyDecoder::new();
        let mut line = Line::new(&mut self.buffer);
        line.reset();

        loop {
            let key = decoder.next_key(io)?;

            if Self::handle_output(line.apply(key), io)? {
                break;
            }
        }

        log::debug!("read line of {} bytes", self.buffer.len());

        Ok(self.buffer.as_slice())
    }

    pub fn buffer(&self) -> &LineBuffer<B> {
        &self.buffer
    }

    /// Consume editor and return the line buffer
    pub fn into_buffer(self) -> LineBuffer<B> {
        self.buffer
    }
}

/// Read a single line using a buffer of `capacity` bytes, at most
/// `capacity - 1` of which hold content. Returns the content and its
/// length.
#[cfg(any(test, feature = "alloc"))]
pub fn read_line<R, W>(
    capacity: usize,
    io: &mut IO<R, W>,
) -> Result<(alloc::vec::Vec<u8>, usize), RawlineError>
where
    R: embedded_io::Read,
    W: embedded_io::Write,
{
    let mut editor = Editor::new(LineBuffer::with_capacity(capacity));

    let len = editor.readline(io)?.len();

    Ok((editor.into_buffer().into_vec(), len))
}
