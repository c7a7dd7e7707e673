//! Core state machine for editing a single line.
//!
//! [`Line`] owns the cursor and borrows the buffer. Feed it keys
//! decoded by [`crate::input::KeyDecoder`] with [`Line::apply`], and
//! write the bytes of the returned [`Output`] to the terminal.

use crate::input::Key;
use crate::line_buffer::{Buffer, LineBuffer};
use crate::output::{Output, OutputAction};

pub struct Line<'a, B: Buffer> {
    buffer: &'a mut LineBuffer<B>,
    cursor: usize,
}

impl<'a, B: Buffer> Line<'a, B> {
    pub fn new(buffer: &'a mut LineBuffer<B>) -> Self {
        Self {
            buffer,
            cursor: 0,
        }
    }

    // Truncate buffer and move cursor to the start
    pub fn reset(&mut self) {
        self.buffer.truncate();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn buffer(&self) -> &LineBuffer<B> {
        &*self.buffer
    }

    fn generate_output(&self, action: OutputAction) -> Output<'_> {
        Output::new(self.buffer.as_slice(), self.cursor, action)
    }

    fn insert(&mut self, byte: u8) {
        match self.buffer.insert_byte(self.cursor, byte) {
            Ok(()) => self.cursor += 1,
            Err(byte) => log::debug!("line buffer full, dropping {:#04x}", byte),
        }
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer.remove_byte(self.cursor);
        }
    }

    // Apply key to buffer and cursor. Every key except Enter redraws
    // the line.
    pub fn apply(&mut self, key: Key) -> Output<'_> {
        match key {
            Key::Enter => return self.generate_output(OutputAction::Done),
            Key::Backspace => self.backspace(),
            Key::CursorLeft => self.cursor = self.cursor.saturating_sub(1),
            Key::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor += 1;
                }
            }
            Key::WordLeft => self.cursor = self.buffer.previous_word_start(self.cursor),
            Key::WordRight => self.cursor = self.buffer.next_word_end(self.cursor),
            Key::Unrecognized => (),
            Key::Char(byte) => self.insert(byte),
        }

        self.generate_output(OutputAction::Redraw)
    }
}
