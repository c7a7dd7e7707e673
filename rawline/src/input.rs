//! Key decoder turning raw terminal bytes into logical keys.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::RawlineError;
use crate::sync_io::IO;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Eq, PartialEq, Copy, Clone, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ControlCharacter {
    LineFeed = 0xA,
    Escape = 0x1B,
    Backspace = 0x7F,
}

/// Logical key produced by [`KeyDecoder`]
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Key {
    Char(u8),
    Enter,
    Backspace,
    CursorLeft,
    CursorRight,
    WordLeft,
    WordRight,
    Unrecognized,
}

/// Escape sequence, not including the leading ESC byte.
pub struct EscapeSequence {
    pub pattern: &'static [u8],
    pub key: Key,
}

pub const MAX_ESCAPE_SEQUENCE_LEN: usize = 5;

pub static ESCAPE_SEQUENCES: [EscapeSequence; 4] = [
    EscapeSequence {
        pattern: b"[C",
        key: Key::CursorRight,
    },
    EscapeSequence {
        pattern: b"[D",
        key: Key::CursorLeft,
    },
    EscapeSequence {
        pattern: b"[1;5C",
        key: Key::WordRight,
    },
    EscapeSequence {
        pattern: b"[1;5D",
        key: Key::WordLeft,
    },
];

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
enum State {
    Ground,
    EscapeSequence(usize),
}

/// State machine decoding one key at a time.
///
/// Feed bytes to [`KeyDecoder::advance`] until it yields a key, or let
/// [`KeyDecoder::next_key`] pull them from an [`IO`].
///
/// An escape sequence is resolved position by position: at position
/// `p` the byte is compared against byte `p` of every pattern longer
/// than `p`, and the first pattern whose final byte matches wins. A
/// sequence that has not matched after [`MAX_ESCAPE_SEQUENCE_LEN`]
/// bytes resolves to [`Key::Unrecognized`] and the bytes read are
/// dropped.
#[derive(Debug)]
pub struct KeyDecoder {
    state: State,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self {
            state: State::Ground,
        }
    }

    /// True while the decoder is in the middle of an escape sequence
    pub fn is_pending(&self) -> bool {
        self.state != State::Ground
    }

    /// Advance decoder by one byte. Returns a key once one is complete.
    pub fn advance(&mut self, byte: u8) -> Option<Key> {
        let key = match self.state {
            State::Ground => match ControlCharacter::try_from(byte) {
                Ok(ControlCharacter::LineFeed) => Some(Key::Enter),
                Ok(ControlCharacter::Backspace) => Some(Key::Backspace),
                Ok(ControlCharacter::Escape) => {
                    self.state = State::EscapeSequence(0);
                    None
                }
                Err(_) => Some(Key::Char(byte)),
            },
            State::EscapeSequence(pos) => {
                let matched = ESCAPE_SEQUENCES
                    .iter()
                    .filter(|seq| seq.pattern.len() > pos)
                    .find(|seq| seq.pattern[pos] == byte && seq.pattern.len() - 1 == pos)
                    .map(|seq| seq.key);

                match matched {
                    Some(key) => {
                        self.state = State::Ground;
                        Some(key)
                    }
                    None if pos + 1 < MAX_ESCAPE_SEQUENCE_LEN => {
                        self.state = State::EscapeSequence(pos + 1);
                        None
                    }
                    None => {
                        log::debug!("dropping unrecognized escape sequence");
                        self.state = State::Ground;
                        Some(Key::Unrecognized)
                    }
                }
            }
        };

        if let Some(key) = key {
            log::trace!("key {:?}", key);
        }

        key
    }

    /// Read bytes from `io` until a key is decoded. This is how
    /// [`crate::sync_editor::Editor::readline`] pulls its keys.
    pub fn next_key<R, W>(&mut self, io: &mut IO<R, W>) -> Result<Key, RawlineError>
    where
        R: embedded_io::Read,
        W: embedded_io::Write,
    {
        loop {
            let byte = io.read_byte()?;

            if let Some(key) = self.advance(byte) {
                break Ok(key);
            }
        }
    }
}
