//! Rawline is an IO-agnostic `#[no_std]` single-line editor for
//! terminals in raw (non-canonical, no-echo) mode. It reads one byte at
//! a time, decodes arrow and word-jump escape sequences, edits a fixed
//! capacity byte buffer at a movable cursor and redraws the line after
//! every key.
//!
//! Features:
//! - IO-free core
//! - No allocation needed - Both heap-based and static buffers are provided
//! - Cursor movement with arrow keys, word jumps with Ctrl + arrow keys
//!
//! Bytes are edited as they are, there is no UTF-8 awareness.
//!
//! The core implementation consists of a key decoder and a line state
//! machine taking bytes as input and yielding iterators over byte
//! slices. [`sync_editor::Editor`] drives them with any reader and
//! writer implementing the [`embedded_io`] traits.
//!
//! Entering and leaving raw mode is up to the caller, the editor
//! assumes the terminal is already configured when reading starts.
//!
//! Editors can be built using [`builder::EditorBuilder`].
//!
//! # Example
//! ```
//! use rawline::{builder::EditorBuilder, sync_io::IO};
//!
//! let mut io = IO::new("hi!\n".as_bytes(), Vec::new());
//! let mut editor = EditorBuilder::new_static::<256>().build();
//!
//! let line = editor.readline(&mut io).unwrap();
//!
//! assert_eq!(line, b"hi!");
//! ```
//!
//! With feature `std`, `IO::default()` reads from `stdin` and writes
//! to `stdout`.

#![no_std]

#[cfg(any(test, doc, feature = "std"))]
#[macro_use]
extern crate std;

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

pub mod builder;
mod core;
pub mod error;
pub mod input;
pub mod line_buffer;
mod output;
pub mod sync_editor;
pub mod sync_io;

#[cfg(test)]
pub(crate) mod testlib;
