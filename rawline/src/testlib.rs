use core::convert::Infallible;
use std::string::String;
use std::thread;
use std::thread::JoinHandle;
use std::vec::Vec;

use crossbeam::channel::{unbounded, Receiver, Sender};

use crate::input::ControlCharacter;

use ControlCharacter::*;

pub mod csi {
    pub const LEFT: &str = "\x1b[D";
    pub const RIGHT: &str = "\x1b[C";
    pub const CTRL_LEFT: &str = "\x1b[1;5D";
    pub const CTRL_RIGHT: &str = "\x1b[1;5C";
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
enum ParserState {
    Ground,
    Escape,
    Csi(Option<usize>),
}

/// Single-line-at-a-time terminal emulator understanding the subset of
/// VT100 the editor emits.
pub struct MockTerminal {
    state: ParserState,
    screen: Vec<Vec<u8>>,
    row: usize,
    column: usize,
    rows: usize,
    columns: usize,
    terminal_tx: Option<Sender<u8>>,
    terminal_rx: Receiver<u8>,
    pub keyboard_tx: Sender<u8>,
    keyboard_rx: Option<Receiver<u8>>,
}

impl MockTerminal {
    pub fn new(rows: usize, columns: usize) -> Self {
        let (terminal_tx, terminal_rx) = unbounded();
        let (keyboard_tx, keyboard_rx) = unbounded();

        Self {
            state: ParserState::Ground,
            screen: vec![vec![0; columns]; rows],
            row: 0,
            column: 0,
            rows,
            columns,
            terminal_tx: Some(terminal_tx),
            terminal_rx,
            keyboard_tx,
            keyboard_rx: Some(keyboard_rx),
        }
    }

    pub fn get_row(&self) -> usize {
        self.row
    }

    pub fn get_column(&self) -> usize {
        self.column
    }

    pub fn screen_as_string(&self) -> String {
        self.screen
            .iter()
            .map(|v| {
                let line: Vec<u8> = v.iter().take_while(|&&b| b != 0).copied().collect();
                String::from_utf8_lossy(&line).into_owned()
            })
            .filter(|s| !s.is_empty())
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn move_column(&mut self, steps: usize) {
        self.column = (self.column + steps).min(self.columns - 1);
    }

    fn newline(&mut self) {
        if self.row + 1 == self.rows {
            self.screen.remove(0);
            self.screen.push(vec![0; self.columns]);
        } else {
            self.row += 1;
        }

        self.column = 0;
    }

    fn erase_line(&mut self, mode: usize) {
        let start = match mode {
            0 => self.column,
            2 => 0,
            _ => unimplemented!(),
        };

        for b in self.screen[self.row][start..].iter_mut() {
            *b = 0;
        }
    }

    pub fn advance(&mut self, byte: u8) {
        self.state = match self.state {
            ParserState::Ground => match ControlCharacter::try_from(byte) {
                Ok(Escape) => ParserState::Escape,
                Ok(LineFeed) => {
                    self.newline();
                    ParserState::Ground
                }
                _ if byte == b'\r' => {
                    self.column = 0;
                    ParserState::Ground
                }
                _ => {
                    let (row, column) = (self.row, self.column);
                    self.screen[row][column] = byte;
                    self.move_column(1);
                    ParserState::Ground
                }
            },
            ParserState::Escape => {
                assert_eq!(byte, b'[');
                ParserState::Csi(None)
            }
            ParserState::Csi(arg) => match byte {
                b'0'..=b'9' => {
                    ParserState::Csi(Some(arg.unwrap_or(0) * 10 + (byte - b'0') as usize))
                }
                b'C' => {
                    self.move_column(arg.unwrap_or(1));
                    ParserState::Ground
                }
                b'K' => {
                    self.erase_line(arg.unwrap_or(0));
                    ParserState::Ground
                }
                _ => {
                    dbg!(byte as char);
                    unimplemented!()
                }
            },
        };
    }

    /// Take the editor side of the terminal
    pub fn take_io(&mut self) -> (MockInput, MockOutput) {
        (
            MockInput {
                keyboard_rx: self.keyboard_rx.take().unwrap(),
            },
            MockOutput {
                buffer: Vec::new(),
                terminal_tx: self.terminal_tx.take().unwrap(),
            },
        )
    }

    pub fn listen(&mut self) {
        while let Ok(byte) = self.terminal_rx.recv() {
            self.advance(byte);
        }
    }

    pub fn start_thread(mut self) -> JoinHandle<Self> {
        thread::spawn(move || {
            self.listen();
            self
        })
    }
}

pub struct MockInput {
    keyboard_rx: Receiver<u8>,
}

impl embedded_io::ErrorType for MockInput {
    type Error = Infallible;
}

impl embedded_io::Read for MockInput {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match self.keyboard_rx.recv() {
            Ok(byte) => {
                buf[0] = byte;
                Ok(1)
            }
            Err(_) => Ok(0),
        }
    }
}

pub struct MockOutput {
    buffer: Vec<u8>,
    terminal_tx: Sender<u8>,
}

impl embedded_io::ErrorType for MockOutput {
    type Error = Infallible;
}

impl embedded_io::Write for MockOutput {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.buffer.extend(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        for byte in self.buffer.drain(0..) {
            self.terminal_tx.send(byte).unwrap();
        }

        Ok(())
    }
}

impl AsByteVec for &str {
    fn as_byte_vec(self) -> Vec<u8> {
        self.bytes().collect()
    }
}

impl AsByteVec for ControlCharacter {
    fn as_byte_vec(self) -> Vec<u8> {
        vec![self.into()]
    }
}

impl<const N: usize> AsByteVec for [&str; N] {
    fn as_byte_vec(self) -> Vec<u8> {
        self.into_iter().flat_map(|s| s.bytes()).collect()
    }
}

pub trait AsByteVec {
    fn as_byte_vec(self) -> Vec<u8>;
}

pub struct TestCase {
    pub capacity: usize,
    pub input: Vec<u8>,
    pub output: Vec<u8>,
}

impl TestCase {
    pub fn new(capacity: usize, input: impl AsByteVec, output: impl AsByteVec) -> Self {
        Self {
            capacity,
            input: input.as_byte_vec(),
            output: output.as_byte_vec(),
        }
    }

    pub fn output_as_string(&self) -> String {
        String::from_utf8(self.output.clone()).unwrap()
    }
}

struct InputBuilder {
    items: Vec<u8>,
}

impl InputBuilder {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn add(&mut self, input: impl AsByteVec) {
        self.items.extend(input.as_byte_vec().iter());
    }
}

impl AsByteVec for InputBuilder {
    fn as_byte_vec(self) -> Vec<u8> {
        self.items
    }
}

pub fn test_cases() -> Vec<TestCase> {
    vec![
        TestCase::new(8, "hi!\n", "hi!"),
        TestCase::new(4, "abcd\n", "abc"),
        TestCase::new(256, ["ab", csi::LEFT, "x\n"], "axb"),
        {
            let mut input = InputBuilder::new();

            input.add("hi");
            input.add(Backspace);
            input.add(Backspace);
            input.add(Backspace);
            input.add(LineFeed);

            TestCase::new(256, input, "")
        },
        {
            let mut input = InputBuilder::new();

            input.add("rm file1 file2");
            input.add(csi::CTRL_LEFT);
            input.add("-f ");
            input.add(csi::CTRL_LEFT);
            input.add(csi::CTRL_LEFT);
            input.add(csi::CTRL_RIGHT);
            input.add(Backspace);
            input.add("2\x1b[9999");
            input.add(LineFeed);

            TestCase::new(256, input, "rm file2 -f file2")
        },
        TestCase::new(16, ["ab", "\x1b[1;5X", "c\n"], "abc"),
        TestCase::new(16, ["ab", "\x1b[99999", "c\n"], "ab9c"),
    ]
}

pub fn test_editor_with_case(
    case: TestCase,
    spawn_thread: impl FnOnce(MockInput, MockOutput, usize) -> JoinHandle<Option<Vec<u8>>>,
) {
    let (rows, columns) = (20, 80);

    let mut term = MockTerminal::new(rows, columns);

    let keyboard_tx = term.keyboard_tx.clone();

    let (input, output) = term.take_io();

    let term = term.start_thread();
    let handle = spawn_thread(input, output, case.capacity);

    for &b in case.input.iter() {
        keyboard_tx.send(b).unwrap();
    }

    assert_eq!(handle.join().unwrap(), Some(case.output.clone()));

    let term = term.join().unwrap();

    assert_eq!(term.screen_as_string(), case.output_as_string());
    assert_eq!(term.get_row(), 1);
    assert_eq!(term.get_column(), 0);
}
