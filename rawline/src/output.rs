//! Render output for the line editor, yielded as byte slices so no
//! formatting or allocation is needed.

pub enum OutputItem<'a> {
    Slice(&'a [u8]),
    UintToBytes(UintToBytes<20>),
    EndOfLine,
}

impl OutputItem<'_> {
    pub fn get_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Slice(slice) => Some(slice),
            Self::UintToBytes(uint) => Some(uint.as_bytes()),
            Self::EndOfLine => None,
        }
    }
}

#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum OutputAction {
    /// Clear the line, print the buffer and place the cursor
    Redraw,
    /// Move to the next line and end the session
    Done,
}

#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone)]
pub struct UintToBytes<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> UintToBytes<N> {
    fn from_uint<I: Into<usize>>(n: I) -> Option<Self> {
        let mut n: usize = n.into();

        let fits = 10_usize
            .checked_pow(N as u32)
            .map_or(true, |limit| n < limit);

        if fits {
            let mut bytes = [0; N];

            for i in (0..N).rev() {
                bytes[i] = 0x30 + (n % 10) as u8;
                n /= 10;

                if n == 0 {
                    break;
                }
            }

            Some(Self { bytes })
        } else {
            None
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        let start = self.bytes.iter().take_while(|&&b| b == 0).count();
        &self.bytes[start..]
    }
}

const CLEAR_LINE: &[u8] = b"\x1b[2K";
const CARRIAGE_RETURN: &[u8] = b"\r";
const CSI: &[u8] = b"\x1b[";
const CURSOR_FORWARD: &[u8] = b"C";
const NEWLINE: &[u8] = b"\n";

#[cfg_attr(test, derive(Debug))]
#[derive(Copy, Clone, PartialEq, Eq)]
enum Step {
    ClearLine,
    StartOfLine,
    Content,
    ReturnToStart,
    CursorPrefix,
    CursorColumn,
    CursorFinalByte,
    Newline,
    EndOfLine,
    Done,
}

/// Iterator over the bytes to write for an [`OutputAction`].
///
/// A redraw is `ESC[2K`, `\r`, the content, `\r` and, when the cursor
/// is not at the start of the line, `ESC[<cursor>C`.
pub struct Output<'a> {
    content: &'a [u8],
    cursor: usize,
    step: Step,
}

impl<'a> Output<'a> {
    pub fn new(content: &'a [u8], cursor: usize, action: OutputAction) -> Self {
        let step = match action {
            OutputAction::Redraw => Step::ClearLine,
            OutputAction::Done => Step::Newline,
        };

        Self {
            content,
            cursor,
            step,
        }
    }
}

impl<'a> Iterator for Output<'a> {
    type Item = OutputItem<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step {
                Step::ClearLine => {
                    self.step = Step::StartOfLine;
                    break Some(OutputItem::Slice(CLEAR_LINE));
                }
                Step::StartOfLine => {
                    self.step = Step::Content;
                    break Some(OutputItem::Slice(CARRIAGE_RETURN));
                }
                Step::Content => {
                    self.step = Step::ReturnToStart;

                    if !self.content.is_empty() {
                        break Some(OutputItem::Slice(self.content));
                    }
                }
                Step::ReturnToStart => {
                    self.step = if self.cursor > 0 {
                        Step::CursorPrefix
                    } else {
                        Step::Done
                    };
                    break Some(OutputItem::Slice(CARRIAGE_RETURN));
                }
                Step::CursorPrefix => {
                    self.step = Step::CursorColumn;
                    break Some(OutputItem::Slice(CSI));
                }
                Step::CursorColumn => {
                    self.step = Step::CursorFinalByte;

                    if let Some(column) = UintToBytes::from_uint(self.cursor) {
                        break Some(OutputItem::UintToBytes(column));
                    }
                }
                Step::CursorFinalByte => {
                    self.step = Step::Done;
                    break Some(OutputItem::Slice(CURSOR_FORWARD));
                }
                Step::Newline => {
                    self.step = Step::EndOfLine;
                    break Some(OutputItem::Slice(NEWLINE));
                }
                Step::EndOfLine => {
                    self.step = Step::Done;
                    break Some(OutputItem::EndOfLine);
                }
                Step::Done => break None,
            }
        }
    }
}
