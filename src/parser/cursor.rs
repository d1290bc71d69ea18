//! Read position over one command line.

/// Byte returned past the end of the line. A NUL inside the line ends it too.
pub(crate) const TERMINATOR: u8 = 0;

/// Separator between the command name and its arguments.
pub(crate) const SPACE: u8 = b' ';

/// Byte at `index`, or [`TERMINATOR`] when `index` is past the end.
#[inline]
pub(crate) fn byte_at(input: &[u8], index: usize) -> u8 {
    input.get(index).copied().unwrap_or(TERMINATOR)
}

/// Whether `byte` may follow a parsed argument.
#[inline]
pub(crate) fn is_boundary(byte: u8) -> bool {
    byte == SPACE || byte == TERMINATOR
}

/// Forward-only cursor used by the processor for a single call.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(line: &'a [u8]) -> Self {
        Self { line, pos: 0 }
    }

    pub(crate) fn peek(&self) -> u8 {
        byte_at(self.line, self.pos)
    }

    pub(crate) fn at_end(&self) -> bool {
        self.peek() == TERMINATOR
    }

    /// Everything from the cursor to the end of the slice.
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.line[self.pos.min(self.line.len())..]
    }

    pub(crate) fn advance(&mut self, count: usize) {
        self.pos += count;
    }

    /// Consume consecutive spaces, returning how many were skipped.
    pub(crate) fn skip_spaces(&mut self) -> usize {
        let start = self.pos;
        while self.peek() == SPACE {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume the command name: up to `max_len` bytes, stopping early at a
    /// space or the terminator.
    pub(crate) fn take_name(&mut self, max_len: usize) -> &'a [u8] {
        let start = self.pos;
        while self.pos - start < max_len && !is_boundary(self.peek()) {
            self.pos += 1;
        }
        &self.line[start..self.pos]
    }
}
