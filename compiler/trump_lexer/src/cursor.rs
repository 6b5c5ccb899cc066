//! Character cursor with line/column tracking.
//!
//! The cursor owns the decoded source and tracks the position of the
//! current character. Stepping over `\n` moves to column 1 of the next
//! line; every other character advances the column by one, so positions
//! count characters rather than bytes.

use trump_ir::Position;

/// Saved cursor state for speculative scanning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Snapshot {
    offset: usize,
    position: Position,
}

pub(crate) struct Cursor {
    chars: Vec<char>,
    offset: usize,
    position: Position,
}

impl Cursor {
    pub(crate) fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().collect(),
            offset: 0,
            position: Position::new(1, 1),
        }
    }

    /// The character under the cursor, `None` at end of input.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    /// The character after the current one.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.offset + 1).copied()
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// Step over the current character, returning it.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.offset += 1;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    /// Step over characters while `pred` holds, returning them.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            out.push(c);
            self.bump();
        }
        out
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            offset: self.offset,
            position: self.position,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.offset = snapshot.offset;
        self.position = snapshot.position;
    }
}

#[cfg(test)]
mod tests;
