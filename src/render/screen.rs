//! Screen: Paints a buffer's rows and parks the terminal cursor.
//!
//! The screen consumes the buffer's `rows()` sequence once per refresh
//! cycle, owns all clearing and positioning, and knows nothing about the
//! link graph. It paints into any `io::Write`, so tests capture frames in
//! a `Vec<u8>`.

use super::output::AnsiBuffer;
use crate::buffer::LinkedTextBuffer;
use std::io;
use unicode_width::UnicodeWidthChar;

/// Paints full frames from a buffer's row sequence.
#[derive(Debug, Default)]
pub struct Screen {
    /// Reused frame accumulator.
    out: AnsiBuffer,
}

impl Screen {
    /// Create a screen with a default-sized frame buffer.
    pub fn new() -> Self {
        Self {
            out: AnsiBuffer::new(),
        }
    }

    /// Paint one frame: every row, then the cursor at the buffer's cursor
    /// location. Flushed to `writer` in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the frame fails.
    pub fn paint<W: io::Write>(
        &mut self,
        buffer: &LinkedTextBuffer,
        writer: &mut W,
    ) -> io::Result<()> {
        self.out.clear();
        self.out.cursor_hide();
        self.out.clear_screen();

        let (cursor_row, cursor_chars) = buffer.cursor_position();
        let mut cursor_col: u16 = 0;

        for (y, row) in buffer.rows().enumerate() {
            let y16 = u16::try_from(y).unwrap_or(u16::MAX);
            self.out.cursor_move(0, y16);
            self.out.clear_line_tail();
            for (x, ch) in row.enumerate() {
                // The cursor column is a display width, not a char count.
                if y == cursor_row && x < cursor_chars {
                    let width = UnicodeWidthChar::width(ch).unwrap_or(0);
                    cursor_col = cursor_col.saturating_add(u16::try_from(width).unwrap_or(0));
                }
                self.out.write_char(ch);
            }
        }

        let cursor_row16 = u16::try_from(cursor_row).unwrap_or(u16::MAX);
        self.out.cursor_move(cursor_col, cursor_row16);
        self.out.cursor_show();

        self.out.flush_to(writer)
    }
}
