// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement and erase commands. Each one is a single CSI sequence, except
//! [`EscBuffer::clear_screen()`] and [`EscBuffer::clear_lines()`] which chain a few.
//!
//! Row and column numbers are 1 based, as terminals expect. Counts are passed
//! through as is, so a count of 0 means whatever the terminal makes of it (usually
//! the same as 1).

use std::io::Write;

use super::{EscBuffer, constants::CSI};

impl<W: Write> EscBuffer<W> {
    /// CUP: `CSI <row>;<col> H`
    pub fn move_cursor(&mut self, row: u16, col: u16) -> &mut Self {
        self.emit_fmt(CSI, format_args!("{row};{col}H"))
    }

    /// `CSI 2 J` then the cursor goes home to `1;1`.
    pub fn clear_screen(&mut self) -> &mut Self {
        self.emit_fmt(CSI, format_args!("2J")).move_cursor(1, 1)
    }

    /// SCP: `CSI s`
    pub fn save_cursor_position(&mut self) -> &mut Self {
        self.emit_fmt(CSI, format_args!("s"))
    }

    /// RCP: `CSI u`
    pub fn restore_cursor_position(&mut self) -> &mut Self {
        self.emit_fmt(CSI, format_args!("u"))
    }

    pub fn cursor_up(&mut self, n: u16) -> &mut Self {
        self.emit_fmt(CSI, format_args!("{n}A"))
    }

    pub fn cursor_down(&mut self, n: u16) -> &mut Self {
        self.emit_fmt(CSI, format_args!("{n}B"))
    }

    pub fn cursor_forward(&mut self, n: u16) -> &mut Self {
        self.emit_fmt(CSI, format_args!("{n}C"))
    }

    pub fn cursor_back(&mut self, n: u16) -> &mut Self {
        self.emit_fmt(CSI, format_args!("{n}D"))
    }

    /// Start of the line `n` lines down.
    pub fn cursor_next_line(&mut self, n: u16) -> &mut Self {
        self.emit_fmt(CSI, format_args!("{n}E"))
    }

    /// Start of the line `n` lines up.
    pub fn cursor_prev_line(&mut self, n: u16) -> &mut Self {
        self.emit_fmt(CSI, format_args!("{n}F"))
    }

    /// Erase from the cursor to the end of the line.
    pub fn clear_line_right(&mut self) -> &mut Self {
        self.emit_fmt(CSI, format_args!("0K"))
    }

    /// Erase from the start of the line to the cursor.
    pub fn clear_line_left(&mut self) -> &mut Self {
        self.emit_fmt(CSI, format_args!("1K"))
    }

    pub fn clear_line(&mut self) -> &mut Self { self.emit_fmt(CSI, format_args!("2K")) }

    /// Clears the current line and the `n` lines above it, leaving the cursor on the
    /// topmost cleared line. Useful to erase output that was just printed.
    pub fn clear_lines(&mut self, n: u16) -> &mut Self {
        self.clear_line();
        for _ in 0..n {
            self.cursor_up(1).clear_line();
        }
        self
    }

    /// DECSTBM: `CSI <top>;<bottom> r`
    pub fn change_scrolling_region(&mut self, top: u16, bottom: u16) -> &mut Self {
        self.emit_fmt(CSI, format_args!("{top};{bottom}r"))
    }

    /// IL: `CSI <n> L`
    pub fn insert_lines(&mut self, n: u16) -> &mut Self {
        self.emit_fmt(CSI, format_args!("{n}L"))
    }

    /// DL: `CSI <n> M`
    pub fn delete_lines(&mut self, n: u16) -> &mut Self {
        self.emit_fmt(CSI, format_args!("{n}M"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use crate::new_string;

    #[test]
    fn test_move_cursor() {
        assert_eq!(new_string(|buf| _ = buf.move_cursor(16, 8)), "\x1b[16;8H");
    }

    #[test]
    fn test_clear_screen_homes_cursor() {
        assert_eq!(new_string(|buf| _ = buf.clear_screen()), "\x1b[2J\x1b[1;1H");
    }

    #[test_case(3, "\x1b[3A", "\x1b[3B", "\x1b[3C", "\x1b[3D", "\x1b[3E", "\x1b[3F")]
    #[test_case(12, "\x1b[12A", "\x1b[12B", "\x1b[12C", "\x1b[12D", "\x1b[12E", "\x1b[12F")]
    fn test_relative_moves(
        n: u16,
        up: &str,
        down: &str,
        forward: &str,
        back: &str,
        next_line: &str,
        prev_line: &str,
    ) {
        assert_eq!(new_string(|buf| _ = buf.cursor_up(n)), up);
        assert_eq!(new_string(|buf| _ = buf.cursor_down(n)), down);
        assert_eq!(new_string(|buf| _ = buf.cursor_forward(n)), forward);
        assert_eq!(new_string(|buf| _ = buf.cursor_back(n)), back);
        assert_eq!(new_string(|buf| _ = buf.cursor_next_line(n)), next_line);
        assert_eq!(new_string(|buf| _ = buf.cursor_prev_line(n)), prev_line);
    }

    #[test]
    fn test_save_and_restore() {
        let it = new_string(|buf| {
            buf.save_cursor_position().restore_cursor_position();
        });
        assert_eq!(it, "\x1b[s\x1b[u");
    }

    #[test]
    fn test_clear_line_variants() {
        let it = new_string(|buf| {
            buf.clear_line_right().clear_line_left().clear_line();
        });
        assert_eq!(it, "\x1b[0K\x1b[1K\x1b[2K");
    }

    #[test]
    fn test_clear_lines_walks_back_up() {
        let it = new_string(|buf| _ = buf.clear_lines(8));
        assert_eq!(it.matches("\x1b[2K").count(), 9);
        assert_eq!(it.matches("\x1b[1A").count(), 8);
        assert!(it.starts_with("\x1b[2K\x1b[1A"));
        assert_eq!(it, format!("\x1b[2K{}", "\x1b[1A\x1b[2K".repeat(8)));
    }

    #[test]
    fn test_clear_zero_lines_is_one_clear() {
        assert_eq!(new_string(|buf| _ = buf.clear_lines(0)), "\x1b[2K");
    }

    #[test]
    fn test_scrolling_region_and_line_edits() {
        let it = new_string(|buf| {
            buf.change_scrolling_region(2, 20).insert_lines(3).delete_lines(4);
        });
        assert_eq!(it, "\x1b[2;20r\x1b[3L\x1b[4M");
    }
}
