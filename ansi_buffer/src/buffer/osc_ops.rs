// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Operating System Command (OSC) sequences.
//!
//! OSC sequences follow the pattern: `ESC ] code ; parameters <terminator>`, where the
//! terminator is either ST (`ESC \`) or BEL (`0x07`). Which one is used per command
//! follows what terminals in the wild accept for it:
//!
//! | Command              | Code | Terminator |
//! | :------------------- | :--- | :--------- |
//! | Window title         | 2    | BEL        |
//! | Hyperlink            | 8    | ST         |
//! | Default fg/bg/cursor | 10-12| BEL        |
//! | Clipboard            | 52   | BEL        |
//! | Notification         | 777  | ST         |
//!
//! More info:
//! - <https://invisible-island.net/xterm/ctlseqs/ctlseqs.html#h2-Operating-System-Commands>
//! - <https://gist.github.com/egmontkob/eb114294efbcd5adb1944c9f3cb5feda>

use std::io::Write;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::{EscBuffer,
            constants::{BEL, OSC, OSC2_SET_TITLE, OSC8_HYPERLINK, OSC10_SET_FOREGROUND,
                        OSC11_SET_BACKGROUND, OSC12_SET_CURSOR, OSC52_CLIPBOARD,
                        OSC777_NOTIFY, PARAM_SEPARATOR, ST}};

/// Target of an OSC 52 copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClipboardSelection {
    /// The system clipboard.
    #[default]
    Clipboard,
    /// The X11 primary selection (middle click paste).
    Primary,
}

impl ClipboardSelection {
    /// Selection parameter of the OSC 52 sequence.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Clipboard => b'c',
            Self::Primary => b'p',
        }
    }
}

impl<W: Write> EscBuffer<W> {
    /// Clickable `text` that opens `url` (OSC 8). Terminals without support show
    /// just `text`.
    ///
    /// ```rust
    /// use r3bl_ansi_buffer::new_string;
    ///
    /// let it = new_string(|buf| _ = buf.hyperlink("http://example.com", "example"));
    /// assert_eq!(it, "\x1b]8;;http://example.com\x1b\\example\x1b]8;;\x1b\\");
    /// ```
    pub fn hyperlink(&mut self, url: &str, text: &str) -> &mut Self {
        self.osc(OSC8_HYPERLINK, &[url.as_bytes()], ST)
            .bytes(text.as_bytes())
            .osc(OSC8_HYPERLINK, &[], ST)
    }

    /// Desktop notification (OSC 777), supported by urxvt, foot, WezTerm and others.
    pub fn notify(&mut self, title: &str, body: &str) -> &mut Self {
        self.osc(
            OSC777_NOTIFY,
            &[title.as_bytes(), &[PARAM_SEPARATOR][..], body.as_bytes()],
            ST,
        )
    }

    pub fn set_window_title(&mut self, title: &str) -> &mut Self {
        self.osc(OSC2_SET_TITLE, &[title.as_bytes()], BEL)
    }

    /// `hex` is passed through, eg: `#ff8800` or `rgb:ff/88/00`.
    pub fn set_foreground_color(&mut self, hex: &str) -> &mut Self {
        self.osc(OSC10_SET_FOREGROUND, &[hex.as_bytes()], BEL)
    }

    pub fn set_background_color(&mut self, hex: &str) -> &mut Self {
        self.osc(OSC11_SET_BACKGROUND, &[hex.as_bytes()], BEL)
    }

    pub fn set_cursor_color(&mut self, hex: &str) -> &mut Self {
        self.osc(OSC12_SET_CURSOR, &[hex.as_bytes()], BEL)
    }

    /// Puts `text` on the system clipboard.
    pub fn copy(&mut self, text: &str) -> &mut Self {
        self.copy_to(ClipboardSelection::Clipboard, text)
    }

    /// Puts `text` in the primary selection.
    pub fn copy_primary(&mut self, text: &str) -> &mut Self {
        self.copy_to(ClipboardSelection::Primary, text)
    }

    /// OSC 52 with `text` base64 encoded (standard alphabet, padded).
    pub fn copy_to(&mut self, selection: ClipboardSelection, text: &str) -> &mut Self {
        let payload = STANDARD.encode(text);
        self.osc(
            OSC52_CLIPBOARD,
            &[&[selection.code(), PARAM_SEPARATOR][..], payload.as_bytes()],
            BEL,
        )
    }

    fn osc(&mut self, command: &[u8], params: &[&[u8]], terminator: &[u8]) -> &mut Self {
        self.emit_with(|writer| {
            writer.write_all(OSC)?;
            writer.write_all(command)?;
            for param in params {
                writer.write_all(param)?;
            }
            writer.write_all(terminator)
        })
    }
}
