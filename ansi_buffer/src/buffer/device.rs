// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use strum_macros::{EnumCount, EnumIter};

use super::{EscBuffer,
            constants::{CSI, DEC_PRIVATE_MODE_PREFIX, DEC_PRIVATE_MODE_RESET,
                        DEC_PRIVATE_MODE_SET}};

/// Terminal modes that can be switched on and off with DECSET / DECRST. Each
/// variant's discriminant is its DEC private mode number.
///
/// More info:
/// - <https://invisible-island.net/xterm/ctlseqs/ctlseqs.html#h2-Functions-using-CSI-_-ordered-by-the-final-character_s_>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount)]
#[repr(u16)]
pub enum Device {
    /// X10 mouse reporting, button presses only.
    MousePress = 9,
    /// Cursor visibility (DECTCEM).
    Cursor = 25,
    /// Legacy alternate screen, without saving the cursor.
    SaveScreen = 47,
    /// Normal mouse tracking, press and release.
    Mouse = 1000,
    MouseHilite = 1001,
    /// Report motion while a button is held.
    MouseCellMotion = 1002,
    /// Report all motion.
    MouseAllMotion = 1003,
    /// SGR extended coordinates.
    MouseExtendedMode = 1006,
    /// SGR coordinates in pixels.
    MousePixelsMode = 1016,
    /// Alternate screen, saving the cursor and clearing on entry.
    AltScreen = 1049,
    BracketedPaste = 2004,
}

impl Device {
    #[must_use]
    pub const fn code(self) -> u16 { self as u16 }
}

impl<W: Write> EscBuffer<W> {
    /// DECSET: `CSI ? <code> h`
    pub fn enable(&mut self, device: Device) -> &mut Self {
        self.set_private_mode(device, DEC_PRIVATE_MODE_SET)
    }

    /// DECRST: `CSI ? <code> l`
    pub fn disable(&mut self, device: Device) -> &mut Self {
        self.set_private_mode(device, DEC_PRIVATE_MODE_RESET)
    }

    fn set_private_mode(&mut self, device: Device, action: u8) -> &mut Self {
        let (prefix, action) = (
            char::from(DEC_PRIVATE_MODE_PREFIX),
            char::from(action),
        );
        self.emit_fmt(CSI, format_args!("{prefix}{}{action}", device.code()))
    }
}
