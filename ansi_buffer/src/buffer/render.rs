// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Render into a [`String`] instead of a sink.

use super::EscBuffer;
use crate::Modifier;

/// Runs `f` over a buffer backed by a [`Vec<u8>`] and returns what it wrote.
///
/// Invalid UTF-8 (only possible if `f` writes raw bytes) is replaced with `U+FFFD`.
///
/// ```rust
/// use r3bl_ansi_buffer::{MOD_BOLD, new_string};
///
/// let it = new_string(|buf| {
///     buf.string("a", &[MOD_BOLD]).tab().string("b", &[]);
/// });
/// assert_eq!(it, "\x1b[1ma\x1b[0m\tb");
/// ```
#[must_use]
pub fn new_string(f: impl FnOnce(&mut EscBuffer<Vec<u8>>)) -> String {
    let mut buf = EscBuffer::new(Vec::new());
    f(&mut buf);
    match String::from_utf8(buf.into_inner()) {
        Ok(it) => it,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// `s` wrapped in a styled span, see [`EscBuffer::string()`].
#[must_use]
pub fn styled_string(s: &str, mods: &[Modifier]) -> String {
    new_string(|buf| {
        buf.string(s, mods);
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{BG_RED, FG_BLUE, MOD_OVERLINE};

    #[test]
    fn test_styled_string() {
        assert_eq!(styled_string("text", &[FG_BLUE, BG_RED]), "\x1b[34;41mtext\x1b[0m");
        assert_eq!(styled_string("text", &[MOD_OVERLINE]), "\x1b[53mtext\x1b[0m");
    }

    #[test]
    fn test_plain_string_is_unchanged() {
        assert_eq!(styled_string("text", &[]), "text");
        assert_eq!(styled_string("", &[]), "");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let it = new_string(|buf| _ = buf.bytes(b"ok\xff"));
        assert_eq!(it, "ok\u{fffd}");
    }
}
