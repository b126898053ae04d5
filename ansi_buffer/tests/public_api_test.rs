// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drives the crate only through its public API, the way a consumer would.

use std::io::{self, Write};

use pretty_assertions::assert_eq;
use r3bl_ansi_buffer::{AnsiBufferError, BG_HI_GREEN, BG_WHITE, ClipboardSelection,
                       Device, EscBuffer, FG_GREEN, INVALID_COLOR, MOD_BOLD,
                       MOD_ITALIC, Modifier, WriteFailurePolicy, bg_ansi256, bg_rgb,
                       fg_ansi256, fg_rgb, new_string, parse_hex_rgb, styled_string,
                       to_hex, try_parse_hex_rgb, try_to_hex};
use test_case::test_case;

/// A sink that is already closed.
#[derive(Debug)]
struct ClosedSink;

impl Write for ClosedSink {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

#[test]
fn status_line_round_trip() {
    let it = new_string(|buf| {
        buf.save_cursor_position()
            .move_cursor(24, 1)
            .clear_line()
            .in_byte_pair(b'[', b']', |buf| {
                buf.string("OK", &[FG_GREEN, MOD_BOLD]);
            })
            .spc()
            .string("all good", &[])
            .restore_cursor_position();
    });
    assert_eq!(
        it,
        "\x1b[s\x1b[24;1H\x1b[2K[\x1b[32;1mOK\x1b[0m] all good\x1b[u"
    );
}

#[test]
fn full_screen_session() {
    let it = new_string(|buf| {
        buf.enable(Device::AltScreen)
            .disable(Device::Cursor)
            .clear_screen()
            .set_window_title("app")
            .enable(Device::Cursor)
            .disable(Device::AltScreen);
    });
    assert_eq!(
        it,
        "\x1b[?1049h\x1b[?25l\x1b[2J\x1b[1;1H\x1b]2;app\x07\x1b[?25h\x1b[?1049l"
    );
}

#[test_case(BG_WHITE, "#c0c0c0" ; "basic white")]
#[test_case(BG_HI_GREEN, "#00ff00" ; "bright green")]
#[test_case(bg_ansi256(91), "#8700af" ; "palette 91")]
#[test_case(fg_ansi256(232), "#080808" ; "first gray")]
#[test_case(bg_rgb((18, 52, 86)), "#123456" ; "truecolor")]
fn to_hex_decodes_generated_modifiers(modifier: Modifier, expected: &str) {
    assert_eq!(to_hex(&modifier), expected);
}

#[test]
fn hex_helpers_degrade_or_report() {
    // Attributes are plain numbers too, so they decode as basic colors.
    assert_eq!(to_hex(&MOD_ITALIC), "#808000");
    assert_eq!(to_hex(&Modifier::from("48;9;1")), INVALID_COLOR);
    assert!(try_to_hex(&Modifier::from("48;9;1")).is_err());

    assert_eq!(parse_hex_rgb("not a color"), parse_hex_rgb("#000"));
    assert!(matches!(
        try_parse_hex_rgb("not a color"),
        Err(AnsiBufferError::InvalidHexColor { .. })
    ));
}

#[test]
fn styled_string_matches_buffer_output() {
    let mods = [fg_rgb(parse_hex_rgb("#abcdef")), bg_ansi256(69), MOD_BOLD];
    let mut acc = Vec::new();
    EscBuffer::new(&mut acc).string("foobar", &mods);
    assert_eq!(String::from_utf8(acc).unwrap(), styled_string("foobar", &mods));
}

#[test]
fn clipboard_selection_codes() {
    let it = new_string(|buf| {
        buf.copy_to(ClipboardSelection::Primary, "hello")
            .copy_to(ClipboardSelection::Clipboard, "hello");
    });
    assert_eq!(it, "\x1b]52;p;aGVsbG8=\x07\x1b]52;c;aGVsbG8=\x07");
}

#[test]
fn best_effort_buffer_swallows_write_errors() {
    let mut buf = EscBuffer::new(ClosedSink);
    buf.clear_screen().string("ignored", &[MOD_BOLD]).nl();
    assert!(buf.take_error().is_none());
    assert!(buf.finish().is_ok());
}

#[test]
fn strict_buffer_reports_write_errors() {
    let mut buf = EscBuffer::with_policy(ClosedSink, WriteFailurePolicy::Record);
    buf.hyperlink("http://example.com", "example");
    let Err(AnsiBufferError::Write(err)) = buf.finish() else {
        panic!("expected a write error");
    };
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
