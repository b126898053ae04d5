// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte level building blocks for the sequences written by [`super::EscBuffer`].
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#Control_Sequence_Introducer_commands>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#Operating_System_Command_sequences>

/// Control Sequence Introducer: ESC [
pub const CSI: &[u8] = b"\x1b[";
/// Operating System Command: ESC ]
pub const OSC: &[u8] = b"\x1b]";
/// String Terminator: ESC \
pub const ST: &[u8] = b"\x1b\\";
/// Alternative OSC terminator: BEL (0x07)
pub const BEL: &[u8] = b"\x07";

/// Joins SGR parameters and the numeric parameters of CSI commands.
pub const PARAM_SEPARATOR: u8 = b';';
/// Final byte of an SGR sequence.
pub const SGR_END: u8 = b'm';
/// Prefix for DEC private mode parameters: CSI ? <code> h
pub const DEC_PRIVATE_MODE_PREFIX: u8 = b'?';
pub const DEC_PRIVATE_MODE_SET: u8 = b'h';
pub const DEC_PRIVATE_MODE_RESET: u8 = b'l';

// OSC command prefixes, everything between OSC and the payload.
pub const OSC2_SET_TITLE: &[u8] = b"2;";
pub const OSC8_HYPERLINK: &[u8] = b"8;;";
pub const OSC10_SET_FOREGROUND: &[u8] = b"10;";
pub const OSC11_SET_BACKGROUND: &[u8] = b"11;";
pub const OSC12_SET_CURSOR: &[u8] = b"12;";
pub const OSC52_CLIPBOARD: &[u8] = b"52;";
pub const OSC777_NOTIFY: &[u8] = b"777;notify;";

// Whitespace.
pub const NEW_LINE: u8 = b'\n';
pub const TAB: u8 = b'\t';
pub const SPACE: u8 = b' ';
