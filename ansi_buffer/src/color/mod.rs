// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color codec.
//!
//! This module provides:
//! - **Primitive types**: [`Modifier`] (one SGR parameter fragment) and [`RgbValue`]
//!   (24-bit truecolor).
//! - **Encoding**: [`fg_ansi()`], [`bg_ansi()`], [`fg_ansi256()`], [`bg_ansi256()`],
//!   [`fg_rgb()`], [`bg_rgb()`] and [`parse_hex_rgb()`].
//! - **Decoding**: [`to_hex()`], backed by the xterm palette in [`ANSI_HEX_TABLE`].
//! - **Named constants**: the 16 foreground and background colors and the text
//!   attributes, eg: [`FG_RED`], [`BG_HI_BLUE`], [`MOD_BOLD`].
//!
//! Everything here is pure, there is no I/O.

// Attach.
mod ansi_hex_table;
mod color_codec;
mod hex_color_parser;
mod modifier;
mod named_modifiers;
mod rgb_value;

// Re-export.
pub use ansi_hex_table::*;
pub use color_codec::*;
pub use hex_color_parser::*;
pub use modifier::*;
pub use named_modifiers::*;
pub use rgb_value::*;
