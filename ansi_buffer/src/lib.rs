// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_ansi_buffer`
//!
//! Write styled text and terminal control sequences to any [`std::io::Write`] sink
//! using a chainable builder.
//!
//! There are two parts:
//!
//! - **Color codec** ([`color`]): pure functions that produce SGR parameter fragments
//!   ([`Modifier`]) for 4-bit ANSI, 8-bit ANSI-256 and 24-bit RGB colors, plus
//!   [`to_hex()`] which maps a previously generated [`Modifier`] back to its nominal
//!   `#rrggbb` color using the xterm palette in [`ANSI_HEX_TABLE`].
//! - **Escape buffer** ([`buffer`]): [`EscBuffer`] wraps a writer and emits raw bytes,
//!   styled spans, cursor movement, screen clearing, DEC private mode toggles
//!   ([`Device`]) and OSC commands (hyperlinks, notifications, window title, default
//!   colors, clipboard). Every operation returns the buffer so calls chain.
//!
//! ## Example
//!
//! ```rust
//! use r3bl_ansi_buffer::{EscBuffer, FG_GREEN, MOD_BOLD, bg_ansi256, fg_rgb,
//!                        parse_hex_rgb, styled_string};
//!
//! let mut acc = Vec::new();
//! EscBuffer::new(&mut acc)
//!     .string("ok", &[FG_GREEN, MOD_BOLD])
//!     .spc()
//!     .string("plain", &[])
//!     .nl();
//! assert_eq!(acc, b"\x1b[32;1mok\x1b[0m plain\n");
//!
//! let it = styled_string("hi", &[fg_rgb(parse_hex_rgb("#abcdef")), bg_ansi256(69)]);
//! assert_eq!(it, "\x1b[38;2;171;205;239;48;5;69mhi\x1b[0m");
//! ```
//!
//! ## Failure model
//!
//! Malformed hex strings degrade to black, unrecognized modifiers decode to
//! [`INVALID_COLOR`], and sink write failures are dropped. Callers that want explicit
//! errors use [`try_parse_hex_rgb()`], [`try_to_hex()`] and
//! [`EscBuffer::strict()`], which all report an [`AnsiBufferError`].
//!
//! ## Concurrency
//!
//! [`EscBuffer`] does no locking and no buffering of its own. If several threads share
//! one sink (eg: stdout) then interleaving of their output is the caller's concern,
//! just like any other direct writer.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod buffer;
pub mod color;
pub mod error;

// Re-export.
pub use buffer::*;
pub use color::*;
pub use error::*;
