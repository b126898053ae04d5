// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape buffer.
//!
//! [`EscBuffer`] wraps any [`std::io::Write`] sink. Its operations are spread over a
//! few files, all of them `impl` blocks on the same type:
//! - [`esc_buffer`]: construction, the failure policy, raw bytes and styled spans.
//! - [`cursor_ops`]: cursor movement, clearing and scrolling (CSI).
//! - [`device`]: DEC private mode toggles via [`Device`].
//! - [`osc_ops`]: hyperlinks, notifications, title, default colors and clipboard.
//! - [`render`]: [`new_string()`] and [`styled_string()`] for rendering to a
//!   [`String`].

// Attach.
pub mod constants;
pub mod cursor_ops;
pub mod device;
pub mod esc_buffer;
pub mod osc_ops;
pub mod render;
pub mod write_failure_policy;

// Re-export.
pub use device::*;
pub use esc_buffer::*;
pub use osc_ops::*;
pub use render::*;
pub use write_failure_policy::*;
