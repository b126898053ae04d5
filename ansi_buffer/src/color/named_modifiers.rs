// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named [`Modifier`] constants for the 16 standard colors and the common text
//! attributes.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#Select_Graphic_Rendition_parameters>

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

use super::Modifier;

// Foreground colors.
pub const FG_BLACK       : Modifier = Modifier::from_static("30");
pub const FG_RED         : Modifier = Modifier::from_static("31");
pub const FG_GREEN       : Modifier = Modifier::from_static("32");
pub const FG_YELLOW      : Modifier = Modifier::from_static("33");
pub const FG_BLUE        : Modifier = Modifier::from_static("34");
pub const FG_MAGENTA     : Modifier = Modifier::from_static("35");
pub const FG_CYAN        : Modifier = Modifier::from_static("36");
pub const FG_WHITE       : Modifier = Modifier::from_static("37");

// Foreground bright colors.
pub const FG_HI_BLACK    : Modifier = Modifier::from_static("90");
pub const FG_HI_RED      : Modifier = Modifier::from_static("91");
pub const FG_HI_GREEN    : Modifier = Modifier::from_static("92");
pub const FG_HI_YELLOW   : Modifier = Modifier::from_static("93");
pub const FG_HI_BLUE     : Modifier = Modifier::from_static("94");
pub const FG_HI_MAGENTA  : Modifier = Modifier::from_static("95");
pub const FG_HI_CYAN     : Modifier = Modifier::from_static("96");
pub const FG_HI_WHITE    : Modifier = Modifier::from_static("97");

// Background colors.
pub const BG_BLACK       : Modifier = Modifier::from_static("40");
pub const BG_RED         : Modifier = Modifier::from_static("41");
pub const BG_GREEN       : Modifier = Modifier::from_static("42");
pub const BG_YELLOW      : Modifier = Modifier::from_static("43");
pub const BG_BLUE        : Modifier = Modifier::from_static("44");
pub const BG_MAGENTA     : Modifier = Modifier::from_static("45");
pub const BG_CYAN        : Modifier = Modifier::from_static("46");
pub const BG_WHITE       : Modifier = Modifier::from_static("47");

// Background bright colors.
pub const BG_HI_BLACK    : Modifier = Modifier::from_static("100");
pub const BG_HI_RED      : Modifier = Modifier::from_static("101");
pub const BG_HI_GREEN    : Modifier = Modifier::from_static("102");
pub const BG_HI_YELLOW   : Modifier = Modifier::from_static("103");
pub const BG_HI_BLUE     : Modifier = Modifier::from_static("104");
pub const BG_HI_MAGENTA  : Modifier = Modifier::from_static("105");
pub const BG_HI_CYAN     : Modifier = Modifier::from_static("106");
pub const BG_HI_WHITE    : Modifier = Modifier::from_static("107");

// Text attributes.
pub const MOD_BOLD       : Modifier = Modifier::from_static("1");
pub const MOD_FAINT      : Modifier = Modifier::from_static("2");
pub const MOD_ITALIC     : Modifier = Modifier::from_static("3");
pub const MOD_UNDERLINE  : Modifier = Modifier::from_static("4");
pub const MOD_BLINK      : Modifier = Modifier::from_static("5");
pub const MOD_REVERSE    : Modifier = Modifier::from_static("7");
pub const MOD_CROSSOUT   : Modifier = Modifier::from_static("9");
pub const MOD_OVERLINE   : Modifier = Modifier::from_static("53");

/// Resets every attribute. Written by [`crate::EscBuffer::styled()`] at the end of a
/// span, so it is not public.
pub(crate) const MOD_RESET: Modifier = Modifier::from_static("0");

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{bg_ansi, fg_ansi};

    #[test]
    fn test_color_constants_match_codec() {
        let fg = [
            FG_BLACK, FG_RED, FG_GREEN, FG_YELLOW, FG_BLUE, FG_MAGENTA, FG_CYAN, FG_WHITE,
            FG_HI_BLACK, FG_HI_RED, FG_HI_GREEN, FG_HI_YELLOW, FG_HI_BLUE, FG_HI_MAGENTA,
            FG_HI_CYAN, FG_HI_WHITE,
        ];
        let bg = [
            BG_BLACK, BG_RED, BG_GREEN, BG_YELLOW, BG_BLUE, BG_MAGENTA, BG_CYAN, BG_WHITE,
            BG_HI_BLACK, BG_HI_RED, BG_HI_GREEN, BG_HI_YELLOW, BG_HI_BLUE, BG_HI_MAGENTA,
            BG_HI_CYAN, BG_HI_WHITE,
        ];
        for (col, (fg, bg)) in (0u8..).zip(fg.iter().zip(bg.iter())) {
            assert_eq!(*fg, fg_ansi(col), "fg {col}");
            assert_eq!(*bg, bg_ansi(col), "bg {col}");
        }
    }

    #[test]
    fn test_attributes() {
        let it = [
            MOD_BOLD, MOD_FAINT, MOD_ITALIC, MOD_UNDERLINE, MOD_BLINK, MOD_REVERSE,
            MOD_CROSSOUT, MOD_OVERLINE, MOD_RESET,
        ]
        .map(|it| it.to_string());
        assert_eq!(it, ["1", "2", "3", "4", "5", "7", "9", "53", "0"]);
    }
}
