// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. Two forms are accepted:
//! - `#rrggbb`, eg: `#ff1034`.
//! - `#rgb`, eg: `#f0c`. Each digit is expanded to a full byte, so `f` becomes `ff`.
//!
//! Digits may be upper or lower case. The whole input has to be consumed.

use nom::{IResult,
          Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res}};

use crate::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
///
/// # Errors
///
/// Returns a nom error if the input is not exactly `#rgb` or `#rrggbb`.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let channels = alt((
        all_consuming((
            helper_fns::parse_long_seg,
            helper_fns::parse_long_seg,
            helper_fns::parse_long_seg,
        )),
        all_consuming((
            helper_fns::parse_short_seg,
            helper_fns::parse_short_seg,
            helper_fns::parse_short_seg,
        )),
    ));
    let (input, (_, (red, green, blue))) = (tag("#"), channels).parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// Used by [`take_while_m_n`], as long as it returns `true` items will be taken
    /// from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// Two digits, eg: `ab` -> `0xab`.
    pub fn parse_long_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), |it: &str| {
            u8::from_str_radix(it, 16)
        })
        .parse(input)
    }

    /// One digit, expanded to a byte, eg: `a` -> `0xaa`.
    pub fn parse_short_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |it: &str| {
            u8::from_str_radix(it, 16).map(|nibble| nibble * 0x11)
        })
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn parse_valid_long_color() {
        let Ok((remainder, color)) = parse_hex_color("#2F14DF") else {
            panic!();
        };
        assert_eq!(remainder, "");
        assert_eq!(color, RgbValue::from_u8(47, 20, 223));
    }

    #[test_case("#0f8", (0, 255, 136))]
    #[test_case("#fff", (255, 255, 255))]
    #[test_case("#F0C", (255, 0, 204))]
    fn parse_valid_short_color(input: &str, expected: (u8, u8, u8)) {
        let Ok((_, color)) = parse_hex_color(input) else {
            panic!("{input} should parse");
        };
        assert_eq!(color, RgbValue::from(expected));
    }

    #[test_case("" ; "empty")]
    #[test_case("#" ; "only hash")]
    #[test_case("2F14DF" ; "missing hash")]
    #[test_case("#2F14D" ; "five digits")]
    #[test_case("#2F14DF0" ; "seven digits")]
    #[test_case("#ab" ; "two digits")]
    #[test_case("#abcd" ; "four digits")]
    #[test_case("#gg0000" ; "not hex")]
    #[test_case("#2F14DF🔅" ; "trailing junk")]
    fn parse_invalid_color(input: &str) {
        assert!(parse_hex_color(input).is_err());
    }
}
