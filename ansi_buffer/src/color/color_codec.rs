// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversions between the three terminal color representations and [`Modifier`]s.
//!
//! | Representation | Foreground              | Background              |
//! | :------------- | :---------------------- | :---------------------- |
//! | 4-bit ANSI     | `30..=37`, `90..=97`    | `40..=47`, `100..=107`  |
//! | 8-bit ANSI-256 | `38;5;<index>`          | `48;5;<index>`          |
//! | 24-bit RGB     | `38;2;<r>;<g>;<b>`      | `48;2;<r>;<g>;<b>`      |
//!
//! [`to_hex()`] goes the other way, from a generated [`Modifier`] to `#rrggbb`. It is a
//! display and debugging helper, so by default it reports failure with the
//! [`INVALID_COLOR`] sentinel instead of an error. [`try_to_hex()`] is the strict
//! variant.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use smallvec::SmallVec;

use super::{ANSI_HEX_TABLE, Modifier, RgbValue, hex_color_parser::parse_hex_color};
use crate::{AnsiBufferError, AnsiBufferResult};

/// Returned by [`to_hex()`] when the modifier can't be decoded.
pub const INVALID_COLOR: &str = "invalid color";

/// Foreground for a 4-bit color index.
///
/// - `0..=7` -> `30..=37`
/// - `8..=15` -> `90..=97`
///
/// The input is expected to be in `0..=15`. Anything larger is not rejected and
/// produces an SGR number that terminals won't treat as a foreground color.
#[must_use]
pub fn fg_ansi(col: u8) -> Modifier {
    let offset: u16 = if col < 8 { 30 } else { 82 };
    Modifier::from((u16::from(col) + offset).to_string())
}

/// Background for a 4-bit color index.
///
/// - `0..=7` -> `40..=47`
/// - `8..=15` -> `100..=107`
///
/// Same precondition as [`fg_ansi()`].
#[must_use]
pub fn bg_ansi(col: u8) -> Modifier {
    let offset: u16 = if col < 8 { 40 } else { 92 };
    Modifier::from((u16::from(col) + offset).to_string())
}

/// Foreground from the 256 color palette. Meant for `16..=255`, since `0..=15` are
/// better expressed with [`fg_ansi()`].
#[must_use]
pub fn fg_ansi256(index: u8) -> Modifier { Modifier::from(format!("38;5;{index}")) }

/// Background from the 256 color palette. Meant for `16..=255`.
#[must_use]
pub fn bg_ansi256(index: u8) -> Modifier { Modifier::from(format!("48;5;{index}")) }

/// Truecolor foreground.
#[must_use]
pub fn fg_rgb(color: impl Into<RgbValue>) -> Modifier {
    let RgbValue { red, green, blue } = color.into();
    Modifier::from(format!("38;2;{red};{green};{blue}"))
}

/// Truecolor background.
#[must_use]
pub fn bg_rgb(color: impl Into<RgbValue>) -> Modifier {
    let RgbValue { red, green, blue } = color.into();
    Modifier::from(format!("48;2;{red};{green};{blue}"))
}

/// Parses `#rgb` or `#rrggbb`. Malformed input gives black.
///
/// Use [`try_parse_hex_rgb()`] to find out whether the input was valid.
#[must_use]
pub fn parse_hex_rgb(hex: &str) -> RgbValue {
    try_parse_hex_rgb(hex).unwrap_or_else(|err| {
        tracing::trace!(%err, "falling back to black");
        RgbValue::default()
    })
}

/// Strict variant of [`parse_hex_rgb()`].
///
/// # Errors
///
/// Returns [`AnsiBufferError::InvalidHexColor`] if `hex` is not exactly `#rgb` or
/// `#rrggbb`.
pub fn try_parse_hex_rgb(hex: &str) -> AnsiBufferResult<RgbValue> {
    match parse_hex_color(hex) {
        Ok((_, color)) => Ok(color),
        Err(_) => Err(AnsiBufferError::InvalidHexColor {
            input: hex.to_string(),
        }),
    }
}

/// Maps a modifier made by one of the color constructors back to `#rrggbb`. Returns
/// [`INVALID_COLOR`] for anything else.
#[must_use]
pub fn to_hex(modifier: &Modifier) -> String {
    try_to_hex(modifier).unwrap_or_else(|err| {
        tracing::trace!(%err, "can't convert modifier to hex");
        INVALID_COLOR.to_string()
    })
}

/// Strict variant of [`to_hex()`].
///
/// Dispatches on the shape of the modifier:
/// - `<code>`: a 4-bit SGR code, folded back to a palette index by
///   [`fold_ansi_code()`].
/// - `<any>;5;<index>`: a 256 color palette index.
/// - `<any>;2;<r>;<g>;<b>`: truecolor channels, formatted directly.
///
/// # Errors
///
/// - [`AnsiBufferError::UnrecognizedModifier`] if the modifier has none of the shapes
///   above, or a field is not a number.
/// - [`AnsiBufferError::PaletteIndexOutOfRange`] if the palette index is not in
///   `0..=255`.
pub fn try_to_hex(modifier: &Modifier) -> AnsiBufferResult<String> {
    let text = modifier.as_str();
    let unrecognized = || AnsiBufferError::UnrecognizedModifier {
        modifier: text.to_string(),
    };
    let fields: SmallVec<[&str; 5]> = text.split(';').collect();

    match fields.as_slice() {
        [code] => {
            let code: i64 = code.parse().map_err(|_| unrecognized())?;
            palette_hex(fold_ansi_code(code))
        }
        [_, "5", index] => {
            let index: i64 = index.parse().map_err(|_| unrecognized())?;
            palette_hex(index)
        }
        [_, "2", red, green, blue] => {
            let channel = |it: &&str| it.parse::<u8>().map_err(|_| unrecognized());
            let color = RgbValue::from_u8(channel(red)?, channel(green)?, channel(blue)?);
            Ok(color.to_hex())
        }
        _ => Err(unrecognized()),
    }
}

/// Folds a 4-bit SGR code (`30..=37`, `40..=47`, `90..=97`, `100..=107`) back to its
/// palette index in `0..=15`.
///
/// The ones digit is the color. The tens digit is 3, 4, 9 or 10, and only 9 and 10
/// have bit 3 set, which adds the bright offset of 8. Codes outside those ranges fold
/// to arbitrary values.
#[must_use]
pub fn fold_ansi_code(code: i64) -> i64 {
    let tens = code / 10;
    code - 10 * tens + ((tens >> 3) << 3)
}

fn palette_hex(index: i64) -> AnsiBufferResult<String> {
    usize::try_from(index)
        .ok()
        .and_then(|it| ANSI_HEX_TABLE.get(it))
        .map(|it| (*it).to_string())
        .ok_or(AnsiBufferError::PaletteIndexOutOfRange { index })
}
