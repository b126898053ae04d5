// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the strict (result returning) variants of the codec and buffer.
//!
//! The default API never surfaces these. They are only produced by
//! [`crate::try_parse_hex_rgb()`], [`crate::try_to_hex()`] and an [`crate::EscBuffer`]
//! created with [`crate::WriteFailurePolicy::Record`].

/// Result alias used across this crate.
pub type AnsiBufferResult<T> = Result<T, AnsiBufferError>;

/// Everything that can go wrong when a caller opts into explicit error reporting.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AnsiBufferError {
    /// The input is not `#rgb` or `#rrggbb`.
    #[error("'{input}' is not a hex color")]
    #[diagnostic(
        code(r3bl_ansi_buffer::invalid_hex_color),
        help("Use the form `#rgb` or `#rrggbb`, eg: `#0f8` or `#ff1034`")
    )]
    InvalidHexColor { input: String },

    /// The modifier was not produced by one of the color constructors.
    #[error("'{modifier}' is not a color modifier")]
    #[diagnostic(
        code(r3bl_ansi_buffer::unrecognized_modifier),
        help(
            "Only modifiers from `fg_ansi`, `bg_ansi`, `fg_ansi256`, `bg_ansi256`, \
             `fg_rgb` and `bg_rgb` can be converted back to hex"
        )
    )]
    UnrecognizedModifier { modifier: String },

    /// The modifier decodes to a palette slot that does not exist.
    #[error("Palette index {index} is outside 0..=255")]
    #[diagnostic(code(r3bl_ansi_buffer::palette_index_out_of_range))]
    PaletteIndexOutOfRange { index: i64 },

    /// The underlying sink rejected a write.
    #[error("Failed to write escape sequence to sink")]
    #[diagnostic(code(r3bl_ansi_buffer::write))]
    Write(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display_messages() {
        let it = AnsiBufferError::InvalidHexColor {
            input: "#12".to_string(),
        };
        assert_eq!(it.to_string(), "'#12' is not a hex color");

        let it = AnsiBufferError::PaletteIndexOutOfRange { index: 300 };
        assert_eq!(it.to_string(), "Palette index 300 is outside 0..=255");
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;
        let it = AnsiBufferError::UnrecognizedModifier {
            modifier: "1".to_string(),
        };
        let code = it.code().map(|it| it.to_string());
        assert_eq!(
            code.as_deref(),
            Some("r3bl_ansi_buffer::unrecognized_modifier")
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::other("boom");
        let it: AnsiBufferError = io_err.into();
        assert!(matches!(it, AnsiBufferError::Write(_)));
    }
}
