// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow,
          fmt::{Display, Formatter, Result}};

/// One SGR (Select Graphic Rendition) parameter fragment, eg: `1` for bold,
/// `38;5;69` for an ANSI-256 foreground or `48;2;255;0;0` for a truecolor background.
///
/// Several modifiers are joined with `;` inside a single `ESC [ ... m` sequence by
/// [`crate::EscBuffer::styled()`]. A modifier never has a leading or trailing `;`.
///
/// An empty modifier ([`Modifier::EMPTY`], or [`Default`]) is a no-op: it is skipped
/// when modifiers are joined, and a span whose modifiers are all empty is written
/// without any escape codes.
///
/// Named constants like [`crate::MOD_BOLD`] borrow a `&'static str`, while the color
/// constructors like [`crate::fg_rgb()`] own their text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifier(Cow<'static, str>);

impl Modifier {
    /// The no-op modifier.
    pub const EMPTY: Modifier = Modifier::from_static("");

    #[must_use]
    pub const fn from_static(text: &'static str) -> Self { Self(Cow::Borrowed(text)) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { self.0.as_bytes() }
}

impl From<String> for Modifier {
    fn from(value: String) -> Self { Self(Cow::Owned(value)) }
}

impl From<&'static str> for Modifier {
    fn from(value: &'static str) -> Self { Self::from_static(value) }
}

impl AsRef<str> for Modifier {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(self.as_str()) }
}
