// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt,
          io::{self, Write}};

use smallvec::SmallVec;

use super::{WriteFailurePolicy,
            constants::{CSI, NEW_LINE, PARAM_SEPARATOR, SGR_END, SPACE, TAB}};
use crate::{AnsiBufferError, AnsiBufferResult, Modifier, color::MOD_RESET};

/// Chainable builder that writes escape sequences and text to `W`.
///
/// Every operation takes `&mut self` and returns `&mut Self`, so a whole line of
/// output reads as one expression:
///
/// ```rust
/// use r3bl_ansi_buffer::{Device, EscBuffer, FG_RED};
///
/// let mut acc = Vec::new();
/// EscBuffer::new(&mut acc)
///     .enable(Device::AltScreen)
///     .move_cursor(1, 1)
///     .string("error", &[FG_RED])
///     .nl();
/// assert_eq!(acc, b"\x1b[?1049h\x1b[1;1H\x1b[31merror\x1b[0m\n");
/// ```
///
/// The buffer adds no buffering of its own, each operation is written to `W` right
/// away. What happens when `W` fails is decided by the [`WriteFailurePolicy`].
#[derive(Debug)]
pub struct EscBuffer<W: Write> {
    writer: W,
    policy: WriteFailurePolicy,
    error: Option<io::Error>,
}

mod construct {
    use super::{EscBuffer, Write, WriteFailurePolicy};

    impl<W: Write> EscBuffer<W> {
        /// Best effort buffer, write failures are discarded.
        #[must_use]
        pub fn new(writer: W) -> Self {
            Self::with_policy(writer, WriteFailurePolicy::default())
        }

        #[must_use]
        pub fn with_policy(writer: W, policy: WriteFailurePolicy) -> Self {
            Self {
                writer,
                policy,
                error: None,
            }
        }

        /// Shorthand for [`WriteFailurePolicy::Record`].
        #[must_use]
        pub fn strict(writer: W) -> Self {
            Self::with_policy(writer, WriteFailurePolicy::Record)
        }
    }
}

mod access {
    use super::{AnsiBufferError, AnsiBufferResult, EscBuffer, Write,
                WriteFailurePolicy};

    impl<W: Write> EscBuffer<W> {
        #[must_use]
        pub fn policy(&self) -> WriteFailurePolicy { self.policy }

        #[must_use]
        pub fn get_ref(&self) -> &W { &self.writer }

        /// Writing to the sink directly bypasses the failure policy.
        pub fn get_mut(&mut self) -> &mut W { &mut self.writer }

        /// Returns the sink. A recorded error is dropped, use [`Self::finish()`] to
        /// keep it.
        #[must_use]
        pub fn into_inner(self) -> W { self.writer }

        /// Removes the recorded error, if any. Writes resume after this.
        pub fn take_error(&mut self) -> Option<AnsiBufferError> {
            self.error.take().map(AnsiBufferError::from)
        }

        /// Flushes the sink and returns it.
        ///
        /// # Errors
        ///
        /// Returns [`AnsiBufferError::Write`] with the recorded error, or with the
        /// flush error if there was none.
        pub fn finish(mut self) -> AnsiBufferResult<W> {
            if let Some(err) = self.error.take() {
                return Err(err.into());
            }
            self.writer.flush()?;
            Ok(self.writer)
        }
    }
}

mod emit {
    use super::{EscBuffer, Write, WriteFailurePolicy, fmt, io};

    impl<W: Write> EscBuffer<W> {
        /// Runs one write against the sink and applies the failure policy to its
        /// result. Once an error is recorded nothing else reaches the sink.
        pub(crate) fn emit_with(
            &mut self,
            op: impl FnOnce(&mut W) -> io::Result<()>,
        ) -> &mut Self {
            if self.error.is_some() {
                return self;
            }
            if let Err(err) = op(&mut self.writer) {
                match self.policy {
                    WriteFailurePolicy::Discard => {
                        tracing::debug!(%err, "discarding failed write");
                    }
                    WriteFailurePolicy::Record => {
                        tracing::warn!(%err, "write failed, skipping further writes");
                        self.error = Some(err);
                    }
                }
            }
            self
        }

        pub(crate) fn emit(&mut self, bytes: &[u8]) -> &mut Self {
            self.emit_with(|writer| writer.write_all(bytes))
        }

        /// Writes `prefix` followed by the formatted `args`.
        pub(crate) fn emit_fmt(
            &mut self,
            prefix: &[u8],
            args: fmt::Arguments<'_>,
        ) -> &mut Self {
            self.emit_with(|writer| {
                writer.write_all(prefix)?;
                writer.write_fmt(args)
            })
        }
    }
}

mod primitives {
    use super::{CSI, EscBuffer, MOD_RESET, Modifier, NEW_LINE, PARAM_SEPARATOR,
                SGR_END, SPACE, SmallVec, TAB, Write, fmt};

    impl<W: Write> EscBuffer<W> {
        pub fn bytes(&mut self, bytes: &[u8]) -> &mut Self { self.emit(bytes) }

        pub fn byte(&mut self, byte: u8) -> &mut Self { self.emit(&[byte]) }

        /// Writes `byte` `count` times. Zero writes nothing.
        pub fn repeat_byte(&mut self, byte: u8, count: usize) -> &mut Self {
            if count == 0 {
                return self;
            }
            self.emit(&vec![byte; count])
        }

        /// Formatted write, use with [`format_args!`].
        ///
        /// ```rust
        /// use r3bl_ansi_buffer::EscBuffer;
        ///
        /// let mut acc = Vec::new();
        /// EscBuffer::new(&mut acc).printf(format_args!("{:>3}|", 7));
        /// assert_eq!(acc, b"  7|");
        /// ```
        pub fn printf(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
            self.emit_fmt(&[], args)
        }

        /// Runs `f` inside one SGR span: `CSI <mods joined by ;> m`, then whatever `f`
        /// writes, then `CSI 0 m`.
        ///
        /// Empty modifiers are skipped. When none are left `f` runs with no escape
        /// codes around it. Spans don't nest: the reset written by an inner span
        /// clears the outer span's attributes too.
        pub fn styled(
            &mut self,
            f: impl FnOnce(&mut Self),
            mods: &[Modifier],
        ) -> &mut Self {
            let mods: SmallVec<[&Modifier; 8]> =
                mods.iter().filter(|it| !it.is_empty()).collect();

            if mods.is_empty() {
                f(self);
                return self;
            }

            self.write_sgr(&mods);
            f(self);
            self.write_sgr(&[&MOD_RESET])
        }

        /// `s` inside a [`Self::styled()`] span.
        pub fn string(&mut self, s: &str, mods: &[Modifier]) -> &mut Self {
            self.styled(
                |buf| {
                    buf.bytes(s.as_bytes());
                },
                mods,
            )
        }

        pub fn nl(&mut self) -> &mut Self { self.byte(NEW_LINE) }

        pub fn tab(&mut self) -> &mut Self { self.byte(TAB) }

        pub fn spc(&mut self) -> &mut Self { self.byte(SPACE) }

        /// Writes `start`, then whatever `f` writes, then `end`. Handy for brackets
        /// and quotes, eg: `[`...`]`.
        pub fn in_byte_pair(
            &mut self,
            start: u8,
            end: u8,
            f: impl FnOnce(&mut Self),
        ) -> &mut Self {
            self.styled(
                |buf| {
                    buf.byte(start);
                    f(buf);
                    buf.byte(end);
                },
                &[],
            )
        }

        /// Runs every callback in `seq` against this buffer, in order.
        ///
        /// ```rust
        /// use r3bl_ansi_buffer::EscBuffer;
        ///
        /// let mut acc = Vec::new();
        /// EscBuffer::new(&mut acc).iter(["a", "b", "c"].map(|it| {
        ///     move |buf: &mut EscBuffer<&mut Vec<u8>>| {
        ///         buf.string(it, &[]);
        ///     }
        /// }));
        /// assert_eq!(acc, b"abc");
        /// ```
        #[allow(clippy::iter_not_returning_iterator)]
        pub fn iter<F>(&mut self, seq: impl IntoIterator<Item = F>) -> &mut Self
        where
            F: FnOnce(&mut Self),
        {
            for f in seq {
                f(self);
            }
            self
        }

        fn write_sgr(&mut self, mods: &[&Modifier]) -> &mut Self {
            self.emit(CSI);
            for (index, it) in mods.iter().enumerate() {
                if index > 0 {
                    self.byte(PARAM_SEPARATOR);
                }
                self.emit(it.as_bytes());
            }
            self.byte(SGR_END)
        }
    }
}
