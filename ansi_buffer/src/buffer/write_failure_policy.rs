// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// What an [`super::EscBuffer`] does when its sink rejects a write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WriteFailurePolicy {
    /// Drop the error and keep going. Every operation is best effort, which is what
    /// you want when appending to a terminal attached stream.
    #[default]
    Discard,
    /// Keep the first error and skip all later writes. Retrieve it with
    /// [`super::EscBuffer::take_error()`] or [`super::EscBuffer::finish()`].
    Record,
}
