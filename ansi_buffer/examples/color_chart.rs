// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints every palette color as a background, labeled with its index and the hex
//! value [`to_hex()`] decodes it to.
//!
//! ```sh
//! cargo run --example color_chart
//! cargo run --example color_chart -- --section grayscale
//! ```

use std::io::Write;

use clap::{Parser, ValueEnum};
use r3bl_ansi_buffer::{EscBuffer, FG_BLACK, FG_WHITE, MOD_BOLD, Modifier, bg_ansi,
                       bg_ansi256, to_hex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Section {
    /// The 16 basic colors.
    Basic,
    /// The 6x6x6 color cube, indices 16 to 231.
    Extended,
    /// The 24 step gray ramp, indices 232 to 255.
    Grayscale,
}

/// Print the 256 color palette to stdout.
#[derive(Debug, Parser)]
#[command(version)]
struct CLIArg {
    /// Only print these sections. All of them when omitted.
    #[arg(long, value_enum)]
    section: Vec<Section>,

    /// Log to stderr at this level (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<tracing::Level>,
}

/// Black text on the lighter backgrounds, white on the darker ones.
fn fg_for(index: u8, threshold: u8) -> Modifier {
    if index >= threshold { FG_BLACK } else { FG_WHITE }
}

fn cell<W: Write>(out: &mut EscBuffer<W>, index: u8, bg: Modifier, threshold: u8) {
    let hex = to_hex(&bg);
    out.styled(
        |buf| {
            buf.printf(format_args!(" {index:>3} {hex} "));
        },
        &[fg_for(index, threshold), bg],
    );
}

fn basic<W: Write>(out: &mut EscBuffer<W>) {
    out.string("Basic ANSI colors", &[MOD_BOLD]).nl();
    for index in 0..16u8 {
        if index.is_multiple_of(8) {
            out.nl();
        }
        cell(out, index, bg_ansi(index), 5);
    }
    out.nl().nl();
}

fn extended<W: Write>(out: &mut EscBuffer<W>) {
    out.string("Extended ANSI colors", &[MOD_BOLD]).nl();
    for index in 16..232u8 {
        if (index - 16).is_multiple_of(6) {
            out.nl();
        }
        cell(out, index, bg_ansi256(index), 28);
    }
    out.nl().nl();
}

fn grayscale<W: Write>(out: &mut EscBuffer<W>) {
    out.string("Extended ANSI Grayscale", &[MOD_BOLD]).nl();
    for index in 232..=255u8 {
        if (index - 232).is_multiple_of(6) {
            out.nl();
        }
        cell(out, index, bg_ansi256(index), 244);
    }
    out.nl().nl();
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();
    if let Some(level) = cli_arg.log_level {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(level)
            .init();
    }

    let sections = if cli_arg.section.is_empty() {
        vec![Section::Basic, Section::Extended, Section::Grayscale]
    } else {
        cli_arg.section
    };
    tracing::debug!(?sections, "printing color chart");

    let mut out = EscBuffer::strict(std::io::stdout().lock());
    for section in sections {
        match section {
            Section::Basic => basic(&mut out),
            Section::Extended => extended(&mut out),
            Section::Grayscale => grayscale(&mut out),
        }
    }

    out.finish()?;
    Ok(())
}
