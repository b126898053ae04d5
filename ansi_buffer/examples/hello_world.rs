// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shows off text attributes, truecolor foregrounds and backgrounds, and the OSC
//! commands (clipboard, window title, notification, hyperlink).
//!
//! ```sh
//! cargo run --example hello_world -- --log-level debug
//! ```

use std::io::StdoutLock;

use clap::Parser;
use r3bl_ansi_buffer::{EscBuffer, FG_BLACK, MOD_BLINK, MOD_BOLD, MOD_CROSSOUT,
                       MOD_FAINT, MOD_ITALIC, MOD_OVERLINE, MOD_REVERSE, MOD_UNDERLINE,
                       bg_rgb, fg_rgb, parse_hex_rgb};

/// Print a sampler of styles and terminal commands to stdout.
#[derive(Debug, Parser)]
#[command(version)]
struct CLIArg {
    /// Text that is copied, set as window title and sent as a notification.
    #[arg(long, default_value = "Hello, world!")]
    text: String,

    /// Log to stderr at this level (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<tracing::Level>,
}

const PALETTE: [(&str, &str); 7] = [
    ("red", "#E88388"),
    ("green", "#A8CC8C"),
    ("yellow", "#DBAB79"),
    ("blue", "#71BEF2"),
    ("magenta", "#D290E4"),
    ("cyan", "#66C2CD"),
    ("gray", "#B9BFCA"),
];

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();
    if let Some(level) = cli_arg.log_level {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(level)
            .init();
    }

    let text = cli_arg.text.as_str();
    let mut out = EscBuffer::strict(std::io::stdout().lock());

    // Attributes.
    out.tab()
        .string("bold", &[MOD_BOLD])
        .spc()
        .string("faint", &[MOD_FAINT])
        .spc()
        .string("italic", &[MOD_ITALIC])
        .spc()
        .string("underline", &[MOD_UNDERLINE])
        .spc()
        .string("crossout", &[MOD_CROSSOUT])
        .spc()
        .string("overline", &[MOD_OVERLINE])
        .spc()
        .string("reverse", &[MOD_REVERSE])
        .spc()
        .string("blink", &[MOD_BLINK])
        .nl();

    // Truecolor foregrounds, then the same colors as backgrounds.
    out.tab().iter(PALETTE.iter().enumerate().map(|(index, (name, hex))| {
        move |buf: &mut EscBuffer<StdoutLock<'static>>| {
            if index > 0 {
                buf.spc();
            }
            buf.string(name, &[fg_rgb(parse_hex_rgb(hex))]);
        }
    }));
    out.nl().tab();
    for (index, (name, hex)) in PALETTE.iter().enumerate() {
        if index > 0 {
            out.spc();
        }
        out.string(name, &[FG_BLACK, bg_rgb(parse_hex_rgb(hex))]);
    }
    out.nl().nl();

    // OSC commands.
    out.copy(text)
        .tab()
        .printf(format_args!("{text:?}"))
        .string(" copied to clipboard", &[])
        .nl()
        .nl()
        .set_window_title(text)
        .tab()
        .printf(format_args!("{text:?}"))
        .string(" set as window title", &[])
        .nl()
        .nl()
        .notify("r3bl_ansi_buffer", text)
        .tab()
        .string("Triggered a notification", &[])
        .nl()
        .tab()
        .hyperlink("http://example.com", "This is a link")
        .nl();

    out.finish()?;
    Ok(())
}
