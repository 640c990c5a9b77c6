//! Logger setup for the CLI.
//!
//! Diagnostics go to stderr so stdout only carries command output.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG, when set, refines the level chosen above.
    builder.parse_default_env();
    builder.target(env_logger::Target::Stderr);
    builder.format(move |buf, record| {
        let prefix = match record.level() {
            Level::Error => Some(format!("{}", "error".if_supports_color(Stderr, |t| t.red()))),
            Level::Warn => Some(format!("{}", "warn".if_supports_color(Stderr, |t| t.yellow()))),
            Level::Info => None,
            Level::Debug | Level::Trace => Some(format!(
                "{}",
                record
                    .level()
                    .as_str()
                    .to_lowercase()
                    .if_supports_color(Stderr, |t| t.dimmed())
            )),
        };

        if verbose {
            write!(buf, "[{}] ", buf.timestamp_seconds())?;
        }
        match prefix {
            Some(p) => writeln!(buf, "{}: {}", p, record.args()),
            None => writeln!(buf, "{}", record.args()),
        }
    });
    builder.init();
}
