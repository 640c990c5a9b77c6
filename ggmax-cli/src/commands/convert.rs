use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use ggmax_core::{BatchConverter, FormatRegistry, TemplateResolver};

use super::require_game;
use crate::CliError;

/// Convert a base file and write the joined messages to `output`.
pub(crate) fn run_convert(
    registry: &FormatRegistry,
    resolver: &TemplateResolver,
    base: &Path,
    game: &str,
    template: Option<&Path>,
    output: &Path,
) -> Result<usize, CliError> {
    require_game(registry, game)?;

    log::debug!("Converting {} as '{}'", base.display(), game);
    let converter = BatchConverter::new(registry, resolver);
    let count = converter.convert_file(base, game, template, output)?;

    if count == 0 {
        log::warn!("No messages generated from {}", base.display());
    } else {
        log::info!(
            "{} {} message(s) generated",
            "\u{2714}".if_supports_color(Stderr, |t| t.green()),
            count,
        );
    }
    Ok(count)
}
