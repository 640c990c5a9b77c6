//! ggmax CLI
//!
//! Command-line interface for converting raw account lines into messages.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use ggmax_core::{Settings, TemplateSource};

use cli_types::{Cli, Commands};
use commands::convert::run_convert;
use commands::games::run_games;
use commands::render::run_render;
use commands::slug::run_slug;
pub(crate) use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings =
        Settings::resolve(cli.config.as_deref())?.with_overrides(cli.formats, cli.templates);
    let resolver = settings.template_resolver();

    match cli.command {
        Commands::Convert {
            base,
            game,
            template,
            output,
        } => {
            let registry = settings.load_registry()?;
            let output = output.unwrap_or_else(|| settings.output_path.clone());
            run_convert(
                &registry,
                &resolver,
                &base,
                &game,
                template.as_deref(),
                &output,
            )?;
        }
        Commands::Games => {
            let registry = settings.load_registry()?;
            run_games(&registry, &resolver);
        }
        Commands::Render {
            line,
            game,
            template,
        } => {
            let registry = settings.load_registry()?;
            let message = run_render(
                &registry,
                &resolver,
                &line,
                &game,
                &TemplateSource::from_override(template),
            )?;
            println!("{}", message);
        }
        Commands::Slug { name } => run_slug(&resolver, &name),
    }
    Ok(())
}
