//! ggmax web form
//!
//! Serves the upload-paste-download conversion form.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use ggmax_core::Settings;
use ggmax_web::{AppState, run_server};

#[derive(Parser)]
#[command(name = "ggmax-web")]
#[command(about = "Web form for generating messages from raw account lines", long_about = None)]
struct Args {
    /// Settings file (defaults to ./ggmax.toml, then the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Format registry YAML (overrides the settings file)
    #[arg(long)]
    formats: Option<PathBuf>,

    /// Template directory (overrides the settings file)
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Address to listen on (overrides the settings file)
    #[arg(short, long)]
    listen: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let settings = match Settings::resolve(args.config.as_deref()) {
        Ok(s) => s.with_overrides(args.formats, args.templates),
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let registry = match settings.load_registry() {
        Ok(r) => r,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Loaded {} game format(s) from {}; templates from {}",
        registry.len(),
        settings.formats_path.display(),
        settings.templates_dir.display()
    );

    let listen_addr = args
        .listen
        .unwrap_or_else(|| settings.web.listen_addr.clone());
    let state = AppState::new(registry, settings.template_resolver())
        .with_upload_limit(settings.web.max_upload_bytes);

    match run_server(state, &listen_addr).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
