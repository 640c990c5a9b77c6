//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ggmax")]
#[command(about = "Turn raw account lines into ready-to-send messages", long_about = None)]
pub(crate) struct Cli {
    /// Settings file (defaults to ./ggmax.toml, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Format registry YAML (overrides the settings file)
    #[arg(long, global = true)]
    pub formats: Option<PathBuf>,

    /// Template directory (overrides the settings file)
    #[arg(long, global = true)]
    pub templates: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Convert every line of a base file and write the joined messages
    Convert {
        /// Base file with one raw line per account
        base: PathBuf,

        /// Game name as it appears in the format registry
        #[arg(short, long)]
        game: String,

        /// Template file to use instead of <templates>/<slug>.txt
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output file (default: output_path from settings)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List configured games with their separator and fields
    Games,

    /// Render a single line, failing on any error
    Render {
        /// The raw line
        line: String,

        /// Game name as it appears in the format registry
        #[arg(short, long)]
        game: String,

        /// Template file to use instead of <templates>/<slug>.txt
        #[arg(short, long)]
        template: Option<PathBuf>,
    },

    /// Print the template key and conventional template path for a game name
    Slug {
        /// Game name
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_convert() {
        let cli = Cli::try_parse_from([
            "ggmax", "convert", "base.txt", "--game", "Jogo X", "-o", "out.txt",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert {
                base,
                game,
                template,
                output,
            } => {
                assert_eq!(base, PathBuf::from("base.txt"));
                assert_eq!(game, "Jogo X");
                assert!(template.is_none());
                assert_eq!(output, Some(PathBuf::from("out.txt")));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ggmax",
            "games",
            "--formats",
            "f.yaml",
            "--quiet",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Games));
        assert_eq!(cli.formats, Some(PathBuf::from("f.yaml")));
        assert!(cli.quiet);
    }

    #[test]
    fn render_requires_game() {
        assert!(Cli::try_parse_from(["ggmax", "render", "a|b"]).is_err());
    }
}
