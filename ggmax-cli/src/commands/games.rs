use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ggmax_core::{FormatRegistry, TemplateResolver};

pub(crate) fn run_games(registry: &FormatRegistry, resolver: &TemplateResolver) {
    if registry.is_empty() {
        log::warn!("No games configured.");
        return;
    }

    for spec in registry.specs() {
        let template = resolver.conventional_path(spec.game_name());
        let template_note = if template.is_file() {
            format!("{}", template.display().if_supports_color(Stdout, |t| t.cyan()))
        } else {
            format!(
                "{} (missing)",
                template.display().if_supports_color(Stdout, |t| t.dimmed())
            )
        };

        println!(
            "{} [separator {:?}]",
            spec.game_name().if_supports_color(Stdout, |t| t.bold()),
            spec.delimiter(),
        );
        println!("  Fields: {}", spec.fields().join(", "));
        println!("  Template: {}", template_note);
    }
}
