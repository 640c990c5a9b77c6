use ggmax_core::{FormatRegistry, TemplateResolver, TemplateSource, render_line};

use super::require_game;
use crate::CliError;

/// Render one line strictly: any parse or template error is returned.
pub(crate) fn run_render(
    registry: &FormatRegistry,
    resolver: &TemplateResolver,
    line: &str,
    game: &str,
    source: &TemplateSource,
) -> Result<String, CliError> {
    require_game(registry, game)?;
    let template = resolver
        .resolve(game, source)
        .map_err(ggmax_core::ConvertError::from)?;
    Ok(render_line(line, game, registry, &template)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ggmax_core::ConvertError;

    fn registry() -> FormatRegistry {
        FormatRegistry::from_yaml_str("g:\n  separator: \"|\"\n  fields: [user, pass]\n").unwrap()
    }

    #[test]
    fn renders_inline_template() {
        let resolver = TemplateResolver::new("templates");
        let source = TemplateSource::Inline("User: {{user}} Pass: {{pass}}".into());
        let message = run_render(&registry(), &resolver, "alice|secret", "g", &source).unwrap();
        assert_eq!(message, "User: alice Pass: secret");
    }

    #[test]
    fn short_line_is_an_error() {
        let resolver = TemplateResolver::new("templates");
        let source = TemplateSource::Inline("{{user}}".into());
        let err = run_render(&registry(), &resolver, "alice", "g", &source).unwrap_err();
        assert!(matches!(err, CliError::Convert(ConvertError::Parse(_))));
    }

    #[test]
    fn missing_template_is_an_error() {
        let resolver = TemplateResolver::new("does-not-exist");
        let err = run_render(&registry(), &resolver, "a|b", "g", &TemplateSource::Conventional)
            .unwrap_err();
        assert!(matches!(err, CliError::Convert(ConvertError::Template(_))));
    }
}
