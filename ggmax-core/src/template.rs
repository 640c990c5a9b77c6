//! Message templates with `{{ field }}` placeholders.
//!
//! Only variable substitution is supported: each placeholder is replaced by
//! the value of the field it names, and text outside placeholders is copied
//! unchanged. A placeholder naming a field the line does not carry fails the
//! render.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::TemplateError;
use crate::parser::FieldMapping;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid")
});

/// File extension of conventional template files.
pub const TEMPLATE_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template, ready to render any number of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text. Unrecognized braces are kept as literal text.
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(text[last..whole.start()].to_string()));
            }
            segments.push(Segment::Placeholder(name.as_str().to_string()));
            last = whole.end();
        }
        if last < text.len() {
            segments.push(Segment::Literal(text[last..].to_string()));
        }

        Self { segments }
    }

    /// Substitute `fields` into the template.
    pub fn render(&self, fields: &FieldMapping) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = fields
                        .get(name)
                        .ok_or_else(|| TemplateError::undefined_field(name.as_str()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

/// Parse `template_text` and render it against `fields` in one step.
pub fn render(fields: &FieldMapping, template_text: &str) -> Result<String, TemplateError> {
    Template::parse(template_text).render(fields)
}

/// Convert a game name into its template lookup key.
///
/// Accents are stripped via NFKD decomposition, anything that is not a word
/// character, whitespace or hyphen is dropped, the result is lowercased, and
/// runs of whitespace/hyphens become a single underscore.
///
/// ```
/// use ggmax_core::template::slug;
///
/// assert_eq!(slug("Jogo X"), "jogo_x");
/// assert_eq!(slug("Pokémon: Édition Spéciale"), "pokemon_edition_speciale");
/// assert_eq!(slug("Free Fire - BR"), "free_fire_br");
/// ```
pub fn slug(text: &str) -> String {
    let kept: String = text
        .nfkd()
        .filter(|c| c.is_ascii())
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut result = String::with_capacity(kept.len());
    let mut last_was_separator = false;
    for c in kept.trim().chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_separator {
                result.push('_');
                last_was_separator = true;
            }
        } else {
            result.push(c.to_ascii_lowercase());
            last_was_separator = false;
        }
    }
    result
}

/// Where a game's template comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// `<templates_dir>/<slug(game)>.txt`
    #[default]
    Conventional,
    /// An explicit template file.
    Path(PathBuf),
    /// Template text held in memory, e.g. an uploaded file.
    Inline(String),
}

impl TemplateSource {
    /// An explicit template file when given, the conventional one otherwise.
    pub fn from_override(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Conventional, Self::Path)
    }
}

/// Resolves templates for games from a template directory.
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    templates_dir: PathBuf,
}

impl TemplateResolver {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// Path of the conventional template file for `game`.
    pub fn conventional_path(&self, game: &str) -> PathBuf {
        self.templates_dir
            .join(format!("{}.{}", slug(game), TEMPLATE_EXTENSION))
    }

    pub fn resolve(&self, game: &str, source: &TemplateSource) -> Result<Template, TemplateError> {
        match source {
            TemplateSource::Conventional => load_template_file(&self.conventional_path(game)),
            TemplateSource::Path(path) => load_template_file(path),
            TemplateSource::Inline(text) => Ok(Template::parse(text)),
        }
    }
}

/// Read and parse a template file, dropping one trailing line break.
pub fn load_template_file(path: &Path) -> Result<Template, TemplateError> {
    let text = std::fs::read_to_string(path).map_err(|e| TemplateError::read(path, e))?;
    log::debug!("Loaded template {}", path.display());
    Ok(Template::parse(strip_trailing_newline(&text)))
}

/// Remove exactly one trailing `\n` or `\r\n`.
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldMapping {
        pairs.iter().copied().collect()
    }

    #[test]
    fn renders_user_pass() {
        let out = render(
            &fields(&[("user", "alice"), ("pass", "secret")]),
            "User: {{user}} Pass: {{pass}}",
        )
        .unwrap();
        assert_eq!(out, "User: alice Pass: secret");
    }

    #[test]
    fn whitespace_inside_braces() {
        let out = render(&fields(&[("user", "bob")]), "[{{ user }}] [{{   user}}]").unwrap();
        assert_eq!(out, "[bob] [bob]");
    }

    #[test]
    fn undefined_field_fails() {
        let err = render(&fields(&[("user", "bob")]), "{{ user }} {{ email }}").unwrap_err();
        assert!(matches!(err, TemplateError::UndefinedField { ref field } if field == "email"));
    }

    #[test]
    fn unused_fields_are_fine() {
        let out = render(&fields(&[("a", "1"), ("b", "2")]), "only {{a}}").unwrap();
        assert_eq!(out, "only 1");
    }

    #[test]
    fn literal_text_is_untouched() {
        let tpl = "Linha 1\n  {single} {{ }} }}{{\n\tfim: {{x}}!";
        let out = render(&fields(&[("x", "ok")]), tpl).unwrap();
        assert_eq!(out, "Linha 1\n  {single} {{ }} }}{{\n\tfim: ok!");
    }

    #[test]
    fn values_are_not_reinterpreted() {
        let out = render(&fields(&[("a", "{{b}}"), ("b", "nope")]), "{{a}}").unwrap();
        assert_eq!(out, "{{b}}");
    }

    #[test]
    fn unicode_field_names() {
        let out = render(&fields(&[("usuário", "zé")]), "Olá {{ usuário }}").unwrap();
        assert_eq!(out, "Olá zé");
    }

    #[test]
    fn slug_examples() {
        assert_eq!(slug("jogo_x"), "jogo_x");
        assert_eq!(slug("  Counter-Strike 2  "), "counter_strike_2");
        assert_eq!(slug("Ação & Aventura"), "acao_aventura");
        assert_eq!(slug("League of Legends (BR)"), "league_of_legends_br");
        assert_eq!(slug("a -- b"), "a_b");
    }

    #[test]
    fn slug_drops_non_latin_scripts() {
        assert_eq!(slug("原神 Genshin"), "genshin");
    }

    #[test]
    fn strips_only_one_trailing_newline() {
        assert_eq!(strip_trailing_newline("abc\n"), "abc");
        assert_eq!(strip_trailing_newline("abc\r\n"), "abc");
        assert_eq!(strip_trailing_newline("abc\n\n"), "abc\n");
        assert_eq!(strip_trailing_newline("abc"), "abc");
    }

    #[test]
    fn conventional_path_uses_slug() {
        let resolver = TemplateResolver::new("templates");
        assert_eq!(
            resolver.conventional_path("Free Fire"),
            Path::new("templates").join("free_fire.txt")
        );
    }

    #[test]
    fn inline_source_is_verbatim() {
        let resolver = TemplateResolver::new("does-not-exist");
        let tpl = resolver
            .resolve("g", &TemplateSource::Inline("{{a}}\n".into()))
            .unwrap();
        assert_eq!(tpl.render(&fields(&[("a", "1")])).unwrap(), "1\n");
    }

    #[test]
    fn override_selects_source() {
        assert_eq!(TemplateSource::from_override(None), TemplateSource::Conventional);
        assert_eq!(
            TemplateSource::from_override(Some(PathBuf::from("t.txt"))),
            TemplateSource::Path(PathBuf::from("t.txt"))
        );
    }

    #[test]
    fn missing_template_file_is_not_found() {
        let resolver = TemplateResolver::new("does-not-exist");
        let err = resolver.resolve("g", &TemplateSource::Conventional).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound { .. }));
    }
}
