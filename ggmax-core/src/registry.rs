//! Format registry: per-game field layout and separator, loaded from YAML.
//!
//! The document maps each game name to its separator and ordered field list:
//! ```yaml
//! jogo_x:
//!   separador: "|"
//!   campos: [usuario, senha, email]
//! ```
//! The English keys `separator` / `fields` are accepted as well.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{ConfigError, ConvertError};

/// Declarative layout of one game's raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    game_name: String,
    fields: Vec<String>,
    delimiter: String,
}

impl FormatSpec {
    /// Build a spec, rejecting an empty field list or an empty delimiter.
    pub fn new(
        game_name: impl Into<String>,
        fields: Vec<String>,
        delimiter: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let game_name = game_name.into();
        let delimiter = delimiter.into();
        if fields.is_empty() {
            return Err(ConfigError::EmptyFields { game: game_name });
        }
        if delimiter.is_empty() {
            return Err(ConfigError::EmptySeparator { game: game_name });
        }
        Ok(Self {
            game_name,
            fields,
            delimiter,
        })
    }

    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    /// Field names in positional order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

/// One entry as written in the YAML document.
#[derive(Debug, Deserialize)]
struct RawSpec {
    #[serde(alias = "campos")]
    fields: Vec<String>,
    #[serde(alias = "separador")]
    separator: String,
}

/// All known games, in document order. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    specs: IndexMap<String, FormatSpec>,
}

impl FormatRegistry {
    /// Load the registry from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let registry = Self::parse(&contents, &path.display().to_string())?;
        log::debug!(
            "Loaded {} game format(s) from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Parse a registry from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, "<inline>")
    }

    fn parse(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: Option<IndexMap<String, RawSpec>> =
            serde_yml::from_str(contents).map_err(|e| ConfigError::Parse {
                path: origin.to_string(),
                source: e,
            })?;

        let mut specs = IndexMap::new();
        for (game, entry) in raw.unwrap_or_default() {
            let spec = FormatSpec::new(game.clone(), entry.fields, entry.separator)?;
            specs.insert(game, spec);
        }
        Ok(Self { specs })
    }

    /// Build a registry from already-constructed specs.
    pub fn from_specs(specs: impl IntoIterator<Item = FormatSpec>) -> Self {
        Self {
            specs: specs
                .into_iter()
                .map(|spec| (spec.game_name.clone(), spec))
                .collect(),
        }
    }

    pub fn get(&self, game: &str) -> Option<&FormatSpec> {
        self.specs.get(game)
    }

    /// Look up a game, failing with [`ConvertError::UnknownGame`].
    pub fn require(&self, game: &str) -> Result<&FormatSpec, ConvertError> {
        self.get(game).ok_or_else(|| ConvertError::unknown_game(game))
    }

    /// Game names in document order.
    pub fn games(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn specs(&self) -> impl Iterator<Item = &FormatSpec> {
        self.specs.values()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_rejects_empty_fields() {
        let err = FormatSpec::new("x", vec![], "|").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyFields { ref game } if game == "x"));
    }

    #[test]
    fn spec_rejects_empty_delimiter() {
        let err = FormatSpec::new("x", vec!["a".into()], "").unwrap_err();
        assert!(matches!(err, ConfigError::EmptySeparator { .. }));
    }

    #[test]
    fn accepts_portuguese_and_english_keys() {
        let registry = FormatRegistry::from_yaml_str(
            r#"
jogo_x:
  separador: "|"
  campos: [usuario, senha, email]
game_y:
  separator: ":"
  fields: [user, pass]
"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        let x = registry.get("jogo_x").unwrap();
        assert_eq!(x.delimiter(), "|");
        assert_eq!(x.fields(), ["usuario", "senha", "email"]);
        let y = registry.get("game_y").unwrap();
        assert_eq!(y.delimiter(), ":");
        assert_eq!(y.game_name(), "game_y");
    }

    #[test]
    fn preserves_document_order() {
        let registry = FormatRegistry::from_yaml_str(
            r#"
zeta: { separator: ",", fields: [a] }
alpha: { separator: ",", fields: [a] }
mid: { separator: ",", fields: [a] }
"#,
        )
        .unwrap();
        let games: Vec<_> = registry.games().collect();
        assert_eq!(games, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn empty_document_is_empty_registry() {
        assert!(FormatRegistry::from_yaml_str("").unwrap().is_empty());
        assert!(FormatRegistry::from_yaml_str("  \n").unwrap().is_empty());
    }

    #[test]
    fn missing_separator_is_parse_error() {
        let err = FormatRegistry::from_yaml_str("g:\n  fields: [a, b]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn non_mapping_root_is_parse_error() {
        let err = FormatRegistry::from_yaml_str("- a\n- b\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn require_unknown_game() {
        let registry = FormatRegistry::default();
        let err = registry.require("nonexistent").unwrap_err();
        assert!(matches!(err, ConvertError::UnknownGame(ref g) if g == "nonexistent"));
    }
}
