//! Splitting a raw line into named fields.

use std::collections::HashMap;

use crate::error::ParseError;
use crate::registry::FormatSpec;

/// Field name to value, for a single raw line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    values: HashMap<String, String>,
}

impl FieldMapping {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse one raw line according to `spec`.
///
/// The line is trimmed and split on the spec's delimiter. Parts are paired
/// with field names positionally; trailing parts beyond the declared fields
/// are ignored. Fewer parts than fields is a [`ParseError`].
pub fn parse_line(raw_line: &str, spec: &FormatSpec) -> Result<FieldMapping, ParseError> {
    let parts: Vec<&str> = raw_line.trim().split(spec.delimiter()).collect();
    let expected = spec.fields().len();

    if parts.len() < expected {
        return Err(ParseError {
            line: raw_line.to_string(),
            expected,
            actual: parts.len(),
        });
    }

    Ok(spec
        .fields()
        .iter()
        .zip(parts)
        .map(|(field, value)| (field.as_str(), value))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_pass() -> FormatSpec {
        FormatSpec::new("game", vec!["user".into(), "pass".into()], "|").unwrap()
    }

    #[test]
    fn maps_fields_positionally() {
        let mapping = parse_line("alice|secret", &user_pass()).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("user"), Some("alice"));
        assert_eq!(mapping.get("pass"), Some("secret"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mapping = parse_line("  alice|secret\r\n", &user_pass()).unwrap();
        assert_eq!(mapping.get("user"), Some("alice"));
        assert_eq!(mapping.get("pass"), Some("secret"));
    }

    #[test]
    fn keeps_inner_whitespace() {
        let mapping = parse_line("alice | secret", &user_pass()).unwrap();
        assert_eq!(mapping.get("user"), Some("alice "));
        assert_eq!(mapping.get("pass"), Some(" secret"));
    }

    #[test]
    fn ignores_extra_trailing_parts() {
        let mapping = parse_line("alice|secret|extra|more", &user_pass()).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("pass"), Some("secret"));
    }

    #[test]
    fn too_few_parts_is_error() {
        let err = parse_line("alice", &user_pass()).unwrap_err();
        assert_eq!(
            err,
            ParseError {
                line: "alice".into(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn empty_parts_still_count() {
        let mapping = parse_line("|", &user_pass()).unwrap();
        assert_eq!(mapping.get("user"), Some(""));
        assert_eq!(mapping.get("pass"), Some(""));
    }

    #[test]
    fn multi_character_delimiter() {
        let spec = FormatSpec::new(
            "g",
            vec!["a".into(), "b".into(), "c".into()],
            " :: ",
        )
        .unwrap();
        let mapping = parse_line("1 :: 2 :: 3", &spec).unwrap();
        assert_eq!(mapping.get("a"), Some("1"));
        assert_eq!(mapping.get("c"), Some("3"));
    }

    #[test]
    fn every_arity_below_field_count_fails() {
        let spec = FormatSpec::new(
            "g",
            (0..5).map(|i| format!("f{i}")).collect(),
            ",",
        )
        .unwrap();
        for n in 1..5 {
            let line = vec!["x"; n].join(",");
            let err = parse_line(&line, &spec).unwrap_err();
            assert_eq!(err.actual, n);
            assert_eq!(err.expected, 5);
        }
        for n in 5..8 {
            let line = vec!["x"; n].join(",");
            assert_eq!(parse_line(&line, &spec).unwrap().len(), 5);
        }
    }
}
