//! Batch conversion: many raw lines in, one joined message blob out.
//!
//! A batch is best-effort. Lines that fail to parse or render are skipped
//! and reported as [`LineWarning`]s; only an unknown game aborts the batch,
//! and that is checked before any line is touched.

use std::fmt;
use std::path::Path;

use crate::error::ConvertError;
use crate::parser::parse_line;
use crate::registry::FormatRegistry;
use crate::template::{Template, TemplateResolver, TemplateSource};

/// Placed between consecutive messages.
pub const MESSAGE_SEPARATOR: &str = ";\n";

/// Appended after the last message.
pub const MESSAGE_TERMINATOR: &str = ";";

/// A line that was skipped during a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based position in the input sequence.
    pub line_number: usize,
    /// The line, trimmed.
    pub line: String,
    pub reason: String,
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linha {}: {:?} ignorada: {}",
            self.line_number, self.line, self.reason
        )
    }
}

/// Messages rendered by a batch, plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    messages: Vec<String>,
    skipped: Vec<LineWarning>,
}

impl BatchResult {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn skipped(&self) -> &[LineWarning] {
        &self.skipped
    }

    /// Number of generated messages.
    pub fn count(&self) -> usize {
        self.messages.len()
    }

    /// The joined output blob. Empty when nothing was generated.
    pub fn output(&self) -> String {
        join_messages(&self.messages)
    }

    fn skip(&mut self, line_number: usize, line: &str, reason: impl fmt::Display) {
        let warning = LineWarning {
            line_number,
            line: line.trim().to_string(),
            reason: reason.to_string(),
        };
        log::warn!("{}", warning);
        self.skipped.push(warning);
    }
}

/// Join rendered messages: `m1;\nm2;\n...;\nmn;`, or `""` for none.
pub fn join_messages<S: AsRef<str>>(messages: &[S]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let mut out = messages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(MESSAGE_SEPARATOR);
    out.push_str(MESSAGE_TERMINATOR);
    out
}

/// Convert a single line, returning the specific error on failure.
pub fn render_line(
    line: &str,
    game: &str,
    registry: &FormatRegistry,
    template: &Template,
) -> Result<String, ConvertError> {
    let spec = registry.require(game)?;
    let fields = parse_line(line, spec)?;
    Ok(template.render(&fields)?)
}

/// Convert every non-blank line with an already-resolved template.
///
/// Fails only with [`ConvertError::UnknownGame`].
pub fn convert<S: AsRef<str>>(
    lines: &[S],
    game: &str,
    registry: &FormatRegistry,
    template: &Template,
) -> Result<BatchResult, ConvertError> {
    let spec = registry.require(game)?;
    let mut result = BatchResult::default();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        let rendered = parse_line(line, spec)
            .map_err(ConvertError::from)
            .and_then(|fields| template.render(&fields).map_err(ConvertError::from));
        match rendered {
            Ok(message) => result.messages.push(message),
            Err(e) => result.skip(index + 1, line, e),
        }
    }

    log::debug!(
        "Converted {} line(s) for '{}', skipped {}",
        result.count(),
        game,
        result.skipped.len()
    );
    Ok(result)
}

/// Runs batches against a loaded registry and a template directory.
#[derive(Debug, Clone, Copy)]
pub struct BatchConverter<'a> {
    registry: &'a FormatRegistry,
    resolver: &'a TemplateResolver,
}

impl<'a> BatchConverter<'a> {
    pub fn new(registry: &'a FormatRegistry, resolver: &'a TemplateResolver) -> Self {
        Self { registry, resolver }
    }

    /// Resolve the game's template and convert `lines`.
    ///
    /// A template that cannot be resolved does not abort the batch: every
    /// non-blank line is reported as skipped with the template error.
    pub fn convert<S: AsRef<str>>(
        &self,
        lines: &[S],
        game: &str,
        source: &TemplateSource,
    ) -> Result<BatchResult, ConvertError> {
        self.registry.require(game)?;

        match self.resolver.resolve(game, source) {
            Ok(template) => convert(lines, game, self.registry, &template),
            Err(e) => {
                let reason = e.to_string();
                let mut result = BatchResult::default();
                for (index, line) in lines.iter().enumerate() {
                    let line = line.as_ref();
                    if !line.trim().is_empty() {
                        result.skip(index + 1, line, &reason);
                    }
                }
                Ok(result)
            }
        }
    }

    /// Convert every line of `base_path` and write the joined output to
    /// `output_path`. Returns the number of generated messages.
    pub fn convert_file(
        &self,
        base_path: &Path,
        game: &str,
        template_path: Option<&Path>,
        output_path: &Path,
    ) -> Result<usize, ConvertError> {
        self.registry.require(game)?;

        let contents =
            std::fs::read_to_string(base_path).map_err(|e| ConvertError::io(base_path, e))?;
        let lines: Vec<&str> = contents.lines().collect();

        let source = TemplateSource::from_override(template_path.map(Path::to_path_buf));
        let result = self.convert(&lines, game, &source)?;

        std::fs::write(output_path, result.output())
            .map_err(|e| ConvertError::io(output_path, e))?;
        log::info!(
            "Wrote {} message(s) to {}",
            result.count(),
            output_path.display()
        );
        Ok(result.count())
    }
}

/// Combine uploaded-file text and pasted text into one list of lines.
///
/// Uploaded lines come first, then pasted lines.
pub fn combine_inputs(uploaded: Option<&str>, pasted: Option<&str>) -> Vec<String> {
    [uploaded, pasted]
        .into_iter()
        .flatten()
        .flat_map(str::lines)
        .map(str::to_string)
        .collect()
}
