//! Core conversion pipeline for turning raw delimited account lines into
//! formatted outbound messages.
//!
//! The pipeline is: load a [`FormatRegistry`] once, split each raw line into a
//! [`FieldMapping`] with [`parse_line`], render it through a [`Template`], and
//! join the rendered messages with [`join_messages`]. [`BatchConverter`] runs
//! the whole thing over many lines with best-effort semantics.

pub mod batch;
pub mod error;
pub mod parser;
pub mod registry;
pub mod settings;
pub mod template;

pub use batch::{
    BatchConverter, BatchResult, LineWarning, combine_inputs, convert, join_messages, render_line,
};
pub use error::{ConfigError, ConvertError, ParseError, TemplateError};
pub use parser::{FieldMapping, parse_line};
pub use registry::{FormatRegistry, FormatSpec};
pub use settings::Settings;
pub use template::{Template, TemplateResolver, TemplateSource, render, slug};
