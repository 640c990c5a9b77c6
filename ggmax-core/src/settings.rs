//! Application settings shared by the CLI and the web form.
//!
//! Settings live in a TOML file:
//! ```toml
//! formats_path = "formatos.yaml"
//! templates_dir = "templates"
//! output_path = "mensagens_prontas.txt"
//!
//! [web]
//! listen_addr = "127.0.0.1:8501"
//! max_upload_bytes = 209715200
//! ```
//! Every key is optional. Relative paths are resolved against the current
//! working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::registry::FormatRegistry;
use crate::template::TemplateResolver;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE_NAME: &str = "ggmax.toml";

/// Default cap on a web form submission: 200 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// YAML format registry.
    pub formats_path: PathBuf,
    /// Directory holding `<slug>.txt` templates.
    pub templates_dir: PathBuf,
    /// Default output file for file-mode conversion.
    pub output_path: PathBuf,
    pub web: WebSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSettings {
    pub listen_addr: String,
    /// Largest accepted form submission, uploads included.
    pub max_upload_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            formats_path: PathBuf::from("formatos.yaml"),
            templates_dir: PathBuf::from("templates"),
            output_path: PathBuf::from("mensagens_prontas.txt"),
            web: WebSettings::default(),
        }
    }
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8501".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Per-user settings file: `~/.config/ggmax/ggmax.toml`.
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ggmax").join(SETTINGS_FILE_NAME))
}

/// Pick the settings file using a priority chain:
///
/// 1. CLI override (if `Some`), whether or not it exists
/// 2. `ggmax.toml` in the working directory
/// 3. The per-user settings file
pub fn resolve_settings_path(cli_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = cli_override {
        return Some(p.to_path_buf());
    }
    let local = PathBuf::from(SETTINGS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    user_settings_path().filter(|p| p.is_file())
}

impl Settings {
    /// Parse a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Settings {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Load settings from the resolved settings file, or defaults if none exists.
    ///
    /// An explicit `cli_override` that cannot be read is an error.
    pub fn resolve(cli_override: Option<&Path>) -> Result<Self, ConfigError> {
        match resolve_settings_path(cli_override) {
            Some(path) => {
                log::debug!("Using settings file {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line path overrides.
    pub fn with_overrides(
        mut self,
        formats_path: Option<PathBuf>,
        templates_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(p) = formats_path {
            self.formats_path = p;
        }
        if let Some(p) = templates_dir {
            self.templates_dir = p;
        }
        self
    }

    pub fn load_registry(&self) -> Result<FormatRegistry, ConfigError> {
        FormatRegistry::load(&self.formats_path)
    }

    pub fn template_resolver(&self) -> TemplateResolver {
        TemplateResolver::new(&self.templates_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("templates_dir = \"tpl\"\n").unwrap();
        assert_eq!(settings.templates_dir, PathBuf::from("tpl"));
        assert_eq!(settings.formats_path, PathBuf::from("formatos.yaml"));
        assert_eq!(settings.web.listen_addr, "127.0.0.1:8501");
    }

    #[test]
    fn web_table() {
        let settings: Settings = toml::from_str("[web]\nlisten_addr = \"0.0.0.0:80\"\n").unwrap();
        assert_eq!(settings.web.listen_addr, "0.0.0.0:80");
        assert_eq!(settings.web.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert_eq!(settings.output_path, PathBuf::from("mensagens_prontas.txt"));
    }

    #[test]
    fn upload_limit_is_configurable() {
        let settings: Settings = toml::from_str("[web]
max_upload_bytes = 1048576
").unwrap();
        assert_eq!(settings.web.max_upload_bytes, 1024 * 1024);
        assert_eq!(settings.web.listen_addr, "127.0.0.1:8501");
    }

    #[test]
    fn overrides_replace_only_given_paths() {
        let settings = Settings::default().with_overrides(Some("f.yaml".into()), None);
        assert_eq!(settings.formats_path, PathBuf::from("f.yaml"));
        assert_eq!(settings.templates_dir, PathBuf::from("templates"));
    }

    #[test]
    fn explicit_override_wins() {
        let p = Path::new("/nowhere/custom.toml");
        assert_eq!(resolve_settings_path(Some(p)), Some(p.to_path_buf()));
        assert!(matches!(
            Settings::resolve(Some(p)),
            Err(ConfigError::Io { .. })
        ));
    }
}
