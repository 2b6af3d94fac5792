use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use crate::emit::DEFAULT_PREFIX;
use crate::registry::TokenPath;
use crate::theme::ThemePatch;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    Unreadable { path: PathBuf, error: String },
    Parse(String),
    UnknownKey(String),
    UnexpectedShape { key: String, expected: &'static str },
    InvalidTokenPath { key: String, error: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Unreadable { path, error } => {
                write!(f, "failed to read {}: {error}", path.display())
            }
            ConfigError::Parse(error) => write!(f, "invalid config: {error}"),
            ConfigError::UnknownKey(key) => write!(f, "unknown config key: {key}"),
            ConfigError::UnexpectedShape { key, expected } => {
                write!(f, "config key {key} must be a {expected}")
            }
            ConfigError::InvalidTokenPath { key, error } => {
                write!(f, "invalid token path {key:?} in overrides: {error}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Knobs for one pipeline run. Everything has a sensible default; a
/// `calmtokens.toml` can adjust them without touching code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuildOptions {
    pub out_dir: PathBuf,
    pub prefix: String,
    pub emit_docs: bool,
    pub strict_coverage: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("tokens"),
            prefix: DEFAULT_PREFIX.to_string(),
            emit_docs: false,
            strict_coverage: false,
        }
    }
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn out_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.out_dir = value.into();
        self
    }

    pub fn prefix(mut self, value: impl Into<String>) -> Self {
        self.prefix = value.into();
        self
    }

    pub fn emit_docs(mut self, value: bool) -> Self {
        self.emit_docs = value;
        self
    }

    pub fn strict_coverage(mut self, value: bool) -> Self {
        self.strict_coverage = value;
        self
    }
}

/// Parsed `calmtokens.toml`: build options plus per-theme patches.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BuildConfig {
    pub options: BuildOptions,
    pub themes: BTreeMap<String, ThemePatch>,
}

impl BuildConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|error| ConfigError::Unreadable {
            path: path.to_path_buf(),
            error: error.to_string(),
        })?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let table = source
            .parse::<toml::Table>()
            .map_err(|error| ConfigError::Parse(error.to_string()))?;

        let mut config = Self::default();
        for (key, value) in &table {
            match key.as_str() {
                "output" => config.read_output_section(value)?,
                "themes" => config.read_theme_sections(value)?,
                "overrides" => config.read_override_sections(value)?,
                other => return Err(ConfigError::UnknownKey(other.to_string())),
            }
        }
        Ok(config)
    }

    fn read_output_section(&mut self, value: &toml::Value) -> Result<(), ConfigError> {
        let section = expect_table("output", value)?;
        for (key, value) in section {
            match key.as_str() {
                "dir" => self.options.out_dir = PathBuf::from(expect_str("output.dir", value)?),
                "prefix" => self.options.prefix = expect_str("output.prefix", value)?.to_string(),
                "docs" => self.options.emit_docs = expect_bool("output.docs", value)?,
                "strict-coverage" => {
                    self.options.strict_coverage = expect_bool("output.strict-coverage", value)?;
                }
                other => return Err(ConfigError::UnknownKey(format!("output.{other}"))),
            }
        }
        Ok(())
    }

    fn read_theme_sections(&mut self, value: &toml::Value) -> Result<(), ConfigError> {
        let sections = expect_table("themes", value)?;
        for (theme_id, section) in sections {
            let section = expect_table(&format!("themes.{theme_id}"), section)?;
            let patch = self.themes.entry(theme_id.clone()).or_default();
            for (key, value) in section {
                let qualified = format!("themes.{theme_id}.{key}");
                match key.as_str() {
                    "selector" => patch.selector = Some(expect_str(&qualified, value)?.to_string()),
                    "filename" => patch.filename = Some(expect_str(&qualified, value)?.to_string()),
                    _ => return Err(ConfigError::UnknownKey(qualified)),
                }
            }
        }
        Ok(())
    }

    fn read_override_sections(&mut self, value: &toml::Value) -> Result<(), ConfigError> {
        let sections = expect_table("overrides", value)?;
        for (theme_id, section) in sections {
            let section = expect_table(&format!("overrides.{theme_id}"), section)?;
            let patch = self.themes.entry(theme_id.clone()).or_default();
            for (raw_path, value) in section {
                let path =
                    TokenPath::parse(raw_path).map_err(|error| ConfigError::InvalidTokenPath {
                        key: raw_path.clone(),
                        error: error.to_string(),
                    })?;
                let value = expect_str(&format!("overrides.{theme_id}.{raw_path}"), value)?;
                patch.token_overrides.insert(path, value);
            }
        }
        Ok(())
    }
}

fn expect_table<'a>(key: &str, value: &'a toml::Value) -> Result<&'a toml::Table, ConfigError> {
    value.as_table().ok_or_else(|| ConfigError::UnexpectedShape {
        key: key.to_string(),
        expected: "table",
    })
}

fn expect_str<'a>(key: &str, value: &'a toml::Value) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| ConfigError::UnexpectedShape {
        key: key.to_string(),
        expected: "string",
    })
}

fn expect_bool(key: &str, value: &toml::Value) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| ConfigError::UnexpectedShape {
        key: key.to_string(),
        expected: "boolean",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_keeps_defaults() {
        let config = BuildConfig::parse("").unwrap();
        assert_eq!(config.options, BuildOptions::default());
        assert!(config.themes.is_empty());
    }

    #[test]
    fn output_section_adjusts_options() {
        let config = BuildConfig::parse(
            "[output]\ndir = \"dist/tokens\"\nprefix = \"ds\"\ndocs = true\nstrict-coverage = true\n",
        )
        .unwrap();
        assert_eq!(config.options.out_dir, PathBuf::from("dist/tokens"));
        assert_eq!(config.options.prefix, "ds");
        assert!(config.options.emit_docs);
        assert!(config.options.strict_coverage);
    }

    #[test]
    fn theme_sections_become_patches() {
        let config = BuildConfig::parse(
            "[themes.dark]\nselector = ':root[data-theme=\"midnight\"]'\nfilename = \"midnight-tokens.css\"\n",
        )
        .unwrap();
        let patch = &config.themes["dark"];
        assert_eq!(
            patch.selector.as_deref(),
            Some(":root[data-theme=\"midnight\"]")
        );
        assert_eq!(patch.filename.as_deref(), Some("midnight-tokens.css"));
    }

    #[test]
    fn override_sections_parse_token_paths() {
        let config =
            BuildConfig::parse("[overrides.dark]\n\"color.bg.canvas\" = \"#000\"\n").unwrap();
        let patch = &config.themes["dark"];
        let path = TokenPath::parse("color.bg.canvas").unwrap();
        assert_eq!(patch.token_overrides.read(&path), Some("#000"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(
            BuildConfig::parse("[output]\ncolour = \"red\"\n"),
            Err(ConfigError::UnknownKey("output.colour".to_string()))
        );
        assert!(matches!(
            BuildConfig::parse("[transport]\nkind = \"http\"\n"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn invalid_override_path_is_reported() {
        assert!(matches!(
            BuildConfig::parse("[overrides.dark]\n\"color..canvas\" = \"#000\"\n"),
            Err(ConfigError::InvalidTokenPath { .. })
        ));
    }
}
