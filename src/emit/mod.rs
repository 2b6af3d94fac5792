use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::{TokenPath, TokenSet};
use crate::theme::{Theme, ThemeError};

pub const DEFAULT_PREFIX: &str = "calm";

const GENERATED_BANNER: &str = "/* Generated by calmtokens. Do not edit. */";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EmitError {
    MissingToken { theme: String, path: TokenPath },
    WriteFailed { path: PathBuf, error: String },
}

impl EmitError {
    pub(crate) fn from_theme(theme_id: &str, error: ThemeError) -> Self {
        match error {
            ThemeError::UnknownRampStop { ramp, stop } => Self::MissingToken {
                theme: theme_id.to_string(),
                path: TokenPath::from_parts(vec![ramp.to_string(), stop.to_string()]),
            },
        }
    }
}

impl Display for EmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EmitError::MissingToken { theme, path } => {
                write!(f, "theme {theme} has no value for required token {path}")
            }
            EmitError::WriteFailed { path, error } => {
                write!(f, "failed to write {}: {error}", path.display())
            }
        }
    }
}

impl std::error::Error for EmitError {}

/// A fully rendered set of custom-property declarations for one theme,
/// ordered lexicographically by source token path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stylesheet {
    pub theme_id: String,
    pub selector: String,
    pub filename: String,
    declarations: Vec<(String, String)>,
}

impl Stylesheet {
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Byte-stable rendering. Re-rendering an unchanged sheet must produce
    /// identical output, which build caching and diff review rely on.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(GENERATED_BANNER);
        out.push('\n');
        out.push_str(&self.selector);
        out.push_str(" {\n");
        for (name, value) in &self.declarations {
            out.push_str("  ");
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out.push_str("}\n");
        out
    }
}

/// Serializes theme token sets into custom-property stylesheets.
#[derive(Clone, Debug)]
pub struct Emitter {
    prefix: String,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Emitter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Materializes the theme and emits it, checking the required-path
    /// baseline first. Any gap aborts the whole theme.
    pub fn emit(&self, theme: &Theme) -> Result<Stylesheet, EmitError> {
        let set = theme
            .token_set()
            .map_err(|error| EmitError::from_theme(&theme.id, error))?;
        self.emit_materialized(theme, &set)
    }

    pub fn emit_materialized(
        &self,
        theme: &Theme,
        set: &TokenSet,
    ) -> Result<Stylesheet, EmitError> {
        for required in required_baseline() {
            if !set.contains(&required) {
                return Err(EmitError::MissingToken {
                    theme: theme.id.clone(),
                    path: required,
                });
            }
        }
        Ok(self.flatten(&theme.id, &theme.selector, &theme.filename, set))
    }

    /// Pure flattening of an arbitrary set under an arbitrary selector; no
    /// baseline contract applies at this level.
    pub fn emit_set(&self, theme_id: &str, selector: &str, set: &TokenSet) -> Stylesheet {
        self.flatten(
            theme_id,
            selector,
            &format!("{theme_id}-tokens.css"),
            set,
        )
    }

    fn flatten(&self, theme_id: &str, selector: &str, filename: &str, set: &TokenSet) -> Stylesheet {
        let declarations = set
            .iter()
            .map(|(path, value)| (path.css_name(&self.prefix), value.to_string()))
            .collect::<Vec<_>>();
        Stylesheet {
            theme_id: theme_id.to_string(),
            selector: selector.to_string(),
            filename: filename.to_string(),
            declarations,
        }
    }

    /// Writes the rendered sheet to `out_dir`, all-or-nothing: the content is
    /// staged to a temporary sibling and renamed into place, so a failed
    /// write never leaves a half-written stylesheet behind.
    pub fn write(&self, sheet: &Stylesheet, out_dir: &Path) -> Result<PathBuf, EmitError> {
        let destination = out_dir.join(&sheet.filename);
        let staging = out_dir.join(format!("{}.tmp", sheet.filename));
        let write_failed = |path: &Path, error: std::io::Error| EmitError::WriteFailed {
            path: path.to_path_buf(),
            error: error.to_string(),
        };

        fs::create_dir_all(out_dir).map_err(|error| write_failed(out_dir, error))?;
        fs::write(&staging, sheet.render()).map_err(|error| write_failed(&staging, error))?;
        if let Err(error) = fs::rename(&staging, &destination) {
            let _ = fs::remove_file(&staging);
            return Err(write_failed(&destination, error));
        }

        log::info!(
            "emitted {} declarations for theme {} to {}",
            sheet.len(),
            sheet.theme_id,
            destination.display()
        );
        Ok(destination)
    }
}

/// The paths every emitted theme must define. Gaps here are configuration
/// errors, surfaced before any file is written for the theme.
pub fn required_baseline() -> Vec<TokenPath> {
    let mut baseline = Vec::new();
    for role in [
        "text.primary",
        "text.secondary",
        "text.muted",
        "bg.canvas",
        "bg.surface",
        "bg.soft",
        "border.subtle",
        "border.strong",
        "focus.ring",
        "status.info",
        "status.success",
        "status.warning",
        "status.error",
        "overlay.mask",
    ] {
        let mut segments = vec!["color".to_string()];
        segments.extend(role.split('.').map(str::to_string));
        baseline.push(TokenPath::from_parts(segments));
    }
    for path in [
        "brand.500",
        "spacing.4",
        "radius.md",
        "font.size.md",
        "shadow.md",
        "motion.duration.normal",
        "motion.ease.standard",
    ] {
        baseline.push(TokenPath::from_parts(
            path.split('.').map(str::to_string).collect(),
        ));
    }
    baseline
}
