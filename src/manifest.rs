use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::theme::{ColorScheme, Theme};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ManifestError {
    Empty,
    NoDefaultScope,
    DuplicateId(String),
    DuplicateSelector { selector: String, first: String, second: String },
    DuplicateFilename { filename: String, first: String, second: String },
}

impl Display for ManifestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Empty => f.write_str("build manifest declares no themes"),
            ManifestError::NoDefaultScope => {
                f.write_str("no theme is scoped to the unqualified :root selector")
            }
            ManifestError::DuplicateId(id) => write!(f, "duplicate theme identifier: {id}"),
            ManifestError::DuplicateSelector {
                selector,
                first,
                second,
            } => write!(
                f,
                "themes {first} and {second} share the output selector {selector:?}"
            ),
            ManifestError::DuplicateFilename {
                filename,
                first,
                second,
            } => write!(
                f,
                "themes {first} and {second} share the output filename {filename:?}"
            ),
        }
    }
}

impl std::error::Error for ManifestError {}

/// The fixed, build-configuration-time list of themes to emit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuildManifest {
    themes: Vec<Theme>,
}

impl BuildManifest {
    /// The stock pair: light owns the unqualified `:root` scope, dark is
    /// qualified by a `data-theme` attribute.
    pub fn builtin() -> Self {
        Self {
            themes: vec![
                Theme::new("light", ColorScheme::Light).with_selector(":root"),
                Theme::new("dark", ColorScheme::Dark),
            ],
        }
    }

    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.themes.push(theme);
        self
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    pub fn theme_mut(&mut self, id: &str) -> Option<&mut Theme> {
        self.themes.iter_mut().find(|theme| theme.id == id)
    }

    /// Checks the output-scoping invariants: at least one theme, exactly one
    /// default `:root` scope, and no shared identifiers, selectors, or
    /// filenames. Runs before anything is written.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.themes.is_empty() {
            return Err(ManifestError::Empty);
        }

        let mut has_default_scope = false;
        let mut ids: BTreeMap<&str, &Theme> = BTreeMap::new();
        let mut selectors: BTreeMap<&str, &Theme> = BTreeMap::new();
        let mut filenames: BTreeMap<&str, &Theme> = BTreeMap::new();

        for theme in &self.themes {
            if ids.insert(theme.id.as_str(), theme).is_some() {
                return Err(ManifestError::DuplicateId(theme.id.clone()));
            }
            if let Some(previous) = selectors.insert(theme.selector.as_str(), theme) {
                return Err(ManifestError::DuplicateSelector {
                    selector: theme.selector.clone(),
                    first: previous.id.clone(),
                    second: theme.id.clone(),
                });
            }
            if let Some(previous) = filenames.insert(theme.filename.as_str(), theme) {
                return Err(ManifestError::DuplicateFilename {
                    filename: theme.filename.clone(),
                    first: previous.id.clone(),
                    second: theme.id.clone(),
                });
            }
            // Two default scopes always collide on ":root" above, so a
            // boolean is enough here.
            has_default_scope |= theme.is_default_scope();
        }

        if !has_default_scope {
            return Err(ManifestError::NoDefaultScope);
        }
        Ok(())
    }
}

impl Default for BuildManifest {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_manifest_passes_validation() {
        let manifest = BuildManifest::builtin();
        assert!(manifest.validate().is_ok());
        assert_eq!(manifest.themes().len(), 2);
    }

    #[test]
    fn builtin_light_owns_the_default_scope() {
        let manifest = BuildManifest::builtin();
        let light = manifest.theme("light").unwrap();
        let dark = manifest.theme("dark").unwrap();
        assert!(light.is_default_scope());
        assert_eq!(dark.selector, ":root[data-theme=\"dark\"]");
        assert_eq!(dark.filename, "dark-tokens.css");
    }

    #[test]
    fn shared_selectors_are_rejected() {
        let manifest = BuildManifest::builtin().with_theme(
            Theme::new("midnight", ColorScheme::Dark).with_selector(":root[data-theme=\"dark\"]"),
        );
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::DuplicateSelector {
                selector: ":root[data-theme=\"dark\"]".to_string(),
                first: "dark".to_string(),
                second: "midnight".to_string(),
            })
        );
    }

    #[test]
    fn second_unqualified_root_is_rejected() {
        let manifest = BuildManifest::builtin()
            .with_theme(Theme::new("sepia", ColorScheme::Light).with_selector(":root"));
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::DuplicateSelector {
                selector: ":root".to_string(),
                first: "light".to_string(),
                second: "sepia".to_string(),
            })
        );
    }

    #[test]
    fn manifest_without_default_scope_is_rejected() {
        let manifest = BuildManifest::new(vec![Theme::new("dark", ColorScheme::Dark)]);
        assert_eq!(manifest.validate(), Err(ManifestError::NoDefaultScope));
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let manifest = BuildManifest::new(Vec::new());
        assert_eq!(manifest.validate(), Err(ManifestError::Empty));
    }
}
