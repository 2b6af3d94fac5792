use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, OnceLock};

use crate::manifest::BuildManifest;
use crate::theme::ThemeError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryError {
    EmptyPath,
    InvalidSegment(String),
    UnknownTheme(String),
    NotFound { theme: String, path: TokenPath },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::EmptyPath => f.write_str("token path must have at least one segment"),
            RegistryError::InvalidSegment(segment) => {
                write!(f, "invalid token path segment: {segment:?}")
            }
            RegistryError::UnknownTheme(theme) => write!(f, "unknown theme: {theme}"),
            RegistryError::NotFound { theme, path } => {
                write!(f, "token {path} is not defined in theme {theme}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered namespace path of a token, e.g. `brand.500` or `color.text.primary`.
///
/// Paths order lexicographically by segment sequence, which is the ordering
/// emitted stylesheets are required to follow.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TokenPath {
    segments: Vec<String>,
}

impl TokenPath {
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Result<Self, RegistryError> {
        let segments = segments
            .into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        if segments.is_empty() {
            return Err(RegistryError::EmptyPath);
        }
        for segment in &segments {
            if !is_valid_segment(segment) {
                return Err(RegistryError::InvalidSegment(segment.clone()));
            }
        }
        Ok(Self { segments })
    }

    pub fn parse(value: &str) -> Result<Self, RegistryError> {
        Self::new(value.split('.'))
    }

    // Known-good segments produced by theme materialization skip validation.
    pub(crate) fn from_parts(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn first_segment(&self) -> &str {
        &self.segments[0]
    }

    /// Custom-property name under the given prefix: `brand.500` with prefix
    /// `calm` becomes `--calm-brand-500`.
    pub fn css_name(&self, prefix: &str) -> String {
        format!("--{prefix}-{}", self.segments.join("-"))
    }
}

impl Display for TokenPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

/// Flat mapping from token path to literal value, scoped to one theme.
///
/// Values are opaque, already-resolved CSS literals. The backing map keeps
/// iteration lexicographic by path.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenSet {
    tokens: BTreeMap<TokenPath, String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(mut self, path: TokenPath, value: impl Into<String>) -> Self {
        self.tokens.insert(path, value.into());
        self
    }

    pub fn insert(&mut self, path: TokenPath, value: impl Into<String>) {
        self.tokens.insert(path, value.into());
    }

    pub fn extend(mut self, other: Self) -> Self {
        for (path, value) in other.tokens {
            self.tokens.insert(path, value);
        }
        self
    }

    pub fn read(&self, path: &TokenPath) -> Option<&str> {
        self.tokens.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &TokenPath) -> bool {
        self.tokens.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TokenPath, &str)> {
        self.tokens.iter().map(|(path, value)| (path, value.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &TokenPath> {
        self.tokens.keys()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Clone, Debug)]
struct RegistryInner {
    sets: BTreeMap<String, TokenSet>,
}

/// Process-wide read-only lookup table over every configured theme's tokens.
#[derive(Clone, Debug)]
pub struct TokenRegistry {
    inner: Arc<RegistryInner>,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        static DEFAULT_REGISTRY: OnceLock<TokenRegistry> = OnceLock::new();
        DEFAULT_REGISTRY.get_or_init(Self::build_default).clone()
    }
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn build_default() -> Self {
        let mut sets = BTreeMap::new();
        for theme in BuildManifest::builtin().themes() {
            if let Ok(set) = theme.token_set() {
                sets.insert(theme.id.clone(), set);
            }
        }
        Self {
            inner: Arc::new(RegistryInner { sets }),
        }
    }

    pub fn from_manifest(manifest: &BuildManifest) -> Result<Self, ThemeError> {
        let mut sets = BTreeMap::new();
        for theme in manifest.themes() {
            sets.insert(theme.id.clone(), theme.token_set()?);
        }
        Ok(Self {
            inner: Arc::new(RegistryInner { sets }),
        })
    }

    pub fn resolve(&self, theme_id: &str, path: &TokenPath) -> Result<&str, RegistryError> {
        let set = self
            .inner
            .sets
            .get(theme_id)
            .ok_or_else(|| RegistryError::UnknownTheme(theme_id.to_string()))?;
        set.read(path).ok_or_else(|| {
            log::debug!("token {path} missing from theme {theme_id}");
            RegistryError::NotFound {
                theme: theme_id.to_string(),
                path: path.clone(),
            }
        })
    }

    pub fn set(&self, theme_id: &str) -> Option<&TokenSet> {
        self.inner.sets.get(theme_id)
    }

    pub fn themes(&self) -> Vec<String> {
        self.inner.sets.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_dots_and_keeps_order() {
        let path = TokenPath::parse("color.text.primary").unwrap();
        assert_eq!(path.segments(), ["color", "text", "primary"]);
        assert_eq!(path.to_string(), "color.text.primary");
    }

    #[test]
    fn parse_rejects_empty_and_invalid_segments() {
        assert!(matches!(TokenPath::parse(""), Err(RegistryError::EmptyPath)));
        assert!(matches!(
            TokenPath::parse("brand..500"),
            Err(RegistryError::InvalidSegment(_))
        ));
        assert!(matches!(
            TokenPath::parse("brand.5 00"),
            Err(RegistryError::InvalidSegment(_))
        ));
    }

    #[test]
    fn css_name_joins_segments_under_prefix() {
        let path = TokenPath::parse("brand.500").unwrap();
        assert_eq!(path.css_name("calm"), "--calm-brand-500");
    }

    #[test]
    fn set_iteration_is_lexicographic_by_path() {
        let set = TokenSet::new()
            .token(TokenPath::parse("spacing.4").unwrap(), "1rem")
            .token(TokenPath::parse("brand.500").unwrap(), "#0ea5e9");
        let order = set.paths().map(TokenPath::to_string).collect::<Vec<_>>();
        assert_eq!(order, ["brand.500", "spacing.4"]);
    }

    #[test]
    fn resolve_reads_builtin_light_theme() {
        let registry = TokenRegistry::default();
        let path = TokenPath::parse("brand.500").unwrap();
        assert_eq!(registry.resolve("light", &path).unwrap(), "#0ea5e9");
    }

    #[test]
    fn resolve_reports_missing_path_and_unknown_theme() {
        let registry = TokenRegistry::default();
        let path = TokenPath::parse("brand.9999").unwrap();
        assert!(matches!(
            registry.resolve("light", &path),
            Err(RegistryError::NotFound { .. })
        ));
        let path = TokenPath::parse("brand.500").unwrap();
        assert!(matches!(
            registry.resolve("sepia", &path),
            Err(RegistryError::UnknownTheme(_))
        ));
    }
}
