use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::config::{BuildConfig, BuildOptions};
use crate::coverage::{self, CoverageReport};
use crate::docs::{self, StoryCatalog};
use crate::emit::{EmitError, Emitter};
use crate::manifest::{BuildManifest, ManifestError};
use crate::registry::TokenSet;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    Manifest(ManifestError),
    Emit(EmitError),
    AsymmetricCoverage(CoverageReport),
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Manifest(error) => Display::fmt(error, f),
            BuildError::Emit(error) => Display::fmt(error, f),
            BuildError::AsymmetricCoverage(report) => {
                write!(f, "theme coverage is asymmetric: {report}")
            }
        }
    }
}

impl std::error::Error for BuildError {}

impl From<ManifestError> for BuildError {
    fn from(error: ManifestError) -> Self {
        Self::Manifest(error)
    }
}

impl From<EmitError> for BuildError {
    fn from(error: EmitError) -> Self {
        Self::Emit(error)
    }
}

#[derive(Clone, Debug)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    pub declarations: BTreeMap<String, usize>,
    pub coverage: CoverageReport,
}

/// The one-shot batch transformation: validate the manifest, audit coverage,
/// and emit one stylesheet per theme. Each theme's emission is independent
/// and all-or-nothing.
#[derive(Clone, Debug)]
pub struct TokenPipeline {
    manifest: BuildManifest,
    options: BuildOptions,
}

impl TokenPipeline {
    pub fn new(manifest: BuildManifest, options: BuildOptions) -> Self {
        Self { manifest, options }
    }

    pub fn builtin() -> Self {
        Self::new(BuildManifest::builtin(), BuildOptions::default())
    }

    pub fn manifest(&self) -> &BuildManifest {
        &self.manifest
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Applies a parsed `calmtokens.toml`: options replace wholesale, theme
    /// patches merge into matching manifest entries.
    pub fn with_config(mut self, config: BuildConfig) -> Self {
        self.options = config.options;
        for (theme_id, patch) in config.themes {
            match self.manifest.theme_mut(&theme_id) {
                Some(theme) => *theme = theme.merged(&patch),
                None => log::warn!("config patches unknown theme {theme_id}"),
            }
        }
        self
    }

    pub fn build(&self) -> Result<BuildReport, BuildError> {
        self.manifest.validate()?;
        let emitter = Emitter::new(self.options.prefix.clone());

        let mut sets: BTreeMap<String, TokenSet> = BTreeMap::new();
        for theme in self.manifest.themes() {
            let set = theme
                .token_set()
                .map_err(|error| EmitError::from_theme(&theme.id, error))?;
            sets.insert(theme.id.clone(), set);
        }

        let coverage = coverage::audit_sets(&sets);
        if !coverage.is_symmetric() {
            for (theme_id, paths) in coverage.iter() {
                log::warn!(
                    "theme {theme_id} is missing {} design-significant token path(s)",
                    paths.len()
                );
            }
            if self.options.strict_coverage {
                return Err(BuildError::AsymmetricCoverage(coverage));
            }
        }

        let mut written = Vec::new();
        let mut declarations = BTreeMap::new();
        for theme in self.manifest.themes() {
            let set = &sets[&theme.id];
            let sheet = emitter.emit_materialized(theme, set)?;
            declarations.insert(theme.id.clone(), sheet.len());
            written.push(emitter.write(&sheet, &self.options.out_dir)?);
        }

        if self.options.emit_docs {
            for theme in self.manifest.themes() {
                written.push(docs::write_reference(
                    &theme.id,
                    &sets[&theme.id],
                    emitter.prefix(),
                    &self.options.out_dir,
                )?);
            }
            written.push(docs::write_story_page(
                &StoryCatalog::embedded(),
                &self.options.out_dir,
            )?);
        }

        Ok(BuildReport {
            written,
            declarations,
            coverage,
        })
    }
}
