use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

use crate::registry::{TokenPath, TokenSet};
use crate::tokens::RAMP_KEYS;

/// Whether a path belongs to the namespaces every theme is expected to cover
/// (colors, spacing, radii, typography, shadows, motion).
pub fn design_significant(path: &TokenPath) -> bool {
    let head = path.first_segment();
    RAMP_KEYS.iter().any(|key| key.as_str() == head)
        || matches!(
            head,
            "color" | "spacing" | "radius" | "font" | "shadow" | "motion"
        )
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CoverageReport {
    missing: BTreeMap<String, Vec<TokenPath>>,
}

impl CoverageReport {
    pub fn is_symmetric(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_for(&self, theme_id: &str) -> &[TokenPath] {
        self.missing
            .get(theme_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TokenPath])> {
        self.missing
            .iter()
            .map(|(theme, paths)| (theme.as_str(), paths.as_slice()))
    }

    pub fn total_missing(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }
}

impl Display for CoverageReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_symmetric() {
            return f.write_str("theme coverage is symmetric");
        }
        let mut first = true;
        for (theme, paths) in &self.missing {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            let joined = paths
                .iter()
                .map(TokenPath::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "{theme} is missing {joined}")?;
        }
        Ok(())
    }
}

/// Compares every theme's design-significant paths against the union across
/// all themes and reports the exact gaps per theme.
pub fn audit_sets(sets: &BTreeMap<String, TokenSet>) -> CoverageReport {
    let mut union: BTreeSet<&TokenPath> = BTreeSet::new();
    for set in sets.values() {
        union.extend(set.paths().filter(|path| design_significant(path)));
    }

    let mut missing = BTreeMap::new();
    for (theme_id, set) in sets {
        let gaps = union
            .iter()
            .filter(|path| !set.contains(path))
            .map(|path| (*path).clone())
            .collect::<Vec<_>>();
        if !gaps.is_empty() {
            missing.insert(theme_id.clone(), gaps);
        }
    }
    CoverageReport { missing }
}
