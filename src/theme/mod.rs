use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::registry::{TokenPath, TokenSet};
use crate::tokens::{
    ColorRamp, FONT_LEADINGS, FONT_SIZES, FONT_WEIGHTS, MOTION_DURATIONS, MOTION_EASINGS, RADIUS,
    RADIUS_PILL, RampCatalog, RampKey, SHADOWS, SPACING, STOP_KEYS, stop_index,
};

mod overrides_api;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColorValue {
    Ramp { key: RampKey, stop: u16 },
    White,
    Black,
    Custom(String),
}

impl ColorValue {
    pub const fn ramp(key: RampKey, stop: u16) -> Self {
        Self::Ramp { key, stop }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ThemeError {
    UnknownRampStop { ramp: &'static str, stop: u16 },
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::UnknownRampStop { ramp, stop } => {
                write!(f, "color ramp {ramp} has no stop {stop}")
            }
        }
    }
}

impl std::error::Error for ThemeError {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SemanticColors {
    pub text_primary: ColorValue,
    pub text_secondary: ColorValue,
    pub text_muted: ColorValue,
    pub bg_canvas: ColorValue,
    pub bg_surface: ColorValue,
    pub bg_soft: ColorValue,
    pub border_subtle: ColorValue,
    pub border_strong: ColorValue,
    pub focus_ring: ColorValue,
    pub status_info: ColorValue,
    pub status_success: ColorValue,
    pub status_warning: ColorValue,
    pub status_error: ColorValue,
    pub overlay_mask: ColorValue,
}

impl SemanticColors {
    pub fn defaults(primary: RampKey) -> Self {
        Self::defaults_for(primary, ColorScheme::Light)
    }

    pub fn defaults_for(primary: RampKey, scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                text_primary: ColorValue::ramp(RampKey::Gray, 900),
                text_secondary: ColorValue::ramp(RampKey::Gray, 600),
                text_muted: ColorValue::ramp(RampKey::Gray, 500),
                bg_canvas: ColorValue::White,
                bg_surface: ColorValue::ramp(RampKey::Gray, 50),
                bg_soft: ColorValue::ramp(RampKey::Gray, 100),
                border_subtle: ColorValue::ramp(RampKey::Gray, 200),
                border_strong: ColorValue::ramp(RampKey::Gray, 400),
                focus_ring: ColorValue::ramp(primary, 500),
                status_info: ColorValue::ramp(primary, 600),
                status_success: ColorValue::ramp(RampKey::Green, 600),
                status_warning: ColorValue::ramp(RampKey::Amber, 600),
                status_error: ColorValue::ramp(RampKey::Red, 600),
                overlay_mask: ColorValue::Custom("rgb(15 23 42 / 0.45)".to_string()),
            },
            ColorScheme::Dark => Self {
                text_primary: ColorValue::ramp(RampKey::Gray, 50),
                text_secondary: ColorValue::ramp(RampKey::Gray, 300),
                text_muted: ColorValue::ramp(RampKey::Gray, 500),
                bg_canvas: ColorValue::ramp(RampKey::Gray, 900),
                bg_surface: ColorValue::ramp(RampKey::Gray, 800),
                bg_soft: ColorValue::ramp(RampKey::Gray, 700),
                border_subtle: ColorValue::ramp(RampKey::Gray, 700),
                border_strong: ColorValue::ramp(RampKey::Gray, 600),
                focus_ring: ColorValue::ramp(primary, 400),
                status_info: ColorValue::ramp(primary, 400),
                status_success: ColorValue::ramp(RampKey::Green, 400),
                status_warning: ColorValue::ramp(RampKey::Amber, 400),
                status_error: ColorValue::ramp(RampKey::Red, 400),
                overlay_mask: ColorValue::Custom("rgb(2 6 23 / 0.7)".to_string()),
            },
        }
    }

    pub fn entries(&self) -> [(&'static str, &ColorValue); 14] {
        [
            ("text.primary", &self.text_primary),
            ("text.secondary", &self.text_secondary),
            ("text.muted", &self.text_muted),
            ("bg.canvas", &self.bg_canvas),
            ("bg.surface", &self.bg_surface),
            ("bg.soft", &self.bg_soft),
            ("border.subtle", &self.border_subtle),
            ("border.strong", &self.border_strong),
            ("focus.ring", &self.focus_ring),
            ("status.info", &self.status_info),
            ("status.success", &self.status_success),
            ("status.warning", &self.status_warning),
            ("status.error", &self.status_error),
            ("overlay.mask", &self.overlay_mask),
        ]
    }
}

/// One named variant of the full token set, plus its output scoping.
///
/// Themes are fixed at build-configuration time; `token_set` materializes the
/// declarative inputs into the flat path/value mapping the emitter consumes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Theme {
    pub id: String,
    pub scheme: ColorScheme,
    pub selector: String,
    pub filename: String,
    pub white: &'static str,
    pub black: &'static str,
    pub primary_ramp: RampKey,
    pub ramps: BTreeMap<RampKey, ColorRamp>,
    pub semantic: SemanticColors,
    pub overrides: TokenSet,
}

impl Theme {
    pub fn new(id: impl Into<String>, scheme: ColorScheme) -> Self {
        let id = id.into();
        let primary = RampKey::Brand;
        Self {
            selector: format!(":root[data-theme=\"{id}\"]"),
            filename: format!("{id}-tokens.css"),
            white: "#fff",
            black: "#000",
            primary_ramp: primary,
            ramps: RampCatalog::store(),
            semantic: SemanticColors::defaults_for(primary, scheme),
            overrides: TokenSet::new(),
            id,
            scheme,
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_primary_ramp(mut self, primary: RampKey) -> Self {
        self.primary_ramp = primary;
        self.semantic = SemanticColors::defaults_for(primary, self.scheme);
        self
    }

    pub fn with_ramp_override(mut self, key: RampKey, ramp: ColorRamp) -> Self {
        self.ramps.insert(key, ramp);
        self
    }

    pub fn with_token_override(mut self, path: TokenPath, value: impl Into<String>) -> Self {
        self.overrides.insert(path, value);
        self
    }

    /// Whether this theme owns the unqualified default selector.
    pub fn is_default_scope(&self) -> bool {
        self.selector == ":root"
    }

    pub fn resolve_color(&self, value: &ColorValue) -> Result<String, ThemeError> {
        match value {
            ColorValue::Ramp { key, stop } => {
                let ramp = self
                    .ramps
                    .get(key)
                    .copied()
                    .unwrap_or_else(|| RampCatalog::ramp(*key));
                let index = stop_index(*stop).ok_or(ThemeError::UnknownRampStop {
                    ramp: key.as_str(),
                    stop: *stop,
                })?;
                Ok(ramp[index].to_string())
            }
            ColorValue::White => Ok(self.white.to_string()),
            ColorValue::Black => Ok(self.black.to_string()),
            ColorValue::Custom(value) => Ok(value.clone()),
        }
    }

    /// Materializes the theme into its flat token set. Ramp stops, semantic
    /// roles, scales, shadows, and motion values all land under their fixed
    /// namespace paths; explicit overrides are applied last.
    pub fn token_set(&self) -> Result<TokenSet, ThemeError> {
        let mut set = TokenSet::new();

        for (key, ramp) in &self.ramps {
            for (index, stop) in STOP_KEYS.iter().enumerate() {
                let path = TokenPath::from_parts(vec![key.as_str().to_string(), stop.to_string()]);
                set.insert(path, ramp[index]);
            }
        }

        for (role, value) in self.semantic.entries() {
            let mut segments = vec!["color".to_string()];
            segments.extend(role.split('.').map(str::to_string));
            set.insert(TokenPath::from_parts(segments), self.resolve_color(value)?);
        }

        for step in SPACING {
            let path = TokenPath::from_parts(vec!["spacing".to_string(), step.key.to_string()]);
            set.insert(path, step.value);
        }

        for (name, value) in RADIUS.entries() {
            set.insert(
                TokenPath::from_parts(vec!["radius".to_string(), name.to_string()]),
                value,
            );
        }
        set.insert(
            TokenPath::from_parts(vec!["radius".to_string(), "pill".to_string()]),
            RADIUS_PILL,
        );

        for (name, value) in FONT_SIZES.entries() {
            set.insert(
                TokenPath::from_parts(vec![
                    "font".to_string(),
                    "size".to_string(),
                    name.to_string(),
                ]),
                value,
            );
        }
        for (name, value) in [
            ("regular", FONT_WEIGHTS.regular),
            ("medium", FONT_WEIGHTS.medium),
            ("semibold", FONT_WEIGHTS.semibold),
            ("bold", FONT_WEIGHTS.bold),
        ] {
            set.insert(
                TokenPath::from_parts(vec![
                    "font".to_string(),
                    "weight".to_string(),
                    name.to_string(),
                ]),
                value.to_string(),
            );
        }
        for (name, value) in [
            ("tight", FONT_LEADINGS.tight),
            ("normal", FONT_LEADINGS.normal),
            ("relaxed", FONT_LEADINGS.relaxed),
        ] {
            set.insert(
                TokenPath::from_parts(vec![
                    "font".to_string(),
                    "leading".to_string(),
                    name.to_string(),
                ]),
                value,
            );
        }

        for (name, value) in [("sm", SHADOWS.sm), ("md", SHADOWS.md), ("lg", SHADOWS.lg)] {
            set.insert(
                TokenPath::from_parts(vec!["shadow".to_string(), name.to_string()]),
                value,
            );
        }

        for (name, millis) in [
            ("fast", MOTION_DURATIONS.fast_ms),
            ("normal", MOTION_DURATIONS.normal_ms),
            ("slow", MOTION_DURATIONS.slow_ms),
        ] {
            set.insert(
                TokenPath::from_parts(vec![
                    "motion".to_string(),
                    "duration".to_string(),
                    name.to_string(),
                ]),
                format!("{millis}ms"),
            );
        }
        for (name, value) in [
            ("standard", MOTION_EASINGS.standard),
            ("decelerate", MOTION_EASINGS.decelerate),
            ("accelerate", MOTION_EASINGS.accelerate),
        ] {
            set.insert(
                TokenPath::from_parts(vec![
                    "motion".to_string(),
                    "ease".to_string(),
                    name.to_string(),
                ]),
                value,
            );
        }

        Ok(set.extend(self.overrides.clone()))
    }

    pub fn merged(&self, patch: &ThemePatch) -> Self {
        let mut next = self.clone();
        if let Some(primary) = patch.primary_ramp {
            next = next.with_primary_ramp(primary);
        }
        if let Some(selector) = &patch.selector {
            next.selector = selector.clone();
        }
        if let Some(filename) = &patch.filename {
            next.filename = filename.clone();
        }
        for (key, ramp) in &patch.ramp_overrides {
            next.ramps.insert(*key, *ramp);
        }
        next.semantic = patch.semantic.apply(next.semantic);
        next.overrides = next.overrides.extend(patch.token_overrides.clone());
        next
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ThemePatch {
    pub primary_ramp: Option<RampKey>,
    pub selector: Option<String>,
    pub filename: Option<String>,
    pub semantic: SemanticPatch,
    pub ramp_overrides: BTreeMap<RampKey, ColorRamp>,
    pub token_overrides: TokenSet,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SemanticPatch {
    pub text_primary: Option<ColorValue>,
    pub text_secondary: Option<ColorValue>,
    pub text_muted: Option<ColorValue>,
    pub bg_canvas: Option<ColorValue>,
    pub bg_surface: Option<ColorValue>,
    pub bg_soft: Option<ColorValue>,
    pub border_subtle: Option<ColorValue>,
    pub border_strong: Option<ColorValue>,
    pub focus_ring: Option<ColorValue>,
    pub status_info: Option<ColorValue>,
    pub status_success: Option<ColorValue>,
    pub status_warning: Option<ColorValue>,
    pub status_error: Option<ColorValue>,
    pub overlay_mask: Option<ColorValue>,
}

impl SemanticPatch {
    fn apply(&self, mut current: SemanticColors) -> SemanticColors {
        if let Some(value) = &self.text_primary {
            current.text_primary = value.clone();
        }
        if let Some(value) = &self.text_secondary {
            current.text_secondary = value.clone();
        }
        if let Some(value) = &self.text_muted {
            current.text_muted = value.clone();
        }
        if let Some(value) = &self.bg_canvas {
            current.bg_canvas = value.clone();
        }
        if let Some(value) = &self.bg_surface {
            current.bg_surface = value.clone();
        }
        if let Some(value) = &self.bg_soft {
            current.bg_soft = value.clone();
        }
        if let Some(value) = &self.border_subtle {
            current.border_subtle = value.clone();
        }
        if let Some(value) = &self.border_strong {
            current.border_strong = value.clone();
        }
        if let Some(value) = &self.focus_ring {
            current.focus_ring = value.clone();
        }
        if let Some(value) = &self.status_info {
            current.status_info = value.clone();
        }
        if let Some(value) = &self.status_success {
            current.status_success = value.clone();
        }
        if let Some(value) = &self.status_warning {
            current.status_warning = value.clone();
        }
        if let Some(value) = &self.status_error {
            current.status_error = value.clone();
        }
        if let Some(value) = &self.overlay_mask {
            current.overlay_mask = value.clone();
        }
        current
    }
}
