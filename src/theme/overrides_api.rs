use super::*;

macro_rules! impl_option_overrides_methods {
    ($type:ty { $($field:ident : $value:ty),* $(,)? }) => {
        impl $type {
            $(
                pub fn $field(mut self, value: impl Into<$value>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

macro_rules! impl_nested_overrides_methods {
    ($type:ty { $($field:ident : $value:ty),* $(,)? }) => {
        impl $type {
            $(
                pub fn $field(mut self, configure: impl FnOnce($value) -> $value) -> Self {
                    self.$field = configure(self.$field);
                    self
                }
            )*
        }
    };
}

impl_option_overrides_methods!(SemanticPatch {
    text_primary: ColorValue,
    text_secondary: ColorValue,
    text_muted: ColorValue,
    bg_canvas: ColorValue,
    bg_surface: ColorValue,
    bg_soft: ColorValue,
    border_subtle: ColorValue,
    border_strong: ColorValue,
    focus_ring: ColorValue,
    status_info: ColorValue,
    status_success: ColorValue,
    status_warning: ColorValue,
    status_error: ColorValue,
    overlay_mask: ColorValue,
});

impl_option_overrides_methods!(ThemePatch {
    primary_ramp: RampKey,
    selector: String,
    filename: String,
});

impl_nested_overrides_methods!(ThemePatch {
    semantic: SemanticPatch,
});

impl ThemePatch {
    pub fn ramp_override(mut self, key: RampKey, ramp: ColorRamp) -> Self {
        self.ramp_overrides.insert(key, ramp);
        self
    }

    pub fn token_override(mut self, path: TokenPath, value: impl Into<String>) -> Self {
        self.token_overrides.insert(path, value);
        self
    }
}
