use std::collections::BTreeMap;

pub const RAMP_STOPS: usize = 10;
pub type ColorRamp = [&'static str; RAMP_STOPS];

pub const STOP_KEYS: [u16; RAMP_STOPS] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum RampKey {
    Gray,
    Brand,
    Red,
    Amber,
    Green,
}

impl RampKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Brand => "brand",
            Self::Red => "red",
            Self::Amber => "amber",
            Self::Green => "green",
        }
    }
}

pub const RAMP_KEYS: [RampKey; 5] = [
    RampKey::Gray,
    RampKey::Brand,
    RampKey::Red,
    RampKey::Amber,
    RampKey::Green,
];

pub fn stop_index(stop: u16) -> Option<usize> {
    STOP_KEYS.iter().position(|key| *key == stop)
}

pub struct RampCatalog;

impl RampCatalog {
    pub const fn ramp(key: RampKey) -> ColorRamp {
        match key {
            RampKey::Gray => [
                "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569",
                "#334155", "#1e293b", "#0f172a",
            ],
            RampKey::Brand => [
                "#f0f9ff", "#e0f2fe", "#bae6fd", "#7dd3fc", "#38bdf8", "#0ea5e9", "#0284c7",
                "#0369a1", "#075985", "#0c4a6e",
            ],
            RampKey::Red => [
                "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626",
                "#b91c1c", "#991b1b", "#7f1d1d",
            ],
            RampKey::Amber => [
                "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706",
                "#b45309", "#92400e", "#78350f",
            ],
            RampKey::Green => [
                "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669",
                "#047857", "#065f46", "#064e3b",
            ],
        }
    }

    pub fn store() -> BTreeMap<RampKey, ColorRamp> {
        let mut ramp_store = BTreeMap::new();
        for key in RAMP_KEYS {
            ramp_store.insert(key, Self::ramp(key));
        }
        ramp_store
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpacingStep {
    pub key: u16,
    pub value: &'static str,
}

pub const SPACING: [SpacingStep; 9] = [
    SpacingStep { key: 0, value: "0" },
    SpacingStep {
        key: 1,
        value: "0.25rem",
    },
    SpacingStep {
        key: 2,
        value: "0.5rem",
    },
    SpacingStep {
        key: 3,
        value: "0.75rem",
    },
    SpacingStep { key: 4, value: "1rem" },
    SpacingStep {
        key: 6,
        value: "1.5rem",
    },
    SpacingStep { key: 8, value: "2rem" },
    SpacingStep {
        key: 12,
        value: "3rem",
    },
    SpacingStep {
        key: 16,
        value: "4rem",
    },
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedScale {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

impl NamedScale {
    pub const fn new(
        xs: &'static str,
        sm: &'static str,
        md: &'static str,
        lg: &'static str,
        xl: &'static str,
    ) -> Self {
        Self { xs, sm, md, lg, xl }
    }

    pub fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            ("xs", self.xs),
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
        ]
    }
}

pub const RADIUS: NamedScale = NamedScale::new("0.125rem", "0.25rem", "0.5rem", "1rem", "2rem");
pub const RADIUS_PILL: &str = "9999px";

pub const FONT_SIZES: NamedScale =
    NamedScale::new("0.75rem", "0.875rem", "1rem", "1.125rem", "1.25rem");

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightScale {
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

pub const FONT_WEIGHTS: WeightScale = WeightScale {
    regular: 400,
    medium: 500,
    semibold: 600,
    bold: 700,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LeadingScale {
    pub tight: &'static str,
    pub normal: &'static str,
    pub relaxed: &'static str,
}

pub const FONT_LEADINGS: LeadingScale = LeadingScale {
    tight: "1.25",
    normal: "1.5",
    relaxed: "1.75",
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ShadowScale {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
}

pub const SHADOWS: ShadowScale = ShadowScale {
    sm: "0 1px 2px 0 rgb(15 23 42 / 0.08)",
    md: "0 4px 6px -1px rgb(15 23 42 / 0.12), 0 2px 4px -2px rgb(15 23 42 / 0.08)",
    lg: "0 10px 15px -3px rgb(15 23 42 / 0.16), 0 4px 6px -4px rgb(15 23 42 / 0.1)",
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DurationScale {
    pub fast_ms: u16,
    pub normal_ms: u16,
    pub slow_ms: u16,
}

pub const MOTION_DURATIONS: DurationScale = DurationScale {
    fast_ms: 150,
    normal_ms: 220,
    slow_ms: 320,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EasingScale {
    pub standard: &'static str,
    pub decelerate: &'static str,
    pub accelerate: &'static str,
}

pub const MOTION_EASINGS: EasingScale = EasingScale {
    standard: "cubic-bezier(0.4, 0, 0.2, 1)",
    decelerate: "cubic-bezier(0, 0, 0.2, 1)",
    accelerate: "cubic-bezier(0.4, 0, 1, 1)",
};
