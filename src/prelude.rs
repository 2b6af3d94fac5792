pub use crate::config::{BuildConfig, BuildOptions, ConfigError};
pub use crate::coverage::CoverageReport;
pub use crate::docs::{Story, StoryCatalog};
pub use crate::emit::{EmitError, Emitter, Stylesheet};
pub use crate::fields::{FieldCatalog, FieldInfo, FieldKey, FieldManifest};
pub use crate::manifest::{BuildManifest, ManifestError};
pub use crate::pipeline::{BuildError, BuildReport, TokenPipeline};
pub use crate::registry::{RegistryError, TokenPath, TokenRegistry, TokenSet};
pub use crate::state::{
    FocusItem, MultiSelection, PanelEvent, PanelMode, PanelState, SelectionEvent, SingleSelection,
    ToggleGroupMode, ToggleGroupState,
};
pub use crate::theme::{ColorScheme, ColorValue, SemanticColors, Theme, ThemePatch};
pub use crate::tokens::{ColorRamp, RampCatalog, RampKey};
