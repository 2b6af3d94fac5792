//! Headless interaction state for the component library.
//!
//! Every transition here is an explicit, immutable function taking the
//! current state and an event and returning the next state. Controlled
//! components feed their own state in; uncontrolled hosts keep the returned
//! value wherever they like.

pub mod focus;
pub mod panel;
pub mod selection;
pub mod toggle_group;

#[cfg(test)]
mod test_state_logic;

pub use focus::{FocusItem, key_transition};
pub use panel::{PanelEvent, PanelMode, PanelState};
pub use selection::{MultiSelection, SelectionEvent, SingleSelection, toggled_values};
pub use toggle_group::{ToggleGroupMode, ToggleGroupState};
