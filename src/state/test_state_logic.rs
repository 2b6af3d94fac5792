use super::focus::{FocusItem, key_transition};
use super::panel::{PanelEvent, PanelMode, PanelState};
use super::selection::{MultiSelection, SelectionEvent, SingleSelection, toggled_values};
use super::toggle_group::{ToggleGroupMode, ToggleGroupState};

fn demo_focus_items() -> Vec<FocusItem> {
    vec![
        FocusItem::new("general"),
        FocusItem::new("appearance"),
        FocusItem::new("billing").disabled(true),
        FocusItem::new("advanced"),
    ]
}

#[test]
fn panel_toggle_expands_and_collapses() {
    let state = PanelState::new();
    let expanded = state.apply(
        PanelMode::Multiple,
        &PanelEvent::Toggle("filters".to_string()),
    );
    assert!(expanded.is_expanded("filters"));
    let collapsed = expanded.apply(
        PanelMode::Multiple,
        &PanelEvent::Toggle("filters".to_string()),
    );
    assert!(collapsed.is_empty());
    // The original value is untouched.
    assert!(!state.is_expanded("filters"));
}

#[test]
fn exclusive_panel_keeps_at_most_one_section_expanded() {
    let state = PanelState::with_expanded(["price"]);
    let next = state.apply(
        PanelMode::Exclusive,
        &PanelEvent::Expand("category".to_string()),
    );
    assert!(next.is_expanded("category"));
    assert!(!next.is_expanded("price"));
    assert_eq!(next.len(), 1);
}

#[test]
fn expand_all_degrades_to_first_section_in_exclusive_mode() {
    let all = vec!["price".to_string(), "category".to_string()];
    let multiple = PanelState::new().apply(PanelMode::Multiple, &PanelEvent::ExpandAll(all.clone()));
    assert_eq!(multiple.len(), 2);

    let exclusive = PanelState::new().apply(PanelMode::Exclusive, &PanelEvent::ExpandAll(all));
    assert_eq!(exclusive.len(), 1);
    assert!(exclusive.is_expanded("price"));
}

#[test]
fn collapse_all_clears_every_section() {
    let state = PanelState::with_expanded(["price", "category"]);
    let next = state.apply(PanelMode::Multiple, &PanelEvent::CollapseAll);
    assert!(next.is_empty());
}

#[test]
fn single_selection_toggle_clears_on_reselect() {
    let state = SingleSelection::new();
    let selected = state.apply(&SelectionEvent::Toggle("sm".to_string()));
    assert!(selected.is_selected("sm"));
    let cleared = selected.apply(&SelectionEvent::Toggle("sm".to_string()));
    assert_eq!(cleared.value(), None);
}

#[test]
fn single_selection_deselect_ignores_other_values() {
    let state = SingleSelection::with_value("sm");
    let unchanged = state.apply(&SelectionEvent::Deselect("lg".to_string()));
    assert!(unchanged.is_selected("sm"));
    let cleared = state.apply(&SelectionEvent::Deselect("sm".to_string()));
    assert_eq!(cleared.value(), None);
}

#[test]
fn multi_selection_keeps_set_semantics() {
    let state = MultiSelection::with_values(["red", "green"]);
    let toggled = state.apply(&SelectionEvent::Toggle("red".to_string()));
    assert!(!toggled.contains("red"));
    assert!(toggled.contains("green"));
    let grown = toggled.apply(&SelectionEvent::Select("blue".to_string()));
    assert_eq!(grown.len(), 2);
    let cleared = grown.apply(&SelectionEvent::Clear);
    assert!(cleared.is_empty());
}

#[test]
fn toggled_values_round_trips() {
    let values = vec!["a".to_string(), "b".to_string()];
    let without_b = toggled_values(&values, "b");
    assert_eq!(without_b, vec!["a".to_string()]);
    let with_c = toggled_values(&without_b, "c");
    assert_eq!(with_c, vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn exclusive_toggle_group_refuses_to_empty_unless_allowed() {
    let state = ToggleGroupState::with_active(["list"]);

    let kept = state.toggle(ToggleGroupMode::Exclusive { allow_empty: false }, "list");
    assert!(kept.is_active("list"));

    let cleared = state.toggle(ToggleGroupMode::Exclusive { allow_empty: true }, "list");
    assert_eq!(cleared.len(), 0);

    let switched = state.toggle(ToggleGroupMode::Exclusive { allow_empty: false }, "grid");
    assert!(switched.is_active("grid"));
    assert!(!switched.is_active("list"));
}

#[test]
fn multiple_toggle_group_toggles_freely() {
    let state = ToggleGroupState::new();
    let bold = state.toggle(ToggleGroupMode::Multiple, "bold");
    let bold_italic = bold.toggle(ToggleGroupMode::Multiple, "italic");
    assert_eq!(bold_italic.len(), 2);
    let italic = bold_italic.toggle(ToggleGroupMode::Multiple, "bold");
    assert!(!italic.is_active("bold"));
    assert!(italic.is_active("italic"));
}

#[test]
fn focus_movement_skips_disabled_items_and_clamps() {
    let items = demo_focus_items();

    assert_eq!(key_transition("down", None, &items).as_deref(), Some("general"));
    assert_eq!(
        key_transition("down", Some("appearance"), &items).as_deref(),
        Some("advanced")
    );
    assert_eq!(
        key_transition("up", Some("advanced"), &items).as_deref(),
        Some("appearance")
    );
    assert_eq!(
        key_transition("up", Some("general"), &items).as_deref(),
        Some("general")
    );
    assert_eq!(
        key_transition("down", Some("advanced"), &items).as_deref(),
        Some("advanced")
    );
    assert_eq!(key_transition("home", Some("advanced"), &items).as_deref(), Some("general"));
    assert_eq!(key_transition("end", None, &items).as_deref(), Some("advanced"));
}

#[test]
fn focus_movement_over_empty_or_unknown_keys_is_inert() {
    assert_eq!(key_transition("down", None, &[]), None);
    let items = demo_focus_items();
    assert_eq!(key_transition("left", Some("general"), &items), None);
}
