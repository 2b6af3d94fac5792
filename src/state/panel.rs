use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PanelMode {
    Multiple,
    Exclusive,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PanelEvent {
    Toggle(String),
    Expand(String),
    Collapse(String),
    ExpandAll(Vec<String>),
    CollapseAll,
}

/// Collapse/expand state for accordions and filter panels: the set of
/// currently expanded section ids.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PanelState {
    expanded: BTreeSet<String>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expanded(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            expanded: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn expanded(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// In exclusive mode expanding a section collapses every other section in
    /// the same transition; `ExpandAll` degrades to expanding the first id.
    pub fn apply(&self, mode: PanelMode, event: &PanelEvent) -> Self {
        let mut next = self.expanded.clone();
        match event {
            PanelEvent::Toggle(id) => {
                if !next.remove(id) {
                    if mode == PanelMode::Exclusive {
                        next.clear();
                    }
                    next.insert(id.clone());
                }
            }
            PanelEvent::Expand(id) => {
                if mode == PanelMode::Exclusive {
                    next.clear();
                }
                next.insert(id.clone());
            }
            PanelEvent::Collapse(id) => {
                next.remove(id);
            }
            PanelEvent::ExpandAll(ids) => match mode {
                PanelMode::Multiple => next.extend(ids.iter().cloned()),
                PanelMode::Exclusive => {
                    next.clear();
                    if let Some(first) = ids.first() {
                        next.insert(first.clone());
                    }
                }
            },
            PanelEvent::CollapseAll => next.clear(),
        }
        Self { expanded: next }
    }
}
