use std::collections::BTreeSet;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SelectionEvent {
    Select(String),
    Deselect(String),
    Toggle(String),
    Clear,
}

/// Single-value selection, e.g. a select trigger or radio-like list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SingleSelection {
    value: Option<String>,
}

impl SingleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_selected(&self, candidate: &str) -> bool {
        self.value.as_deref() == Some(candidate)
    }

    pub fn apply(&self, event: &SelectionEvent) -> Self {
        let value = match event {
            SelectionEvent::Select(id) => Some(id.clone()),
            SelectionEvent::Deselect(id) => {
                if self.is_selected(id) {
                    None
                } else {
                    self.value.clone()
                }
            }
            SelectionEvent::Toggle(id) => {
                if self.is_selected(id) {
                    None
                } else {
                    Some(id.clone())
                }
            }
            SelectionEvent::Clear => None,
        };
        Self { value }
    }
}

/// Multi-value selection with set semantics, e.g. a multi-select or a chip
/// group.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MultiSelection {
    values: BTreeSet<String>,
}

impl MultiSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.values.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn apply(&self, event: &SelectionEvent) -> Self {
        let mut values = self.values.clone();
        match event {
            SelectionEvent::Select(id) => {
                values.insert(id.clone());
            }
            SelectionEvent::Deselect(id) => {
                values.remove(id);
            }
            SelectionEvent::Toggle(id) => {
                if !values.insert(id.clone()) {
                    values.remove(id);
                }
            }
            SelectionEvent::Clear => values.clear(),
        }
        Self { values }
    }
}

pub fn toggled_values(values: &[String], value: &str) -> Vec<String> {
    let mut set = values.iter().cloned().collect::<BTreeSet<_>>();
    if !set.insert(value.to_string()) {
        set.remove(value);
    }
    set.into_iter().collect::<Vec<_>>()
}
