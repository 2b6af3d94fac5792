use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ToggleGroupMode {
    Multiple,
    Exclusive { allow_empty: bool },
}

/// Active-item state for toggle groups. Exclusive groups hold at most one
/// active item and, unless `allow_empty` is set, refuse to deselect the last
/// one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ToggleGroupState {
    active: BTreeSet<String>,
}

impl ToggleGroupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            active: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.active.contains(value)
    }

    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn toggle(&self, mode: ToggleGroupMode, value: &str) -> Self {
        let mut active = self.active.clone();
        match mode {
            ToggleGroupMode::Multiple => {
                if !active.insert(value.to_string()) {
                    active.remove(value);
                }
            }
            ToggleGroupMode::Exclusive { allow_empty } => {
                if active.contains(value) {
                    if allow_empty {
                        active.clear();
                    }
                } else {
                    active.clear();
                    active.insert(value.to_string());
                }
            }
        }
        Self { active }
    }
}
