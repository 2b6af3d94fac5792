#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FocusItem {
    pub value: String,
    pub disabled: bool,
}

impl FocusItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }
}

/// Keyboard focus movement over a flat option list. Disabled items are
/// skipped entirely; movement clamps at both ends instead of wrapping.
pub fn key_transition(key: &str, current: Option<&str>, items: &[FocusItem]) -> Option<String> {
    let enabled_values = items
        .iter()
        .filter(|item| !item.disabled)
        .map(|item| item.value.as_str())
        .collect::<Vec<_>>();
    if enabled_values.is_empty() {
        return None;
    }

    let current_index =
        current.and_then(|selected| enabled_values.iter().position(|value| *value == selected));

    match key {
        "up" => {
            if let Some(index) = current_index {
                if index > 0 {
                    Some(enabled_values[index - 1].to_string())
                } else {
                    Some(enabled_values[0].to_string())
                }
            } else {
                Some(enabled_values[0].to_string())
            }
        }
        "down" => {
            if let Some(index) = current_index {
                let next_index = (index + 1).min(enabled_values.len().saturating_sub(1));
                Some(enabled_values[next_index].to_string())
            } else {
                Some(enabled_values[0].to_string())
            }
        }
        "home" => Some(enabled_values[0].to_string()),
        "end" => enabled_values.last().map(|value| (*value).to_string()),
        _ => None,
    }
}
