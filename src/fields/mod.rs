use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

pub use calmtokens_fields_derive::FieldManifest;

/// Static interned key identifying one field of a model.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldKey(&'static str);

impl FieldKey {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// One row of the association table: which label and description belong to a
/// field, and whether it is required.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldInfo {
    pub key: FieldKey,
    pub label: &'static str,
    pub description: Option<&'static str>,
    pub required: bool,
}

/// A model type that exposes its fields' association rows in declaration
/// order. Usually derived.
pub trait FieldManifest {
    fn field_manifest() -> &'static [FieldInfo];
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldError {
    DuplicateKey(&'static str),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::DuplicateKey(key) => write!(f, "duplicate field key: {key}"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Lookup table over a model's field rows. Iteration preserves declaration
/// order; lookup is by key.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldCatalog {
    rows: Vec<FieldInfo>,
    index: BTreeMap<&'static str, usize>,
}

impl FieldCatalog {
    pub fn new(rows: &[FieldInfo]) -> Result<Self, FieldError> {
        let mut index = BTreeMap::new();
        for (position, row) in rows.iter().enumerate() {
            if index.insert(row.key.as_str(), position).is_some() {
                return Err(FieldError::DuplicateKey(row.key.as_str()));
            }
        }
        Ok(Self {
            rows: rows.to_vec(),
            index,
        })
    }

    pub fn from_manifest<T: FieldManifest>() -> Result<Self, FieldError> {
        Self::new(T::field_manifest())
    }

    pub fn get(&self, key: &str) -> Option<&FieldInfo> {
        self.index.get(key).map(|position| &self.rows[*position])
    }

    pub fn label(&self, key: &str) -> Option<&'static str> {
        self.get(key).map(|row| row.label)
    }

    pub fn description(&self, key: &str) -> Option<&'static str> {
        self.get(key).and_then(|row| row.description)
    }

    pub fn required(&self, key: &str) -> bool {
        self.get(key).is_some_and(|row| row.required)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldInfo> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(FieldManifest)]
    #[allow(dead_code)]
    struct CheckoutForm {
        #[field(label = "Email address", description = "Receipts go here.", required)]
        email: String,
        #[field(label = "Promo code")]
        promo_code: Option<String>,
        delivery_notes: String,
    }

    #[test]
    fn derive_preserves_declaration_order() {
        let rows = CheckoutForm::field_manifest();
        let keys = rows
            .iter()
            .map(|row| row.key.as_str())
            .collect::<Vec<_>>();
        assert_eq!(keys, ["email", "promo_code", "delivery_notes"]);
    }

    #[test]
    fn derive_reads_field_attributes() {
        let catalog = FieldCatalog::from_manifest::<CheckoutForm>().unwrap();
        assert_eq!(catalog.label("email"), Some("Email address"));
        assert_eq!(catalog.description("email"), Some("Receipts go here."));
        assert!(catalog.required("email"));
        assert_eq!(catalog.label("promo_code"), Some("Promo code"));
        assert!(!catalog.required("promo_code"));
    }

    #[test]
    fn derive_humanizes_unattributed_field_names() {
        let catalog = FieldCatalog::from_manifest::<CheckoutForm>().unwrap();
        assert_eq!(catalog.label("delivery_notes"), Some("Delivery notes"));
        assert_eq!(catalog.description("delivery_notes"), None);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let rows = [
            FieldInfo {
                key: FieldKey::new("email"),
                label: "Email",
                description: None,
                required: false,
            },
            FieldInfo {
                key: FieldKey::new("email"),
                label: "Email again",
                description: None,
                required: false,
            },
        ];
        assert_eq!(
            FieldCatalog::new(&rows),
            Err(FieldError::DuplicateKey("email"))
        );
    }

    #[test]
    fn missing_keys_resolve_to_nothing() {
        let catalog = FieldCatalog::from_manifest::<CheckoutForm>().unwrap();
        assert_eq!(catalog.get("phone"), None);
        assert!(!catalog.required("phone"));
    }
}
