use calmtokens::fields::{FieldCatalog, FieldManifest};

#[derive(calmtokens::fields::FieldManifest)]
#[allow(dead_code)]
struct ProfileForm {
    email: String,
    display_name: String,
}

fn main() {
    let rows = ProfileForm::field_manifest();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key.as_str(), "email");

    let catalog = FieldCatalog::from_manifest::<ProfileForm>().unwrap();
    assert_eq!(catalog.label("display_name"), Some("Display name"));
    assert!(!catalog.required("email"));
}
