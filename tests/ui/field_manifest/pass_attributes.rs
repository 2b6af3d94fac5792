use calmtokens::fields::{FieldCatalog, FieldManifest};

#[derive(calmtokens::fields::FieldManifest)]
#[allow(dead_code)]
struct ShippingForm {
    #[field(label = "Street address", description = "Include the unit number.", required)]
    street: String,
    #[field(label = "Postcode", required)]
    postcode: String,
    courier_notes: String,
}

fn main() {
    let catalog = FieldCatalog::from_manifest::<ShippingForm>().unwrap();
    assert_eq!(catalog.label("street"), Some("Street address"));
    assert_eq!(catalog.description("street"), Some("Include the unit number."));
    assert!(catalog.required("postcode"));
    assert_eq!(catalog.description("postcode"), None);
    assert_eq!(catalog.label("courier_notes"), Some("Courier notes"));
}
