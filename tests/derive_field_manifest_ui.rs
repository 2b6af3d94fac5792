#[test]
fn field_manifest_derive_ui() {
    let testcases = trybuild::TestCases::new();
    testcases.pass("tests/ui/field_manifest/pass.rs");
    testcases.pass("tests/ui/field_manifest/pass_attributes.rs");
}
