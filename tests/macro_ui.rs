//! UI tests for #[derive(PropertyBind)] / #[derive(PropertyBindSingle)]

#[test]
fn ui_wrong_arity_fails() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/wrong_arity.rs");
}

#[test]
fn ui_skipped_binding_warns() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/skipped_binding_denied.rs");
}

#[test]
fn ui_multi_happy_ok() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/multi_happy.rs");
}

#[test]
fn ui_single_happy_ok() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/single_happy.rs");
}

#[test]
fn ui_crate_alias_ok() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/crate_alias.rs");
}
