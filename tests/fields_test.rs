use nandrun::fields::{FILE_FLAG, FieldSet, FieldSpec};

#[test]
fn standard_registry_order_and_flags() {
    let fields = FieldSet::standard();

    let flags: Vec<&str> = fields.iter().map(|spec| spec.flag.as_str()).collect();
    assert_eq!(flags, ["-b", "-p", "-s", "-a", "-S", "-c"]);
    assert!(fields.iter().all(|spec| !spec.description.is_empty()));

    fields.validate().expect("standard registry should be valid");
}

#[test]
fn bare_registry_shares_flags_without_descriptions() {
    let standard = FieldSet::standard();
    let bare = FieldSet::bare();

    let standard_flags: Vec<&str> = standard.iter().map(|s| s.flag.as_str()).collect();
    let bare_flags: Vec<&str> = bare.iter().map(|s| s.flag.as_str()).collect();
    assert_eq!(standard_flags, bare_flags);
    assert!(bare.iter().all(|spec| spec.description.is_empty()));

    bare.validate().expect("bare registry should be valid");
}

#[test]
fn file_flag_is_not_a_registry_member() {
    assert!(!FieldSet::standard().contains(FILE_FLAG));
    assert!(!FieldSet::bare().contains(FILE_FLAG));
}

#[test]
fn lookup_by_flag() {
    let fields = FieldSet::standard();

    let spec = fields.get("-S").expect("-S should be registered");
    assert_eq!(spec.label, "Size of Buffer (in bytes)");
    assert!(fields.get("-S ").is_none());
}

#[test]
fn empty_flag_fails_validation() {
    let fields = FieldSet::new(vec![FieldSpec::new("  ", "nameless", "")]);

    let err = fields.validate().expect_err("empty flag should fail validation");
    assert!(err.to_string().contains("empty flag"), "got: {}", err);
}
