mod helpers;

use nandrun::fields::FieldSet;
use nandrun::form::FormState;
use nandrun::invocation::build_invocation;

#[test]
fn empty_values_are_suppressed() {
    // FormState = {-b: "3", -p: "", -s: "1"}, no input file
    let form = helpers::form_with(&[("-b", "3"), ("-p", ""), ("-s", "1")]);

    let invocation = build_invocation(&FieldSet::standard(), &form, "demo.exe");

    assert_eq!(invocation.argv(), ["demo.exe", "-b", "3", "-s", "1"]);
}

#[test]
fn whitespace_only_values_are_suppressed_and_file_flag_appended() {
    // FormState = {-b: "  ", -p: "7"}, input file "data.bin"
    let mut form = helpers::form_with(&[("-b", "  "), ("-p", "7")]);
    form.set_input_file("data.bin");

    let invocation = build_invocation(&FieldSet::standard(), &form, "demo.exe");

    assert_eq!(invocation.argv(), ["demo.exe", "-p", "7", "-f", "data.bin"]);
}

#[test]
fn values_are_forwarded_trimmed() {
    let form = helpers::form_with(&[("-b", "  42 ")]);

    let invocation = build_invocation(&FieldSet::standard(), &form, "demo.exe");

    assert_eq!(invocation.argv(), ["demo.exe", "-b", "42"]);
}

#[test]
fn flag_order_follows_registry_order_with_file_last() {
    let mut form = helpers::form_with(&[
        ("-c", "1"),
        ("-S", "512"),
        ("-a", "16"),
        ("-s", "0"),
        ("-p", "7"),
        ("-b", "3"),
    ]);
    form.set_input_file("data.bin");

    let invocation = build_invocation(&FieldSet::standard(), &form, "demo.exe");

    assert_eq!(
        invocation.argv(),
        [
            "demo.exe", "-b", "3", "-p", "7", "-s", "0", "-a", "16", "-S", "512", "-c", "1",
            "-f", "data.bin",
        ]
    );
}

#[test]
fn empty_input_file_emits_no_file_flag() {
    let mut form = helpers::form_with(&[("-b", "3")]);
    form.set_input_file("   ");

    let invocation = build_invocation(&FieldSet::standard(), &form, "demo.exe");

    assert!(!invocation.args.iter().any(|a| a == "-f"));
}

#[test]
fn unregistered_values_are_ignored() {
    let form = helpers::form_with(&[("-b", "3"), ("-z", "9")]);

    let invocation = build_invocation(&FieldSet::standard(), &form, "demo.exe");

    assert_eq!(invocation.argv(), ["demo.exe", "-b", "3"]);
}

#[test]
fn building_twice_yields_identical_invocations() {
    let mut form = helpers::form_with(&[("-b", "3"), ("-c", "0")]);
    form.set_input_file("data.bin");
    let fields = FieldSet::standard();

    let first = build_invocation(&fields, &form, "demo.exe");
    let second = build_invocation(&fields, &form, "demo.exe");

    assert_eq!(first, second);
}

#[test]
fn empty_form_yields_program_only() {
    let invocation = build_invocation(&FieldSet::standard(), &FormState::new(), "demo.exe");

    assert_eq!(invocation.argv(), ["demo.exe"]);
    assert!(invocation.args.is_empty());
}

#[test]
fn custom_registry_controls_flags_and_order() {
    use nandrun::fields::FieldSpec;

    let fields = FieldSet::new(vec![
        FieldSpec::new("-y", "Y offset", ""),
        FieldSpec::new("-x", "X offset", ""),
    ]);
    let form = helpers::form_with(&[("-x", "1"), ("-y", "2")]);

    let invocation = build_invocation(&fields, &form, "other-tool");

    assert_eq!(invocation.argv(), ["other-tool", "-y", "2", "-x", "1"]);
}

#[test]
fn display_quotes_arguments() {
    let mut form = helpers::form_with(&[("-b", "3")]);
    form.set_input_file("data.bin");

    let invocation = build_invocation(&FieldSet::standard(), &form, "demo.exe");

    assert_eq!(invocation.to_string(), "demo.exe \"-b\" \"3\" \"-f\" \"data.bin\"");
}
