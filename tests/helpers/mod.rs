use nandrun::form::FormState;

/// Test helper to create a FormState from flag/value pairs.
#[allow(dead_code)]
pub fn form_with(values: &[(&str, &str)]) -> FormState {
    let mut form = FormState::new();
    for (flag, value) in values {
        form.set_value(*flag, *value);
    }
    form
}

/// Test helper to write an executable shell script that exits with `code`.
#[allow(dead_code)]
#[cfg(unix)]
pub fn write_exit_script(dir: &std::path::Path, name: &str, code: i32) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\nexit {}\n", code)).expect("failed to write script");
    let mut perms = std::fs::metadata(&path)
        .expect("failed to read script metadata")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("failed to set script permissions");
    path
}
