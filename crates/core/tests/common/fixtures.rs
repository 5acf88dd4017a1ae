//! Script fixtures for tests that spawn real processes.

use std::path::Path;

/// Write an executable `./<stage>.sh` that appends its stage name to
/// `calls.log` and then exits with `exit_code`.
#[allow(dead_code)]
#[cfg(unix)]
pub fn write_stage_script(dir: &Path, stage: &str, exit_code: i32) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(format!("{stage}.sh"));
    std::fs::write(
        &path,
        format!("#!/bin/sh\necho {stage} >> calls.log\nexit {exit_code}\n"),
    )
    .unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Stage names recorded in `calls.log`, in invocation order.
#[allow(dead_code)]
pub fn read_calls(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
