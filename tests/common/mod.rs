//! Common test utilities

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command for the langkit binary running inside `dir`
pub fn langkit_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("langkit").unwrap();
    cmd.current_dir(dir);
    cmd
}

/// Create a temporary project directory that has been through `init`
#[allow(dead_code)]
pub fn init_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    langkit_cmd(temp_dir.path()).arg("init").assert().success();
    temp_dir
}

/// Create a temporary project with the given template descriptor
#[allow(dead_code)]
pub fn project_with_template(template: &str) -> TempDir {
    let temp_dir = init_project();
    fs::write(temp_dir.path().join(".template.json"), template).unwrap();
    temp_dir
}
