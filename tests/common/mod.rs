use assert_cmd::Command;
use std::path::Path;

pub fn abook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("abook").unwrap();
    cmd.env_remove("ABOOK_CONFIG");
    cmd.env_remove("ABOOK_FILE");
    cmd.env_remove("ABOOK_INTERFACE");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running in `dir` with the terminal interface preselected
#[allow(dead_code)]
pub fn abook_in(dir: &Path) -> Command {
    let mut cmd = abook_cmd();
    cmd.current_dir(dir).arg("--interface").arg("terminal");
    cmd
}
