//! Shared test utilities for mlp-conf integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write fixture configuration files into a temporary directory.
//!
//! Invariants / Assumptions:
//! - Commands run inside the fixture directory so the default file names resolve there.
//! - Host variables that would change resolution are cleared.

use std::fs;
use std::path::Path;

use assert_cmd::Command;

/// Returns a hermetic `mlp-conf` command running in `dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `MLPCONF_CONFIG` / `MLPCONF_OVERRIDE` are cleared so the defaults apply.
/// - `USER` is fixed so `{{USER}}` output is predictable.
pub fn mlp_conf_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mlp-conf");

    cmd.current_dir(dir);
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("USER", "jerry");
    cmd.env_remove("MLPCONF_CONFIG")
        .env_remove("MLPCONF_OVERRIDE")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` to `name` inside `dir`.
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Base file shared by most tests.
#[allow(dead_code)]
pub const BASE_CONFIG: &str = "\
[DEFAULT]
seed = 7

[section]
key = value
intkey = 42
floatkey = 3.5
boolkey = yes
key.1 = dotted
";
