use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI with an isolated HOME so session storage never touches the real one.
pub fn run_cli_with_env(args: &[&str], home: &Path, envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_squeak"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env_remove("SQUEAK_TOKEN");
    cmd.env_remove("SQUEAK_API_BASE");
    cmd.env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with an isolated HOME and expect success.
pub fn run_cli_with_env_success(args: &[&str], home: &Path, envs: &[(&str, &str)]) -> String {
    let output = run_cli_with_env(args, home, envs);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
