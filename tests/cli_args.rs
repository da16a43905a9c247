//! Tests for the `walletview` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(state: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("state.json"), state).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Run with a config path that does not exist, so defaults apply.
    fn run(&self, args: &[&str]) -> Output {
        walletview_cmd(&self.path("missing-config.toml"))
            .args(args)
            .output()
            .expect("Failed to execute command")
    }
}

fn walletview_cmd(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_walletview"));
    cmd.env_remove("WALLETVIEW_LOG").arg("--config").arg(config);
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

const STATE: &str = r#"{
    "interest": {
        "withdrawal_minimums": {"status": "success", "data": [{"symbol": "BTC", "value": "0.01"}]},
        "available_to_withdraw": {"status": "success", "data": {"BTC": "100000000"}}
    },
    "coins": {"rates": {"status": "success", "data": {}}},
    "simple_buy": {"card": {"status": "failure", "data": "card service unavailable"}},
    "info": {"bitcoin": {"final_balance": 5, "n_tx": 1}}
}"#;

#[test]
fn test_help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_walletview"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let out = stdout(&output);
    assert!(output.status.success());
    assert!(out.contains("view"));
    assert!(out.contains("analytics"));
}

#[test]
fn test_coin_view_prints_formatted_amount() {
    let fixture = Fixture::new(STATE);
    let state = fixture.path("state.json");
    let output = fixture.run(&[
        "view",
        "--state",
        state.to_str().unwrap(),
        "coin",
        "--coin",
        "btc",
        "--amount",
        "150000000",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "\"1.5 BTC\"");
}

#[test]
fn test_unknown_coin_is_rejected() {
    let fixture = Fixture::new(STATE);
    let state = fixture.path("state.json");
    let output = fixture.run(&[
        "view",
        "--state",
        state.to_str().unwrap(),
        "coin",
        "--coin",
        "doge",
        "--amount",
        "1",
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown coin 'doge'"));
}

#[test]
fn test_failed_slice_renders_error_line() {
    let fixture = Fixture::new(STATE);
    let state = fixture.path("state.json");
    let output = fixture.run(&["view", "--state", state.to_str().unwrap(), "three-ds"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "error: card service unavailable");
}

#[test]
fn test_incomplete_info_renders_not_asked() {
    let fixture = Fixture::new(STATE);
    let state = fixture.path("state.json");
    let output = fixture.run(&["view", "--state", state.to_str().unwrap(), "info"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "not asked");
}

#[test]
fn test_withdrawal_view_reports_validation_messages() {
    let fixture = Fixture::new(STATE);
    let state = fixture.path("state.json");
    let output = fixture.run(&[
        "view",
        "--state",
        state.to_str().unwrap(),
        "withdrawal",
        "--coin",
        "BTC",
        "--amount",
        "0.001",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let form: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(form["available_standard"], "1");
    assert_eq!(form["minimum"], "0.01");
    assert!(stderr(&output).contains(
        "interest.withdrawal.validation.belowminamount: \
         Amount is below the minimum withdrawal amount of 0.01 BTC."
    ));
}

#[test]
fn test_missing_state_file_exits_with_error() {
    let fixture = Fixture::new(STATE);
    let output = fixture.run(&["view", "--state", "/nonexistent/state.json", "info"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to read state file"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let fixture = Fixture::new(STATE);
    let config = fixture.write("config.toml", "[defaults]\ncurrency = \"dollars\"\n");
    let state = fixture.path("state.json");
    let output = walletview_cmd(&config)
        .args(["view", "--state", state.to_str().unwrap(), "lockbox"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Config validation failed"));
}

#[test]
fn test_analytics_replay_prints_bridge_messages() {
    let fixture = Fixture::new(r#"{"auth": {"is_authenticated": true}}"#);
    let state = fixture.path("state.json");
    let commands = fixture.write(
        "commands.json",
        r#"[
            {"type": "log_page_view", "route": "/settings"},
            {"type": "log_goal", "goal_id": 3},
            {"type": "stop_session"}
        ]"#,
    );
    let output = fixture.run(&[
        "analytics",
        "--state",
        state.to_str().unwrap(),
        "--commands",
        commands.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec![
            r#"{"method":"logPageView","messageData":{"route":"/settings"}}"#,
            r#"{"method":"trackGoal","messageData":[3]}"#,
            r#"{"method":"resetUserId","messageData":[]}"#,
        ]
    );
}

#[test]
fn test_analytics_failure_sets_exit_code() {
    let fixture = Fixture::new("{}");
    let state = fixture.path("state.json");
    let commands = fixture.write(
        "commands.json",
        r#"[{"type": "init_user_session"}]"#,
    );
    let config = fixture.write(
        "config.toml",
        "[analytics]\nuser_data_timeout_ms = 50\nuser_data_poll_ms = 10\n",
    );
    let output = walletview_cmd(&config)
        .args([
            "analytics",
            "--state",
            state.to_str().unwrap(),
            "--commands",
            commands.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("initUserSession"));
}

#[test]
fn test_stderr_logging_keeps_stdout_clean() {
    let fixture = Fixture::new(STATE);
    let state = fixture.path("state.json");
    let output = walletview_cmd(&fixture.path("missing-config.toml"))
        .env("WALLETVIEW_LOG", "stderr")
        .env("RUST_LOG", "debug")
        .args(["view", "--state", state.to_str().unwrap(), "info"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "not asked");
    assert!(stderr(&output).contains("No config file, using defaults"));
}
