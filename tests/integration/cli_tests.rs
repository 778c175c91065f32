//! End-to-end tests for the clubctl binary

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use std::process::{Command, Output};

    fn clubctl(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_clubctl"))
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("CLUBCENTRAL_CONFIG")
            .env_remove("CLUBCENTRAL_LOG_LEVEL")
            .env_remove("CLUBCENTRAL_LOG_FORMAT")
            .env_remove("CLUBCENTRAL_STRICT_PERMISSION_KEYS")
            .output()
            .unwrap()
    }

    #[test]
    fn test_logs_stay_off_stdout() {
        let output = clubctl(&[
            "resolve",
            "--permissions",
            r#"{"legacy_flag":true,"manage_events":true}"#,
        ]);
        assert!(output.status.success());

        let stdout: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(stdout["permissions"]["manage_events"], true);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("legacy_flag"));
    }

    #[test]
    fn test_ignored_key_is_reported_once() {
        let output = clubctl(&[
            "check",
            "--actor",
            r#"{"role":"Member","permissions":{"legacy_flag":true,"manage_events":true}}"#,
            "manage_events",
        ]);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "granted");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(stderr.matches("legacy_flag").count(), 1);
    }

    #[test]
    fn test_exit_status_for_denied_check() {
        let output = clubctl(&["check", "--actor", r#"{"role":"Member"}"#, "manage_events"]);
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "denied");
    }

    #[test]
    fn test_exit_status_for_bad_input() {
        let output = clubctl(&["authorize", "--actor", "{}", "promote_everyone"]);
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_authorize_prints_decision() {
        let output = clubctl(&[
            "authorize",
            "--actor",
            r#"{"role":"Vice-President"}"#,
            "update_club_settings",
        ]);
        assert_eq!(output.status.code(), Some(1));

        let decision: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(decision["action"], "update_club_settings");
        assert_eq!(decision["allowed"], false);
        assert_eq!(decision["reason"], "Only president can update club settings");
    }
}
