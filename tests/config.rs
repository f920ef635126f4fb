use star_sweep::cli::Cli;
use star_sweep::config::{self, Config};
use star_sweep::error::StarSweepError;
use std::io::Write;

fn cli(token: Option<&str>, targets: Option<&str>, targets_file: &str) -> Cli {
    Cli {
        token: token.map(String::from),
        targets: targets.map(String::from),
        targets_file: targets_file.to_string(),
        check_limit: 10,
    }
}

#[test]
fn test_parse_inline_targets() {
    let targets = config::parse_inline_targets("alice, bob ,,carol");
    assert_eq!(targets, vec!["alice", "bob", "carol"]);
}

#[test]
fn test_parse_inline_targets_all_empty() {
    assert!(config::parse_inline_targets(" , ,").is_empty());
}

#[test]
fn test_load_targets_file_skips_comments_and_blanks() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "alice").unwrap();
    writeln!(file, "# a full-line comment").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "bob  # trailing comment").unwrap();
    writeln!(file, "  carol  ").unwrap();

    let targets = config::load_targets_file(file.path()).expect("Failed to load targets");
    assert_eq!(targets, vec!["alice", "bob", "carol"]);
}

#[test]
fn test_missing_targets_file_is_no_targets() {
    let result = config::load_targets_file("/nonexistent/targets.txt");
    assert!(matches!(result.unwrap_err(), StarSweepError::NoTargets));
}

#[test]
fn test_missing_token_is_fatal() {
    let result = Config::from_cli(cli(None, Some("alice"), "targets.txt"));
    assert!(matches!(result.unwrap_err(), StarSweepError::MissingToken));
}

#[test]
fn test_blank_token_is_fatal() {
    let result = Config::from_cli(cli(Some("   "), Some("alice"), "targets.txt"));
    assert!(matches!(result.unwrap_err(), StarSweepError::MissingToken));
}

#[test]
fn test_inline_targets_take_precedence() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "from-file").unwrap();

    let config = Config::from_cli(cli(
        Some("token123"),
        Some("alice,bob"),
        file.path().to_str().unwrap(),
    ))
    .expect("Failed to build config");

    assert_eq!(config.targets, vec!["alice", "bob"]);
}

#[test]
fn test_targets_file_fallback() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "alice").unwrap();
    writeln!(file, "bob").unwrap();

    let config = Config::from_cli(cli(Some("token123"), None, file.path().to_str().unwrap()))
        .expect("Failed to build config");

    assert_eq!(config.targets, vec!["alice", "bob"]);
    assert_eq!(config.token, "token123");
    assert_eq!(config.check_limit, 10);
}

#[test]
fn test_empty_target_list_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "# nothing but comments").unwrap();

    let result = Config::from_cli(cli(Some("token123"), None, file.path().to_str().unwrap()));
    assert!(matches!(result.unwrap_err(), StarSweepError::NoTargets));
}

#[test]
fn test_check_limit_floor_is_one() {
    let mut args = cli(Some("token123"), Some("alice"), "targets.txt");
    args.check_limit = 0;

    let config = Config::from_cli(args).expect("Failed to build config");
    assert_eq!(config.check_limit, 1);
}
