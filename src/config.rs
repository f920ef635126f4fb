use crate::cli::Cli;
use crate::error::{Result, StarSweepError};
use std::fs;
use std::path::Path;

/// Process-scope configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub targets: Vec<String>,
    pub check_limit: usize,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let token = match cli.token {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                return Err(StarSweepError::MissingToken);
            }
        };

        let targets = match cli.targets.as_deref().map(str::trim) {
            Some(inline) if !inline.is_empty() => parse_inline_targets(inline),
            _ => load_targets_file(&cli.targets_file)?,
        };

        if targets.is_empty() {
            return Err(StarSweepError::NoTargets);
        }

        Ok(Config {
            token,
            targets,
            check_limit: cli.check_limit.max(1),
        })
    }
}

/// Parse a comma-separated target list, dropping empty entries.
pub fn parse_inline_targets(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Read targets from a line-oriented file. Everything after a `#` is a
/// comment; blank lines are skipped.
pub fn load_targets_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StarSweepError::NoTargets);
        }
        Err(e) => {
            return Err(e.into());
        }
    };

    let targets = contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    Ok(targets)
}
