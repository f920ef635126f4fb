use clap::Parser;

#[derive(Parser)]
#[command(name = "star-sweep")]
#[command(about = "Star Sweep - Stars the most recently created repositories of target GitHub users")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub personal access token
    #[arg(long, env = "USER_TOKEN")]
    pub token: Option<String>,

    /// Comma-separated list of target user logins
    #[arg(long, env = "TARGET_USERS")]
    pub targets: Option<String>,

    /// File with one target login per line, used when --targets is absent
    #[arg(long, default_value = "targets.txt")]
    pub targets_file: String,

    /// Number of most recently created repositories to check per target
    #[arg(long, env = "CHECK_LIMIT", default_value_t = 10)]
    pub check_limit: usize,
}
