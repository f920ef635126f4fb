use chrono::DateTime;
use clap::Parser;
use colored::*;
use star_sweep::cli::Cli;
use star_sweep::config::Config;
use star_sweep::error::{Result, StarSweepError};
use star_sweep::github::GitHubClient;
use star_sweep::sweep;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "Star Sweep".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let config = Config::from_cli(cli)?;

    let client = GitHubClient::new(config.token.clone())?;

    let me = client
        .authenticated_user()
        .await
        .map_err(|e| StarSweepError::AuthError(format!("Failed to log in to GitHub: {}", e)))?;
    info!("Logged in as: {}", me.login);

    let report = sweep::run(&client, &config).await;

    info!(
        "Sweep finished: {} targets swept, {} repositories examined, {} stars given ({} first stars), {} repository failures, {} target failures",
        report.targets_swept,
        report.repos_examined,
        report.stars_given,
        report.first_stars,
        report.repo_failures,
        report.target_failures
    );

    // Best-effort quota summary; failure here is not worth reporting.
    if let Ok(rate) = client.rate_limit().await {
        let reset = DateTime::from_timestamp(rate.reset, 0)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| rate.reset.to_string());
        info!(
            "API rate quota: {} / {} remaining, resets at {}",
            rate.remaining, rate.limit, reset
        );
    }

    Ok(())
}
