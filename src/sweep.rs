use crate::config::Config;
use crate::error::Result;
use crate::types::{GitHubRepo, GitHubUser};
use tracing::{debug, error, info, warn};

/// The platform surface the sweep consumes. `GitHubClient` implements this
/// against the real API; tests drive the sweep with a scripted fake.
pub trait StarPlatform {
    async fn resolve_user(&self, login: &str) -> Result<GitHubUser>;
    /// A user's repositories, most recently created first, at most `limit`.
    async fn recent_repos(&self, login: &str, limit: usize) -> Result<Vec<GitHubRepo>>;
    async fn is_starred(&self, full_name: &str) -> Result<bool>;
    async fn star(&self, full_name: &str) -> Result<()>;
}

/// What happened to a single examined repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarOutcome {
    /// Already starred by the acting account; nothing done.
    AlreadyStarred,
    /// Starred a repository that had zero stars.
    FirstStar,
    /// Starred a repository that already had stars from other accounts.
    BackFilled { previous_stars: u32 },
}

/// Counters accumulated over a full run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub targets_swept: usize,
    pub repos_examined: usize,
    pub stars_given: usize,
    pub first_stars: usize,
    pub repo_failures: usize,
    pub target_failures: usize,
}

/// Decide and act on a single repository: skip if already starred, otherwise
/// star it and classify the event by the pre-action star count.
pub async fn process_repo<P: StarPlatform>(platform: &P, repo: &GitHubRepo) -> Result<StarOutcome> {
    if platform.is_starred(&repo.full_name).await? {
        return Ok(StarOutcome::AlreadyStarred);
    }

    info!("Found unstarred repository: {}", repo.full_name);
    let previous_stars = repo.stargazers_count;

    platform.star(&repo.full_name).await?;
    info!("--> Starred: {}", repo.full_name);

    if previous_stars == 0 {
        Ok(StarOutcome::FirstStar)
    } else {
        Ok(StarOutcome::BackFilled { previous_stars })
    }
}

/// Scan one target: resolve the login, list at most `limit` of their most
/// recently created repositories, and process each in order. A failure on
/// one repository is logged and the scan moves on to the next.
pub async fn sweep_target<P: StarPlatform>(
    platform: &P,
    target: &str,
    limit: usize,
    report: &mut SweepReport,
) -> Result<()> {
    let user = platform.resolve_user(target).await?;
    let repos = platform.recent_repos(&user.login, limit).await?;

    for repo in repos.iter().take(limit) {
        report.repos_examined += 1;

        match process_repo(platform, repo).await {
            Ok(StarOutcome::AlreadyStarred) => {
                debug!("[starred] {} (skipping)", repo.full_name);
            }
            Ok(StarOutcome::FirstStar) => {
                report.stars_given += 1;
                report.first_stars += 1;
                info!("🎉 Congratulations! You are the first star on {}!", repo.full_name);
            }
            Ok(StarOutcome::BackFilled { previous_stars }) => {
                report.stars_given += 1;
                // The post-action count is an estimate, not re-read.
                info!(
                    "Back-filled {}. Previous stars: {}, now possibly: {}",
                    repo.full_name,
                    previous_stars,
                    previous_stars + 1
                );
            }
            Err(e) => {
                report.repo_failures += 1;
                warn!("Failed to act on repository {}: {}", repo.full_name, e);
            }
        }
    }

    Ok(())
}

/// Run the sweep over every configured target. A failure resolving or
/// listing one target never stops the remaining targets.
pub async fn run<P: StarPlatform>(platform: &P, config: &Config) -> SweepReport {
    let mut report = SweepReport::default();

    for target in &config.targets {
        info!("------ Checking target: {} ------", target);

        match sweep_target(platform, target, config.check_limit, &mut report).await {
            Ok(()) => {
                report.targets_swept += 1;
            }
            Err(e) => {
                report.target_failures += 1;
                error!("Failed to check target {}: {}", target, e);
            }
        }
    }

    report
}
