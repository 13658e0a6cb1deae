use super::Github;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PagesSource {
    pub branch: String,
    pub path: String,
}

/// Body of the "create a Pages site" request.
/// Serializes as `{"source":{"branch":...,"path":...}}`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PagesConfig {
    pub source: PagesSource,
}

pub async fn enable_pages(github: &Github, repo: &str, config: &PagesConfig) -> Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{}/repos/{}/pages", github.host, repo);

    let req = client
        .request(reqwest::Method::POST, &url)
        .header(
            reqwest::header::AUTHORIZATION,
            format!("token {}", github.token),
        )
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json")
        .header(reqwest::header::USER_AGENT, env!("CARGO_PKG_NAME"))
        .json(config)
        .build()?;
    tracing::debug!("sending request: {req:?}");

    let resp = client.execute(req).await?;
    tracing::trace!("got response: {resp:?}");

    resp.error_for_status()
        .with_context(|| format!("enabling pages for {repo}"))?;
    Ok(())
}
