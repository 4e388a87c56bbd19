use std::env;

use tracing::Level;

use crate::error::{ExplorerError, Result};
use crate::site::PublishingCredentials;

const DEFAULT_ROOT: &str = "site/wwwroot";
const DEFAULT_ROOT_LABEL: &str = "Files";
const DEFAULT_DEPTH: usize = 2;

/// Runtime settings for the explorer binary.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub site_name: String,
    pub scm_url: String,
    pub credentials: Option<PublishingCredentials>,
    pub root_path: String,
    pub root_label: String,
    pub max_depth: usize,
    pub log_level: Level,
}

impl ExplorerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let scm_url = lookup("KUDU_SCM_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ExplorerError::Config("missing KUDU_SCM_URL".into()))?
            .trim_end_matches('/')
            .to_string();

        let site_name = match lookup("KUDU_SITE_NAME") {
            Some(name) => name,
            None => site_name_from_url(&scm_url)?,
        };

        let credentials = match (lookup("KUDU_USERNAME"), lookup("KUDU_PASSWORD")) {
            (Some(username), Some(password)) => Some(PublishingCredentials { username, password }),
            (None, None) => None,
            _ => {
                return Err(ExplorerError::Config(
                    "KUDU_USERNAME and KUDU_PASSWORD must be set together".into(),
                ))
            }
        };

        let root_path = lookup("EXPLORER_ROOT").unwrap_or_else(|| DEFAULT_ROOT.into());
        let root_label = lookup("EXPLORER_ROOT_LABEL").unwrap_or_else(|| DEFAULT_ROOT_LABEL.into());

        let max_depth = match lookup("EXPLORER_DEPTH") {
            Some(v) => v
                .parse::<usize>()
                .map_err(|err| ExplorerError::Config(format!("invalid EXPLORER_DEPTH: {err}")))?,
            None => DEFAULT_DEPTH,
        };

        let log_level = match lookup("EXPLORER_LOG") {
            Some(v) => v
                .parse::<Level>()
                .map_err(|err| ExplorerError::Config(format!("invalid EXPLORER_LOG: {err}")))?,
            None => Level::INFO,
        };

        Ok(ExplorerConfig {
            site_name,
            scm_url,
            credentials,
            root_path,
            root_label,
            max_depth,
            log_level,
        })
    }
}

/// `https://mysite.scm.azurewebsites.net` -> `mysite`
fn site_name_from_url(url: &str) -> Result<String> {
    let host = url
        .split("://")
        .nth(1)
        .unwrap_or(url)
        .split(['/', ':'])
        .next()
        .unwrap_or_default();

    host.split('.')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ExplorerError::Config(format!("cannot derive site name from {url}")))
}
