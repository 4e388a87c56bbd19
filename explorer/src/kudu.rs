use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{ExplorerError, Result};

/// Handle onto a site's remote filesystem API.
#[async_trait]
pub trait VfsClient: Send + Sync {
    /// `get item` at `path`: a JSON listing for directories, raw contents for files.
    async fn get_item(&self, path: &str) -> Result<String>;
}

/// Kudu VFS over HTTP.
#[derive(Clone)]
pub struct KuduClient {
    base_url: String,
    http: Client,
}

impl KuduClient {
    /// `base_url` is the SCM endpoint, e.g. `https://mysite.scm.azurewebsites.net`.
    /// Authentication is whatever `http` was built with.
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        KuduClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn item_url(&self, path: &str) -> String {
        format!("{}/api/vfs/{}", self.base_url, encode_vfs_path(path))
    }
}

#[async_trait]
impl VfsClient for KuduClient {
    async fn get_item(&self, path: &str) -> Result<String> {
        let url = self.item_url(path);
        debug!("GET {}", url);

        let res = self.http.get(&url).send().await?;
        if !res.status().is_success() {
            return Err(ExplorerError::Status {
                path: path.to_string(),
                status: res.status().as_u16(),
            });
        }
        Ok(res.text().await?)
    }
}

/// Percent-encode each segment; both `/` and `\` count as separators so
/// Windows-style relative paths address the same item.
fn encode_vfs_path(path: &str) -> String {
    let trailing = path.ends_with(['/', '\\']);
    let mut encoded = path
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .map(|s| urlencoding::encode(s).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    if trailing && !encoded.is_empty() {
        encoded.push('/');
    }
    encoded
}
