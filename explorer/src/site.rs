use std::{fmt, sync::Arc};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::OnceCell;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};

use crate::error::Result;
use crate::kudu::{KuduClient, VfsClient};

/// An authenticated handle onto one hosted site.
///
/// Tree nodes hold it behind an `Arc` and ask it for a fresh VFS handle
/// whenever they need to talk to the remote filesystem.
#[async_trait]
pub trait SiteClient: Send + Sync {
    fn site_name(&self) -> &str;

    async fn vfs_client(&self) -> Result<Arc<dyn VfsClient>>;
}

/// Deployment (publishing) credentials accepted by the SCM site.
#[derive(Clone, PartialEq, Eq)]
pub struct PublishingCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for PublishingCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishingCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl PublishingCredentials {
    fn basic_auth_header(&self) -> Result<HeaderValue> {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        let mut value = HeaderValue::from_str(&format!("Basic {}", token))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// A hosted web app reached through its Kudu SCM endpoint.
///
/// One `reqwest::Client` (and so one connection pool) is shared by every
/// VFS handle the site gives out.
#[derive(Debug, Clone)]
pub struct AppServiceSite {
    name: String,
    scm_url: String,
    credentials: Option<PublishingCredentials>,
    http: OnceCell<Client>,
}

impl AppServiceSite {
    pub fn new(
        name: impl Into<String>,
        scm_url: impl Into<String>,
        credentials: Option<PublishingCredentials>,
    ) -> Self {
        AppServiceSite {
            name: name.into(),
            scm_url: scm_url.into(),
            credentials,
            http: OnceCell::new(),
        }
    }

    pub fn scm_url(&self) -> &str {
        &self.scm_url
    }

    /// Kudu client over the site's shared HTTP client.
    pub fn kudu_client(&self) -> Result<KuduClient> {
        let http = self.http.get_or_try_init(|| self.build_http())?;
        Ok(KuduClient::new(self.scm_url.clone(), http.clone()))
    }

    /// Credentials are baked into the default headers.
    fn build_http(&self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        if let Some(creds) = &self.credentials {
            headers.insert(AUTHORIZATION, creds.basic_auth_header()?);
        }
        Ok(Client::builder().default_headers(headers).build()?)
    }
}

#[async_trait]
impl SiteClient for AppServiceSite {
    fn site_name(&self) -> &str {
        &self.name
    }

    async fn vfs_client(&self) -> Result<Arc<dyn VfsClient>> {
        Ok(Arc::new(self.kudu_client()?))
    }
}
