//! In-memory site used by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ExplorerError, Result};
use crate::kudu::VfsClient;
use crate::site::SiteClient;

/// Answers every `get item` with the same body and records requested paths.
pub struct CannedSite {
    body: Option<String>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedSite {
    pub fn with_body(body: Value) -> Arc<Self> {
        Self::with_raw(&body.to_string())
    }

    pub fn with_raw(body: &str) -> Arc<Self> {
        Arc::new(CannedSite {
            body: Some(body.to_string()),
            requests: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// A site whose VFS handle can't be acquired.
    pub fn unavailable() -> Arc<Self> {
        Arc::new(CannedSite {
            body: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

struct CannedVfs {
    body: String,
    requests: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl VfsClient for CannedVfs {
    async fn get_item(&self, path: &str) -> Result<String> {
        self.requests.lock().unwrap().push(path.to_string());
        Ok(self.body.clone())
    }
}

#[async_trait]
impl SiteClient for CannedSite {
    fn site_name(&self) -> &str {
        "canned"
    }

    async fn vfs_client(&self) -> Result<Arc<dyn VfsClient>> {
        let body = self.body.clone().ok_or_else(|| ExplorerError::Status {
            path: String::new(),
            status: 401,
        })?;
        Ok(Arc::new(CannedVfs {
            body,
            requests: self.requests.clone(),
        }))
    }
}
