use std::{fmt, sync::Arc};

use crate::error::Result;
use crate::site::SiteClient;
use crate::tree::{IconPath, TreeItem};

pub const FILE_CONTEXT: &str = "file";

/// A single file on the remote site. Leaf node.
#[derive(Clone)]
pub struct FileNode {
    client: Arc<dyn SiteClient>,
    label: String,
    path: String,
}

impl FileNode {
    pub fn new(client: Arc<dyn SiteClient>, label: impl Into<String>, path: impl Into<String>) -> Self {
        FileNode {
            client,
            label: label.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Download the file body as text.
    pub async fn read_contents(&self) -> Result<String> {
        let vfs = self.client.vfs_client().await?;
        vfs.get_item(&self.path).await
    }
}

impl fmt::Debug for FileNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileNode")
            .field("site", &self.client.site_name())
            .field("label", &self.label)
            .field("path", &self.path)
            .finish()
    }
}

impl TreeItem for FileNode {
    fn label(&self) -> &str {
        &self.label
    }

    fn context_value(&self) -> &str {
        FILE_CONTEXT
    }

    fn icon_path(&self) -> Option<IconPath> {
        Some(IconPath::themed("File_16x.svg"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CannedSite;

    #[tokio::test]
    async fn reads_contents_through_vfs() {
        let site = CannedSite::with_raw("hello from the site");
        let node = FileNode::new(site.clone(), "hello.txt", "site\\wwwroot\\hello.txt");

        assert_eq!(node.read_contents().await.unwrap(), "hello from the site");
        assert_eq!(
            site.requested_paths(),
            vec!["site\\wwwroot\\hello.txt".to_string()]
        );
    }

    #[test]
    fn file_context_and_icon() {
        let node = FileNode::new(CannedSite::with_raw(""), "a.txt", "a.txt");
        assert_eq!(node.context_value(), FILE_CONTEXT);
        assert!(node.icon_path().unwrap().dark.ends_with("dark/File_16x.svg"));
    }
}
