use std::{fmt, sync::Arc};

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::file::FileNode;
use crate::paths::relative_to_home;
use crate::site::SiteClient;
use crate::tree::{ExplorerNode, IconPath, ParentTreeItem, TreeItem};
use crate::vfs_types::parse_listing;

pub const FOLDER_CONTEXT: &str = "folder";
pub const SUB_FOLDER_CONTEXT: &str = "subFolder";

/// A directory on the remote site, expanded on demand.
#[derive(Clone)]
pub struct FolderNode {
    client: Arc<dyn SiteClient>,
    label: String,
    folder_path: String,
    context_value: String,
}

impl FolderNode {
    /// A non-empty `subcontext_value` overrides the default `"folder"` context; folders
    /// found while expanding another folder use `"subFolder"`.
    pub fn new(
        client: Arc<dyn SiteClient>,
        label: impl Into<String>,
        folder_path: impl Into<String>,
        subcontext_value: Option<String>,
    ) -> Self {
        FolderNode {
            client,
            label: label.into(),
            folder_path: folder_path.into(),
            context_value: subcontext_value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| FOLDER_CONTEXT.to_string()),
        }
    }

    pub fn folder_path(&self) -> &str {
        &self.folder_path
    }

    pub fn client(&self) -> &Arc<dyn SiteClient> {
        &self.client
    }
}

impl fmt::Debug for FolderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FolderNode")
            .field("site", &self.client.site_name())
            .field("label", &self.label)
            .field("folder_path", &self.folder_path)
            .field("context_value", &self.context_value)
            .finish()
    }
}

impl TreeItem for FolderNode {
    fn label(&self) -> &str {
        &self.label
    }

    fn context_value(&self) -> &str {
        &self.context_value
    }

    fn icon_path(&self) -> Option<IconPath> {
        // nested folders are drawn without an icon
        if self.context_value == SUB_FOLDER_CONTEXT {
            None
        } else {
            Some(IconPath::themed("Folder_16x.svg"))
        }
    }
}

#[async_trait]
impl ParentTreeItem for FolderNode {
    fn child_type_label(&self) -> &str {
        "files"
    }

    fn has_more_children(&self) -> bool {
        false
    }

    async fn load_more_children(&self) -> Result<Vec<ExplorerNode>> {
        let vfs = self.client.vfs_client().await?;
        let body = vfs.get_item(&self.folder_path).await?;
        let listing = parse_listing(&body)?;

        let total = listing.len();
        let mut children = Vec::with_capacity(total);
        for entry in listing {
            if entry.is_locked_trace_file() {
                continue;
            }

            let path = relative_to_home(&entry.path)?.to_string();
            let child = if entry.is_directory() {
                ExplorerNode::Folder(FolderNode::new(
                    self.client.clone(),
                    entry.name,
                    path,
                    Some(SUB_FOLDER_CONTEXT.to_string()),
                ))
            } else {
                ExplorerNode::File(FileNode::new(self.client.clone(), entry.name, path))
            };
            children.push(child);
        }

        debug!(
            "{}: listed {} ({} entries, {} kept)",
            self.client.site_name(),
            self.folder_path,
            total,
            children.len()
        );
        Ok(children)
    }
}
