use std::{
    env,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::error::Result;
use crate::file::FileNode;
use crate::folder::FolderNode;

// ---------------------------------------------------------------------------
// Host-facing tree contract
// ---------------------------------------------------------------------------

/// Light/dark theme variants of a node icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPath {
    pub light: PathBuf,
    pub dark: PathBuf,
}

impl IconPath {
    /// Resolve `file_name` under the installed `resources/{light,dark}` dirs.
    pub fn themed(file_name: &str) -> Self {
        IconPath {
            light: resources_root().join("light").join(file_name),
            dark: resources_root().join("dark").join(file_name),
        }
    }
}

/// What every node exposes to the rendering host.
pub trait TreeItem {
    fn label(&self) -> &str;
    fn context_value(&self) -> &str;
    fn icon_path(&self) -> Option<IconPath>;
}

/// A node the host can expand.
#[async_trait]
pub trait ParentTreeItem: TreeItem {
    /// Noun used in host UI text about the children, e.g. "Loading files...".
    fn child_type_label(&self) -> &str;

    fn has_more_children(&self) -> bool;

    async fn load_more_children(&self) -> Result<Vec<ExplorerNode>>;
}

/// A child produced by expanding a folder.
#[derive(Debug, Clone)]
pub enum ExplorerNode {
    Folder(FolderNode),
    File(FileNode),
}

impl ExplorerNode {
    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            ExplorerNode::Folder(f) => Some(f),
            ExplorerNode::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            ExplorerNode::File(f) => Some(f),
            ExplorerNode::Folder(_) => None,
        }
    }

    /// Site-relative path the node was built with.
    pub fn path(&self) -> &str {
        match self {
            ExplorerNode::Folder(f) => f.folder_path(),
            ExplorerNode::File(f) => f.path(),
        }
    }
}

impl TreeItem for ExplorerNode {
    fn label(&self) -> &str {
        match self {
            ExplorerNode::Folder(f) => f.label(),
            ExplorerNode::File(f) => f.label(),
        }
    }

    fn context_value(&self) -> &str {
        match self {
            ExplorerNode::Folder(f) => f.context_value(),
            ExplorerNode::File(f) => f.context_value(),
        }
    }

    fn icon_path(&self) -> Option<IconPath> {
        match self {
            ExplorerNode::Folder(f) => f.icon_path(),
            ExplorerNode::File(f) => f.icon_path(),
        }
    }
}

// ---------------------------------------------------------------------------
// Icon resources
// ---------------------------------------------------------------------------

static RESOURCES_ROOT: Lazy<PathBuf> = Lazy::new(locate_resources);

pub fn resources_root() -> &'static Path {
    RESOURCES_ROOT.as_path()
}

fn locate_resources() -> PathBuf {
    if let Ok(dir) = env::var("KUDU_EXPLORER_RESOURCES") {
        return PathBuf::from(dir);
    }

    let installed = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("resources")));
    if let Some(dir) = installed.filter(|d| d.is_dir()) {
        return dir;
    }

    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources")
}
