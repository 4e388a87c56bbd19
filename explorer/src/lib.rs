//! Browse the deployed file tree of a hosted web app through its Kudu VFS.
//!
//! [`FolderNode`] lists one remote directory and turns the entries into
//! child [`ExplorerNode`]s; [`render_tree`] walks those nodes the way a tree
//! view would.

pub mod config;
pub mod error;
pub mod file;
pub mod folder;
pub mod kudu;
pub mod paths;
pub mod render;
pub mod site;
pub mod tree;
pub mod vfs_types;

#[cfg(test)]
mod testing;

pub use error::{ExplorerError, Result};
pub use file::FileNode;
pub use folder::FolderNode;
pub use kudu::{KuduClient, VfsClient};
pub use render::render_tree;
pub use site::{AppServiceSite, PublishingCredentials, SiteClient};
pub use tree::{ExplorerNode, IconPath, ParentTreeItem, TreeItem};
pub use vfs_types::VfsEntry;
