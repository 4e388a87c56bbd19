use futures_util::future::{try_join_all, BoxFuture, FutureExt};

use crate::error::Result;
use crate::folder::FolderNode;
use crate::tree::{ParentTreeItem, TreeItem};

/// Walk the tree under `root` and return an indented outline.
///
/// Folders are listed down to `max_depth` levels below the root; sibling
/// folders at the same level are expanded concurrently. Folder labels carry a
/// trailing `/`.
pub async fn render_tree(root: &FolderNode, max_depth: usize) -> Result<String> {
    let mut out = format!("{}/\n", root.label());
    for line in render_children(root.clone(), 1, max_depth).await? {
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

fn render_children(
    folder: FolderNode,
    depth: usize,
    max_depth: usize,
) -> BoxFuture<'static, Result<Vec<String>>> {
    async move {
        if depth > max_depth {
            return Ok(Vec::new());
        }

        let children = folder.load_more_children().await?;
        let nested = try_join_all(children.iter().map(|child| match child.as_folder() {
            Some(sub) => render_children(sub.clone(), depth + 1, max_depth),
            None => async { Ok(Vec::new()) }.boxed(),
        }))
        .await?;

        let indent = "  ".repeat(depth);
        let mut lines = Vec::new();
        for (child, sub_lines) in children.iter().zip(nested) {
            let suffix = if child.as_folder().is_some() { "/" } else { "" };
            lines.push(format!("{}{}{}", indent, child.label(), suffix));
            lines.extend(sub_lines);
        }
        Ok(lines)
    }
    .boxed()
}
