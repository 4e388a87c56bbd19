use crate::error::{ExplorerError, Result};
use crate::vfs_types::ROOT_MARKER;

/// Strip the host-specific prefix of a VFS path.
///
/// Kudu reports paths like `D:\home\site\wwwroot` or `/home/site/wwwroot`.
/// Everything up to and including the first `home` plus the single separator
/// that follows it is dropped; the remainder is returned untouched.
pub fn relative_to_home(path: &str) -> Result<&str> {
    let idx = path
        .find(ROOT_MARKER)
        .ok_or_else(|| ExplorerError::MissingRootMarker(path.to_string()))?;

    let rest = &path[idx + ROOT_MARKER.len()..];
    let mut chars = rest.chars();
    chars.next();
    Ok(chars.as_str())
}
