use serde::{Deserialize, Serialize};

use crate::error::Result;

/// MIME designation Kudu uses for directories.
pub const DIRECTORY_MIME: &str = "inode/directory";

pub const XML_MIME: &str = "text/xml";

/// Trace file Kudu keeps open while logging; it can't be read through the VFS.
pub const TRACE_PENDING_FILE: &str = "LogFiles-kudu-trace_pending.xml";

/// Segment every VFS path is anchored under, whatever the host OS.
pub const ROOT_MARKER: &str = "home";

/// One record of a VFS directory listing. Other fields Kudu sends are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VfsEntry {
    pub mime: String,
    pub name: String,
    pub path: String,
}

impl VfsEntry {
    pub fn is_directory(&self) -> bool {
        self.mime == DIRECTORY_MIME
    }

    /// True for the trace log Kudu holds locked while it is being written.
    pub fn is_locked_trace_file(&self) -> bool {
        self.mime == XML_MIME && self.name.contains(TRACE_PENDING_FILE)
    }
}

/// Parse a raw `get item` response body as a directory listing.
pub fn parse_listing(body: &str) -> Result<Vec<VfsEntry>> {
    Ok(serde_json::from_str(body)?)
}
