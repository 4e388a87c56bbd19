use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    io,
    path::{Path as FsPath, PathBuf},
    time::SystemTime,
};
use tracing::warn;

use crate::config::{HostConfig, HostCredentials};
use crate::SharedState;

pub const DIRECTORY_MIME: &str = "inode/directory";

// -------------------------------------------
// Types
// -------------------------------------------

/// One record of a directory listing, shaped like Kudu's VFS output.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VfsEntry {
    pub name: String,
    pub size: u64,
    pub mtime: String,
    pub crtime: String,
    pub mime: String,
    pub href: String,
    pub path: String,
}

// -------------------------------------------
// Handlers
// -------------------------------------------

/// GET /api/vfs/
pub async fn get_root(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    serve(&state, &headers, "").await
}

/// GET /api/vfs/*path
/// Directory -> JSON listing, file -> raw contents.
pub async fn get_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(path): Path<String>,
) -> Response {
    serve(&state, &headers, &path).await
}

async fn serve(cfg: &HostConfig, headers: &HeaderMap, raw_path: &str) -> Response {
    if let Some(expected) = &cfg.credentials {
        if !authorized(expected, headers) {
            return (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"kudu\"")],
            )
                .into_response();
        }
    }

    let segments = match split_segments(raw_path) {
        Some(s) => s,
        None => return StatusCode::BAD_REQUEST.into_response(),
    };
    let local = local_path(&cfg.root, &segments);

    let meta = match tokio::fs::metadata(&local).await {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            warn!("metadata for {} failed: {}", local.display(), e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if meta.is_dir() {
        match entries_for(cfg, &segments).await {
            Ok(entries) => Json(entries).into_response(),
            Err(e) => {
                warn!("listing {} failed: {}", local.display(), e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    } else {
        match tokio::fs::read(&local).await {
            Ok(bytes) => (
                [(header::CONTENT_TYPE, mime_for(&local))],
                Body::from(bytes),
            )
                .into_response(),
            Err(e) => {
                warn!("reading {} failed: {}", local.display(), e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

// --------------------------------------------
// Listing
// --------------------------------------------

/// Kudu-style entries for the directory at `segments` under the served root,
/// sorted by name.
pub async fn entries_for(cfg: &HostConfig, segments: &[String]) -> io::Result<Vec<VfsEntry>> {
    let dir = local_path(&cfg.root, segments);
    let mut reader = tokio::fs::read_dir(&dir).await?;

    let mut entries = Vec::new();
    while let Some(item) = reader.next_entry().await? {
        let name = item.file_name().to_string_lossy().into_owned();
        let meta = item.metadata().await?;

        let mut child = segments.to_vec();
        child.push(name.clone());

        let mut href = format!("{}/api/vfs/{}", cfg.public_url, child.join("/"));
        let (mime, size) = if meta.is_dir() {
            href.push('/');
            (DIRECTORY_MIME.to_string(), 0)
        } else {
            (mime_for(&item.path()), meta.len())
        };

        let mtime = meta.modified().ok();
        let crtime = meta.created().ok().or(mtime);

        entries.push(VfsEntry {
            name,
            size,
            mtime: timestamp(mtime),
            crtime: timestamp(crtime),
            mime,
            href,
            path: cfg.layout.render_path(&child),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

// --------------------------------------------
// Helpers
// --------------------------------------------

/// Split a request path on `/` and `\`. `None` if it tries to climb out of
/// the served root.
fn split_segments(raw: &str) -> Option<Vec<String>> {
    let mut out = Vec::new();
    for s in raw.split(['/', '\\']) {
        match s {
            "" | "." => continue,
            ".." => return None,
            _ => out.push(s.to_string()),
        }
    }
    Some(out)
}

fn local_path(root: &FsPath, segments: &[String]) -> PathBuf {
    segments.iter().fold(root.to_path_buf(), |p, s| p.join(s))
}

fn mime_for(path: &FsPath) -> String {
    // Kudu reports xml as text/xml
    let is_xml = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("xml"))
        .unwrap_or(false);
    if is_xml {
        return "text/xml".to_string();
    }
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn timestamp(t: Option<SystemTime>) -> String {
    let t = t.unwrap_or(SystemTime::UNIX_EPOCH);
    DateTime::<Utc>::from(t).to_rfc3339()
}

fn authorized(expected: &HostCredentials, headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let Some(token) = value.strip_prefix("Basic ") else {
        return false;
    };
    let Ok(decoded) = STANDARD.decode(token.trim()) else {
        return false;
    };
    decoded == format!("{}:{}", expected.username, expected.password).as_bytes()
}
