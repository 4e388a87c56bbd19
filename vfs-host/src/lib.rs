//! A local stand-in for the Kudu VFS API: serves a directory as `home`.

use axum::{routing::get, Router};
use std::{io, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod listing;

pub use config::{HostConfig, HostCredentials, HostLayout};

pub type SharedState = Arc<HostConfig>;

/// Build the VFS routes over `state`.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/vfs/", get(listing::get_root))
        .route("/api/vfs/*path", get(listing::get_item))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the VFS routes on an already-bound listener until it fails.
pub async fn serve(listener: TcpListener, state: SharedState) -> io::Result<()> {
    axum::serve(listener, router(state).into_make_service()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use std::{fs, path::Path};
    use tower::ServiceExt;

    fn state(root: &Path, credentials: Option<HostCredentials>) -> SharedState {
        Arc::new(HostConfig {
            root: root.to_path_buf(),
            addr: "127.0.0.1:8181".parse().unwrap(),
            layout: HostLayout::Windows,
            public_url: "http://127.0.0.1:8181".into(),
            credentials,
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let res = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn root_and_nested_listing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("LogFiles")).unwrap();
        fs::write(dir.path().join("LogFiles/app.log"), "started").unwrap();

        let (status, body) = get(router(state(dir.path(), None)), "/api/vfs/").await;
        assert_eq!(status, StatusCode::OK);
        let root: Vec<listing::VfsEntry> = serde_json::from_slice(&body).unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root[0].path, "D:\\home\\LogFiles");

        let (status, body) = get(router(state(dir.path(), None)), "/api/vfs/LogFiles/").await;
        assert_eq!(status, StatusCode::OK);
        let nested: Vec<listing::VfsEntry> = serde_json::from_slice(&body).unwrap();
        assert_eq!(nested[0].name, "app.log");
        assert_eq!(nested[0].path, "D:\\home\\LogFiles\\app.log");
    }

    #[tokio::test]
    async fn file_contents_and_missing_items() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hello.txt"), "hello").unwrap();

        let (status, body) = get(router(state(dir.path(), None)), "/api/vfs/hello.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"hello");

        let (status, _) = get(router(state(dir.path(), None)), "/api/vfs/nope.txt").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn parent_traversal_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (status, _) = get(router(state(dir.path(), None)), "/api/vfs/a/../../etc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn credentials_are_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let creds = HostCredentials {
            username: "$site".into(),
            password: "pw".into(),
        };

        let (status, _) = get(router(state(dir.path(), Some(creds.clone()))), "/api/vfs/").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let token = STANDARD.encode("$site:pw");
        let res = router(state(dir.path(), Some(creds)))
            .oneshot(
                Request::get("/api/vfs/")
                    .header(header::AUTHORIZATION, format!("Basic {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
