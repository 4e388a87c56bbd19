use anyhow::{anyhow, Context, Result};
use std::{env, net::SocketAddr, path::PathBuf};

/// How entry paths are rendered, mimicking the host OS Kudu runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostLayout {
    /// `D:\home\site\wwwroot`
    Windows,
    /// `/home/site/wwwroot`
    Linux,
}

impl HostLayout {
    /// Absolute host path for a location relative to `home`.
    pub fn render_path(&self, segments: &[String]) -> String {
        let (mut out, sep) = match self {
            HostLayout::Windows => (String::from("D:\\home"), '\\'),
            HostLayout::Linux => (String::from("/home"), '/'),
        };
        for s in segments {
            out.push(sep);
            out.push_str(s);
        }
        out
    }
}

/// Basic-auth pair the host expects, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Local directory served as `home`.
    pub root: PathBuf,
    pub addr: SocketAddr,
    pub layout: HostLayout,
    /// Base used when building `href` fields.
    pub public_url: String,
    pub credentials: Option<HostCredentials>,
}

impl HostConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = PathBuf::from(lookup("VFS_HOST_ROOT").unwrap_or_else(|| ".".into()));

        let addr: SocketAddr = lookup("VFS_HOST_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8181".into())
            .parse()
            .context("invalid VFS_HOST_ADDR")?;

        let layout = match lookup("VFS_HOST_LAYOUT")
            .unwrap_or_else(|| "windows".into())
            .to_lowercase()
            .as_str()
        {
            "windows" => HostLayout::Windows,
            "linux" => HostLayout::Linux,
            other => return Err(anyhow!("invalid VFS_HOST_LAYOUT: {}", other)),
        };

        let public_url = lookup("VFS_HOST_PUBLIC_URL")
            .unwrap_or_else(|| format!("http://{}", addr))
            .trim_end_matches('/')
            .to_string();

        let credentials = match (lookup("VFS_HOST_USERNAME"), lookup("VFS_HOST_PASSWORD")) {
            (Some(username), Some(password)) => Some(HostCredentials { username, password }),
            (None, None) => None,
            _ => return Err(anyhow!("VFS_HOST_USERNAME and VFS_HOST_PASSWORD must be set together")),
        };

        Ok(HostConfig {
            root,
            addr,
            layout,
            public_url,
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<HostConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.root, PathBuf::from("."));
        assert_eq!(cfg.addr.to_string(), "127.0.0.1:8181");
        assert_eq!(cfg.layout, HostLayout::Windows);
        assert_eq!(cfg.public_url, "http://127.0.0.1:8181");
        assert!(cfg.credentials.is_none());
    }

    #[test]
    fn layout_and_credentials() {
        let cfg = config(&[
            ("VFS_HOST_LAYOUT", "Linux"),
            ("VFS_HOST_USERNAME", "$site"),
            ("VFS_HOST_PASSWORD", "pw"),
            ("VFS_HOST_PUBLIC_URL", "https://site.scm.example.net/"),
        ])
        .unwrap();
        assert_eq!(cfg.layout, HostLayout::Linux);
        assert_eq!(cfg.public_url, "https://site.scm.example.net");
        assert_eq!(cfg.credentials.unwrap().username, "$site");
    }

    #[test]
    fn rejects_unknown_layout() {
        assert!(config(&[("VFS_HOST_LAYOUT", "plan9")]).is_err());
    }

    #[test]
    fn renders_paths_per_layout() {
        let segs = vec!["site".to_string(), "wwwroot".to_string()];
        assert_eq!(HostLayout::Windows.render_path(&segs), "D:\\home\\site\\wwwroot");
        assert_eq!(HostLayout::Linux.render_path(&segs), "/home/site/wwwroot");
        assert_eq!(HostLayout::Linux.render_path(&[]), "/home");
    }
}
