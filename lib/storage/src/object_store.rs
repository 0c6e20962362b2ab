//! Object-store transfer for request inputs and outputs
//!
//! The matching core never touches the network; the dispatcher stages every
//! remote object into a per-request temp directory through this trait.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Connection settings for the remote store, as carried by the request envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    pub endpoint_url: Option<String>,
    pub id: Option<String>,
    pub key: Option<String>,
    #[serde(rename = "skey")]
    pub session_token: Option<String>,
}

/// Fetches inputs from and stores outputs to an object store
pub trait ObjectStore {
    fn fetch(&self, remote_path: &str, local_path: &Path) -> Result<()>;
    fn store(&self, remote_path: &str, local_path: &Path) -> Result<()>;
}

/// Transfers objects over authenticated HTTP GET/PUT
///
/// Credentials go out as basic auth and the session token, when present,
/// as a bearer header. Request signing stays with the deployment (fronting
/// proxy or presigned paths).
pub struct HttpObjectStore {
    client: reqwest::blocking::Client,
    endpoint: String,
    id: Option<String>,
    key: Option<String>,
    session_token: Option<String>,
}

impl HttpObjectStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let endpoint = config
            .endpoint_url
            .as_deref()
            .ok_or_else(|| anyhow!("object store endpoint_url is required"))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            id: config.id.clone(),
            key: config.key.clone(),
            session_token: config.session_token.clone(),
        })
    }

    fn object_url(&self, remote_path: &str) -> String {
        format!("{}/{}", self.endpoint, remote_path.trim_start_matches('/'))
    }

    fn authorize(
        &self,
        mut request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        if let Some(id) = &self.id {
            request = request.basic_auth(id, self.key.as_deref());
        }
        if let Some(token) = &self.session_token {
            request = request.bearer_auth(token);
        }
        request
    }
}

impl ObjectStore for HttpObjectStore {
    fn fetch(&self, remote_path: &str, local_path: &Path) -> Result<()> {
        let url = self.object_url(remote_path);
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .with_context(|| format!("failed to download {url}"))?;
        if !response.status().is_success() {
            return Err(anyhow!("failed to download {url}: HTTP {}", response.status()));
        }
        let bytes = response.bytes().context("failed to read object body")?;
        fs::write(local_path, &bytes)
            .with_context(|| format!("failed to write {}", local_path.display()))?;
        info!(remote = remote_path, bytes = bytes.len(), "object fetched");
        Ok(())
    }

    fn store(&self, remote_path: &str, local_path: &Path) -> Result<()> {
        let url = self.object_url(remote_path);
        let body = fs::read(local_path)
            .with_context(|| format!("failed to read {}", local_path.display()))?;
        let size = body.len();
        let response = self
            .authorize(self.client.put(&url))
            .body(body)
            .send()
            .with_context(|| format!("failed to upload {url}"))?;
        if !response.status().is_success() {
            return Err(anyhow!("failed to upload {url}: HTTP {}", response.status()));
        }
        info!(remote = remote_path, bytes = size, "object stored");
        Ok(())
    }
}

/// Resolves object paths against a local directory
///
/// Used by tests and file-based runs, where "remote" paths are just
/// relative paths under the root.
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, remote_path: &str) -> PathBuf {
        self.root.join(remote_path.trim_start_matches('/'))
    }
}

impl ObjectStore for LocalObjectStore {
    fn fetch(&self, remote_path: &str, local_path: &Path) -> Result<()> {
        let source = self.resolve(remote_path);
        fs::copy(&source, local_path)
            .with_context(|| format!("failed to fetch {}", source.display()))?;
        Ok(())
    }

    fn store(&self, remote_path: &str, local_path: &Path) -> Result<()> {
        let target = self.resolve(remote_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(local_path, &target)
            .with_context(|| format!("failed to store {}", target.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_store_round_trip() {
        let root = tempfile::tempdir().unwrap();
        let staging = tempfile::tempdir().unwrap();

        let outgoing = staging.path().join("out.csv");
        fs::write(&outgoing, "N,P,K\n1,2,3\n").unwrap();

        let store = LocalObjectStore::new(root.path());
        store.store("results/matched.csv", &outgoing).unwrap();

        let incoming = staging.path().join("back.csv");
        store.fetch("results/matched.csv", &incoming).unwrap();
        assert_eq!(fs::read_to_string(&incoming).unwrap(), "N,P,K\n1,2,3\n");
    }

    #[test]
    fn test_local_fetch_missing_object_fails() {
        let root = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(root.path());
        let target = root.path().join("never.csv");
        assert!(store.fetch("absent.csv", &target).is_err());
    }

    #[test]
    fn test_http_store_url_building() {
        let config = StoreConfig {
            endpoint_url: Some("https://store.example.com/".into()),
            ..StoreConfig::default()
        };
        let store = HttpObjectStore::new(&config).unwrap();
        assert_eq!(
            store.object_url("/bucket/in/npk.csv"),
            "https://store.example.com/bucket/in/npk.csv"
        );
    }

    #[test]
    fn test_http_store_requires_endpoint() {
        assert!(HttpObjectStore::new(&StoreConfig::default()).is_err());
    }
}
