// article-generation-service/src/context.rs

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::models::CompanyContext;

/// Loads the optional business profile associated with a site.
///
/// Absence is a valid state: implementations never surface lookup
/// failures into the pipeline, they yield `None` and the composers fall
/// back to generic phrasing.
#[async_trait]
pub trait ContextLoader: Send + Sync {
    async fn load(&self, site_id: &str) -> Option<CompanyContext>;
}

/// Directory of per-site profile files: `{path}/{site_id}.json`.
pub struct SiteDirectory {
    path: PathBuf,
}

impl SiteDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContextLoader for SiteDirectory {
    async fn load(&self, site_id: &str) -> Option<CompanyContext> {
        // Site ids come from request bodies; restrict them to a safe
        // character set before touching the filesystem.
        if site_id.is_empty()
            || !site_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            warn!(site_id = %site_id, "Rejecting unsafe site id for profile lookup");
            return None;
        }

        let file = self.path.join(format!("{site_id}.json"));
        let bytes = match tokio::fs::read(&file).await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(site_id = %site_id, error = %e, "No company profile found");
                return None;
            }
        };

        match serde_json::from_slice::<CompanyContext>(&bytes) {
            Ok(context) => Some(context),
            Err(e) => {
                warn!(site_id = %site_id, error = %e, "Malformed company profile, ignoring");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_profile_yields_none() {
        let loader = SiteDirectory::new("/nonexistent-sites-dir");
        assert!(loader.load("site1").await.is_none());
    }

    #[tokio::test]
    async fn unsafe_site_ids_are_rejected() {
        let loader = SiteDirectory::new("/tmp");
        assert!(loader.load("../etc/passwd").await.is_none());
        assert!(loader.load("").await.is_none());
    }

    #[tokio::test]
    async fn valid_profile_is_loaded() {
        let dir = std::env::temp_dir().join("article-gen-sites-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(
            dir.join("site1.json"),
            r#"{"name":"Cabinet Durand","city":"Lyon"}"#,
        )
        .await
        .unwrap();

        let loader = SiteDirectory::new(&dir);
        let context = loader.load("site1").await.expect("profile should load");
        assert_eq!(context.name.as_deref(), Some("Cabinet Durand"));
        assert_eq!(context.city.as_deref(), Some("Lyon"));
        assert!(context.phone.is_none());
    }

    #[tokio::test]
    async fn malformed_profile_yields_none() {
        let dir = std::env::temp_dir().join("article-gen-sites-bad");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("bad.json"), "not json").await.unwrap();

        let loader = SiteDirectory::new(&dir);
        assert!(loader.load("bad").await.is_none());
    }
}
