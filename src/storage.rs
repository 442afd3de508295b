use anyhow::{Context, Result};
use google_cloud_storage::client::{Client as GcsClient, ClientConfig};
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use sha2::{Digest, Sha256};
use tracing::{info, instrument, warn};

use crate::config::StorageConfig;

/// Substituted whenever image publishing cannot complete. Image problems
/// never fail the request.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/800x400?text=Article";

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Config-gated object-storage publisher for article images.
///
/// Disabled (no bucket configured, or client initialisation failed) it
/// degrades to the placeholder URL, as does any upload failure.
pub struct AssetPublisher {
    backend: Option<GcsBackend>,
}

struct GcsBackend {
    client: GcsClient,
    bucket: String,
}

impl AssetPublisher {
    /// Build a publisher from configuration. Never fails: a missing
    /// bucket or an authentication error leaves publishing disabled.
    pub async fn from_config(config: &StorageConfig) -> Self {
        let Some(bucket) = config.bucket.clone() else {
            info!("No storage bucket configured, image publishing disabled");
            return Self { backend: None };
        };

        match Self::connect(&bucket).await {
            Ok(backend) => Self {
                backend: Some(backend),
            },
            Err(e) => {
                warn!(error = %e, bucket = %bucket, "Storage unavailable, image publishing disabled");
                Self { backend: None }
            }
        }
    }

    #[cfg(test)]
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    async fn connect(bucket: &str) -> Result<GcsBackend> {
        let config = ClientConfig::default()
            .with_auth()
            .await
            .context("Failed to initialise GCS client with service account")?;

        Ok(GcsBackend {
            client: GcsClient::new(config),
            bucket: bucket.to_string(),
        })
    }

    /// Upload the image bytes and return a public URL, or the placeholder
    /// URL on any failure.
    #[instrument(skip(self, data), fields(file_name = %file_name, size = data.len()))]
    pub async fn publish(&self, data: Vec<u8>, file_name: &str) -> String {
        let Some(backend) = &self.backend else {
            return PLACEHOLDER_IMAGE_URL.to_string();
        };

        match backend.upload(data, file_name).await {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Image upload failed, using placeholder");
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }
}

impl GcsBackend {
    async fn upload(&self, data: Vec<u8>, file_name: &str) -> Result<String> {
        let object_path = format!("articles/{file_name}");
        let file_size = data.len() as u64;

        // SHA-256 checksum, logged for traceability
        let mut hasher = Sha256::new();
        hasher.update(&data);
        let sha256_checksum = hex::encode(hasher.finalize());

        let upload_type = UploadType::Simple(Media {
            name: object_path.clone().into(),
            content_type: SVG_CONTENT_TYPE.into(),
            content_length: Some(file_size),
        });

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: self.bucket.clone(),
                    ..Default::default()
                },
                data,
                &upload_type,
            )
            .await
            .with_context(|| format!("Failed to upload {file_name} to {object_path}"))?;

        info!(
            object_path = %object_path,
            file_size,
            sha256 = %sha256_checksum,
            "Uploaded article image"
        );

        Ok(format!(
            "https://storage.googleapis.com/{}/{}",
            self.bucket, object_path
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_publisher_returns_placeholder() {
        let publisher = AssetPublisher::from_config(&StorageConfig { bucket: None }).await;
        let url = publisher.publish(b"<svg/>".to_vec(), "a.svg").await;
        assert_eq!(url, PLACEHOLDER_IMAGE_URL);
    }
}
