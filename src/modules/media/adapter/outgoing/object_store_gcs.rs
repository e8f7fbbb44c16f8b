use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::media::application::ports::outgoing::{ObjectStore, UploadError};

/// google-cloud-storage addresses buckets by resource name:
/// `projects/_/buckets/{bucket}`
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn public_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{bucket}/{object_name}")
}

fn map_write_error(msg: &str) -> UploadError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        UploadError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        UploadError::BucketNotFound
    } else {
        UploadError::Infrastructure
    }
}

/// Internal seam so the adapter is testable without mocking
/// google-cloud-storage types.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0
            .upload_object(bucket_resource, object_name, content_type, bytes)
            .await
    }
}

#[derive(Clone)]
pub struct GcsObjectStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
}

impl GcsObjectStore {
    /// Synchronous constructor; the client is initialized lazily on first use.
    pub fn new(bucket: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: String) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket,
        }
    }
}

#[async_trait]
impl ObjectStore for GcsObjectStore {
    async fn put_object(
        &self,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        let client = self
            .get_client()
            .await
            .map_err(|_| UploadError::Infrastructure)?;

        let bucket = bucket_resource(&self.bucket);

        client
            .upload_object(&bucket, object_name, content_type, bytes)
            .await
            .map_err(|e| map_write_error(&e))?;

        Ok(public_url(&self.bucket, object_name))
    }
}

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        tracing::info!("GCS storage client created");

        Ok(Self { storage })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        // Buffered single-shot write; rewriting the same object name is how
        // overwrite semantics are delivered. The caller-declared content type
        // is logged only; untyped objects come back as
        // application/octet-stream.
        // TODO: attach content_type as object metadata on the write.
        tracing::debug!(object_name, content_type, size = bytes.len(), "GCS write");

        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .send_buffered()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
