use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadError {
    #[error("Invalid object path")]
    InvalidPath,

    #[error("Access to the bucket was denied")]
    AccessDenied,

    #[error("Bucket does not exist")]
    BucketNotFound,

    #[error("Storage infrastructure error")]
    Infrastructure,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Overwrites any existing object at `object_name` and returns the
    /// public URL of the written object.
    async fn put_object(
        &self,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError>;
}
