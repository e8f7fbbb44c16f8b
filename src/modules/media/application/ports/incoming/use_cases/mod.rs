use async_trait::async_trait;

use crate::media::application::ports::outgoing::UploadError;

#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    /// Writes the blob at `path` with overwrite semantics and returns its
    /// public URL. Collision avoidance is the caller's concern; the
    /// convention is `{category}/{timestamp}-{filename}`.
    async fn execute(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError>;
}
