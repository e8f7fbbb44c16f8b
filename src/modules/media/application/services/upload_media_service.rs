use async_trait::async_trait;
use std::sync::Arc;

use crate::media::application::ports::{
    incoming::use_cases::UploadMediaUseCase,
    outgoing::{ObjectStore, UploadError},
};

pub struct UploadMediaService {
    store: Arc<dyn ObjectStore>,
}

impl UploadMediaService {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

fn validate_path(path: &str) -> Result<&str, UploadError> {
    let path = path.trim().trim_matches('/');
    if path.is_empty() || path.split('/').any(|seg| seg.is_empty() || seg == "..") {
        return Err(UploadError::InvalidPath);
    }
    Ok(path)
}

#[async_trait]
impl UploadMediaUseCase for UploadMediaService {
    async fn execute(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        let path = validate_path(path)?;
        self.store.put_object(path, content_type, bytes).await
    }
}
