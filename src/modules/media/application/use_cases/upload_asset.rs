use crate::media::application::ports::outgoing::{AssetStore, AssetStoreError};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum UploadAssetError {
    EmptyFile,
    StoreError(String),
}

#[derive(Debug, Clone)]
pub struct UploadAssetData {
    pub bytes: Vec<u8>,
    pub filename: String,
    /// Destination folder on the media host, taken from the form's `type`
    /// field.
    pub folder: String,
}

/// An interface for the upload asset use case
#[async_trait]
pub trait IUploadAssetUseCase: Send + Sync {
    async fn execute(&self, data: UploadAssetData) -> Result<String, UploadAssetError>;
}

pub struct UploadAssetUseCase {
    asset_store: Arc<dyn AssetStore>,
}

impl UploadAssetUseCase {
    pub fn new(asset_store: Arc<dyn AssetStore>) -> Self {
        Self { asset_store }
    }
}

#[async_trait]
impl IUploadAssetUseCase for UploadAssetUseCase {
    async fn execute(&self, data: UploadAssetData) -> Result<String, UploadAssetError> {
        if data.bytes.is_empty() {
            return Err(UploadAssetError::EmptyFile);
        }

        self.asset_store
            .upload(data.bytes, &data.filename, &data.folder)
            .await
            .map_err(|e| match e {
                AssetStoreError::UploadFailed(msg) => UploadAssetError::StoreError(msg),
                AssetStoreError::DeleteFailed(msg) => UploadAssetError::StoreError(msg),
            })
    }
}
