use async_trait::async_trait;
use serde::Deserialize;
use std::env;

use crate::media::application::ports::outgoing::{AssetStore, AssetStoreError};

/// Connection settings for the external media host.
#[derive(Debug, Clone)]
pub struct AssetStoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_secret: String,
}

impl AssetStoreConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("ASSET_STORE_URL").expect("ASSET_STORE_URL is not set"),
            api_key: env::var("ASSET_STORE_KEY").expect("ASSET_STORE_KEY is not set"),
            api_secret: env::var("ASSET_STORE_SECRET").expect("ASSET_STORE_SECRET is not set"),
        }
    }
}

/// Internal seam so the adapter is testable without real network calls.
///
/// Tests implement this trait with a fake client.
#[async_trait]
trait MediaHostClient: Send + Sync {
    async fn upload(
        &self,
        folder: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, String>;

    async fn destroy(&self, public_id: &str) -> Result<(), String>;
}

#[derive(Deserialize)]
struct UploadReply {
    secure_url: String,
}

#[derive(Deserialize)]
struct DestroyReply {
    result: String,
}

struct ReqwestMediaHostClient {
    http: reqwest::Client,
    config: AssetStoreConfig,
}

#[async_trait]
impl MediaHostClient for ReqwestMediaHostClient {
    async fn upload(
        &self,
        folder: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("folder", folder.to_string());

        let reply = self
            .http
            .post(format!("{}/upload", self.config.base_url))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .json::<UploadReply>()
            .await
            .map_err(|e| e.to_string())?;

        Ok(reply.secure_url)
    }

    async fn destroy(&self, public_id: &str) -> Result<(), String> {
        let reply = self
            .http
            .post(format!("{}/destroy", self.config.base_url))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .form(&[("public_id", public_id)])
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .json::<DestroyReply>()
            .await
            .map_err(|e| e.to_string())?;

        if reply.result == "ok" || reply.result == "not found" {
            Ok(())
        } else {
            Err(format!("host replied: {}", reply.result))
        }
    }
}

/// Production adapter for the media host's HTTP API.
pub struct AssetStoreHttp {
    client: Box<dyn MediaHostClient>,
}

impl AssetStoreHttp {
    pub fn new(config: AssetStoreConfig) -> Self {
        Self {
            client: Box::new(ReqwestMediaHostClient {
                http: reqwest::Client::new(),
                config,
            }),
        }
    }

    #[cfg(test)]
    fn with_client(client: Box<dyn MediaHostClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssetStore for AssetStoreHttp {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        folder: &str,
    ) -> Result<String, AssetStoreError> {
        self.client
            .upload(folder, filename, bytes)
            .await
            .map_err(AssetStoreError::UploadFailed)
    }

    async fn delete(&self, public_id: &str) -> Result<(), AssetStoreError> {
        self.client
            .destroy(public_id)
            .await
            .map_err(AssetStoreError::DeleteFailed)
    }
}
