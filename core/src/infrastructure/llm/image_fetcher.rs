use std::time::Duration;

use reqwest::Client;

use crate::domain::{
    common::entities::app_errors::CoreError,
    verdict::{ports::ImageFetcher, value_objects::ImagePayload},
};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Downloads a caller-supplied image URL so the bytes can be inlined into
/// the model request.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: String) -> Result<ImagePayload, CoreError> {
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Image fetch failed: {}", e);
            CoreError::ExternalServiceError(format!("Failed to fetch image: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(CoreError::ExternalServiceError(format!(
                "Image fetch returned {}",
                response.status()
            )));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
            .unwrap_or_else(|| "image/jpeg".to_string());

        let data = response
            .bytes()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("Failed to read image: {}", e)))?
            .to_vec();

        Ok(ImagePayload { mime_type, data })
    }
}
