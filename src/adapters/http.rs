use crate::domain::model::{CreateVoyageBody, UnitType, VesselOption, Voyage};
use crate::domain::ports::{ConfigProvider, RemoteService};
use crate::utils::error::{ConsoleError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// HTTP client for the remote voyage service.
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &impl ConfigProvider) -> Result<Self> {
        let base_url =
            Url::parse(config.api_base_url()).map_err(|e| ConsoleError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: config.api_base_url().to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()?;
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ConsoleError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: self.base_url.to_string(),
                reason: format!("Cannot join endpoint path {}: {}", path, e),
            })
    }

    /// Maps a non-2xx response to `RemoteError`, carrying the server's JSON
    /// `message` body when one is present.
    async fn remote_error(response: Response) -> ConsoleError {
        let status = response.status().as_u16();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Request failed".to_string());
        ConsoleError::RemoteError { status, message }
    }
}

#[async_trait]
impl RemoteService for ApiClient {
    async fn create_voyage(&self, body: &CreateVoyageBody) -> Result<()> {
        let url = self.endpoint("/api/voyage/create")?;
        tracing::debug!("POST {url}");
        let response = self.client.post(url).json(body).send().await?;
        tracing::debug!("create voyage response status: {}", response.status());
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }
        Ok(())
    }

    async fn delete_voyage(&self, voyage_id: &str) -> Result<()> {
        let mut url = self.endpoint("/api/voyage/delete")?;
        url.query_pairs_mut().append_pair("id", voyage_id);
        tracing::debug!("DELETE {url}");
        let response = self.client.delete(url).send().await?;
        tracing::debug!("delete voyage response status: {}", response.status());
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }
        Ok(())
    }

    async fn list_voyages(&self) -> Result<Vec<Voyage>> {
        let url = self.endpoint("/api/voyage/getAll")?;
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn list_vessels(&self) -> Result<Vec<VesselOption>> {
        let url = self.endpoint("/api/vessel/getAll")?;
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn list_unit_types(&self) -> Result<Vec<UnitType>> {
        let url = self.endpoint("/api/unitType/getAll")?;
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::remote_error(response).await);
        }
        Ok(response.json().await?)
    }
}
