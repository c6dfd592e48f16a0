use super::models::ServerRecord;
use crate::config::DathostConfig;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum HostingError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("Dathost responded with status {status} for {endpoint}")]
    Status { status: u16, endpoint: String },
}

/// The calls the bot makes against the hosting provider.
///
/// Every call is one round-trip; nothing is retried or cached.
#[async_trait]
pub trait HostingClient: Send + Sync {
    async fn list_servers(&self) -> Result<Vec<ServerRecord>, HostingError>;
    async fn get_server(&self, id: &str) -> Result<ServerRecord, HostingError>;
    /// `Ok(true)` iff the provider accepted the request.
    async fn start(&self, id: &str) -> Result<bool, HostingError>;
    async fn stop(&self, id: &str) -> Result<bool, HostingError>;
    async fn restart(&self, id: &str) -> Result<bool, HostingError>;
}

#[derive(Debug, Clone)]
pub struct DathostClient {
    http: reqwest::Client,
    config: DathostConfig,
}

impl DathostClient {
    pub fn new(config: DathostConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .basic_auth(&self.config.email, Some(&self.config.password))
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, HostingError> {
        debug!("Fetching Dathost {}", path);
        let start = std::time::Instant::now();

        let response = self.request(Method::GET, path).send().await?;
        debug!("Dathost {} answered {} in {:?}", path, response.status(), start.elapsed());

        if !response.status().is_success() {
            return Err(HostingError::Status {
                status: response.status().as_u16(),
                endpoint: path.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    async fn lifecycle(&self, id: &str, verb: &str) -> Result<bool, HostingError> {
        let path = format!("game-servers/{}/{}", id, verb);
        debug!("Posting Dathost {}", path);
        let start = std::time::Instant::now();

        let response = self.request(Method::POST, &path).send().await?;
        debug!("Dathost {} answered {} in {:?}", path, response.status(), start.elapsed());

        Ok(response.status().is_success())
    }
}

#[async_trait]
impl HostingClient for DathostClient {
    async fn list_servers(&self) -> Result<Vec<ServerRecord>, HostingError> {
        self.fetch("game-servers").await
    }

    async fn get_server(&self, id: &str) -> Result<ServerRecord, HostingError> {
        self.fetch(&format!("game-servers/{}", id)).await
    }

    async fn start(&self, id: &str) -> Result<bool, HostingError> {
        self.lifecycle(id, "start").await
    }

    async fn stop(&self, id: &str) -> Result<bool, HostingError> {
        self.lifecycle(id, "stop").await
    }

    async fn restart(&self, id: &str) -> Result<bool, HostingError> {
        self.lifecycle(id, "restart").await
    }
}
