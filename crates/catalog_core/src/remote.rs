use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::MovieId,
    protocol::{MoviePayload, MovieRecord},
};

/// Bound on each catalog exchange; an expired request is a failure, not a
/// retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The four single-exchange operations the catalog service exposes.
///
/// Success is any 2xx response. Transport failures and non-success statuses
/// are surfaced uniformly; callers do not distinguish them.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list(&self) -> Result<Vec<MovieRecord>>;
    async fn create(&self, payload: &MoviePayload) -> Result<()>;
    async fn update(&self, id: MovieId, payload: &MoviePayload) -> Result<()>;
    async fn delete(&self, id: MovieId) -> Result<()>;
}

pub struct RemoteCatalogClient {
    http: Client,
    base_url: String,
}

impl RemoteCatalogClient {
    /// `base_url` is the externally configured service address, e.g.
    /// `http://192.168.0.10:3000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url.into()),
        })
    }
}

fn normalize_base_url(raw: String) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[async_trait]
impl CatalogApi for RemoteCatalogClient {
    async fn list(&self) -> Result<Vec<MovieRecord>> {
        let movies = self
            .http
            .get(format!("{}/movies", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(movies)
    }

    async fn create(&self, payload: &MoviePayload) -> Result<()> {
        self.http
            .post(format!("{}/movies", self.base_url))
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update(&self, id: MovieId, payload: &MoviePayload) -> Result<()> {
        self.http
            .put(format!("{}/movies/{}", self.base_url, id.0))
            .json(payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, id: MovieId) -> Result<()> {
        self.http
            .delete(format!("{}/movies/{}", self.base_url, id.0))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
