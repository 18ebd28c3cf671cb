//! HTTP implementation of [`DrawingService`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use crate::config::Config;
use crate::persistence::dependencies::DrawingService;
use crate::persistence::types::{DrawingRecord, GalleryResponse, PersistError};

/// Talks to the drawing service over plain REST calls.
///
/// Saves are form-encoded POSTs with the fields `drawing` and `ownerName`;
/// the listing is a GET returning `{ "data": [...] }`.
#[derive(Debug, Clone)]
pub struct HttpDrawingService {
    client: reqwest::Client,
    save_url: Url,
    list_url: Url,
}

impl HttpDrawingService {
    pub fn new(save_url: Url, list_url: Url, timeout: Duration) -> Result<Self, PersistError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            save_url,
            list_url,
        })
    }

    /// Builds the service from the `[server]` section.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let service = Self::new(
            config.save_url()?,
            config.list_url()?,
            Duration::from_secs(config.server.timeout_secs),
        )?;
        log::debug!(
            "Drawing service: save={} list={}",
            service.save_url,
            service.list_url
        );
        Ok(service)
    }

    pub fn save_url(&self) -> &Url {
        &self.save_url
    }

    pub fn list_url(&self) -> &Url {
        &self.list_url
    }
}

/// Reads the reply body whatever the status code.
///
/// The service reports errors as JSON bodies, so an error status alone does
/// not fail the exchange; only an unreadable or non-JSON body does.
async fn read_body(response: reqwest::Response) -> Result<String, PersistError> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await?;
    if !status.is_success() {
        log::warn!("{} answered with status {}: {}", url, status, body);
    }
    Ok(body)
}

#[async_trait]
impl DrawingService for HttpDrawingService {
    async fn save(&self, record: &DrawingRecord) -> Result<serde_json::Value, PersistError> {
        log::debug!(
            "POST {} ({} byte drawing for '{}')",
            self.save_url,
            record.drawing.len(),
            record.owner_name
        );

        let response = self
            .client
            .post(self.save_url.clone())
            .header(ACCEPT, "application/json")
            .form(&[
                ("drawing", record.drawing.as_str()),
                ("ownerName", record.owner_name.as_str()),
            ])
            .send()
            .await?;

        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn list(&self) -> Result<Vec<DrawingRecord>, PersistError> {
        log::debug!("GET {}", self.list_url);

        let response = self.client.get(self.list_url.clone()).send().await?;
        let body = read_body(response).await?;
        let listing: GalleryResponse = serde_json::from_str(&body)?;
        Ok(listing.data)
    }
}
