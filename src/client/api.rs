//! Typed fetch layer over the local proxy endpoints.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// One search outcome: hit count plus the ordered object ID list driving
/// incremental detail fetching. The remote sends `objectIDs: null` when
/// nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total: u64,
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<u64>>,
}

impl SearchResult {
    pub fn ids(&self) -> &[u64] {
        self.object_ids.as_deref().unwrap_or_default()
    }
}

/// One catalog record. Remote records are sparse, so every field defaults;
/// absent strings come back empty rather than failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtObject {
    #[serde(rename = "objectID")]
    pub object_id: u64,
    pub title: String,
    pub primary_image: String,
    pub primary_image_small: String,
    pub additional_images: Vec<String>,
    pub artist_display_name: String,
    pub object_date: String,
    pub medium: String,
    pub dimensions: String,
    pub department: String,
    pub culture: String,
}

impl ArtObject {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Whether there is anything for the viewer to show. Gates the click
    /// handler that opens it.
    pub fn has_images(&self) -> bool {
        !self.primary_image.is_empty() || !self.additional_images.is_empty()
    }

    /// Primary image followed by the additional images, with empty URLs
    /// filtered out. The viewer requires a non-empty set, and this is where
    /// that guarantee is made.
    pub fn image_set(&self) -> Vec<String> {
        std::iter::once(&self.primary_image)
            .chain(self.additional_images.iter())
            .filter(|url| !url.is_empty())
            .cloned()
            .collect()
    }
}

/// The proxy API surface the page controller and loader run against.
///
/// [`ApiClient`] is the HTTP implementation; tests substitute canned
/// responses without a server.
#[allow(async_fn_in_trait)]
pub trait CollectionApi {
    async fn search(&self, query: &str) -> Result<SearchResult, FetchError>;
    async fn fetch_object(&self, id: u64) -> Result<ArtObject, FetchError>;
}

pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            base: Url::parse(base_url)?,
            http: reqwest::Client::new(),
        })
    }
}

impl CollectionApi for ApiClient {
    async fn search(&self, query: &str) -> Result<SearchResult, FetchError> {
        let encoded = url_escape::encode_component(query);
        let url = self.base.join(&format!("api/search/{encoded}"))?;

        Ok(self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    async fn fetch_object(&self, id: u64) -> Result<ArtObject, FetchError> {
        let url = self.base.join(&format!("api/object/{id}"))?;

        Ok(self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}
