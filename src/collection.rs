//! # Collection API
//!
//! Client for the Metropolitan Museum public collection API.
//!
//!
//!
//! ## Endpoints
//! - `objects/{id}`: full record for one object
//! - `search?q=`: total hit count plus the ordered object ID list
//!
//!
//!
//! ## Passthrough
//! The proxy does not inspect remote status codes. Anything the remote
//! returns that parses as JSON, error bodies included, is relayed to the
//! browser as-is. Only transport failures and non-JSON bodies become
//! errors here.
//!
//! No retries, no timeouts, no caching. One outbound call per invocation.
use std::collections::HashMap;

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::AppError;

/// Trailing slash is load-bearing: `Url::join` drops the last path segment
/// of a base without one.
pub const COLLECTION_API_BASE: &str = "https://collectionapi.metmuseum.org/public/collection/v1/";

pub struct CollectionClient {
    base: Url,
    http: Client,
}

impl CollectionClient {
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(base)?,
            http: Client::new(),
        })
    }

    /// Resolve a relative path against the collection base and set one query
    /// pair per mapping entry. Paths are not validated; a malformed path
    /// surfaces later as a fetch failure.
    pub fn build_url(
        &self,
        path: &str,
        params: &HashMap<&str, &str>,
    ) -> Result<Url, url::ParseError> {
        let mut url = self.base.join(path)?;

        for (key, value) in params {
            url.query_pairs_mut().append_pair(key, value);
        }

        Ok(url)
    }

    pub async fn object(&self, id: &str) -> Result<Value, AppError> {
        let url = self.build_url(&format!("objects/{id}"), &HashMap::new())?;

        Ok(self.http.get(url).send().await?.json().await?)
    }

    pub async fn search(&self, query: &str) -> Result<Value, AppError> {
        let url = self.build_url("search", &HashMap::from([("q", query)]))?;

        Ok(self.http.get(url).send().await?.json().await?)
    }
}
