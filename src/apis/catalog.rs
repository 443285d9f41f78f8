use std::time::Duration;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use crate::appdata::Config;
use crate::error::{Error, Result};
use crate::models::{KeywordQuery, NameQuery, NewProductRequest, SearchResponse, AddResponse};

const SEARCH_KEYWORD_PATH: &str = "search/keyword";
const SEARCH_NAME_PATH: &str = "search/name";
const ADD_PATH: &str = "add";

/// HTTP client for the catalog server.
#[derive(Clone, Debug)]
pub struct CatalogApi {
    client:     reqwest::Client,
    host:       String
}

impl CatalogApi {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            host: config.catalog_host.trim_end_matches('/').to_string()
        })
    }

    pub async fn search_keyword(&self, keyword: &str) -> Result<SearchResponse> {
        self.post(SEARCH_KEYWORD_PATH, &KeywordQuery { keyword: keyword.to_string() }).await
    }

    pub async fn search_name(&self, name: &str) -> Result<SearchResponse> {
        self.post(SEARCH_NAME_PATH, &NameQuery { name: name.to_string() }).await
    }

    pub async fn add_product(&self, product: &NewProductRequest) -> Result<AddResponse> {
        self.post(ADD_PATH, product).await
    }

    /// The body is decoded whatever the status; the server puts its `error` in 4xx bodies too.
    #[instrument(level = "debug", skip(self, body))]
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R> where
        B: Serialize + ?Sized,
        R: DeserializeOwned {

        let response = self.client.post(&format!("{}/{}", &self.host, path))
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        debug!(status, len = bytes.len(), "Catalog server responded");

        serde_json::from_slice(&bytes).map_err(|source| Error::Decode { status, source })
    }
}
