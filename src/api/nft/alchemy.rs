//! Alchemy NFT API client

use super::types::{CollectionPage, Nft};
use super::NftSource;
use crate::core::config::ProviderConfig;
use crate::core::errors::GalleryError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Alchemy NFT API client
#[derive(Clone)]
pub struct AlchemyNftClient {
    client: Client,
    base_url: String,
    log_base_url: String,
}

impl AlchemyNftClient {
    pub fn new(config: &ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url(),
            log_base_url: config.redacted_base_url(),
        }
    }

    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value, GalleryError> {
        let url = format!("{}/{}/", self.base_url, endpoint);
        debug!("GET {}/{}/ {:?}", self.log_base_url, endpoint, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| GalleryError::Network(format!("request to {} failed: {}", endpoint, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GalleryError::Network(format!("reading {} response failed: {}", endpoint, e)))?;

        if !status.is_success() {
            return Err(GalleryError::Status { status: status.as_u16(), body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl NftSource for AlchemyNftClient {
    async fn fetch_nfts(&self, owner: &str) -> Result<Vec<Nft>, GalleryError> {
        let body = self.get_json("getNFTs", &[("owner", owner)]).await?;
        decode_nft_array(&body, "ownedNfts")
    }

    async fn fetch_nfts_for_collection(
        &self,
        collection: &str,
        page_key: Option<&str>,
    ) -> Result<CollectionPage, GalleryError> {
        let mut query = vec![("contractAddress", collection), ("withMetadata", "true")];
        if let Some(token) = page_key.filter(|t| !t.is_empty()) {
            query.push(("nextToken", token));
        }

        let body = self.get_json("getNFTsForCollection", &query).await?;
        let nfts = decode_nft_array(&body, "nfts")?;
        let next_token = body
            .get("nextToken")
            .or_else(|| body.get("nextPageKey"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(CollectionPage { nfts, next_token })
    }
}

/// Decode `body[field]` element by element. Elements that are not JSON objects
/// are dropped; the rest keep their order.
pub fn decode_nft_array(body: &Value, field: &'static str) -> Result<Vec<Nft>, GalleryError> {
    let items = body
        .get(field)
        .and_then(Value::as_array)
        .ok_or(GalleryError::MissingField(field))?;

    let mut nfts = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            skipped += 1;
            warn!("Skipping non-object NFT entry at {}[{}]", field, index);
            continue;
        }
        match serde_json::from_value::<Nft>(item.clone()) {
            Ok(nft) => nfts.push(nft),
            Err(e) => {
                skipped += 1;
                warn!("Skipping malformed NFT at {}[{}]: {}", field, index, e);
            }
        }
    }

    if skipped > 0 {
        warn!("Dropped {} of {} entries from {}", skipped, items.len(), field);
    }
    Ok(nfts)
}
