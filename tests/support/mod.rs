// tests/support/mod.rs
// Shared fixtures: Alchemy-shaped JSON and a gallery server wired to a mock provider.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use httpmock::MockServer;
use nft_gallery::api::nft::AlchemyNftClient;
use nft_gallery::api::server::GalleryServer;
use nft_gallery::core::config::ProviderConfig;
use serde_json::{json, Value};

/// Path prefix the mock provider serves under, mirroring `/v2/{api_key}`.
pub const BASE_PATH: &str = "/v2/test-key";

/// One Alchemy NFT record.
pub fn nft_json(token_id: &str, title: &str, floor_price: Option<f64>) -> Value {
    let mut contract_metadata = json!({ "name": "Fixture Collection", "openSea": {} });
    if let Some(price) = floor_price {
        contract_metadata["openSea"]["floorPrice"] = json!(price);
    }
    json!({
        "contract": { "address": "0x00000000000000000000000000000000000000c0" },
        "id": { "tokenId": token_id, "tokenMetadata": { "tokenType": "ERC721" } },
        "title": title,
        "media": [{ "gateway": format!("https://img.example/{}.png", token_id), "raw": "ipfs://x" }],
        "metadata": { "attributes": [{ "trait_type": "Background", "value": "Blue" }] },
        "contractMetadata": contract_metadata
    })
}

pub fn client_for(server: &MockServer) -> AlchemyNftClient {
    AlchemyNftClient::new(&ProviderConfig::with_base_url(server.url(BASE_PATH)))
}

pub fn gallery_for(server: &MockServer) -> TestServer {
    gallery_with_base_url(&server.url(BASE_PATH))
}

pub fn gallery_with_base_url(base_url: &str) -> TestServer {
    let client = AlchemyNftClient::new(&ProviderConfig::with_base_url(base_url));
    let app = GalleryServer::with_source(Arc::new(client), "127.0.0.1".to_string(), 0).create_router();
    TestServer::new(app).unwrap()
}

pub fn card_count(html: &str) -> usize {
    html.matches("class=\"nft-card\"").count()
}

/// Titles of rendered cards, in page order.
pub fn card_titles(html: &str) -> Vec<String> {
    html.split("<h2 class=\"nft-title\">")
        .skip(1)
        .filter_map(|rest| rest.split("</h2>").next())
        .map(str::to_string)
        .collect()
}
