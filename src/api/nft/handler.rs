//! JSON mirrors of the two fetches

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{error, info};

use super::types::{CollectionPage, CollectionQuery, Nft};
use crate::api::server::GalleryServer;
use crate::core::errors::GalleryError;

/// GET /api/nfts/:wallet
pub async fn get_nfts(
    State(state): State<Arc<GalleryServer>>,
    Path(wallet): Path<String>,
) -> Result<Json<Vec<Nft>>, GalleryError> {
    info!("Fetching NFTs: wallet={}", wallet);
    let nfts = state.source.fetch_nfts(&wallet).await.map_err(|e| {
        error!("Fetching NFTs for {} failed: {}", wallet, e);
        e
    })?;
    info!("Fetched {} NFTs", nfts.len());
    Ok(Json(nfts))
}

/// GET /api/collections/:address?pageKey=
pub async fn get_collection(
    State(state): State<Arc<GalleryServer>>,
    Path(address): Path<String>,
    Query(params): Query<CollectionQuery>,
) -> Result<Json<CollectionPage>, GalleryError> {
    info!("Fetching collection: address={} page_key={:?}", address, params.page_key);
    let page = state
        .source
        .fetch_nfts_for_collection(&address, params.page_key.as_deref())
        .await
        .map_err(|e| {
            error!("Fetching collection {} failed: {}", address, e);
            e
        })?;
    Ok(Json(page))
}
