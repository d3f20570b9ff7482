//! NFT fetch layer
//!
//! Wraps the Alchemy NFT API: owned NFTs for a wallet, and NFTs of a
//! collection contract with an optional pagination token.

pub mod alchemy;
pub mod handler;
pub mod types;

pub use alchemy::AlchemyNftClient;
pub use handler::*;
pub use types::*;

use crate::core::errors::GalleryError;
use async_trait::async_trait;

/// Source of NFT records. Implemented by [`AlchemyNftClient`]; tests plug in fixtures.
#[async_trait]
pub trait NftSource: Send + Sync {
    /// `GET {base}/getNFTs/?owner={owner}`, returning `ownedNfts`.
    async fn fetch_nfts(&self, owner: &str) -> Result<Vec<Nft>, GalleryError>;

    /// `GET {base}/getNFTsForCollection/?contractAddress=..&withMetadata=true[&nextToken=..]`.
    async fn fetch_nfts_for_collection(
        &self,
        collection: &str,
        page_key: Option<&str>,
    ) -> Result<CollectionPage, GalleryError>;
}
