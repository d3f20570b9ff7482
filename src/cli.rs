use clap::{Args, Parser, Subcommand};
use std::fmt::Write;

use crate::api::nft::{Nft, NftSource};
use crate::core::errors::GalleryError;
use crate::gallery::displayed_nfts;

/// NFT Gallery CLI
#[derive(Debug, Parser)]
#[command(name = "nft-gallery", about = "Browse NFTs by wallet or collection")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the gallery web server
    Serve {
        /// Interface to bind, overrides GALLERY_HOST
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides GALLERY_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run one fetch and print the result
    Fetch(FetchArgs),
}

#[derive(Debug, Clone, Args)]
#[command(group(clap::ArgGroup::new("target").required(true).args(["wallet", "collection"])))]
pub struct FetchArgs {
    /// Owner wallet address
    #[arg(long)]
    pub wallet: Option<String>,
    /// Collection contract address
    #[arg(long)]
    pub collection: Option<String>,
    /// Pagination token for collection fetches
    #[arg(long, requires = "collection")]
    pub page_key: Option<String>,
    /// Keep only NFTs with a floor price, highest first
    #[arg(long)]
    pub sort_by_floor_price: bool,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn write_nft(out: &mut String, nft: &Nft) {
    let _ = writeln!(out, "{} (token {})", nft.title, nft.id.token_id);
    if let Some(url) = nft.image_url() {
        let _ = writeln!(out, "  image: {}", url);
    }
    if nft.floor_price() > 0.0 {
        let _ = writeln!(out, "  floor price: {}", nft.floor_price());
    }
    for attribute in nft.attributes().unwrap_or_default() {
        let _ = writeln!(out, "  {}: {}", attribute.trait_type, attribute.display_value());
    }
}

/// Executes `fetch` against `source` and returns what should be printed.
pub async fn run_fetch(args: &FetchArgs, source: &dyn NftSource) -> Result<String, GalleryError> {
    let (nfts, next_token) = match (&args.collection, &args.wallet) {
        (Some(collection), _) => {
            let page = source
                .fetch_nfts_for_collection(collection, args.page_key.as_deref())
                .await?;
            (page.nfts, page.next_token)
        }
        (None, Some(wallet)) => (source.fetch_nfts(wallet).await?, None),
        (None, None) => {
            return Err(GalleryError::Config("either --wallet or --collection is required".to_string()))
        }
    };

    let shown = displayed_nfts(Some(nfts.as_slice()), args.sort_by_floor_price).unwrap_or_default();

    if args.json {
        let body = serde_json::json!({ "nfts": shown, "nextToken": next_token });
        return Ok(serde_json::to_string_pretty(&body)?);
    }

    let mut out = String::new();
    for nft in &shown {
        write_nft(&mut out, nft);
    }
    let _ = writeln!(out, "{} NFTs", shown.len());
    if let Some(token) = next_token {
        let _ = writeln!(out, "next page key: {}", token);
    }
    Ok(out)
}
