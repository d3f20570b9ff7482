// src/main.rs
//! NFT Gallery entry point
//! Starts the gallery server, or runs a single fetch from the command line.
use anyhow::Result;
use clap::Parser;
use nft_gallery::api::nft::AlchemyNftClient;
use nft_gallery::api::server::GalleryServer;
use nft_gallery::cli::{run_fetch, Cli, Commands};
use nft_gallery::core::config::GalleryConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    init_logging()?;

    let mut config = GalleryConfig::load()?;
    config.validate()?;

    match args.command {
        Some(Commands::Fetch(fetch_args)) => {
            let client = AlchemyNftClient::new(&config.provider);
            let output = run_fetch(&fetch_args, &client).await?;
            println!("{}", output);
        }
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            info!("Starting NFT Gallery v{}", env!("CARGO_PKG_VERSION"));
            GalleryServer::new(&config).start().await?;
        }
        None => {
            info!("No command specified, starting NFT Gallery v{}", env!("CARGO_PKG_VERSION"));
            GalleryServer::new(&config).start().await?;
        }
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=info,h2=info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
