//! tests/cli_tests.rs
//!
//! `fetch` subcommand parsing and output against a mock provider.

mod support;

use clap::Parser;
use httpmock::{Method::GET, MockServer};
use nft_gallery::cli::{run_fetch, Cli, Commands};
use serde_json::json;
use support::{client_for, nft_json, BASE_PATH};

fn parse_fetch(args: &[&str]) -> nft_gallery::cli::FetchArgs {
    let mut argv = vec!["nft-gallery", "fetch"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Some(Commands::Fetch(fetch)) => fetch,
        other => panic!("expected fetch command, got {:?}", other),
    }
}

#[test]
fn test_no_subcommand_means_serve() {
    let cli = Cli::try_parse_from(["nft-gallery"]).unwrap();
    assert!(cli.command.is_none());

    let cli = Cli::try_parse_from(["nft-gallery", "serve", "--port", "4001"]).unwrap();
    match cli.command {
        Some(Commands::Serve { host, port }) => {
            assert_eq!(host, None);
            assert_eq!(port, Some(4001));
        }
        other => panic!("expected serve, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_wallet_sorted_by_floor_price() {
    let provider = MockServer::start_async().await;
    provider
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("{}/getNFTs/", BASE_PATH))
                .query_param("owner", "0xcli");
            then.status(200).json_body(json!({ "ownedNfts": [
                nft_json("1", "Low", Some(1.0)),
                nft_json("2", "Unlisted", None),
                nft_json("3", "High", Some(9.0))
            ]}));
        })
        .await;

    let args = parse_fetch(&["--wallet", "0xcli", "--sort-by-floor-price"]);
    let out = run_fetch(&args, &client_for(&provider)).await.unwrap();

    assert!(out.find("High").unwrap() < out.find("Low").unwrap());
    assert!(!out.contains("Unlisted"));
    assert!(out.contains("  Background: Blue"));
    assert!(out.contains("2 NFTs"));
}

#[tokio::test]
async fn test_fetch_collection_reports_next_page_key() {
    let provider = MockServer::start_async().await;
    provider
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("{}/getNFTsForCollection/", BASE_PATH))
                .query_param("contractAddress", "0xcol")
                .query_param("nextToken", "p1");
            then.status(200).json_body(json!({ "nfts": [nft_json("4", "Four", None)], "nextToken": "p2" }));
        })
        .await;

    let args = parse_fetch(&["--collection", "0xcol", "--page-key", "p1"]);
    let out = run_fetch(&args, &client_for(&provider)).await.unwrap();

    assert!(out.contains("Four (token 4)"));
    assert!(out.contains("next page key: p2"));
}

#[tokio::test]
async fn test_fetch_failure_propagates() {
    let provider = MockServer::start_async().await;
    provider
        .mock_async(|when, then| {
            when.method(GET).path(format!("{}/getNFTs/", BASE_PATH));
            then.status(403).body("forbidden");
        })
        .await;

    let args = parse_fetch(&["--wallet", "0xcli"]);
    let err = run_fetch(&args, &client_for(&provider)).await.unwrap_err();
    assert_eq!(err.to_string(), "Provider returned 403: forbidden");
}
