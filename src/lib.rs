// src/lib.rs
//! NFT gallery: fetch NFTs for a wallet or a collection from the Alchemy NFT
//! API, optionally keep only floor-priced ones, and render them as cards.

pub mod api;
pub mod cli;
pub mod core;
pub mod gallery;
