// src/api/mod.rs

pub mod csp_middleware; // Security headers for the page
pub mod handlers;
pub mod nft;            // Alchemy fetch layer and its JSON endpoints
pub mod server;
pub mod server_config;  // Server limit constants
pub mod types;
