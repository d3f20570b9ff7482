//! HTTP handlers

pub mod gallery;
pub mod health;

pub use gallery::{fetch, index, update_form};
pub use health::health_check;
