//! HTTP module (reqwest adapters)

pub mod client;
pub mod catalog_api;
pub mod suggestion_api;

pub use client::create_client;
pub use catalog_api::HttpCatalogGateway;
pub use suggestion_api::HttpSuggestionGateway;
