//! # Menu Infrastructure
//!
//! HTTP implementations (adapters) of the catalog and recommendation ports.

pub mod http;

pub use http::{create_client, HttpCatalogGateway, HttpSuggestionGateway};
