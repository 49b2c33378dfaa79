//! Gateway traits (ports) for the remote catalog API

pub mod catalog_gateway;
pub mod suggestion_gateway;

pub use catalog_gateway::CatalogGateway;
pub use suggestion_gateway::SuggestionGateway;

#[cfg(test)]
pub use catalog_gateway::MockCatalogGateway;
#[cfg(test)]
pub use suggestion_gateway::MockSuggestionGateway;
