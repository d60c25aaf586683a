pub mod aliases;
pub mod browse;
pub mod client;
pub mod document;
pub mod error;
pub mod image;
pub mod normalize;

pub use client::CatalogClient;
pub use error::{CatalogError, FailureKind};
pub use normalize::parse_catalog;
pub use portfolio_core::{CatalogEntry, LoadState};
