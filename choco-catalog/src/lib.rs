//! Choco Comics catalog engine
//!
//! Platform-agnostic catalog model for the Choco Comics storefront.
//! This crate decides what each page section shows; the browser crate only
//! turns those decisions into markup and DOM mutations.

pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod section;
pub mod stars;
pub mod store;

// Re-export commonly used types
pub use config::{CatalogConfig, ContainerProfile, DEFAULT_CATALOG_PATH};
pub use data::{CatalogDocument, ComicEntry, NewsEntry};
pub use display::{TrendingStats, format_thousands, review_excerpt};
pub use error::{ConfigError, LoadError};
pub use section::{FAILURE_MESSAGE, SectionContent, SectionKind};
pub use stars::StarRow;
pub use store::CatalogStore;
