//! Static Pokemon Red content and loaders.
//!
//! This crate supplies the data the decoder consults but never reads from
//! memory:
//! - Tileset collision and feature tables for all 24 tilesets
//! - Map-keyed tables (warp arrivals, hidden items, fly points, zones)
//! - RON catalog and TOML configuration loaders (feature `loaders`)
//!
//! Everything here is built once at startup and shared read-only.

pub mod pokered;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use pokered::{TilesetId, map_id, map_tables, pokered_catalog, tilesets};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogFile, CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
