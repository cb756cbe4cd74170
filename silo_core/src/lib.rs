#![forbid(unsafe_code)]

//! Core domain model and business logic for the silo warehouse inventory system.
//!
//! This crate provides:
//! - Domain types (warehouse ids, warehouse kinds)
//! - The capacity ledger (bounded stock accounting)
//! - The warehouse registry (name uniqueness, admission checks)
//! - The known-products reference table
//! - Persistence (JSON snapshot store, config)

pub mod types;
pub mod error;
pub mod ledger;
pub mod warehouse;
pub mod registry;
pub mod products;
pub mod store;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{WarehouseId, WarehouseKind};
pub use ledger::CapacityLedger;
pub use warehouse::Warehouse;
pub use registry::{Registry, UpdateError};
pub use products::{default_capacity, KnownProduct, KNOWN_PRODUCTS};
pub use config::Config;
