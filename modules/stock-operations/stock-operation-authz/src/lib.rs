//! Stock Operation `AuthZ` Module
//!
//! Resolves which stock operation types a user may view and create, which
//! parties they may pick as source or destination, and what they may do with
//! an individual operation. Catalog snapshots come from a registered
//! [`StockCatalogPluginClient`](stock_operation_authz_sdk::StockCatalogPluginClient).
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use config::StockOperationAuthzConfig;
pub use module::StockOperationAuthzModule;
