#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Stock Operation `AuthZ` SDK
//!
//! This crate provides the public API for the `stock_operation_authz` module:
//!
//! - [`StockOperationAuthzClient`] - Public API trait for consumers
//! - [`StockCatalogPluginClient`] - Plugin API trait for catalog sources
//! - [`PrivilegeGrant`], [`OperationType`], [`Party`] - Snapshot models
//! - [`OperationTypeAuthorization`], [`OperationPermissions`] - Resolution results
//! - [`StockOperationAuthzError`] - Error types
//! - [`privileges`], [`operation_codes`] - Well-known names
//!
//! ## Usage
//!
//! ```ignore
//! use stock_operation_authz_sdk::StockOperationAuthzClient;
//!
//! let resolved = authz.resolve_operation_types(user_id).await?;
//! for op in &resolved.creatable {
//!     println!("{} ({})", op.name, op.operation_type);
//! }
//! ```

pub mod api;
pub mod constants;
pub mod error;
pub mod models;
pub mod plugin_api;

pub use api::StockOperationAuthzClient;
pub use constants::{operation_codes, privileges};
pub use error::StockOperationAuthzError;
pub use models::{
    LocationScope, OperationPermissionRequest, OperationPermissions, OperationSide,
    OperationType, OperationTypeAuthorization, Party, PartyKind, PrivilegeGrant,
};
pub use plugin_api::StockCatalogPluginClient;
