#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Stock Catalog Plugin
//!
//! Serves privilege grants, operation types and parties from configuration.
//! Intended for development, demos and tests.
//!
//! ## Configuration
//!
//! ```yaml
//! users:
//!   - user_id: "11111111-1111-1111-1111-111111111111"
//!     grants:
//!       - privilege: "Task: stockmanagement.stockoperations.mutate"
//!         operationTypeUuid: "22222222-2222-2222-2222-222222222222"
//!         locationUuid: "44444444-4444-4444-4444-444444444444"
//! operation_types:
//!   - uuid: "22222222-2222-2222-2222-222222222222"
//!     name: "Adjustment"
//!     operationType: "adjustment"
//!     hasSource: true
//!     sourceType: "Location"
//! parties:
//!   - uuid: "66666666-6666-6666-6666-666666666666"
//!     locationUuid: "44444444-4444-4444-4444-444444444444"
//!     tags: ["Main Pharmacy"]
//! ```

pub mod config;
pub mod domain;

pub use config::StaticStockCatalogPluginConfig;
pub use domain::Service;
