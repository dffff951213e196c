//! Configuration for the static stock catalog plugin.

use serde::Deserialize;
use stock_operation_authz_sdk::{OperationType, Party, PrivilegeGrant};
use uuid::Uuid;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticStockCatalogPluginConfig {
    /// Privilege grants per user.
    pub users: Vec<UserGrantsConfig>,

    /// Operation type catalog.
    pub operation_types: Vec<OperationType>,

    /// Party catalog.
    pub parties: Vec<Party>,
}

/// Grants held by one user.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserGrantsConfig {
    pub user_id: Uuid,
    #[serde(default)]
    pub grants: Vec<PrivilegeGrant>,
}
