//! Domain models for the stock operation `AuthZ` module.
//!
//! All models are read-only snapshots of the stock management catalogs.
//! Field names serialize as camelCase to match the stock management REST payloads.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of party an operation type expects on one of its sides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PartyKind {
    /// A physical location (ward, pharmacy, store).
    Location,
    /// An external stock source (supplier, donor).
    Other,
}

/// Side of a stock operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OperationSide {
    Source,
    Destination,
}

/// A privilege granted to the current user, optionally narrowed to one
/// operation type and/or one location.
///
/// A grant without `operation_type_uuid` applies to every operation type for
/// its privilege.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegeGrant {
    pub privilege: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_type_uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_uuid: Option<Uuid>,
    /// Reserved; not consulted when resolving operation types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_uuid: Option<Uuid>,
}

impl PrivilegeGrant {
    /// Create an unrestricted grant for `privilege`.
    #[must_use]
    pub fn new(privilege: impl Into<String>) -> Self {
        Self {
            privilege: privilege.into(),
            operation_type_uuid: None,
            location_uuid: None,
            party_uuid: None,
        }
    }

    /// Narrow the grant to a single operation type.
    #[must_use]
    pub fn for_operation_type(mut self, operation_type_uuid: Uuid) -> Self {
        self.operation_type_uuid = Some(operation_type_uuid);
        self
    }

    /// Narrow the grant to a single location.
    #[must_use]
    pub fn at_location(mut self, location_uuid: Uuid) -> Self {
        self.location_uuid = Some(location_uuid);
        self
    }
}

/// Tag-based eligibility rule attached to an operation type.
///
/// Any location carrying `location_tag` qualifies for the flagged side(s).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocationScope {
    pub location_tag: String,
    #[serde(default)]
    pub is_source: bool,
    #[serde(default)]
    pub is_destination: bool,
}

/// A configured category of stock movement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OperationType {
    pub uuid: Uuid,
    #[serde(default)]
    pub name: String,
    /// Operation type code, e.g. `receipt` or `transferout`.
    pub operation_type: String,
    #[serde(default)]
    pub has_source: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<PartyKind>,
    #[serde(default)]
    pub has_destination: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<PartyKind>,
    #[serde(default)]
    pub location_scopes: Vec<LocationScope>,
}

impl OperationType {
    /// Whether the operation type declares the given side at all.
    #[must_use]
    pub fn has_side(&self, side: OperationSide) -> bool {
        match side {
            OperationSide::Source => self.has_source,
            OperationSide::Destination => self.has_destination,
        }
    }

    /// Party kind expected on `side`, or `None` when the side is absent.
    #[must_use]
    pub fn party_kind(&self, side: OperationSide) -> Option<PartyKind> {
        if !self.has_side(side) {
            return None;
        }
        match side {
            OperationSide::Source => self.source_type,
            OperationSide::Destination => self.destination_type,
        }
    }

    /// Location tags restricting `side`. Empty when the side is absent or unrestricted.
    #[must_use]
    pub fn scope_tags(&self, side: OperationSide) -> BTreeSet<&str> {
        if !self.has_side(side) {
            return BTreeSet::new();
        }
        self.location_scopes
            .iter()
            .filter(|scope| match side {
                OperationSide::Source => scope.is_source,
                OperationSide::Destination => scope.is_destination,
            })
            .map(|scope| scope.location_tag.as_str())
            .collect()
    }
}

/// A source or destination actor: either a location or an external stock source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub uuid: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_source_uuid: Option<Uuid>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Party {
    /// Whether the party carries at least one of `tags`.
    #[must_use]
    pub fn has_any_tag(&self, tags: &BTreeSet<&str>) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag.as_str()))
    }
}

/// Operation types the user may view and create.
///
/// Both lists follow catalog order and hold each operation type at most once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationTypeAuthorization {
    pub viewable: Vec<OperationType>,
    pub creatable: Vec<OperationType>,
}

impl OperationTypeAuthorization {
    #[must_use]
    pub fn can_view(&self, operation_type_uuid: Uuid) -> bool {
        self.viewable.iter().any(|op| op.uuid == operation_type_uuid)
    }

    #[must_use]
    pub fn can_create(&self, operation_type_uuid: Uuid) -> bool {
        self.creatable.iter().any(|op| op.uuid == operation_type_uuid)
    }
}

/// Identifies an existing (or draft) stock operation for a permission check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OperationPermissionRequest {
    pub operation_type_uuid: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location_uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_location_uuid: Option<Uuid>,
}

/// Actions the user may take on a single stock operation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)] // one flag per UI action
pub struct OperationPermissions {
    pub can_view: bool,
    pub can_edit: bool,
    pub can_approve: bool,
    pub can_receive_items: bool,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn transfer_out() -> OperationType {
        serde_json::from_value(json!({
            "uuid": "11111111-1111-1111-1111-111111111111",
            "name": "Transfer Out",
            "operationType": "transferout",
            "hasSource": true,
            "sourceType": "Location",
            "hasDestination": true,
            "destinationType": "Location",
            "locationScopes": [
                { "locationTag": "Main Pharmacy", "isSource": true },
                { "locationTag": "Dispensary", "isDestination": true },
                { "locationTag": "Main Store", "isSource": true, "isDestination": true }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn operation_type_deserializes_from_rest_payload() {
        let op = transfer_out();
        assert_eq!(op.operation_type, "transferout");
        assert_eq!(op.source_type, Some(PartyKind::Location));
        assert_eq!(op.location_scopes.len(), 3);
        assert!(!op.location_scopes[0].is_destination);
    }

    #[test]
    fn scope_tags_are_split_by_side() {
        let op = transfer_out();
        assert_eq!(
            op.scope_tags(OperationSide::Source),
            BTreeSet::from(["Main Pharmacy", "Main Store"])
        );
        assert_eq!(
            op.scope_tags(OperationSide::Destination),
            BTreeSet::from(["Dispensary", "Main Store"])
        );
    }

    #[test]
    fn absent_side_ignores_its_scopes() {
        let mut op = transfer_out();
        op.has_destination = false;

        assert!(op.scope_tags(OperationSide::Destination).is_empty());
        assert_eq!(op.party_kind(OperationSide::Destination), None);
        assert_eq!(op.party_kind(OperationSide::Source), Some(PartyKind::Location));
    }

    #[test]
    fn grant_builder_narrows_scope() {
        let op = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();
        let loc = Uuid::parse_str("22222222-2222-2222-2222-222222222222").unwrap();

        let grant = PrivilegeGrant::new("mutate")
            .for_operation_type(op)
            .at_location(loc);

        assert_eq!(grant.operation_type_uuid, Some(op));
        assert_eq!(grant.location_uuid, Some(loc));
        assert_eq!(grant.party_uuid, None);

        let value = serde_json::to_value(&grant).unwrap();
        assert_eq!(value["operationTypeUuid"], json!(op.to_string()));
        assert!(value.get("partyUuid").is_none());
    }

    #[test]
    fn party_tag_overlap() {
        let party: Party = serde_json::from_value(json!({
            "uuid": "33333333-3333-3333-3333-333333333333",
            "locationUuid": "22222222-2222-2222-2222-222222222222",
            "tags": ["Main Pharmacy", "Dispensary"]
        }))
        .unwrap();

        assert!(party.has_any_tag(&BTreeSet::from(["Dispensary"])));
        assert!(!party.has_any_tag(&BTreeSet::from(["Main Store"])));
        assert!(!party.has_any_tag(&BTreeSet::new()));
    }
}
