//! Operation-type authorization rules.
//!
//! Pure functions over immutable catalog snapshots. Nothing here performs I/O
//! or fails: missing data resolves to an empty result (default-deny).
//!
//! Results keep catalog order and hold each operation type once, so permuting
//! any input yields a set-equal result.

use std::collections::HashSet;

use stock_operation_authz_sdk::{
    OperationPermissionRequest, OperationPermissions, OperationSide, OperationType, Party,
    PartyKind, PrivilegeGrant, operation_codes, privileges,
};
use tracing::trace;
use uuid::Uuid;

/// Inputs of the creatable-types rule that come from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationPolicy {
    /// Privilege required to create stock operations.
    pub mutate_privilege: String,
    /// When `false`, stock issue operation types are never creatable.
    pub allow_stock_issue_without_requisition: bool,
    /// Codes identifying stock issue variants (compared case-insensitively).
    pub stock_issue_codes: Vec<String>,
}

impl Default for CreationPolicy {
    fn default() -> Self {
        Self {
            mutate_privilege: privileges::MUTATE_STOCK_OPERATIONS.to_owned(),
            allow_stock_issue_without_requisition: true,
            stock_issue_codes: vec![operation_codes::STOCK_ISSUE.to_owned()],
        }
    }
}

impl CreationPolicy {
    #[must_use]
    pub fn is_stock_issue(&self, operation_type: &OperationType) -> bool {
        self.stock_issue_codes
            .iter()
            .any(|code| code.eq_ignore_ascii_case(&operation_type.operation_type))
    }
}

/// Privilege names consulted by [`operation_permissions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionPrivileges {
    pub view: String,
    pub mutate: String,
    pub approve: String,
    pub receive_items: String,
}

impl Default for PermissionPrivileges {
    fn default() -> Self {
        Self {
            view: privileges::VIEW_STOCK_OPERATIONS.to_owned(),
            mutate: privileges::MUTATE_STOCK_OPERATIONS.to_owned(),
            approve: privileges::APPROVE_STOCK_OPERATIONS.to_owned(),
            receive_items: privileges::RECEIVE_ITEMS.to_owned(),
        }
    }
}

/// Operation types referenced by any grant, regardless of privilege.
///
/// Grants without an operation type do not count: a user holding only
/// unscoped grants sees nothing.
#[must_use]
pub fn resolve_viewable_operation_types(
    grants: &[PrivilegeGrant],
    operation_types: &[OperationType],
) -> Vec<OperationType> {
    let granted: HashSet<Uuid> = grants.iter().filter_map(|g| g.operation_type_uuid).collect();
    if granted.is_empty() {
        return Vec::new();
    }

    unique_by_uuid(
        operation_types
            .iter()
            .filter(|op| granted.contains(&op.uuid)),
    )
}

/// Operation types the user may create.
///
/// An operation type is creatable when a mutate grant names it, it is not a
/// stock issue blocked by policy, and at least one party can act on its
/// checked side (see [`eligible_parties`]) at a location the grants name.
#[must_use]
pub fn resolve_creatable_operation_types(
    grants: &[PrivilegeGrant],
    operation_types: &[OperationType],
    parties: &[Party],
    policy: &CreationPolicy,
) -> Vec<OperationType> {
    let mutate_grants: Vec<&PrivilegeGrant> = grants
        .iter()
        .filter(|g| g.privilege == policy.mutate_privilege)
        .collect();
    let authorized: HashSet<Uuid> = mutate_grants
        .iter()
        .filter_map(|g| g.operation_type_uuid)
        .collect();
    if authorized.is_empty() {
        return Vec::new();
    }

    unique_by_uuid(
        operation_types
            .iter()
            .filter(|op| authorized.contains(&op.uuid))
            .filter(|op| {
                let blocked =
                    !policy.allow_stock_issue_without_requisition && policy.is_stock_issue(op);
                if blocked {
                    trace!(operation_type = %op.uuid, "stock issue without requisition disabled");
                }
                !blocked
            })
            .filter(|op| {
                let op_grants: Vec<&PrivilegeGrant> = mutate_grants
                    .iter()
                    .copied()
                    .filter(|g| g.operation_type_uuid == Some(op.uuid))
                    .collect();
                has_reachable_party(op, &op_grants, parties)
            }),
    )
}

/// Parties that may act on `side` of `operation_type`.
///
/// Location parties qualify when the side expects a location and either the
/// side has no tag scopes or the party carries one of the scoped tags. Stock
/// source parties qualify when the side expects `Other`.
#[must_use]
pub fn eligible_parties(
    operation_type: &OperationType,
    side: OperationSide,
    parties: &[Party],
) -> Vec<Party> {
    parties
        .iter()
        .filter(|party| is_eligible(operation_type, side, party))
        .cloned()
        .collect()
}

/// [`eligible_parties`] narrowed to what the user's mutate grants allow.
///
/// Without a mutate grant naming the operation type the result is empty.
/// Location parties must sit at a location one of those grants names.
#[must_use]
pub fn eligible_parties_for_user(
    operation_type: &OperationType,
    side: OperationSide,
    parties: &[Party],
    grants: &[PrivilegeGrant],
    mutate_privilege: &str,
) -> Vec<Party> {
    let op_grants: Vec<&PrivilegeGrant> = grants
        .iter()
        .filter(|g| {
            g.privilege == mutate_privilege && g.operation_type_uuid == Some(operation_type.uuid)
        })
        .collect();
    if op_grants.is_empty() {
        return Vec::new();
    }
    let locations: HashSet<Uuid> = op_grants.iter().filter_map(|g| g.location_uuid).collect();

    parties
        .iter()
        .filter(|party| is_eligible(operation_type, side, party))
        .filter(|party| match operation_type.party_kind(side) {
            Some(PartyKind::Location) => party
                .location_uuid
                .is_some_and(|location| locations.contains(&location)),
            _ => true,
        })
        .cloned()
        .collect()
}

/// Actions the user may take on one stock operation of `operation_type`.
///
/// Unlike the catalog resolvers, a grant without an operation type applies to
/// every operation type, and a grant without a location applies everywhere.
#[must_use]
pub fn operation_permissions(
    grants: &[PrivilegeGrant],
    operation_type: &OperationType,
    request: &OperationPermissionRequest,
    names: &PermissionPrivileges,
) -> OperationPermissions {
    let op_uuid = operation_type.uuid;
    let acting_location = if operation_type.has_source {
        request.source_location_uuid
    } else {
        request.destination_location_uuid
    };
    let holds = |privilege: &str, location: Option<Uuid>| {
        grants
            .iter()
            .any(|g| grant_applies(g, privilege, op_uuid, location))
    };

    OperationPermissions {
        can_view: grants.iter().any(|g| {
            g.operation_type_uuid == Some(op_uuid)
                || (g.privilege == names.view && g.operation_type_uuid.is_none())
        }),
        can_edit: holds(names.mutate.as_str(), acting_location),
        can_approve: holds(names.approve.as_str(), acting_location),
        can_receive_items: operation_type.has_destination
            && holds(names.receive_items.as_str(), request.destination_location_uuid),
    }
}

fn grant_applies(
    grant: &PrivilegeGrant,
    privilege: &str,
    operation_type_uuid: Uuid,
    location: Option<Uuid>,
) -> bool {
    grant.privilege == privilege
        && grant
            .operation_type_uuid
            .is_none_or(|uuid| uuid == operation_type_uuid)
        && grant
            .location_uuid
            .is_none_or(|granted| Some(granted) == location)
}

/// Locations the grants name for the first location-typed side.
struct RequiredLocations {
    side: OperationSide,
    locations: HashSet<Uuid>,
}

/// Source wins over destination when both sides expect a location.
/// Grants without a location keep the side active but match nothing.
fn required_locations(
    operation_type: &OperationType,
    op_grants: &[&PrivilegeGrant],
) -> Option<RequiredLocations> {
    let side = if operation_type.party_kind(OperationSide::Source) == Some(PartyKind::Location) {
        OperationSide::Source
    } else if operation_type.party_kind(OperationSide::Destination) == Some(PartyKind::Location) {
        OperationSide::Destination
    } else {
        return None;
    };

    Some(RequiredLocations {
        side,
        locations: op_grants.iter().filter_map(|g| g.location_uuid).collect(),
    })
}

fn has_reachable_party(
    operation_type: &OperationType,
    op_grants: &[&PrivilegeGrant],
    parties: &[Party],
) -> bool {
    let Some(required) = required_locations(operation_type, op_grants) else {
        trace!(operation_type = %operation_type.uuid, "no location-typed side");
        return false;
    };

    // Only one side is ever checked; the destination is skipped whenever a source exists.
    let side = if operation_type.has_source {
        OperationSide::Source
    } else {
        OperationSide::Destination
    };

    let reachable = parties
        .iter()
        .filter(|party| is_eligible(operation_type, side, party))
        .any(|party| {
            required.side != side
                || party
                    .location_uuid
                    .is_some_and(|location| required.locations.contains(&location))
        });
    if !reachable {
        trace!(operation_type = %operation_type.uuid, ?side, "no eligible party");
    }
    reachable
}

fn is_eligible(operation_type: &OperationType, side: OperationSide, party: &Party) -> bool {
    match operation_type.party_kind(side) {
        Some(PartyKind::Location) => {
            let tags = operation_type.scope_tags(side);
            party.location_uuid.is_some() && (tags.is_empty() || party.has_any_tag(&tags))
        }
        Some(PartyKind::Other) => party.stock_source_uuid.is_some(),
        None => false,
    }
}

fn unique_by_uuid<'a>(operation_types: impl Iterator<Item = &'a OperationType>) -> Vec<OperationType> {
    let mut seen = HashSet::new();
    operation_types
        .filter(|op| seen.insert(op.uuid))
        .cloned()
        .collect()
}
