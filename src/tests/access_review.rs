use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::{
    AccessGraph, ConnectorConfig, Grant, ResourceKind, ResourceSyncer, SnapshotProvider,
};

const CLUSTER: &str = include_str!("fixtures/cluster.json");

fn graph() -> AccessGraph {
    let provider = SnapshotProvider::from_json_str(CLUSTER).unwrap();
    AccessGraph::new(ConnectorConfig::new("payments"), Arc::new(provider)).unwrap()
}

/// Walks every syncer the way the harness does and returns
/// `(resource, entitlement, principal)` rows by display name.
fn review(graph: &AccessGraph) -> Vec<(String, String, String)> {
    let users = graph.users().list(None, None).unwrap().items;
    let user_names: HashMap<_, _> = users
        .iter()
        .map(|u| (u.id().clone(), u.display_name().to_string()))
        .collect();

    let mut rows = Vec::new();
    for syncer in graph.syncers() {
        let page = syncer.list(None, None).unwrap();
        assert!(page.is_last());

        for resource in &page.items {
            let entitlements = syncer.entitlements(resource, None).unwrap().items;
            let grants: Vec<Grant> = syncer.grants(resource, None).unwrap().items;

            if resource.kind() == ResourceKind::User {
                assert!(entitlements.is_empty());
                assert!(grants.is_empty());
                continue;
            }

            assert_eq!(entitlements.len(), 1);
            let entitlement = &entitlements[0];
            for grant in &grants {
                assert!(grant.id.starts_with(&entitlement.id));
                assert_eq!(grant.entitlement.resource, entitlement.resource);
                let principal = user_names
                    .get(&grant.principal)
                    .unwrap_or_else(|| panic!("grant for unlisted principal {}", grant.principal));
                rows.push((
                    resource.display_name().to_string(),
                    entitlement.display_name.clone(),
                    principal.clone(),
                ));
            }
        }
    }
    rows
}

fn row(resource: &str, entitlement: &str, principal: &str) -> (String, String, String) {
    (
        resource.to_string(),
        entitlement.to_string(),
        principal.to_string(),
    )
}

#[test]
fn test_access_review_rows() {
    let rows = review(&graph());
    assert_eq!(
        rows,
        vec![
            row("platform-admins", "platform-admins Group member", "alice"),
            row("developers", "developers Group member", "bob"),
            row("developers", "developers Group member", "carol"),
            row("developers", "developers Group member", "alice"),
            row("payments-deployer", "payments-deployer Role member", "alice"),
            row("payments-auditor", "payments-auditor Role member", "carol"),
        ]
    );
}

#[test]
fn test_access_review_is_idempotent() {
    let graph = graph();
    let first = review(&graph);
    let second = review(&graph);
    assert_eq!(first, second);

    let unique: BTreeSet<_> = first.iter().collect();
    assert_eq!(unique.len(), first.len());
}

#[test]
fn test_unmatched_names_are_silently_dropped() {
    // "dave" is a group member and a binding subject but not a listed user;
    // the pullers binding has a token no role contains.
    let rows = review(&graph());
    assert!(rows.iter().all(|(_, _, principal)| principal != "dave"));
    assert!(rows.iter().all(|(_, _, principal)| !principal.starts_with("system:")));
}

#[test]
fn test_other_namespace_has_no_roles() {
    let provider = SnapshotProvider::from_json_str(CLUSTER).unwrap();
    let graph = AccessGraph::new(ConnectorConfig::default(), Arc::new(provider)).unwrap();
    assert!(graph.roles().list(None, None).unwrap().items.is_empty());

    let rows = review(&graph);
    assert!(rows.iter().all(|(_, entitlement, _)| entitlement.ends_with("Group member")));
}
