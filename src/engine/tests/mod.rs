use std::sync::{Arc, Mutex};

use super::*;
use crate::error::{ProviderError, ProviderOperation};
use crate::provider::{
    ProviderSnapshot, RawGroup, RawRole, RawRoleBinding, RawUser, SnapshotProvider,
};
use crate::types::{Grant, Resource};


const NAMESPACE: &str = "apps";

const TEST_SNAPSHOT: &str = r#"{
    "users": [
        { "metadata": { "uid": "u-alice", "name": "alice", "creationTimestamp": "2024-01-10T08:00:00Z" } },
        { "metadata": { "uid": "u-bob", "name": "bob" } },
        { "metadata": { "uid": "u-carol", "name": "carol", "annotations": { "team": "ops" } } }
    ],
    "groups": [
        { "metadata": { "uid": "g-admins", "name": "admins" }, "users": ["alice", "bob", "ghost"] },
        { "metadata": { "uid": "g-devs", "name": "devs" }, "users": ["carol"] },
        { "metadata": { "uid": "g-empty", "name": "empty" }, "users": [] }
    ],
    "roles": {
        "apps": [
            { "metadata": { "uid": "r-deployers", "name": "Deployers", "namespace": "apps" } },
            { "metadata": { "uid": "r-viewers", "name": "viewers", "namespace": "apps" } }
        ],
        "other": [
            { "metadata": { "uid": "r-other", "name": "deployers", "namespace": "other" } }
        ]
    },
    "roleBindings": {
        "apps": [
            { "metadata": { "name": "sa-deployers-binding" }, "subjects": [{ "kind": "User", "name": "alice" }] },
            { "metadata": { "name": "ci-deployers-x" }, "subjects": [{ "kind": "User", "name": "bob" }, { "kind": "User", "name": "carol" }] },
            { "metadata": { "name": "sa-viewers-rb" }, "subjects": [{ "kind": "User", "name": "carol" }] },
            { "metadata": { "name": "onlyonename" }, "subjects": [{ "kind": "User", "name": "bob" }] },
            { "metadata": { "name": "sa-admin-rb" }, "subjects": [] }
        ]
    }
}"#;

fn test_snapshot() -> ProviderSnapshot {
    crate::loader::load_snapshot(TEST_SNAPSHOT).unwrap()
}

/// Serves the test snapshot, failing one operation on demand and recording
/// every call it receives.
struct FaultyProvider {
    inner: SnapshotProvider,
    failing: Option<(ProviderOperation, ProviderError)>,
    calls: Mutex<Vec<ProviderOperation>>,
}

impl FaultyProvider {
    fn healthy() -> Self {
        Self {
            inner: SnapshotProvider::new(test_snapshot()),
            failing: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(operation: ProviderOperation, error: ProviderError) -> Self {
        Self {
            failing: Some((operation, error)),
            ..Self::healthy()
        }
    }

    fn calls(&self) -> Vec<ProviderOperation> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, operation: ProviderOperation) -> Result<(), ProviderError> {
        self.calls.lock().unwrap().push(operation);
        match &self.failing {
            Some((op, err)) if *op == operation => Err(err.clone()),
            _ => Ok(()),
        }
    }
}

impl ProviderClient for FaultyProvider {
    fn list_users(&self) -> Result<Vec<RawUser>, ProviderError> {
        self.check(ProviderOperation::ListUsers)?;
        self.inner.list_users()
    }

    fn list_groups(&self) -> Result<Vec<RawGroup>, ProviderError> {
        self.check(ProviderOperation::ListGroups)?;
        self.inner.list_groups()
    }

    fn list_roles(&self, namespace: &str) -> Result<Vec<RawRole>, ProviderError> {
        self.check(ProviderOperation::ListRoles)?;
        self.inner.list_roles(namespace)
    }

    fn list_role_bindings(&self, namespace: &str) -> Result<Vec<RawRoleBinding>, ProviderError> {
        self.check(ProviderOperation::ListRoleBindings)?;
        self.inner.list_role_bindings(namespace)
    }
}

fn graph_with(provider: Arc<FaultyProvider>) -> AccessGraph {
    AccessGraph::new(ConnectorConfig::new(NAMESPACE), provider).unwrap()
}

fn healthy_graph() -> AccessGraph {
    graph_with(Arc::new(FaultyProvider::healthy()))
}

fn find<'a>(resources: &'a [Resource], name: &str) -> &'a Resource {
    resources
        .iter()
        .find(|r| r.display_name() == name)
        .unwrap_or_else(|| panic!("no resource named {name}"))
}

fn principals(grants: &[Grant]) -> Vec<&str> {
    grants.iter().map(|g| g.principal.resource.as_str()).collect()
}

#[test]
fn test_new_rejects_missing_kube_config() {
    let config = ConnectorConfig::new(NAMESPACE).with_kube_config("/does/not/exist");
    let result = AccessGraph::new(config, Arc::new(FaultyProvider::healthy()));
    assert!(matches!(result, Err(ConnectorError::Config(_))));
}

#[test]
fn test_resource_types_in_order() {
    let graph = healthy_graph();
    let ids: Vec<ResourceKind> = graph.resource_types().iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        vec![ResourceKind::User, ResourceKind::Group, ResourceKind::Role]
    );
    for kind in ids {
        assert_eq!(graph.syncer(kind).resource_type().id, kind);
    }
    assert_eq!(graph.namespace(), NAMESPACE);
    assert_eq!(graph.roles().namespace(), NAMESPACE);
}
