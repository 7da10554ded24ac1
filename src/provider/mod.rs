//! The provider client boundary.
//!
//! The engine consumes four listings. Each call is expected to return a
//! complete, internally consistent snapshot; pagination of the underlying
//! API is the client's business.

mod records;
mod snapshot;

pub use records::{
    ObjectMeta, PolicyRule, RawGroup, RawRole, RawRoleBinding, RawUser, RoleRef, Subject,
};
pub use snapshot::{ProviderSnapshot, SnapshotProvider};

use crate::error::ProviderError;

/// Read access to the identity provider.
pub trait ProviderClient: Send + Sync {
    fn list_users(&self) -> Result<Vec<RawUser>, ProviderError>;

    fn list_groups(&self) -> Result<Vec<RawGroup>, ProviderError>;

    fn list_roles(&self, namespace: &str) -> Result<Vec<RawRole>, ProviderError>;

    fn list_role_bindings(&self, namespace: &str) -> Result<Vec<RawRoleBinding>, ProviderError>;
}
