// src/lib.rs
pub use config::{ConnectorConfig, DEFAULT_NAMESPACE};
pub use convert::{
    convert_all, convert_group, convert_groups, convert_role, convert_roles, convert_user,
    convert_users,
};
pub use correlate::{BindingCorrelator, NameTokenCorrelator, match_users_to_group};
pub use engine::AccessGraph;
pub use error::{ConnectorError, ProviderError, ProviderOperation};
pub use loader::load_snapshot;
pub use provider::{
    ObjectMeta, PolicyRule, ProviderClient, ProviderSnapshot, RawGroup, RawRole, RawRoleBinding,
    RawUser, RoleRef, SnapshotProvider, Subject,
};
pub use syncers::{GroupSyncer, RoleSyncer, UserSyncer};
pub use traits::{IntoResource, ResourceSyncer};
pub use types::{
    Annotation, Annotations, Entitlement, EntitlementPurpose, EntitlementRef, GROUP_RESOURCE_TYPE,
    Grant, MEMBER_ENTITLEMENT, Page, PageToken, ProfileValue, ROLE_RESOURCE_TYPE, Resource,
    ResourceId, ResourceKind, ResourceTrait, ResourceType, USER_RESOURCE_TYPE,
};

mod config;
mod convert;
mod correlate;
mod engine;
mod error;
mod loader;
mod provider;
mod syncers;
mod traits;
mod types;

#[cfg(test)]
mod tests;
