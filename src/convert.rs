//! Record conversion: one provider record in, one normalized resource out.
//!
//! Plural conversions keep the input order and are all-or-nothing: the first
//! failing record aborts the call and is named in the error.

use crate::error::ConnectorError;
use crate::provider::{ObjectMeta, RawGroup, RawRole, RawUser};
use crate::traits::IntoResource;
use crate::types::{Annotation, Resource, ResourceKind};

impl IntoResource for RawUser {
    fn resource_kind() -> ResourceKind {
        ResourceKind::User
    }

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }

    // Users are only ever principals.
    fn to_resource(&self) -> Result<Resource, ConnectorError> {
        let meta = self.metadata();
        let resource = self.resource_profile().into_iter().fold(
            Resource::new(ResourceKind::User, meta.uid.as_str(), meta.name.as_str()),
            |res, (k, v)| res.with_profile(k, v),
        );
        Ok(resource
            .with_created_at(meta.creation_timestamp)
            .with_annotation(Annotation::SkipEntitlementsAndGrants))
    }
}

impl IntoResource for RawGroup {
    fn resource_kind() -> ResourceKind {
        ResourceKind::Group
    }

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

impl IntoResource for RawRole {
    fn resource_kind() -> ResourceKind {
        ResourceKind::Role
    }

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}

/// Convert every record, failing on the first error.
pub fn convert_all<T: IntoResource>(records: &[T]) -> Result<Vec<Resource>, ConnectorError> {
    records
        .iter()
        .map(|record| {
            record.to_resource().map_err(|e| ConnectorError::Conversion {
                id: record.metadata().uid.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}

pub fn convert_user(user: &RawUser) -> Result<Resource, ConnectorError> {
    user.to_resource()
}

pub fn convert_users(users: &[RawUser]) -> Result<Vec<Resource>, ConnectorError> {
    convert_all(users)
}

pub fn convert_group(group: &RawGroup) -> Result<Resource, ConnectorError> {
    group.to_resource()
}

pub fn convert_groups(groups: &[RawGroup]) -> Result<Vec<Resource>, ConnectorError> {
    convert_all(groups)
}

pub fn convert_role(role: &RawRole) -> Result<Resource, ConnectorError> {
    role.to_resource()
}

pub fn convert_roles(roles: &[RawRole]) -> Result<Vec<Resource>, ConnectorError> {
    convert_all(roles)
}
