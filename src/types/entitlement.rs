//! Entitlements owned by Group and Role resources.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::resource::{Resource, ResourceId};
use super::resource_type::ResourceKind;

/// The only entitlement slug the engine emits.
pub const MEMBER_ENTITLEMENT: &str = "member";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementPurpose {
    /// Holding the entitlement means being assigned to the resource.
    Assignment,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Entitlement {
    /// `<type>:<resource>:<slug>`
    pub id: String,
    pub resource: ResourceId,
    pub slug: String,
    pub display_name: String,
    pub description: String,
    pub grantable_to: Vec<ResourceKind>,
    pub purpose: EntitlementPurpose,
}

impl Entitlement {
    /// An assignment entitlement on `resource`, grantable to users only.
    pub fn assignment(
        resource: &Resource,
        slug: &str,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: entitlement_id(resource.id(), slug),
            resource: resource.id().clone(),
            slug: slug.to_string(),
            display_name: display_name.into(),
            description: description.into(),
            grantable_to: vec![ResourceKind::User],
            purpose: EntitlementPurpose::Assignment,
        }
    }

    pub fn is_grantable_to(&self, kind: ResourceKind) -> bool {
        self.grantable_to.contains(&kind)
    }
}

pub(crate) fn entitlement_id(resource: &ResourceId, slug: &str) -> String {
    format!("{resource}:{slug}")
}
