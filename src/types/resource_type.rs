//! Resource kinds and their static type descriptors.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use super::annotation::{Annotation, Annotations};

/// The kinds of provider objects normalized by the engine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    ToSchema,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResourceKind {
    User,
    Group,
    Role,
}

impl ResourceKind {
    /// Human readable name used in type descriptors.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Group => "Group",
            Self::Role => "Role",
        }
    }

    /// The static descriptor for this kind.
    pub fn resource_type(&self) -> &'static ResourceType {
        match self {
            Self::User => &*USER_RESOURCE_TYPE,
            Self::Group => &*GROUP_RESOURCE_TYPE,
            Self::Role => &*ROLE_RESOURCE_TYPE,
        }
    }
}

/// Shape hints the harness uses when rendering a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceTrait {
    User,
    Group,
    Role,
}

/// Describes one resource type exposed to the harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResourceType {
    pub id: ResourceKind,
    pub display_name: String,
    pub traits: Vec<ResourceTrait>,
    #[serde(default, skip_serializing_if = "Annotations::is_empty")]
    pub annotations: Annotations,
}

impl ResourceType {
    fn new(id: ResourceKind, traits: Vec<ResourceTrait>) -> Self {
        Self {
            id,
            display_name: id.display_name().to_string(),
            traits,
            annotations: Annotations::default(),
        }
    }

    fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.update(annotation);
        self
    }
}

// Users are principals only; the harness never asks them for entitlements.
pub static USER_RESOURCE_TYPE: Lazy<ResourceType> = Lazy::new(|| {
    ResourceType::new(ResourceKind::User, vec![ResourceTrait::User])
        .with_annotation(Annotation::SkipEntitlementsAndGrants)
});

pub static GROUP_RESOURCE_TYPE: Lazy<ResourceType> =
    Lazy::new(|| ResourceType::new(ResourceKind::Group, vec![ResourceTrait::Group]));

pub static ROLE_RESOURCE_TYPE: Lazy<ResourceType> =
    Lazy::new(|| ResourceType::new(ResourceKind::Role, vec![ResourceTrait::Role]));

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use yare::parameterized;

    #[parameterized(
        user = { ResourceKind::User, "user", "User" },
        group = { ResourceKind::Group, "group", "Group" },
        role = { ResourceKind::Role, "role", "Role" },
    )]
    fn test_kind_string_forms(kind: ResourceKind, id: &str, display: &str) {
        assert_eq!(kind.as_ref(), id);
        assert_eq!(kind.to_string(), id);
        assert_eq!(ResourceKind::from_str(id).unwrap(), kind);
        assert_eq!(kind.display_name(), display);
        assert_eq!(kind.resource_type().id, kind);
        assert_eq!(kind.resource_type().display_name, display);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(ResourceKind::from_str("team").is_err());
    }

    #[test]
    fn test_only_users_skip_entitlements() {
        assert!(USER_RESOURCE_TYPE.annotations.skips_entitlements_and_grants());
        assert!(!GROUP_RESOURCE_TYPE.annotations.skips_entitlements_and_grants());
        assert!(!ROLE_RESOURCE_TYPE.annotations.skips_entitlements_and_grants());
    }

    #[test]
    fn test_descriptors_are_shared() {
        let first: *const ResourceType = ResourceKind::Group.resource_type();
        let second: *const ResourceType = &*GROUP_RESOURCE_TYPE;
        assert_eq!(first, second);
    }

    #[test]
    fn test_user_type_serialization() {
        insta::assert_json_snapshot!(&*USER_RESOURCE_TYPE, @r#"
        {
          "id": "user",
          "display_name": "User",
          "traits": [
            "user"
          ],
          "annotations": [
            "skip_entitlements_and_grants"
          ]
        }
        "#);
    }
}
