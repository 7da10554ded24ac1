//! Normalized data model handed to the plugin harness.
//!
//! Identifier forms:
//! - Resource: `<type>:<id>`, e.g. `group:6f1e...`
//! - Entitlement: `<type>:<id>:<slug>`, e.g. `role:9a0b...:member`
//! - Grant: `<entitlement id>:<principal type>:<principal id>`

mod annotation;
mod entitlement;
mod grant;
mod page;
mod profile_value;
mod resource;
mod resource_type;

pub use annotation::{Annotation, Annotations};
pub use entitlement::{Entitlement, EntitlementPurpose, MEMBER_ENTITLEMENT};
pub use grant::{EntitlementRef, Grant};
pub use page::{Page, PageToken};
pub use profile_value::ProfileValue;
pub use resource::{Resource, ResourceId};
pub use resource_type::{
    GROUP_RESOURCE_TYPE, ROLE_RESOURCE_TYPE, ResourceKind, ResourceTrait, ResourceType,
    USER_RESOURCE_TYPE,
};
