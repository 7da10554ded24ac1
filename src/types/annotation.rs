//! Markers attached to resources, resource types and pages.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    /// The resource never owns entitlements, so the harness should not ask for them.
    SkipEntitlementsAndGrants,
}

/// An ordered set of annotations. Updating with an annotation already present is a no-op.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Annotations(Vec<Annotation>);

impl Annotations {
    pub fn update(&mut self, annotation: Annotation) {
        if !self.0.contains(&annotation) {
            self.0.push(annotation);
        }
    }

    pub fn contains(&self, annotation: Annotation) -> bool {
        self.0.contains(&annotation)
    }

    pub fn skips_entitlements_and_grants(&self) -> bool {
        self.contains(Annotation::SkipEntitlementsAndGrants)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.0.iter()
    }
}
