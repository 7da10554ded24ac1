//! Pagination envelopes exchanged with the harness.
//!
//! The engine never paginates internally: every query answers with one full
//! page and no continuation token.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::annotation::Annotations;

/// A continuation request from the harness.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PageToken {
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Annotations::is_empty")]
    pub annotations: Annotations,
}

impl<T> Page<T> {
    /// A complete, final page.
    pub fn complete(items: Vec<T>) -> Self {
        Self {
            items,
            next_page_token: None,
            annotations: Annotations::default(),
        }
    }

    pub fn empty() -> Self {
        Self::complete(Vec::new())
    }

    pub fn is_last(&self) -> bool {
        self.next_page_token.is_none()
    }
}
