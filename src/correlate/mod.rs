//! Relationship inference between normalized resources.
//!
//! The provider data has no foreign keys linking users to groups or role
//! bindings to roles, so both correlators match on names. Neither ever emits
//! a grant for a principal outside the candidate user set it was given.

mod binding;
mod membership;

use std::collections::HashMap;

pub use binding::{BindingCorrelator, NameTokenCorrelator};
pub use membership::match_users_to_group;

use crate::types::Resource;

/// Candidate users indexed by display name, keeping listing order per name.
pub(crate) struct UsersByName<'a>(HashMap<&'a str, Vec<&'a Resource>>);

impl<'a> UsersByName<'a> {
    pub(crate) fn new(users: &'a [Resource]) -> Self {
        let mut index: HashMap<&str, Vec<&Resource>> = HashMap::with_capacity(users.len());
        for user in users {
            index.entry(user.display_name()).or_default().push(user);
        }
        Self(index)
    }

    /// Every candidate carrying `name`, in listing order.
    pub(crate) fn all(&self, name: &str) -> &[&'a Resource] {
        self.0.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// The first candidate carrying `name`.
    pub(crate) fn first(&self, name: &str) -> Option<&'a Resource> {
        self.all(name).first().copied()
    }
}
