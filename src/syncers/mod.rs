//! One [`ResourceSyncer`](crate::traits::ResourceSyncer) per resource kind.
//!
//! Every query fetches fresh listings from the provider and correlates in
//! memory; nothing is cached between calls.

mod group;
mod role;
mod user;

pub use group::GroupSyncer;
pub use role::RoleSyncer;
pub use user::UserSyncer;

use itertools::Itertools;
use tracing::debug;

use crate::convert::convert_users;
use crate::error::{ConnectorError, ProviderOperation};
use crate::provider::ProviderClient;
use crate::types::{Grant, Resource};

/// Fetch and convert the full user listing, the candidate principals for grants.
pub(crate) fn candidate_users(client: &dyn ProviderClient) -> Result<Vec<Resource>, ConnectorError> {
    let raw = client
        .list_users()
        .map_err(ConnectorError::provider(ProviderOperation::ListUsers))?;
    let users = convert_users(&raw)?;
    debug!(event = "Grants", phase = "Candidates", users = users.len());
    Ok(users)
}

pub(crate) fn principal_ids(grants: &[Grant]) -> String {
    grants.iter().map(|g| &g.principal.resource).join(",")
}
