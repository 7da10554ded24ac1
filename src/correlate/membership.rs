use tracing::debug;

use crate::provider::RawGroup;
use crate::types::{Grant, MEMBER_ENTITLEMENT, Resource};

use super::UsersByName;

/// Grants `member` on `group` to every candidate user whose display name
/// equals one of the group's raw member names (exact, case-sensitive).
///
/// Every raw group whose uid equals the group resource id is scanned. Member
/// names with no candidate are dropped; a name shared by several candidates
/// grants all of them.
pub fn match_users_to_group(
    group: &Resource,
    raw_groups: &[RawGroup],
    users: &[Resource],
) -> Vec<Grant> {
    let index = UsersByName::new(users);
    let mut grants = Vec::new();

    for raw in raw_groups
        .iter()
        .filter(|raw| raw.metadata.uid == group.id().resource)
    {
        for member in &raw.users {
            let matches = index.all(member);
            if matches.is_empty() {
                debug!(
                    event = "Grants",
                    phase = "Membership",
                    group = group.id().to_string(),
                    member = member.as_str(),
                    "member not found among listed users"
                );
                continue;
            }
            for user in matches {
                grants.push(Grant::new(group, MEMBER_ENTITLEMENT, user.id()));
            }
        }
    }

    grants
}
