use tracing::debug;

use crate::provider::RawRoleBinding;
use crate::types::{Grant, MEMBER_ENTITLEMENT, Resource};

use super::UsersByName;

/// Decides which users hold a role, given the namespace's role bindings.
pub trait BindingCorrelator: Send + Sync {
    fn correlate(
        &self,
        role: &Resource,
        bindings: &[RawRoleBinding],
        users: &[Resource],
    ) -> Vec<Grant>;
}

/// Matches bindings to roles by a token embedded in the binding name.
///
/// For each binding:
/// 1. no subjects: not granted;
/// 2. split the name on `-`; fewer than two tokens: not granted;
/// 3. the second token must be a substring of the role's display name,
///    ignoring case;
/// 4. only the first subject is considered, and it must equal a candidate
///    user's display name (the first such candidate wins).
///
/// A binding yields at most one grant. A multiply matching name is accepted
/// for every role whose display name contains the token.
///
/// Only the token test ignores case, so `sa-deployers-binding` grants the
/// `Deployers` role. Subject names must match user names exactly.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameTokenCorrelator;

pub(crate) const BINDING_NAME_DELIMITER: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotGranted {
    NoSubjects,
    UnstructuredName,
    TokenMismatch,
    UnknownSubject,
}

enum BindingMatch<'a> {
    Granted(&'a Resource),
    RoleNotGranted(NotGranted),
}

impl NameTokenCorrelator {
    fn match_binding<'a>(
        role_name: &str,
        binding: &RawRoleBinding,
        users: &UsersByName<'a>,
    ) -> BindingMatch<'a> {
        let Some(subject) = binding.subjects.first() else {
            return BindingMatch::RoleNotGranted(NotGranted::NoSubjects);
        };

        let Some(token) = binding.name().split(BINDING_NAME_DELIMITER).nth(1) else {
            return BindingMatch::RoleNotGranted(NotGranted::UnstructuredName);
        };

        if !role_name.contains(&token.to_lowercase()) {
            return BindingMatch::RoleNotGranted(NotGranted::TokenMismatch);
        }

        match users.first(&subject.name) {
            Some(user) => BindingMatch::Granted(user),
            None => BindingMatch::RoleNotGranted(NotGranted::UnknownSubject),
        }
    }
}

impl BindingCorrelator for NameTokenCorrelator {
    fn correlate(
        &self,
        role: &Resource,
        bindings: &[RawRoleBinding],
        users: &[Resource],
    ) -> Vec<Grant> {
        let index = UsersByName::new(users);
        let role_name = role.display_name().to_lowercase();

        bindings
            .iter()
            .filter_map(|binding| match Self::match_binding(&role_name, binding, &index) {
                BindingMatch::Granted(user) => {
                    Some(Grant::new(role, MEMBER_ENTITLEMENT, user.id()))
                }
                BindingMatch::RoleNotGranted(reason) => {
                    debug!(
                        event = "Grants",
                        phase = "Binding",
                        role = role.id().to_string(),
                        binding = binding.name(),
                        reason = ?reason,
                        "role not granted"
                    );
                    None
                }
            })
            .collect()
    }
}
