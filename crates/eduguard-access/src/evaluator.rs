//! Access decision logic

use crate::models::{BuiltinRole, Page, SessionUser};

/// Decides whether a session user may reach a page
///
/// Stateless and side-effect free: every call is a pure function of the
/// user record, the page, and the two static tables. There are no error
/// returns; anything not explicitly affirmed resolves to a denial.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessEvaluator;

impl AccessEvaluator {
    /// Create a new access evaluator
    pub fn new() -> Self {
        Self
    }

    /// Check whether `user` may reach `page`
    ///
    /// An absent user is always denied. A built-in role is tested against
    /// its allow-list only; its permission set is ignored even when
    /// present. Any other role is tested against the permission set on
    /// the record, and pages without a permission entry are denied.
    pub fn has_access(&self, user: Option<&SessionUser>, page: Page) -> bool {
        let Some(user) = user else {
            return false;
        };

        match BuiltinRole::from_tag(&user.role) {
            Some(role) => role.allowed_pages().contains(&page),
            None => match page.required_permission() {
                Some(required) => user
                    .permissions
                    .as_deref()
                    .is_some_and(|perms| perms.iter().any(|p| p == required.tag())),
                None => false,
            },
        }
    }

    /// Check access for a raw route tag; unknown tags are denied
    pub fn has_access_tag(&self, user: Option<&SessionUser>, tag: &str) -> bool {
        Page::from_tag(tag).is_some_and(|page| self.has_access(user, page))
    }

    /// All pages the user may reach, in menu declaration order
    pub fn accessible_pages(&self, user: Option<&SessionUser>) -> Vec<Page> {
        Page::ALL
            .into_iter()
            .filter(|page| self.has_access(user, *page))
            .collect()
    }
}
