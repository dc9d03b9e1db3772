//! Route guarding and navigation filtering
//!
//! The two consumers of the access evaluator: the route guard decides
//! whether a protected view renders or redirects, and the navigation
//! filter omits menu entries the user may not reach.

use tracing::debug;

use crate::evaluator::AccessEvaluator;
use crate::models::{Page, SessionUser};

/// Outcome of resolving a requested route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested page
    Render(Page),
    /// No session user; send to the login view
    RedirectLogin,
    /// Known user but access denied, or unknown route
    RedirectUnauthorized,
}

/// Resolves requested routes against the access evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard {
    evaluator: AccessEvaluator,
}

impl RouteGuard {
    /// Create a route guard
    pub fn new(evaluator: AccessEvaluator) -> Self {
        Self { evaluator }
    }

    /// Resolve a route tag for the given session user
    pub fn resolve(&self, user: Option<&SessionUser>, tag: &str) -> RouteDecision {
        let Some(user) = user else {
            debug!(route = tag, "no session user, redirecting to login");
            return RouteDecision::RedirectLogin;
        };

        match Page::from_tag(tag) {
            Some(page) if self.evaluator.has_access(Some(user), page) => {
                RouteDecision::Render(page)
            }
            Some(page) => {
                debug!(
                    route = tag,
                    role = %user.role,
                    "access denied for {}",
                    page
                );
                RouteDecision::RedirectUnauthorized
            }
            None => {
                debug!(route = tag, "unknown route requested");
                RouteDecision::RedirectUnauthorized
            }
        }
    }
}

/// A renderable menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
}

/// Menu entries the user may see; denied entries are omitted entirely
pub fn nav_items(evaluator: &AccessEvaluator, user: Option<&SessionUser>) -> Vec<NavItem> {
    evaluator
        .accessible_pages(user)
        .into_iter()
        .map(|page| NavItem {
            page,
            label: page.label(),
        })
        .collect()
}
