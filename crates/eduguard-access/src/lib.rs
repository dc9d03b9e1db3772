//! Access evaluation for the EduGuard dashboard
//!
//! Decides whether a session user may navigate to a page. Built-in roles
//! carry a hand-maintained page allow-list; any other role is checked
//! against the permission set on the user record. Every code path
//! terminates in a boolean, so callers never need error handling around
//! an access check.

pub mod evaluator;
pub mod guard;
pub mod models;
pub mod tables;

pub use evaluator::AccessEvaluator;
pub use guard::{nav_items, NavItem, RouteDecision, RouteGuard};
pub use models::{BuiltinRole, Page, Permission, SessionUser};
