//! Static access tables
//!
//! Two hand-maintained tables drive every access decision: a page
//! allow-list per built-in role, and a page-to-permission map for custom
//! roles. The lists overlap but are not derived from each other.
//!
//! The tables carry a known inconsistency from the dashboard they gate:
//! `entities` is permission-mapped yet absent from the agent allow-list,
//! and `institutions_assessment` is allow-listed but has no permission
//! entry, making it unreachable for custom roles. Both are kept as-is.

use crate::models::{BuiltinRole, Page, Permission};

impl BuiltinRole {
    /// Allow-listed pages for this role
    ///
    /// Membership in this list is the sole test for built-in roles; the
    /// permission set on the user record is never consulted.
    pub fn allowed_pages(&self) -> &'static [Page] {
        match self {
            BuiltinRole::MinistryAdmin => &[
                Page::Overview,
                Page::Entities,
                Page::InstitutionsAssessment,
                Page::Assessment,
                Page::Incidents,
                Page::Maintenance,
                Page::Facilities,
                Page::TermDates,
                Page::UserManagement,
                Page::Reports,
                Page::Backup,
                Page::Settings,
            ],
            BuiltinRole::Agent => &[
                Page::Overview,
                Page::InstitutionsAssessment,
                Page::Assessment,
                Page::Incidents,
                Page::Facilities,
                Page::TermDates,
                Page::UserManagement,
                Page::Reports,
            ],
            BuiltinRole::SchoolAdmin => &[
                Page::Overview,
                Page::Assessment,
                Page::Incidents,
                Page::Maintenance,
                Page::Facilities,
                Page::TermDates,
                Page::UserManagement,
                Page::Reports,
            ],
        }
    }
}

impl Page {
    /// Permission required to reach this page on the custom-role path
    ///
    /// `None` means the page is not reachable for custom roles at all.
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            Page::Overview => Some(Permission::ViewOverview),
            Page::Entities => Some(Permission::ViewEntities),
            Page::InstitutionsAssessment => None,
            Page::Assessment => Some(Permission::CreateAssessment),
            Page::Incidents => Some(Permission::ViewIncidents),
            Page::Maintenance => Some(Permission::ViewMaintenance),
            Page::Facilities => Some(Permission::ViewFacilities),
            Page::TermDates => Some(Permission::ViewTermDates),
            Page::UserManagement => Some(Permission::ViewUsers),
            Page::Reports => Some(Permission::ViewReports),
            Page::Backup => Some(Permission::ManageBackup),
            Page::Settings => Some(Permission::ManageSettings),
        }
    }
}
