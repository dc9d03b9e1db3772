//! Access control data models

use serde::{Deserialize, Serialize};

/// Navigable dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Overview,
    Entities,
    InstitutionsAssessment,
    Assessment,
    Incidents,
    Maintenance,
    Facilities,
    TermDates,
    UserManagement,
    Reports,
    Backup,
    Settings,
}

impl Page {
    /// Every page, in menu declaration order
    pub const ALL: [Page; 12] = [
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
    ];

    /// Parse a page from its route tag
    pub fn from_tag(tag: &str) -> Option<Page> {
        match tag {
            "overview" => Some(Page::Overview),
            "entities" => Some(Page::Entities),
            "institutions_assessment" => Some(Page::InstitutionsAssessment),
            "assessment" => Some(Page::Assessment),
            "incidents" => Some(Page::Incidents),
            "maintenance" => Some(Page::Maintenance),
            "facilities" => Some(Page::Facilities),
            "term_dates" => Some(Page::TermDates),
            "user_management" => Some(Page::UserManagement),
            "reports" => Some(Page::Reports),
            "backup" => Some(Page::Backup),
            "settings" => Some(Page::Settings),
            _ => None,
        }
    }

    /// Get the route tag for this page
    pub fn tag(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Entities => "entities",
            Page::InstitutionsAssessment => "institutions_assessment",
            Page::Assessment => "assessment",
            Page::Incidents => "incidents",
            Page::Maintenance => "maintenance",
            Page::Facilities => "facilities",
            Page::TermDates => "term_dates",
            Page::UserManagement => "user_management",
            Page::Reports => "reports",
            Page::Backup => "backup",
            Page::Settings => "settings",
        }
    }

    /// Get the menu label for this page
    pub fn label(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Entities => "Institutions",
            Page::InstitutionsAssessment => "Institution Assessments",
            Page::Assessment => "Assessments",
            Page::Incidents => "Incidents",
            Page::Maintenance => "Maintenance",
            Page::Facilities => "Facilities",
            Page::TermDates => "Term Dates",
            Page::UserManagement => "User Management",
            Page::Reports => "Reports",
            Page::Backup => "Backup & Restore",
            Page::Settings => "Settings",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Fine-grained capability checked for custom roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewOverview,
    ViewEntities,
    CreateAssessment,
    ViewIncidents,
    ViewMaintenance,
    ViewFacilities,
    ViewTermDates,
    ViewUsers,
    ViewReports,
    ManageBackup,
    ManageSettings,
}

impl Permission {
    /// Parse a permission from its string tag
    pub fn from_tag(tag: &str) -> Option<Permission> {
        match tag {
            "view_overview" => Some(Permission::ViewOverview),
            "view_entities" => Some(Permission::ViewEntities),
            "create_assessment" => Some(Permission::CreateAssessment),
            "view_incidents" => Some(Permission::ViewIncidents),
            "view_maintenance" => Some(Permission::ViewMaintenance),
            "view_facilities" => Some(Permission::ViewFacilities),
            "view_term_dates" => Some(Permission::ViewTermDates),
            "view_users" => Some(Permission::ViewUsers),
            "view_reports" => Some(Permission::ViewReports),
            "manage_backup" => Some(Permission::ManageBackup),
            "manage_settings" => Some(Permission::ManageSettings),
            _ => None,
        }
    }

    /// Get the string tag for this permission
    pub fn tag(&self) -> &'static str {
        match self {
            Permission::ViewOverview => "view_overview",
            Permission::ViewEntities => "view_entities",
            Permission::CreateAssessment => "create_assessment",
            Permission::ViewIncidents => "view_incidents",
            Permission::ViewMaintenance => "view_maintenance",
            Permission::ViewFacilities => "view_facilities",
            Permission::ViewTermDates => "view_term_dates",
            Permission::ViewUsers => "view_users",
            Permission::ViewReports => "view_reports",
            Permission::ManageBackup => "manage_backup",
            Permission::ManageSettings => "manage_settings",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One of the three recognized built-in roles
///
/// Any role tag outside this set is a custom role and is checked against
/// the permission set on the user record instead of an allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinRole {
    MinistryAdmin,
    Agent,
    SchoolAdmin,
}

impl BuiltinRole {
    /// Parse a built-in role from its tag; `None` means custom role
    pub fn from_tag(tag: &str) -> Option<BuiltinRole> {
        match tag {
            "ministry_admin" => Some(BuiltinRole::MinistryAdmin),
            "agent" => Some(BuiltinRole::Agent),
            "school_admin" => Some(BuiltinRole::SchoolAdmin),
            _ => None,
        }
    }

    /// Get the role tag
    pub fn tag(&self) -> &'static str {
        match self {
            BuiltinRole::MinistryAdmin => "ministry_admin",
            BuiltinRole::Agent => "agent",
            BuiltinRole::SchoolAdmin => "school_admin",
        }
    }

    /// Get the role description
    pub fn description(&self) -> &'static str {
        match self {
            BuiltinRole::MinistryAdmin => "Ministry administrator with full dashboard access",
            BuiltinRole::Agent => "County or sub-county quality assurance agent",
            BuiltinRole::SchoolAdmin => "School-level administrator",
        }
    }
}

impl std::fmt::Display for BuiltinRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Authenticated user record supplied by the login flow
///
/// The record is trusted verbatim and only ever replaced whole; the
/// access evaluator never mutates it. `role` is an open-ended tag, not
/// an enum, because the system tolerates arbitrary custom role names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_code: Option<String>,
}

impl SessionUser {
    /// Create a user with a built-in role
    pub fn with_role(id: impl Into<String>, display_name: impl Into<String>, role: BuiltinRole) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: None,
            phone: None,
            role: role.tag().to_string(),
            permissions: None,
            institution_id: None,
            institution_name: None,
            county_code: None,
        }
    }

    /// Create a user with a custom role and explicit permission set
    pub fn with_permissions(
        id: impl Into<String>,
        display_name: impl Into<String>,
        role: impl Into<String>,
        permissions: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: None,
            phone: None,
            role: role.into(),
            permissions: Some(permissions),
            institution_id: None,
            institution_name: None,
            county_code: None,
        }
    }

    /// Get the built-in role for this user, if the role tag is recognized
    pub fn builtin_role(&self) -> Option<BuiltinRole> {
        BuiltinRole::from_tag(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_tag_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_tag(page.tag()), Some(page));
        }
    }

    #[test]
    fn test_page_unknown_tag() {
        assert_eq!(Page::from_tag("dashboard"), None);
        assert_eq!(Page::from_tag(""), None);
        assert_eq!(Page::from_tag("Overview"), None);
    }

    #[test]
    fn test_page_serde_tag_agreement() {
        for page in Page::ALL {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{}\"", page.tag()));
        }
    }

    #[test]
    fn test_permission_tag_round_trip() {
        let perms = [
            Permission::ViewOverview,
            Permission::ViewEntities,
            Permission::CreateAssessment,
            Permission::ViewIncidents,
            Permission::ViewMaintenance,
            Permission::ViewFacilities,
            Permission::ViewTermDates,
            Permission::ViewUsers,
            Permission::ViewReports,
            Permission::ManageBackup,
            Permission::ManageSettings,
        ];
        for perm in perms {
            assert_eq!(Permission::from_tag(perm.tag()), Some(perm));
        }
    }

    #[test]
    fn test_builtin_role_from_tag() {
        assert_eq!(
            BuiltinRole::from_tag("ministry_admin"),
            Some(BuiltinRole::MinistryAdmin)
        );
        assert_eq!(BuiltinRole::from_tag("agent"), Some(BuiltinRole::Agent));
        assert_eq!(
            BuiltinRole::from_tag("school_admin"),
            Some(BuiltinRole::SchoolAdmin)
        );
        assert_eq!(BuiltinRole::from_tag("inspector"), None);
        assert_eq!(BuiltinRole::from_tag(""), None);
    }

    #[test]
    fn test_session_user_builtin_role() {
        let user = SessionUser::with_role("u1", "Amina", BuiltinRole::SchoolAdmin);
        assert_eq!(user.builtin_role(), Some(BuiltinRole::SchoolAdmin));

        let custom = SessionUser::with_permissions(
            "u2",
            "Juma",
            "inspector",
            vec!["view_incidents".to_string()],
        );
        assert_eq!(custom.builtin_role(), None);
    }

    #[test]
    fn test_session_user_serialization_round_trip() {
        let mut user = SessionUser::with_role("u1", "Amina", BuiltinRole::Agent);
        user.email = Some("amina@example.org".to_string());
        user.county_code = Some("047".to_string());

        let json = serde_json::to_string(&user).unwrap();
        let restored: SessionUser = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_session_user_missing_permissions_deserializes() {
        let json = r#"{"id":"u3","display_name":"Neema","role":"inspector"}"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.permissions, None);
    }
}
