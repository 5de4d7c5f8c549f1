use serde::{Deserialize, Serialize};

/// Account role as stored in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Instructor => "INSTRUCTOR",
            Role::Admin => "ADMIN",
        }
    }

    /// Client-side route of this role's login page.
    pub fn login_path(&self) -> &'static str {
        match self {
            Role::Student => "/student/login",
            Role::Instructor => "/coach/login",
            Role::Admin => "/admin/login",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "STUDENT" => Some(Role::Student),
            "INSTRUCTOR" | "COACH" => Some(Role::Instructor),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instructor account gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Pending,
    Approved,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "PENDING",
            ApprovalStatus::Approved => "APPROVED",
        }
    }

    /// Anything the backend does not call `APPROVED` is treated as pending.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("APPROVED") {
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Pending
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Profile update; a blank password is left out of the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateStudentProfileRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.filter(|p| !p.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructorData {
    pub phone_number: Option<String>,
    pub area_of_experience: Option<String>,
    pub year_of_experience: Option<String>,
    pub profession_bio: Option<String>,
    pub resume_url: Option<String>,
    pub certificate_url: Option<String>,
    pub image_url: Option<String>,
    pub approval_status: Option<String>,
}

/// Profile shape shared by the student, instructor and admin endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub created_at: Option<String>,
    pub instructor_data: Option<InstructorData>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn approval_status(&self) -> ApprovalStatus {
        self.instructor_data
            .as_ref()
            .and_then(|data| data.approval_status.as_deref())
            .map(ApprovalStatus::parse)
            .unwrap_or(ApprovalStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_login_paths() {
        assert_eq!(Role::Student.login_path(), "/student/login");
        assert_eq!(Role::Instructor.login_path(), "/coach/login");
        assert_eq!(Role::Admin.login_path(), "/admin/login");
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("guest"), None);
    }

    #[test]
    fn test_blank_password_is_not_sent() {
        let req = UpdateStudentProfileRequest::new("Ada", "L", "ada@example.com", Some("  ".into()));
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["firstName"], "Ada");
    }

    #[test]
    fn test_profile_approval_defaults_to_pending() {
        let profile: UserProfile = serde_json::from_str(r#"{"firstName":"Jo"}"#).unwrap();
        assert_eq!(profile.approval_status(), ApprovalStatus::Pending);
        assert_eq!(profile.full_name(), "Jo");

        let approved: UserProfile =
            serde_json::from_str(r#"{"instructorData":{"approvalStatus":"APPROVED"}}"#).unwrap();
        assert_eq!(approved.approval_status(), ApprovalStatus::Approved);
    }
}
