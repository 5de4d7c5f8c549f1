//! Keys under which the session lives in the [`SessionStore`](crate::ports::SessionStore).

pub const AUTH_TOKEN: &str = "authtoken";
pub const USER_ROLE: &str = "userRole";
pub const STUDENT_PROFILE: &str = "studentProfile";
pub const APPROVAL_STATUS: &str = "approvalStatus";
pub const USER_INFO: &str = "userInfo";

/// Every key removed by a session teardown.
pub const ALL: [&str; 5] = [AUTH_TOKEN, USER_ROLE, STUDENT_PROFILE, APPROVAL_STATUS, USER_INFO];
