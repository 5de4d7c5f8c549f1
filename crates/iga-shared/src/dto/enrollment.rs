use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Progress {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Dropped,
}

impl Progress {
    pub fn as_str(&self) -> &'static str {
        match self {
            Progress::NotStarted => "NOT_STARTED",
            Progress::InProgress => "IN_PROGRESS",
            Progress::Completed => "COMPLETED",
            Progress::Dropped => "DROPPED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "NOT_STARTED" => Some(Progress::NotStarted),
            "IN_PROGRESS" => Some(Progress::InProgress),
            "COMPLETED" => Some(Progress::Completed),
            "DROPPED" => Some(Progress::Dropped),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Enrollment {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub course_description: Option<String>,
    pub instructor_name: Option<String>,
    pub student_id: Option<String>,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub enrollment_date: Option<String>,
    pub completion_date: Option<String>,
    pub progress: Progress,
    pub course_price: Option<f64>,
    pub course_image_url: Option<String>,
    pub course_duration_in_hours: Option<u32>,
}

/// Course-shaped projection of an enrollment for "my courses" listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub course_name: String,
    pub description: Option<String>,
    pub instructor_name: Option<String>,
    pub enrollment_date: Option<String>,
    pub progress: Progress,
}

impl From<&Enrollment> for EnrolledCourse {
    fn from(e: &Enrollment) -> Self {
        Self {
            id: e.course_id.clone(),
            course_id: e.course_id.clone(),
            title: e.course_name.clone(),
            course_name: e.course_name.clone(),
            description: e.course_description.clone(),
            instructor_name: e.instructor_name.clone(),
            enrollment_date: e.enrollment_date.clone(),
            progress: e.progress,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollmentStatistics {
    pub total_enrollments: u64,
    pub active_enrollments: u64,
    pub completed_enrollments: u64,
    pub in_progress_enrollments: u64,
    pub dropped_enrollments: u64,
    pub completion_rate: f64,
    pub most_popular_course: Option<String>,
    pub least_popular_course: Option<String>,
    pub total_students: u64,
}
