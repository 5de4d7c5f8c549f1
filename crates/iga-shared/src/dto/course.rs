use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub id: String,
    pub course_name: String,
    pub course_description: Option<String>,
    pub price: f64,
    pub duration_in_hours: u32,
    pub instructor_name: Option<String>,
    pub rating: Option<f64>,
    #[serde(alias = "enrolledStudents")]
    pub enrollment_count: Option<u64>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

/// A student enrolled in one of the instructor's courses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseStudent {
    pub id: Option<String>,
    pub student_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub student_name: Option<String>,
    pub email: Option<String>,
    pub enrollment_date: Option<String>,
    pub progress: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseAnalytics {
    pub course_id: Option<String>,
    pub course_name: Option<String>,
    pub total_students: u64,
    pub active_students: u64,
    pub completed_students: u64,
    pub completion_rate: f64,
    pub average_progress: f64,
    pub total_revenue: f64,
}
