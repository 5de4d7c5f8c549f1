use serde::{Deserialize, Serialize};

use super::content::AssignmentType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    pub id: String,
    pub assignment_id: Option<String>,
    pub assignment_title: Option<String>,
    pub student_id: Option<String>,
    pub student_name: Option<String>,
    pub submission_file: Option<String>,
    pub feedback: Option<String>,
    pub submitted_at: Option<String>,
    pub grade: Option<f64>,
    pub graded_at: Option<String>,
    pub is_graded: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionStatistics {
    pub total_submissions: u64,
    pub graded_submissions: u64,
    pub ungraded_submissions: u64,
    pub late_submissions: u64,
    pub average_grade: Option<f64>,
}

/// Body of grade create and update; feedback is always sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRequest {
    pub submission_id: String,
    pub points_awarded: u32,
    #[serde(default)]
    pub feedback: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Grade {
    pub grade_id: String,
    pub assignment_id: Option<String>,
    pub assignment_title: Option<String>,
    pub points_awarded: Option<f64>,
    pub max_points: Option<f64>,
    pub percentage: Option<f64>,
    pub feedback: Option<String>,
    pub graded_at: Option<String>,
    pub assignment_type: Option<AssignmentType>,
}
