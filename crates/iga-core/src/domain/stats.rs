//! Aggregations behind the student dashboards.

use std::collections::BTreeMap;

use serde::Serialize;

use iga_shared::dto::{EnrolledCourse, Enrollment, Grade, Progress};

use super::format::round2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStats {
    pub total_enrollments: u64,
    pub active_enrollments: usize,
    pub completed_enrollments: usize,
    pub not_started_enrollments: usize,
}

impl EnrollmentStats {
    /// `total` is the backend's overall count; the per-progress counts cover
    /// only the fetched enrollments.
    pub fn from_enrollments(total: u64, enrollments: &[Enrollment]) -> Self {
        let count = |progress: Progress| enrollments.iter().filter(|e| e.progress == progress).count();
        Self {
            total_enrollments: total,
            active_enrollments: count(Progress::InProgress),
            completed_enrollments: count(Progress::Completed),
            not_started_enrollments: count(Progress::NotStarted),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseGradeStats {
    pub course_id: String,
    pub course_name: String,
    pub grades_count: usize,
    pub average_grade: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingSummary {
    pub total_assignments: usize,
    pub graded_assignments: usize,
    pub ungraded_assignments: usize,
    pub average_grade: f64,
    pub total_courses: usize,
}

fn mean_percentage(grades: &[&Grade]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    grades.iter().map(|g| g.percentage.unwrap_or(0.0)).sum::<f64>() / grades.len() as f64
}

pub fn grading_summary(overall: &BTreeMap<String, Vec<Grade>>) -> GradingSummary {
    let all: Vec<&Grade> = overall.values().flatten().collect();
    let graded = all.iter().filter(|g| g.points_awarded.is_some()).count();

    GradingSummary {
        total_assignments: all.len(),
        graded_assignments: graded,
        ungraded_assignments: all.len() - graded,
        average_grade: round2(mean_percentage(&all)),
        total_courses: overall.len(),
    }
}

/// Per-course averages. The backend percentage wins over the computed mean;
/// names come from the enrolled courses, else `Course <id>`.
pub fn course_grade_stats(
    overall: &BTreeMap<String, Vec<Grade>>,
    percentages: &BTreeMap<String, f64>,
    courses: &[EnrolledCourse],
) -> Vec<CourseGradeStats> {
    overall
        .iter()
        .map(|(course_id, grades)| {
            let grades: Vec<&Grade> = grades.iter().collect();
            let average = mean_percentage(&grades);
            let course_name = courses
                .iter()
                .find(|c| &c.id == course_id || &c.course_id == course_id)
                .map(|c| c.title.clone())
                .unwrap_or_else(|| format!("Course {course_id}"));

            CourseGradeStats {
                course_id: course_id.clone(),
                course_name,
                grades_count: grades.len(),
                average_grade: average,
                percentage: percentages
                    .get(course_id)
                    .copied()
                    .filter(|p| *p != 0.0)
                    .unwrap_or(average),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(percentage: f64, graded: bool) -> Grade {
        Grade {
            grade_id: "g".into(),
            percentage: Some(percentage),
            points_awarded: graded.then_some(percentage / 10.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_enrollment_stats() {
        let mk = |progress| Enrollment {
            progress,
            ..Default::default()
        };
        let stats = EnrollmentStats::from_enrollments(
            12,
            &[mk(Progress::InProgress), mk(Progress::InProgress), mk(Progress::Completed), mk(Progress::Dropped)],
        );
        assert_eq!(stats.total_enrollments, 12);
        assert_eq!(stats.active_enrollments, 2);
        assert_eq!(stats.completed_enrollments, 1);
        assert_eq!(stats.not_started_enrollments, 0);
    }

    #[test]
    fn test_grading_summary_rounds_average() {
        let mut overall = BTreeMap::new();
        overall.insert("c1".to_string(), vec![grade(90.0, true), grade(85.333, true)]);
        overall.insert("c2".to_string(), vec![grade(70.0, false)]);

        let summary = grading_summary(&overall);
        assert_eq!(summary.total_assignments, 3);
        assert_eq!(summary.graded_assignments, 2);
        assert_eq!(summary.ungraded_assignments, 1);
        assert_eq!(summary.average_grade, 81.78);
        assert_eq!(summary.total_courses, 2);
    }

    #[test]
    fn test_course_stats_names_and_percentages() {
        let mut overall = BTreeMap::new();
        overall.insert("c1".to_string(), vec![grade(80.0, true)]);
        overall.insert("c2".to_string(), vec![grade(60.0, true)]);
        let mut percentages = BTreeMap::new();
        percentages.insert("c2".to_string(), 65.0);
        let courses = vec![EnrolledCourse {
            id: "c1".into(),
            course_id: "c1".into(),
            title: "Rust 101".into(),
            course_name: "Rust 101".into(),
            description: None,
            instructor_name: None,
            enrollment_date: None,
            progress: Progress::InProgress,
        }];

        let stats = course_grade_stats(&overall, &percentages, &courses);
        assert_eq!(stats[0].course_name, "Rust 101");
        assert_eq!(stats[0].percentage, 80.0);
        assert_eq!(stats[1].course_name, "Course c2");
        assert_eq!(stats[1].percentage, 65.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = grading_summary(&BTreeMap::new());
        assert_eq!(summary, GradingSummary::default());
    }
}
