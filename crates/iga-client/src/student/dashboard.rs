use std::collections::BTreeMap;

use futures::{join, try_join};
use serde::Serialize;

use iga_core::ClientError;
use iga_core::domain::stats::{
    CourseGradeStats, EnrollmentStats, GradingSummary, course_grade_stats, grading_summary,
};
use iga_shared::dto::{Enrollment, Grade, PaymentHistoryItem, UserProfile};

use super::StudentApi;

const RECENT: u32 = 5;
const PAYMENT_METHODS: [&str; 1] = ["FLUTTERWAVE"];
const SUPPORTED_CURRENCIES: [&str; 3] = ["RWF", "USD", "EUR"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDashboard {
    pub payment_history: Vec<PaymentHistoryItem>,
    pub total_payments: u64,
    pub user_profile: UserProfile,
    pub payment_methods: Vec<String>,
    pub supported_currencies: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDashboard {
    pub enrollments: Vec<Enrollment>,
    pub enrollment_stats: EnrollmentStats,
    pub total_enrollments: u64,
    pub user_profile: UserProfile,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingDashboard {
    pub overall_grades: BTreeMap<String, Vec<Grade>>,
    pub grade_percentages: BTreeMap<String, f64>,
    pub course_stats: Vec<CourseGradeStats>,
    pub summary: GradingSummary,
}

fn or_empty<T: Default>(section: &str, result: Result<T, ClientError>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(section, error = %e, "Dashboard section unavailable");
        T::default()
    })
}

impl StudentApi {
    /// Recent payments and the profile, fetched concurrently.
    pub async fn payment_dashboard(&self) -> Result<PaymentDashboard, ClientError> {
        let (history, profile) = try_join!(self.payment_history(0, RECENT), self.profile())?;

        Ok(PaymentDashboard {
            total_payments: history.total_elements,
            payment_history: history.content,
            user_profile: profile,
            payment_methods: PAYMENT_METHODS.iter().map(|m| m.to_string()).collect(),
            supported_currencies: SUPPORTED_CURRENCIES.iter().map(|c| c.to_string()).collect(),
        })
    }

    pub async fn enrollment_dashboard(&self) -> Result<EnrollmentDashboard, ClientError> {
        let (page, profile) = try_join!(self.my_enrollments(0, RECENT), self.profile())?;

        Ok(EnrollmentDashboard {
            enrollment_stats: EnrollmentStats::from_enrollments(page.total_elements, &page.content),
            total_enrollments: page.total_elements,
            enrollments: page.content,
            user_profile: profile,
        })
    }

    /// Grades, percentages and course names. Each section degrades to empty
    /// on its own, so this never fails; failures only show up as warnings.
    pub async fn grading_dashboard(&self) -> GradingDashboard {
        let (overall, percentages, courses) = join!(
            self.overall_grades(),
            self.grade_percentages(),
            self.enrolled_courses()
        );
        let overall = or_empty("overall grades", overall);
        let percentages = or_empty("grade percentages", percentages);
        let courses = or_empty("enrolled courses", courses);

        GradingDashboard {
            course_stats: course_grade_stats(&overall, &percentages, &courses),
            summary: grading_summary(&overall),
            overall_grades: overall,
            grade_percentages: percentages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::Harness;
    use iga_core::ports::Method;
    use serde_json::json;

    fn profile_ok(h: &Harness) {
        h.transport.json(
            Method::Get,
            "/student/profile",
            200,
            json!({"success": true, "data": {"firstName": "Ada"}}),
        );
    }

    #[tokio::test]
    async fn test_enrollment_dashboard_stats() {
        let h = Harness::new().with_token("abc");
        profile_ok(&h);
        h.transport.json(
            Method::Get,
            "/student/enrollments/my-enrollments",
            200,
            json!({"success": true, "data": {"content": [
                {"id": "e1", "courseId": "c1", "courseName": "A", "progress": "IN_PROGRESS"},
                {"id": "e2", "courseId": "c2", "courseName": "B", "progress": "COMPLETED"},
                {"id": "e3", "courseId": "c3", "courseName": "C", "progress": "NOT_STARTED"}
            ], "totalElements": 9}}),
        );
        let student = StudentApi::new(h.context());

        let dashboard = student.enrollment_dashboard().await.unwrap();

        assert_eq!(dashboard.total_enrollments, 9);
        assert_eq!(dashboard.enrollment_stats.active_enrollments, 1);
        assert_eq!(dashboard.enrollment_stats.completed_enrollments, 1);
        assert_eq!(dashboard.enrollment_stats.not_started_enrollments, 1);
        assert_eq!(dashboard.user_profile.first_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_payment_dashboard_fails_when_a_fetch_fails() {
        let h = Harness::new().with_token("abc");
        profile_ok(&h);
        h.transport
            .json(Method::Get, "/student/payments/history", 500, json!({}));
        let student = StudentApi::new(h.context());

        let err = student.payment_dashboard().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch payment history");
    }

    #[tokio::test]
    async fn test_grading_dashboard_degrades_per_section() {
        let h = Harness::new().with_token("abc");
        h.transport
            .json(
                Method::Get,
                "/grades/overall",
                200,
                json!({"success": true, "data": {"c1": [
                    {"gradeId": "g1", "percentage": 91.0, "pointsAwarded": 9.1},
                    {"gradeId": "g2", "percentage": 78.5}
                ]}}),
            )
            .json(Method::Get, "/grades/percentages", 500, json!({}))
            .fail(Method::Get, "/student/enrollments/my-enrollments");
        let student = StudentApi::new(h.context());

        let dashboard = student.grading_dashboard().await;

        assert_eq!(dashboard.summary.total_assignments, 2);
        assert_eq!(dashboard.summary.graded_assignments, 1);
        assert_eq!(dashboard.summary.average_grade, 84.75);
        assert_eq!(dashboard.course_stats[0].course_name, "Course c1");
        assert!(dashboard.grade_percentages.is_empty());
    }

    #[tokio::test]
    async fn test_grading_dashboard_is_empty_when_everything_fails() {
        let h = Harness::new().with_token("abc");
        h.transport
            .fail(Method::Get, "/grades/overall")
            .fail(Method::Get, "/grades/percentages")
            .fail(Method::Get, "/student/enrollments/my-enrollments");
        let student = StudentApi::new(h.context());

        let dashboard = student.grading_dashboard().await;

        assert!(dashboard.overall_grades.is_empty());
        assert!(dashboard.course_stats.is_empty());
        assert_eq!(dashboard.summary, GradingSummary::default());
    }
}
