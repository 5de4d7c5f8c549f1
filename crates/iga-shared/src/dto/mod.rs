//! Data Transfer Objects mirrored from the backend's camelCase JSON.
//!
//! Identifiers stay opaque strings. Every optional field defaults when absent
//! so partially populated responses still decode.

mod content;
mod course;
mod enrollment;
mod grading;
mod page;
mod payment;
mod user;

pub use content::{Assignment, AssignmentType, Module, ModuleRequest, Resource, ResourceType};
pub use course::{Course, CourseAnalytics, CourseStudent};
pub use enrollment::{EnrolledCourse, Enrollment, EnrollmentStatistics, Progress};
pub use grading::{Grade, GradeRequest, Submission, SubmissionStatistics};
pub use page::Page;
pub use payment::{
    CoursePaymentRequest, DEFAULT_CURRENCY, Payment, PaymentAnalytics, PaymentHistoryItem,
    PaymentResponse, PaymentStatus, PaymentVerificationRequest,
};
pub use user::{
    ApprovalStatus, InstructorData, LoginRequest, Role, StudentSignupRequest,
    UpdateStudentProfileRequest, UserProfile,
};
