//! Command tree.
//!
//! - `courses` - public catalog
//! - `student` - account, enrollments, learning, payments and dashboards
//! - `coach` - instructor account, courses, grading and earnings
//! - `admin` - instructor approval and student management
//! - `session` / `logout` - local session state

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use iga_shared::dto::Progress;

#[derive(Parser, Debug)]
#[command(name = "iga")]
#[command(author, version, about = "IGA course marketplace client", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Backend API root (overrides IGA_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Origin used for payment redirect URLs (overrides IGA_APP_ORIGIN)
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Session file (overrides IGA_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Request timeout in seconds (overrides IGA_HTTP_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Debug logging when RUST_LOG is unset
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct Credentials {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "IGA_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show what the local session holds
    Session,

    /// Clear the local session
    Logout,

    #[command(subcommand)]
    Courses(CoursesCommands),

    #[command(subcommand)]
    Student(StudentCommands),

    #[command(subcommand)]
    Coach(CoachCommands),

    #[command(subcommand)]
    Admin(AdminCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoursesCommands {
    List,
    Show { course_id: String },
}

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    Login(Credentials),
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[command(flatten)]
        credentials: Credentials,
    },
    Profile,
    /// Delete the account and end the session
    DeleteProfile,
    Enrollments {
        #[arg(long, default_value = "0")]
        page: u32,
        #[arg(long, default_value = "10")]
        size: u32,
    },
    Progress {
        enrollment_id: String,
        #[arg(value_enum)]
        progress: ProgressArg,
    },
    /// Modules of a course with their resources
    Content { course_id: String },
    Assignments { course_id: String },
    Submit {
        assignment_id: String,
        file: PathBuf,
    },
    Grades,
    #[command(subcommand)]
    Payments(PaymentCommands),
    #[command(subcommand)]
    Dashboard(DashboardCommands),
}

#[derive(Subcommand, Debug)]
pub enum PaymentCommands {
    History {
        #[arg(long, default_value = "0")]
        page: u32,
        #[arg(long, default_value = "10")]
        size: u32,
    },
    Show { payment_id: String },
    Paid { course_id: String },
    Refund {
        payment_id: String,
        #[arg(long)]
        reason: String,
    },
    /// Initiate a payment and print the gateway link
    Checkout {
        course_id: String,
        amount: f64,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        name: String,
    },
    /// Complete a payment from the gateway's callback query string
    Callback { query: String },
}

#[derive(Subcommand, Debug)]
pub enum DashboardCommands {
    Payments,
    Enrollments,
    Grading,
}

#[derive(Subcommand, Debug)]
pub enum CoachCommands {
    Login(Credentials),
    Profile,
    /// Refresh and store the approval status
    Approval,
    Courses,
    Students { course_id: String },
    Analytics { course_id: String },
    Enrollments {
        #[arg(long)]
        course_id: Option<String>,
        #[arg(long, default_value = "0")]
        page: u32,
        #[arg(long, default_value = "10")]
        size: u32,
    },
    Modules { course_id: String },
    Ungraded { course_id: String },
    Grade {
        submission_id: String,
        points: u32,
        #[arg(long, default_value = "")]
        feedback: String,
    },
    Earnings,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    Login(Credentials),
    Profile,
    Instructors,
    Instructor { instructor_id: String },
    Approve { instructor_id: String },
    Reject { instructor_id: String },
    Students,
    Promote { student_id: String },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ProgressArg {
    NotStarted,
    InProgress,
    Completed,
    Dropped,
}

impl From<ProgressArg> for Progress {
    fn from(arg: ProgressArg) -> Self {
        match arg {
            ProgressArg::NotStarted => Progress::NotStarted,
            ProgressArg::InProgress => Progress::InProgress,
            ProgressArg::Completed => Progress::Completed,
            ProgressArg::Dropped => Progress::Dropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_checkout() {
        let cli = Cli::try_parse_from([
            "iga", "student", "payments", "checkout", "c1", "25000", "--email", "a@b.c", "--phone",
            "+250780000000", "--name", "Ada", "--origin", "https://iga.rw",
        ])
        .unwrap();

        assert_eq!(cli.global.origin.as_deref(), Some("https://iga.rw"));
        assert!(matches!(
            cli.command,
            Commands::Student(StudentCommands::Payments(PaymentCommands::Checkout { amount, .. })) if amount == 25000.0
        ));
    }
}
