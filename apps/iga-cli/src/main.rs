//! # IGA CLI
//!
//! Command-line host for the marketplace client. Session state lives in a
//! JSON file, HTTP goes through reqwest, and navigation is recorded rather
//! than opened in a browser.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use futures::StreamExt;

use iga_client::{CallbackOutcome, ClientContext, IgaClient};
use iga_core::domain::payment::CustomerInfo;
use iga_core::ports::FileUpload;
use iga_infra::{FileSessionStore, HeadlessNavigator, InMemoryEventBus, ReqwestTransport};
use iga_shared::dto::{GradeRequest, StudentSignupRequest};

mod cli;
mod config;
mod output;
mod telemetry;

use cli::{
    AdminCommands, Cli, CoachCommands, Commands, CoursesCommands, DashboardCommands,
    PaymentCommands, StudentCommands,
};
use config::AppConfig;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    telemetry::init_telemetry(&TelemetryConfig::from_env().verbose(cli.global.verbose));

    let config = AppConfig::from_env().with_overrides(&cli.global);
    tracing::debug!(
        api_url = %config.http.base_url,
        origin = %config.app_origin,
        session_file = %config.session_file.display(),
        "Configuration loaded"
    );

    let navigator = Arc::new(HeadlessNavigator::new(config.app_origin.clone()));
    let events = Arc::new(InMemoryEventBus::default());
    let ctx = ClientContext::new(
        Arc::new(ReqwestTransport::new(config.http.clone())?),
        Arc::new(FileSessionStore::open(&config.session_file)?),
        events,
        navigator.clone(),
    );
    let client = IgaClient::new(ctx);

    let mut stream = client.events();
    let listener = tokio::spawn(async move {
        while let Some(event) = stream.next().await {
            tracing::info!(event = event.name(), "Client event");
        }
    });

    let result = run(&client, cli.command).await;

    if let Some(target) = navigator.last_target() {
        eprintln!("-> {target}");
    }
    // Dropping the last handle closes the bus and ends the listener.
    drop(client);
    let _ = listener.await;

    result
}

async fn run(client: &IgaClient, command: Commands) -> Result<()> {
    match command {
        Commands::Session => output::json(&client.session().snapshot()),
        Commands::Logout => {
            client.logout().await;
            println!("Logged out");
            Ok(())
        }
        Commands::Courses(cmd) => courses(client, cmd).await,
        Commands::Student(cmd) => student(client, cmd).await,
        Commands::Coach(cmd) => coach(client, cmd).await,
        Commands::Admin(cmd) => admin(client, cmd).await,
    }
}

async fn courses(client: &IgaClient, cmd: CoursesCommands) -> Result<()> {
    let courses = client.courses();
    match cmd {
        CoursesCommands::List => output::json(&courses.all().await?),
        CoursesCommands::Show { course_id } => output::json(&courses.get(&course_id).await?),
    }
}

async fn student(client: &IgaClient, cmd: StudentCommands) -> Result<()> {
    let student = client.student();
    match cmd {
        StudentCommands::Login(creds) => {
            output::json(&student.login(&creds.email, &creds.password).await?)
        }
        StudentCommands::Register {
            first_name,
            last_name,
            credentials,
        } => {
            let signup = StudentSignupRequest {
                first_name,
                last_name,
                email: credentials.email,
                password: credentials.password,
            };
            output::json(&student.register(&signup).await?)
        }
        StudentCommands::Profile => output::json(&student.profile().await?),
        StudentCommands::DeleteProfile => {
            let response = student.delete_profile().await?;
            output::lines(vec![output::ack_line(&response, "Profile deleted")]);
            Ok(())
        }
        StudentCommands::Enrollments { page, size } => {
            let enrollments = student.my_enrollments(page, size).await?;
            output::lines(output::enrollment_lines(&enrollments));
            Ok(())
        }
        StudentCommands::Progress {
            enrollment_id,
            progress,
        } => output::json(&student.update_progress(&enrollment_id, progress.into()).await?),
        StudentCommands::Content { course_id } => {
            output::json(&student.course_content(&course_id).await?)
        }
        StudentCommands::Assignments { course_id } => {
            output::json(&student.course_assignments(&course_id).await?)
        }
        StudentCommands::Submit {
            assignment_id,
            file,
        } => {
            let upload = read_upload(&file).await?;
            output::json(&student.submit_assignment(&assignment_id, upload).await?)
        }
        StudentCommands::Grades => {
            let dashboard = student.grading_dashboard().await;
            output::lines(output::grade_lines(&dashboard));
            Ok(())
        }
        StudentCommands::Payments(cmd) => payments(client, cmd).await,
        StudentCommands::Dashboard(cmd) => match cmd {
            DashboardCommands::Payments => output::json(&student.payment_dashboard().await?),
            DashboardCommands::Enrollments => output::json(&student.enrollment_dashboard().await?),
            DashboardCommands::Grading => output::json(&student.grading_dashboard().await),
        },
    }
}

async fn payments(client: &IgaClient, cmd: PaymentCommands) -> Result<()> {
    let student = client.student();
    match cmd {
        PaymentCommands::History { page, size } => {
            let history = student.payment_history(page, size).await?;
            output::lines(output::payment_lines(&history));
            Ok(())
        }
        PaymentCommands::Show { payment_id } => {
            output::json(&student.payment_by_id(&payment_id).await?)
        }
        PaymentCommands::Paid { course_id } => {
            println!("{}", student.has_paid_for_course(&course_id).await?);
            Ok(())
        }
        PaymentCommands::Refund { payment_id, reason } => {
            output::json(&student.request_refund(&payment_id, &reason).await?)
        }
        PaymentCommands::Checkout {
            course_id,
            amount,
            email,
            phone,
            name,
        } => {
            let customer = CustomerInfo {
                email,
                phone_number: phone,
                name,
            };
            let mut failure = None;
            let link = client
                .checkout()
                .start_checkout(&course_id, amount, &customer, |message| failure = Some(message))
                .await;
            match (link, failure) {
                (Some(link), _) => {
                    println!("{link}");
                    Ok(())
                }
                (None, message) => Err(anyhow!(
                    message.unwrap_or_else(|| "Payment initiation failed".to_string())
                )),
            }
        }
        PaymentCommands::Callback { query } => {
            let outcome = client.checkout().handle_callback(&query).await;
            output::json(&outcome)?;
            match outcome {
                CallbackOutcome::Verified(_) => Ok(()),
                _ => Err(anyhow!("Payment was not completed")),
            }
        }
    }
}

async fn coach(client: &IgaClient, cmd: CoachCommands) -> Result<()> {
    let coach = client.coach();
    match cmd {
        CoachCommands::Login(creds) => {
            output::json(&coach.login(&creds.email, &creds.password).await?)
        }
        CoachCommands::Profile => output::json(&coach.profile().await?),
        CoachCommands::Approval => output::json(&coach.approval_status().await?),
        CoachCommands::Courses => output::json(&coach.my_courses().await?),
        CoachCommands::Students { course_id } => {
            output::json(&coach.course_students(&course_id).await?)
        }
        CoachCommands::Analytics { course_id } => {
            output::json(&coach.course_analytics(&course_id).await?)
        }
        CoachCommands::Enrollments {
            course_id,
            page,
            size,
        } => {
            let enrollments = match course_id {
                Some(course_id) => coach.course_enrollments(&course_id, page, size).await?,
                None => coach.my_course_enrollments(page, size).await?,
            };
            output::lines(output::enrollment_lines(&enrollments));
            Ok(())
        }
        CoachCommands::Modules { course_id } => {
            output::json(&coach.course_modules(&course_id).await?)
        }
        CoachCommands::Ungraded { course_id } => {
            output::json(&coach.ungraded_submissions(&course_id).await?)
        }
        CoachCommands::Grade {
            submission_id,
            points,
            feedback,
        } => {
            let grade = GradeRequest {
                submission_id,
                points_awarded: points,
                feedback,
            };
            output::json(&coach.grade_submission(&grade).await?)
        }
        CoachCommands::Earnings => output::json(&coach.earnings().await?),
    }
}

async fn admin(client: &IgaClient, cmd: AdminCommands) -> Result<()> {
    let admin = client.admin();
    match cmd {
        AdminCommands::Login(creds) => {
            output::json(&admin.login(&creds.email, &creds.password).await?)
        }
        AdminCommands::Profile => output::json(&admin.profile().await?),
        AdminCommands::Instructors => output::json(&admin.instructors().await?),
        AdminCommands::Instructor { instructor_id } => {
            output::json(&admin.instructor(&instructor_id).await?)
        }
        AdminCommands::Approve { instructor_id } => {
            let response = admin.approve_instructor(&instructor_id).await?;
            output::lines(vec![output::ack_line(&response, "Instructor approved")]);
            Ok(())
        }
        AdminCommands::Reject { instructor_id } => {
            let response = admin.reject_instructor(&instructor_id).await?;
            output::lines(vec![output::ack_line(&response, "Instructor rejected")]);
            Ok(())
        }
        AdminCommands::Students => output::json(&admin.students().await?),
        AdminCommands::Promote { student_id } => {
            let response = admin.promote_to_admin(&student_id).await?;
            output::lines(vec![output::ack_line(&response, "Role updated")]);
            Ok(())
        }
    }
}

async fn read_upload(path: &Path) -> Result<FileUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(FileUpload::new(file_name, bytes))
}
