//! Multipart forms sent by the instructor and submission endpoints.

use iga_core::ports::{FileUpload, FormField};
use iga_shared::dto::{AssignmentType, ResourceType};

fn push_text(fields: &mut Vec<FormField>, name: &str, value: Option<impl ToString>) {
    if let Some(value) = value {
        fields.push(FormField::text(name, value));
    }
}

fn push_file(fields: &mut Vec<FormField>, name: &str, file: Option<FileUpload>) {
    if let Some(file) = file {
        fields.push(FormField::file(name, file));
    }
}

/// Full replacement of a course; used for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseForm {
    pub course_name: String,
    pub course_description: String,
    pub duration_in_hours: u32,
    pub price: f64,
    pub image: Option<FileUpload>,
}

impl CourseForm {
    pub fn into_fields(self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("courseName", self.course_name),
            FormField::text("courseDescription", self.course_description),
            FormField::text("durationInHours", self.duration_in_hours),
            FormField::text("price", self.price),
        ];
        push_file(&mut fields, "image", self.image);
        fields
    }
}

/// Instructor account form, shared by signup and profile update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructorForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub area_of_experience: Option<String>,
    pub years_of_experience: Option<String>,
    pub professional_bio: Option<String>,
    pub resume: Option<FileUpload>,
    pub certificate: Option<FileUpload>,
    pub image: Option<FileUpload>,
}

impl InstructorForm {
    pub fn into_fields(self) -> Vec<FormField> {
        let mut fields = Vec::new();
        push_text(&mut fields, "firstName", self.first_name);
        push_text(&mut fields, "lastName", self.last_name);
        push_text(&mut fields, "email", self.email);
        push_text(
            &mut fields,
            "password",
            self.password.filter(|p| !p.trim().is_empty()),
        );
        push_text(&mut fields, "phoneNumber", self.phone_number);
        push_text(&mut fields, "areaOfExperience", self.area_of_experience);
        push_text(&mut fields, "yearsOfExperience", self.years_of_experience);
        push_text(&mut fields, "professionalBio", self.professional_bio);
        push_file(&mut fields, "resume", self.resume);
        push_file(&mut fields, "certificate", self.certificate);
        push_file(&mut fields, "image", self.image);
        fields
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentForm {
    pub module_id: String,
    pub title: String,
    pub description: Option<String>,
    pub assignment_type: AssignmentType,
    pub max_points: u32,
    pub due_date: Option<String>,
    pub document: Option<FileUpload>,
}

impl AssignmentForm {
    pub fn into_fields(self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("moduleId", self.module_id),
            FormField::text("title", self.title),
            FormField::text("assignmentType", self.assignment_type.as_str()),
            FormField::text("maxPoints", self.max_points),
        ];
        push_text(&mut fields, "description", self.description);
        push_text(&mut fields, "dueDate", self.due_date);
        push_file(&mut fields, "documentUrl", self.document);
        fields
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceForm {
    pub module_id: String,
    pub title: String,
    pub resource_type: ResourceType,
    pub description: Option<String>,
    pub link: Option<String>,
    pub file: Option<FileUpload>,
}

impl ResourceForm {
    pub fn into_fields(self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("moduleId", self.module_id),
            FormField::text("title", self.title),
            FormField::text("resourceType", self.resource_type.as_str()),
        ];
        push_text(&mut fields, "description", self.description);
        push_text(&mut fields, "link", self.link);
        push_file(&mut fields, "fileUrl", self.file);
        fields
    }
}
