use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentType {
    Quiz,
    Mid,
    Summative,
}

impl AssignmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentType::Quiz => "QUIZ",
            AssignmentType::Mid => "MID",
            AssignmentType::Summative => "SUMMATIVE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Video,
    Pdf,
    Quiz,
    Assignment,
    Link,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Video => "VIDEO",
            ResourceType::Pdf => "PDF",
            ResourceType::Quiz => "QUIZ",
            ResourceType::Assignment => "ASSIGNMENT",
            ResourceType::Link => "LINK",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub resource_type: Option<ResourceType>,
    pub file_url: Option<String>,
    pub link: Option<String>,
    pub module_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub assignment_type: Option<AssignmentType>,
    pub document_url: Option<String>,
    pub max_points: u32,
    pub due_date: Option<String>,
    pub module_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub position: i32,
    pub course_id: Option<String>,
    pub resources: Vec<Resource>,
    pub assignments: Vec<Assignment>,
}

/// Body of module create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRequest {
    pub title: String,
    pub description: String,
    pub position: i32,
    pub course_id: String,
}
