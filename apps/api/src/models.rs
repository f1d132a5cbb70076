#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Roadmap lifecycle status. Progress is a fixed three-value mapping,
/// never derived from milestone completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl RoadmapStatus {
    pub fn progress_percent(self) -> u8 {
        match self {
            RoadmapStatus::NotStarted => 0,
            RoadmapStatus::InProgress => 50,
            RoadmapStatus::Completed => 100,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoadmapStatus::NotStarted => "not_started",
            RoadmapStatus::InProgress => "in_progress",
            RoadmapStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub current_role: String,
    pub resume_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub title: String,
    pub description: String,
    pub average_salary: u32,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub url: String,
    pub duration_hours: u32,
    pub skill_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub salary_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub week: u32,
    pub milestone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub skill: String,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: String,
    pub user_id: String,
    pub target_role: String,
    pub missing_skills: Vec<String>,
    pub recommended_courses: Vec<CourseRecommendation>,
    pub timeline_weeks: u32,
    pub status: RoadmapStatus,
    pub created_at: String,
    pub milestones: Vec<Milestone>,
}
