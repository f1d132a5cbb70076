#![allow(dead_code)]

//! Dashboard data resolution: live roadmaps for the signed-in user, demo
//! data for everyone else or whenever the store has nothing usable.

use serde_json::Value;
use tracing::warn;

use crate::auth::AuthState;
use crate::demo::{DEMO_JOBS, DEMO_ROADMAPS, DEMO_ROLES};
use crate::models::{JobPosting, Milestone, Roadmap, RoadmapStatus, Role};
use crate::store::{RoadmapRow, SessionStore};

/// Where the rendered roadmaps came from. Live and demo data are never
/// mixed in one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapSource {
    Live,
    Demo,
}

/// Roadmap shaped for display, from either a stored row or a demo literal.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRoadmap {
    pub id: String,
    pub user_id: String,
    pub target_role: String,
    pub missing_skills: Vec<String>,
    pub timeline_weeks: u32,
    pub status: RoadmapStatus,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub source: RoadmapSource,
    pub roadmaps: Vec<DashboardRoadmap>,
}

impl DashboardData {
    /// The roadmap shown on load: the first entry.
    pub fn selected(&self) -> Option<&DashboardRoadmap> {
        self.roadmaps.first()
    }
}

/// Resolves what the dashboard shows for the current auth state. A store
/// error, zero rows, or an unreachable store all fall back to the demo
/// roadmaps; guests and signed-out users always see demo data.
pub async fn resolve(store: &dyn SessionStore, auth: &AuthState) -> DashboardData {
    let session = match auth {
        AuthState::Authenticated(session) => session,
        _ => return demo_fallback(),
    };

    match store.roadmaps_for_user(&session.user_id).await {
        Ok(rows) if !rows.is_empty() => DashboardData {
            source: RoadmapSource::Live,
            roadmaps: rows.iter().map(DashboardRoadmap::from_row).collect(),
        },
        Ok(_) => demo_fallback(),
        Err(err) => {
            warn!("loading roadmaps failed, falling back to demo data: {err}");
            demo_fallback()
        }
    }
}

fn demo_fallback() -> DashboardData {
    DashboardData {
        source: RoadmapSource::Demo,
        roadmaps: DEMO_ROADMAPS.iter().map(DashboardRoadmap::from_demo).collect(),
    }
}

impl DashboardRoadmap {
    fn from_demo(roadmap: &Roadmap) -> Self {
        Self {
            id: roadmap.id.clone(),
            user_id: roadmap.user_id.clone(),
            target_role: roadmap.target_role.clone(),
            missing_skills: roadmap.missing_skills.clone(),
            timeline_weeks: roadmap.timeline_weeks,
            status: roadmap.status,
            milestones: roadmap.milestones.clone(),
        }
    }

    /// Stored payloads are opaque; absent fields take display defaults.
    fn from_row(row: &RoadmapRow) -> Self {
        let payload = &row.roadmap;
        Self {
            id: row.id.as_ref().map(display_id).unwrap_or_default(),
            user_id: row.user_id.clone(),
            target_role: payload
                .get("target_role")
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_string(),
            missing_skills: string_list(payload.get("missing_skills")),
            timeline_weeks: payload
                .get("timeline_weeks")
                .and_then(Value::as_u64)
                .unwrap_or(12) as u32,
            status: payload
                .get("status")
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or_default(),
            milestones: payload
                .get("milestones")
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or_default(),
        }
    }
}

fn display_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// The role the roadmap targets, if the catalog knows it.
pub fn target_role(roadmap: &DashboardRoadmap) -> Option<&'static Role> {
    DEMO_ROLES.iter().find(|role| role.title == roadmap.target_role)
}

/// Postings sharing at least one required skill with the target role.
pub fn matching_jobs(roadmap: &DashboardRoadmap) -> Vec<&'static JobPosting> {
    let Some(role) = target_role(roadmap) else {
        return Vec::new();
    };
    DEMO_JOBS
        .iter()
        .filter(|job| {
            job.required_skills
                .iter()
                .any(|skill| role.required_skills.contains(skill))
        })
        .collect()
}

/// Weeks left on the plan: all of them before it starts, half while it is
/// in progress, none once completed.
pub fn weeks_remaining(roadmap: &DashboardRoadmap) -> u32 {
    let elapsed = match roadmap.status {
        RoadmapStatus::Completed => roadmap.timeline_weeks,
        RoadmapStatus::InProgress => roadmap.timeline_weeks / 2,
        RoadmapStatus::NotStarted => 0,
    };
    roadmap.timeline_weeks - elapsed
}
