//! Portfolio profile model
//!
//! The profile is built once at startup and shared read-only by every
//! request; nothing mutates it afterwards.

mod data;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Full portfolio payload returned by `GET /api/portfolio`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub phone: String,
    pub email: String,
    pub education: Education,
    /// Ordered as displayed
    pub skills: Vec<Skill>,
    /// Ordered as displayed
    pub projects: Vec<Project>,
    pub social_links: SocialLinks,
}

/// Platform profile links, serialized in published order
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct Education {
    pub degree: String,
    #[serde(rename = "college")]
    pub institution: String,
    pub university: String,
    /// Semester key (`sem1`, `sem2`, ...) to grade
    #[serde(rename = "cgpa")]
    pub grades: BTreeMap<String, String>,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0 to 100
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct Project {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub category: String,
    pub image: String,
}

impl Skill {
    pub fn new(name: &str, level: u8) -> Self {
        Self {
            name: name.to_string(),
            level: level.min(100),
        }
    }
}
