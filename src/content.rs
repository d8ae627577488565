//! Source content records owned by the content repository.
//!
//! These are the five portfolio collections (skills, projects, blog posts,
//! certifications, achievements) plus the about record. They serialize as
//! camelCase JSON, the snapshot format the surrounding application
//! persists and the admin editor writes.

use serde::{Deserialize, Serialize};

/// A single skill with a 0–100 proficiency level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: u8,
    pub category: String,
}

/// A portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
}

/// A blog post. `slug` is the stable URL segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub published_at: String,
    pub tags: Vec<String>,
    pub category: String,
    pub featured: bool,
    pub read_time: u32,
    pub slug: String,
}

/// A certification or completed job simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A notable achievement. Only consulted by the certifications intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Profile links shown alongside the about record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub leetcode: String,
    pub hackerrank: String,
}

/// The site owner's profile record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub resume_url: String,
    pub contact_email: String,
    #[serde(default)]
    pub social_links: SocialLinks,
}

/// A full snapshot of every content collection plus the about record.
///
/// This is the unit the store persists and the repository holds. The
/// default set is empty; real content arrives from the snapshot file or
/// from the admin surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSet {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub about: About,
}
