//! The content repository seam between the engine and its host.
//!
//! The index builder, query matcher, and intent responder all read portfolio
//! content through [`ContentRepository`] rather than reaching into ambient
//! storage. The host application decides where content actually lives;
//! [`InMemoryRepository`] is the standard implementation, holding one
//! [`ContentSet`] snapshot.
//!
//! The trait is read-only. Engine components never mutate the repository;
//! collection replacement is an [`InMemoryRepository`] concern used by the
//! host's admin surface.

use crate::content::{About, Achievement, BlogPost, Certification, ContentSet, Project, Skill};

/// Read access to the current content snapshot.
///
/// Accessors return borrows that are immutable for the duration of a single
/// query; callers must not hold them across repository updates.
pub trait ContentRepository: Send + Sync {
    fn skills(&self) -> &[Skill];
    fn projects(&self) -> &[Project];
    fn blog_posts(&self) -> &[BlogPost];
    fn certifications(&self) -> &[Certification];
    fn achievements(&self) -> &[Achievement];
    fn about(&self) -> &About;
}

/// A repository backed by an owned [`ContentSet`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    content: ContentSet,
}

impl InMemoryRepository {
    pub fn new(content: ContentSet) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &ContentSet {
        &self.content
    }

    /// Replace the whole snapshot, e.g. after a store reload.
    pub fn replace(&mut self, content: ContentSet) {
        self.content = content;
    }

    pub fn replace_skills(&mut self, skills: Vec<Skill>) {
        self.content.skills = skills;
    }

    pub fn replace_projects(&mut self, projects: Vec<Project>) {
        self.content.projects = projects;
    }

    pub fn replace_blog_posts(&mut self, posts: Vec<BlogPost>) {
        self.content.blog_posts = posts;
    }

    pub fn replace_certifications(&mut self, certifications: Vec<Certification>) {
        self.content.certifications = certifications;
    }

    pub fn replace_achievements(&mut self, achievements: Vec<Achievement>) {
        self.content.achievements = achievements;
    }

    pub fn replace_about(&mut self, about: About) {
        self.content.about = about;
    }
}

impl From<ContentSet> for InMemoryRepository {
    fn from(content: ContentSet) -> Self {
        Self::new(content)
    }
}

impl ContentRepository for InMemoryRepository {
    fn skills(&self) -> &[Skill] {
        &self.content.skills
    }

    fn projects(&self) -> &[Project] {
        &self.content.projects
    }

    fn blog_posts(&self) -> &[BlogPost] {
        &self.content.blog_posts
    }

    fn certifications(&self) -> &[Certification] {
        &self.content.certifications
    }

    fn achievements(&self) -> &[Achievement] {
        &self.content.achievements
    }

    fn about(&self) -> &About {
        &self.content.about
    }
}
