//! Unified index builder.
//!
//! Projects the four searchable content collections into one flat sequence
//! of [`SearchableItem`]s. The concatenation order (projects, skills, blog
//! posts, certifications, insertion order within each) is part of the
//! search contract: the query matcher preserves it as the tie-break order
//! of results.
//!
//! The index is rebuilt from the live repository on every query. It is
//! never cached across repository updates.

use crate::content::{BlogPost, Certification, Project, Skill};
use crate::models::{ItemType, SearchableItem};
use crate::repository::ContentRepository;

/// In-page anchor for project results.
pub const PROJECTS_ANCHOR: &str = "#projects";
/// In-page anchor for skill results.
pub const SKILLS_ANCHOR: &str = "#skills";
/// In-page anchor for certification results.
pub const CERTIFICATIONS_ANCHOR: &str = "#certifications";

/// One borrowed source record of any searchable type.
///
/// Projection goes through this union so that adding a new content type is
/// a compile-checked extension of [`project_record`] rather than an
/// untyped branch.
#[derive(Debug, Clone, Copy)]
pub enum SourceRecord<'a> {
    Project(&'a Project),
    Skill(&'a Skill),
    BlogPost(&'a BlogPost),
    Certification(&'a Certification),
}

/// Project one source record into its searchable form.
///
/// The field mapping is fixed and total: every searchable field has a
/// defined source per record type. Skills use their name as item id, the
/// identity the search overlay navigates by.
pub fn project_record(record: SourceRecord<'_>) -> SearchableItem {
    match record {
        SourceRecord::Project(project) => SearchableItem {
            id: project.id.clone(),
            title: project.title.clone(),
            item_type: ItemType::Project,
            content: project.description.clone(),
            tags: project.technologies.clone(),
            target_ref: PROJECTS_ANCHOR.to_string(),
        },
        SourceRecord::Skill(skill) => SearchableItem {
            id: skill.name.clone(),
            title: skill.name.clone(),
            item_type: ItemType::Skill,
            content: skill.category.clone(),
            tags: vec![skill.category.clone()],
            target_ref: SKILLS_ANCHOR.to_string(),
        },
        SourceRecord::BlogPost(post) => SearchableItem {
            id: post.id.clone(),
            title: post.title.clone(),
            item_type: ItemType::BlogPost,
            content: post.excerpt.clone(),
            tags: post.tags.clone(),
            target_ref: format!("/blog/{}", post.slug),
        },
        SourceRecord::Certification(cert) => SearchableItem {
            id: cert.id.clone(),
            title: cert.title.clone(),
            item_type: ItemType::Certification,
            content: cert.issuer.clone(),
            tags: vec![cert.issuer.clone()],
            target_ref: CERTIFICATIONS_ANCHOR.to_string(),
        },
    }
}

/// Build the current searchable index from the repository snapshot.
///
/// Pure projection: empty collections yield an empty or partial sequence,
/// never an error.
pub fn build_index(repo: &dyn ContentRepository) -> Vec<SearchableItem> {
    let mut items = Vec::with_capacity(
        repo.projects().len()
            + repo.skills().len()
            + repo.blog_posts().len()
            + repo.certifications().len(),
    );

    items.extend(
        repo.projects()
            .iter()
            .map(|p| project_record(SourceRecord::Project(p))),
    );
    items.extend(
        repo.skills()
            .iter()
            .map(|s| project_record(SourceRecord::Skill(s))),
    );
    items.extend(
        repo.blog_posts()
            .iter()
            .map(|b| project_record(SourceRecord::BlogPost(b))),
    );
    items.extend(
        repo.certifications()
            .iter()
            .map(|c| project_record(SourceRecord::Certification(c))),
    );

    items
}
