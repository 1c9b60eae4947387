use std::sync::Arc;

use serde::Deserialize;

use crate::content::application::content_store::ContentStore;
use crate::content::domain::entities::{
    mint_entity_id, Client, DatedItem, Experience, Hobby, Project, SkillGroup, Testimonial,
};
use crate::content::domain::validation::{
    validate_client, validate_experience, validate_project, validate_skill, validate_testimonial,
    ErrorMap,
};
use crate::editor::application::services::validation_registry::ValidationRegistry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("{entity} {identity} not found")]
    NotFound {
        entity: &'static str,
        identity: String,
    },
}

impl EditError {
    fn not_found(entity: &'static str, identity: impl ToString) -> Self {
        Self::NotFound {
            entity,
            identity: identity.to_string(),
        }
    }
}

/// CRUD over the repeated collections, one uniform pattern per collection:
/// add appends a default template (id-bearing entities get a freshly minted
/// id), update merges a partial patch and re-validates that single entity,
/// delete removes the entity and discards its pending validation entry.
///
/// Projects and experience are addressed by id. Everything else is
/// addressed by array index; deleting an earlier element shifts the identity
/// of later ones, including any validation entries still keyed to the old
/// indices. Accepted limitation of the positional-identity collections.
pub struct CollectionEditor {
    store: Arc<ContentStore>,
    registry: Arc<ValidationRegistry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub role: Option<String>,
    pub summary: Option<String>,
    pub impact: Option<String>,
    pub category: Option<String>,
    pub problem_statement: Option<String>,
    pub deliverables: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectPatch {
    fn merge(self, existing: Project) -> Project {
        Project {
            id: existing.id,
            title: self.title.unwrap_or(existing.title),
            company: self.company.unwrap_or(existing.company),
            duration: self.duration.unwrap_or(existing.duration),
            role: self.role.unwrap_or(existing.role),
            summary: self.summary.unwrap_or(existing.summary),
            impact: self.impact.unwrap_or(existing.impact),
            category: self.category.unwrap_or(existing.category),
            problem_statement: self.problem_statement.unwrap_or(existing.problem_statement),
            deliverables: self.deliverables.unwrap_or(existing.deliverables),
            tags: self.tags.unwrap_or(existing.tags),
            image: self.image.unwrap_or(existing.image),
            featured: self.featured.unwrap_or(existing.featured),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub current: Option<bool>,
    pub highlights: Option<Vec<String>>,
}

impl ExperiencePatch {
    fn merge(self, existing: Experience) -> Experience {
        Experience {
            id: existing.id,
            title: self.title.unwrap_or(existing.title),
            company: self.company.unwrap_or(existing.company),
            duration: self.duration.unwrap_or(existing.duration),
            current: self.current.unwrap_or(existing.current),
            highlights: self.highlights.unwrap_or(existing.highlights),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillPatch {
    pub category: Option<String>,
    pub items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialPatch {
    pub quote: Option<String>,
    pub author: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    /// Outer `None` = key absent, leave the image alone; `Some(None)` =
    /// explicit `null`, clear it.
    #[serde(deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatedItemPatch {
    pub title: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HobbyPatch {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CollectionEditor {
    pub fn new(store: Arc<ContentStore>, registry: Arc<ValidationRegistry>) -> Self {
        Self { store, registry }
    }

    // ── Projects (id identity) ──────────────────────────────────────

    pub fn add_project(&self) -> i64 {
        let id = mint_entity_id();
        let template = Project::template(id);
        let errors = validate_project(&template);
        self.store.apply(move |mut doc| {
            doc.projects.push(template);
            doc
        });
        self.registry.record(format!("project:{id}"), errors);
        id
    }

    pub fn update_project(&self, id: i64, patch: ProjectPatch) -> Result<ErrorMap, EditError> {
        let current = self.store.current();
        let existing = current
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| EditError::not_found("project", id))?;

        let merged = patch.merge(existing);
        let errors = validate_project(&merged);
        self.store.apply(move |mut doc| {
            if let Some(slot) = doc.projects.iter_mut().find(|p| p.id == id) {
                *slot = merged;
            }
            doc
        });
        self.registry.record(format!("project:{id}"), errors.clone());
        Ok(errors)
    }

    pub fn delete_project(&self, id: i64) -> Result<(), EditError> {
        let current = self.store.current();
        if !current.projects.iter().any(|p| p.id == id) {
            return Err(EditError::not_found("project", id));
        }
        self.store.apply(move |mut doc| {
            doc.projects.retain(|p| p.id != id);
            doc
        });
        self.registry.clear(&format!("project:{id}"));
        Ok(())
    }

    // ── Experience (id identity) ────────────────────────────────────

    pub fn add_experience(&self) -> i64 {
        let id = mint_entity_id();
        let template = Experience::template(id);
        let errors = validate_experience(&template);
        self.store.apply(move |mut doc| {
            doc.experience.push(template);
            doc
        });
        self.registry.record(format!("experience:{id}"), errors);
        id
    }

    pub fn update_experience(
        &self,
        id: i64,
        patch: ExperiencePatch,
    ) -> Result<ErrorMap, EditError> {
        let current = self.store.current();
        let existing = current
            .experience
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| EditError::not_found("experience", id))?;

        let merged = patch.merge(existing);
        let errors = validate_experience(&merged);
        self.store.apply(move |mut doc| {
            if let Some(slot) = doc.experience.iter_mut().find(|e| e.id == id) {
                *slot = merged;
            }
            doc
        });
        self.registry
            .record(format!("experience:{id}"), errors.clone());
        Ok(errors)
    }

    pub fn delete_experience(&self, id: i64) -> Result<(), EditError> {
        let current = self.store.current();
        if !current.experience.iter().any(|e| e.id == id) {
            return Err(EditError::not_found("experience", id));
        }
        self.store.apply(move |mut doc| {
            doc.experience.retain(|e| e.id != id);
            doc
        });
        self.registry.clear(&format!("experience:{id}"));
        Ok(())
    }

    // ── Skills (positional identity) ────────────────────────────────

    pub fn add_skill(&self) -> usize {
        let template = SkillGroup::template();
        let errors = validate_skill(&template);
        let doc = self.store.apply(move |mut doc| {
            doc.skills.push(template);
            doc
        });
        let index = doc.skills.len() - 1;
        self.registry.record(format!("skill:{index}"), errors);
        index
    }

    pub fn update_skill(&self, index: usize, patch: SkillPatch) -> Result<ErrorMap, EditError> {
        let current = self.store.current();
        let existing = current
            .skills
            .get(index)
            .cloned()
            .ok_or_else(|| EditError::not_found("skill", index))?;

        let merged = SkillGroup {
            category: patch.category.unwrap_or(existing.category),
            items: patch.items.unwrap_or(existing.items),
        };
        let errors = validate_skill(&merged);
        self.store.apply(move |mut doc| {
            if let Some(slot) = doc.skills.get_mut(index) {
                *slot = merged;
            }
            doc
        });
        self.registry.record(format!("skill:{index}"), errors.clone());
        Ok(errors)
    }

    pub fn delete_skill(&self, index: usize) -> Result<(), EditError> {
        // The bounds check runs inside the replacement, under the same lock
        // as the removal; a racing delete of the same index gets NotFound
        // instead of a panic.
        let mut removed = false;
        self.store.apply(|mut doc| {
            if index < doc.skills.len() {
                doc.skills.remove(index);
                removed = true;
            }
            doc
        });
        if !removed {
            return Err(EditError::not_found("skill", index));
        }
        self.registry.clear(&format!("skill:{index}"));
        Ok(())
    }

    // ── Clients (positional identity) ───────────────────────────────

    pub fn add_client(&self) -> usize {
        let template = Client::template();
        let errors = validate_client(&template);
        let doc = self.store.apply(move |mut doc| {
            doc.clients.push(template);
            doc
        });
        let index = doc.clients.len() - 1;
        self.registry.record(format!("client:{index}"), errors);
        index
    }

    pub fn update_client(&self, index: usize, patch: ClientPatch) -> Result<ErrorMap, EditError> {
        let current = self.store.current();
        let existing = current
            .clients
            .get(index)
            .cloned()
            .ok_or_else(|| EditError::not_found("client", index))?;

        let merged = Client {
            name: patch.name.unwrap_or(existing.name),
            logo: patch.logo.unwrap_or(existing.logo),
        };
        let errors = validate_client(&merged);
        self.store.apply(move |mut doc| {
            if let Some(slot) = doc.clients.get_mut(index) {
                *slot = merged;
            }
            doc
        });
        self.registry
            .record(format!("client:{index}"), errors.clone());
        Ok(errors)
    }

    pub fn delete_client(&self, index: usize) -> Result<(), EditError> {
        let mut removed = false;
        self.store.apply(|mut doc| {
            if index < doc.clients.len() {
                doc.clients.remove(index);
                removed = true;
            }
            doc
        });
        if !removed {
            return Err(EditError::not_found("client", index));
        }
        self.registry.clear(&format!("client:{index}"));
        Ok(())
    }

    // ── Testimonials (positional identity) ──────────────────────────

    pub fn add_testimonial(&self) -> usize {
        let template = Testimonial::template();
        let errors = validate_testimonial(&template);
        let doc = self.store.apply(move |mut doc| {
            doc.testimonials.push(template);
            doc
        });
        let index = doc.testimonials.len() - 1;
        self.registry.record(format!("testimonial:{index}"), errors);
        index
    }

    pub fn update_testimonial(
        &self,
        index: usize,
        patch: TestimonialPatch,
    ) -> Result<ErrorMap, EditError> {
        let current = self.store.current();
        let existing = current
            .testimonials
            .get(index)
            .cloned()
            .ok_or_else(|| EditError::not_found("testimonial", index))?;

        let merged = Testimonial {
            quote: patch.quote.unwrap_or(existing.quote),
            author: patch.author.unwrap_or(existing.author),
            role: patch.role.unwrap_or(existing.role),
            company: patch.company.unwrap_or(existing.company),
            image: match patch.image {
                Some(image) => image,
                None => existing.image,
            },
        };
        let errors = validate_testimonial(&merged);
        self.store.apply(move |mut doc| {
            if let Some(slot) = doc.testimonials.get_mut(index) {
                *slot = merged;
            }
            doc
        });
        self.registry
            .record(format!("testimonial:{index}"), errors.clone());
        Ok(errors)
    }

    pub fn delete_testimonial(&self, index: usize) -> Result<(), EditError> {
        let mut removed = false;
        self.store.apply(|mut doc| {
            if index < doc.testimonials.len() {
                doc.testimonials.remove(index);
                removed = true;
            }
            doc
        });
        if !removed {
            return Err(EditError::not_found("testimonial", index));
        }
        self.registry.clear(&format!("testimonial:{index}"));
        Ok(())
    }

    // ── Certifications / activities / hobbies ───────────────────────
    // No entity validators for these; they are permissive by design.

    pub fn add_certification(&self) -> usize {
        let doc = self.store.apply(|mut doc| {
            doc.certifications.push(DatedItem::template());
            doc
        });
        doc.certifications.len() - 1
    }

    pub fn update_certification(
        &self,
        index: usize,
        patch: DatedItemPatch,
    ) -> Result<ErrorMap, EditError> {
        let current = self.store.current();
        let existing = current
            .certifications
            .get(index)
            .cloned()
            .ok_or_else(|| EditError::not_found("certification", index))?;
        let merged = DatedItem {
            title: patch.title.unwrap_or(existing.title),
            date: patch.date.unwrap_or(existing.date),
        };
        self.store.apply(move |mut doc| {
            if let Some(slot) = doc.certifications.get_mut(index) {
                *slot = merged;
            }
            doc
        });
        Ok(ErrorMap::new())
    }

    pub fn delete_certification(&self, index: usize) -> Result<(), EditError> {
        let mut removed = false;
        self.store.apply(|mut doc| {
            if index < doc.certifications.len() {
                doc.certifications.remove(index);
                removed = true;
            }
            doc
        });
        if removed {
            Ok(())
        } else {
            Err(EditError::not_found("certification", index))
        }
    }

    pub fn add_activity(&self) -> usize {
        let doc = self.store.apply(|mut doc| {
            doc.activities.push(DatedItem::template());
            doc
        });
        doc.activities.len() - 1
    }

    pub fn update_activity(
        &self,
        index: usize,
        patch: DatedItemPatch,
    ) -> Result<ErrorMap, EditError> {
        let current = self.store.current();
        let existing = current
            .activities
            .get(index)
            .cloned()
            .ok_or_else(|| EditError::not_found("activity", index))?;
        let merged = DatedItem {
            title: patch.title.unwrap_or(existing.title),
            date: patch.date.unwrap_or(existing.date),
        };
        self.store.apply(move |mut doc| {
            if let Some(slot) = doc.activities.get_mut(index) {
                *slot = merged;
            }
            doc
        });
        Ok(ErrorMap::new())
    }

    pub fn delete_activity(&self, index: usize) -> Result<(), EditError> {
        let mut removed = false;
        self.store.apply(|mut doc| {
            if index < doc.activities.len() {
                doc.activities.remove(index);
                removed = true;
            }
            doc
        });
        if removed {
            Ok(())
        } else {
            Err(EditError::not_found("activity", index))
        }
    }

    pub fn add_hobby(&self) -> usize {
        let doc = self.store.apply(|mut doc| {
            doc.hobbies.push(Hobby::template());
            doc
        });
        doc.hobbies.len() - 1
    }

    pub fn update_hobby(&self, index: usize, patch: HobbyPatch) -> Result<ErrorMap, EditError> {
        let current = self.store.current();
        let existing = current
            .hobbies
            .get(index)
            .cloned()
            .ok_or_else(|| EditError::not_found("hobby", index))?;
        let merged = Hobby {
            icon: patch.icon.unwrap_or(existing.icon),
            title: patch.title.unwrap_or(existing.title),
            description: patch.description.unwrap_or(existing.description),
        };
        self.store.apply(move |mut doc| {
            if let Some(slot) = doc.hobbies.get_mut(index) {
                *slot = merged;
            }
            doc
        });
        Ok(ErrorMap::new())
    }

    pub fn delete_hobby(&self, index: usize) -> Result<(), EditError> {
        let mut removed = false;
        self.store.apply(|mut doc| {
            if index < doc.hobbies.len() {
                doc.hobbies.remove(index);
                removed = true;
            }
            doc
        });
        if removed {
            Ok(())
        } else {
            Err(EditError::not_found("hobby", index))
        }
    }
}
