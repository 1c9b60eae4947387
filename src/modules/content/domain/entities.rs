use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The single root aggregate every consumer reads from. One shared definition;
/// the store, the validators, the editor and the web adapters all depend on
/// this module and nothing redeclares these shapes.
///
/// Field names serialize in camelCase so documents produced by earlier
/// deployments round-trip byte-compatible.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub contact: ContactInfo,
    pub stats: Stats,
    pub about: About,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Education,
    pub certifications: Vec<DatedItem>,
    pub activities: Vec<DatedItem>,
    pub skills: Vec<SkillGroup>,
    pub hobbies: Vec<Hobby>,
    pub clients: Vec<Client>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub portfolio_url: String,
    pub linkedin_url: String,
    pub whatsapp_url: String,
    pub profile_image: String,
    pub resume_file: String,
}

/// Display-ready metric labels ("30+", "98%"). Stored as strings on purpose:
/// they are formatted captions, not computed values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub projects_delivered: String,
    pub global_clients: String,
    pub usability_improvement: String,
    pub client_satisfaction: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub background: String,
    pub specialization: String,
    pub approach: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub role: String,
    pub summary: String,
    pub impact: String,
    pub category: String,
    pub problem_statement: String,
    pub deliverables: Vec<String>,
    pub tags: Vec<String>,
    pub image: String,
    /// Non-exclusive partition: any number of projects may be featured.
    /// Display layers decide how many to surface.
    pub featured: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub current: bool,
    pub highlights: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub duration: String,
    pub cgpa: String,
    pub focus: String,
}

/// Shared shape for certifications and activities. No id field; array
/// position is the only handle, and deleting an earlier element shifts the
/// identity of the ones after it. Accepted limitation for a single-user
/// editor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatedItem {
    pub title: String,
    pub date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hobby {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub name: String,
    pub logo: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

static LAST_MINTED_ID: AtomicI64 = AtomicI64::new(0);

/// Mint an id for a Project or Experience entity.
///
/// Ids are the current millisecond timestamp, bumped past the previously
/// minted id so two calls within the same millisecond still yield distinct,
/// strictly increasing values. Ids are never reused or renumbered.
pub fn mint_entity_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    loop {
        let last = LAST_MINTED_ID.load(Ordering::SeqCst);
        let candidate = if now > last { now } else { last + 1 };
        if LAST_MINTED_ID
            .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return candidate;
        }
    }
}

impl Project {
    /// Default template appended by the editor's "add project" action.
    pub fn template(id: i64) -> Self {
        Self {
            id,
            title: String::new(),
            company: String::new(),
            duration: String::new(),
            role: String::new(),
            summary: String::new(),
            impact: String::new(),
            category: String::new(),
            problem_statement: String::new(),
            deliverables: Vec::new(),
            tags: Vec::new(),
            image: String::new(),
            featured: false,
        }
    }
}

impl Experience {
    pub fn template(id: i64) -> Self {
        Self {
            id,
            title: String::new(),
            company: String::new(),
            duration: String::new(),
            current: false,
            highlights: Vec::new(),
        }
    }
}

impl SkillGroup {
    pub fn template() -> Self {
        Self {
            category: String::new(),
            items: Vec::new(),
        }
    }
}

impl Client {
    pub fn template() -> Self {
        Self {
            name: String::new(),
            logo: String::new(),
        }
    }
}

impl Testimonial {
    pub fn template() -> Self {
        Self {
            quote: String::new(),
            author: String::new(),
            role: String::new(),
            company: String::new(),
            image: None,
        }
    }
}

impl DatedItem {
    pub fn template() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
        }
    }
}

impl Hobby {
    pub fn template() -> Self {
        Self {
            icon: String::new(),
            title: String::new(),
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_are_distinct_and_increasing() {
        let a = mint_entity_id();
        let b = mint_entity_id();
        let c = mint_entity_id();
        assert!(a < b, "expected {} < {}", a, b);
        assert!(b < c, "expected {} < {}", b, c);
    }

    #[test]
    fn minted_ids_are_distinct_within_one_millisecond() {
        let ids: Vec<i64> = (0..1000).map(|_| mint_entity_id()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn document_serializes_camel_case() {
        let doc = crate::content::domain::defaults::baseline_document();
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value["contact"]["portfolioUrl"].is_string());
        assert!(value["about"]["specialization"].is_string());
        assert!(value["projects"][0]["problemStatement"].is_string());
        assert!(value["stats"]["projectsDelivered"].is_string());
    }

    #[test]
    fn testimonial_image_is_omitted_when_absent() {
        let t = Testimonial::template();
        let value = serde_json::to_value(&t).unwrap();
        assert!(value.get("image").is_none());
    }
}
