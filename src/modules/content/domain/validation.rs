use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::OnceLock;

use email_address::EmailAddress;
use regex::Regex;

use super::entities::{
    Client, Experience, PortfolioDocument, Project, SkillGroup, Testimonial,
};

/// Field-name -> human-readable message. Validators never store empty
/// messages, so the key set of the returned map *is* the failing-field set;
/// an empty map means the input is valid. Errors are always data, never
/// `Err` and never a panic.
pub type ErrorMap = BTreeMap<String, String>;

/// Closed enumeration of every validatable field. Each variant owns an
/// explicit rule list; dispatching on field-name substrings instead could
/// silently mis-route a field whose name happened to contain a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    ContactName,
    ContactTitle,
    ContactEmail,
    PortfolioUrl,
    LinkedinUrl,
    WhatsappUrl,
    ProjectsDelivered,
    GlobalClients,
    ProjectTitle,
    ProjectCompany,
    ProjectSummary,
    ProjectImpact,
    ProjectImage,
    ExperienceTitle,
    ExperienceCompany,
    ExperienceDuration,
    SkillCategory,
    ClientName,
    ClientLogo,
    TestimonialQuote,
    TestimonialAuthor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Required,
    EmailShaped,
    /// Absolute URL, scheme optional ("example.com/x" passes).
    UrlShaped,
    /// Must parse as a number when non-empty. The stored value stays a
    /// string either way; validation and storage type differ on purpose.
    NumericShaped,
    /// Absolute URL, reserved internal asset path, or data URL.
    ImageRefShaped,
}

impl FieldId {
    /// JSON key the error is reported under.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::ContactName => "name",
            FieldId::ContactTitle => "title",
            FieldId::ContactEmail => "email",
            FieldId::PortfolioUrl => "portfolioUrl",
            FieldId::LinkedinUrl => "linkedinUrl",
            FieldId::WhatsappUrl => "whatsappUrl",
            FieldId::ProjectsDelivered => "projectsDelivered",
            FieldId::GlobalClients => "globalClients",
            FieldId::ProjectTitle => "title",
            FieldId::ProjectCompany => "company",
            FieldId::ProjectSummary => "summary",
            FieldId::ProjectImpact => "impact",
            FieldId::ProjectImage => "image",
            FieldId::ExperienceTitle => "title",
            FieldId::ExperienceCompany => "company",
            FieldId::ExperienceDuration => "duration",
            FieldId::SkillCategory => "category",
            FieldId::ClientName => "name",
            FieldId::ClientLogo => "logo",
            FieldId::TestimonialQuote => "quote",
            FieldId::TestimonialAuthor => "author",
        }
    }

    fn rules(self) -> &'static [Rule] {
        match self {
            FieldId::ContactName
            | FieldId::ContactTitle
            | FieldId::ProjectTitle
            | FieldId::ProjectCompany
            | FieldId::ProjectSummary
            | FieldId::ProjectImpact
            | FieldId::ExperienceTitle
            | FieldId::ExperienceCompany
            | FieldId::ExperienceDuration
            | FieldId::SkillCategory
            | FieldId::ClientName
            | FieldId::TestimonialQuote
            | FieldId::TestimonialAuthor => &[Rule::Required],
            FieldId::ContactEmail => &[Rule::Required, Rule::EmailShaped],
            FieldId::PortfolioUrl | FieldId::LinkedinUrl | FieldId::WhatsappUrl => {
                &[Rule::UrlShaped]
            }
            FieldId::ProjectsDelivered | FieldId::GlobalClients => &[Rule::NumericShaped],
            FieldId::ProjectImage | FieldId::ClientLogo => &[Rule::ImageRefShaped],
        }
    }
}

/// Prefix reserved for assets bundled with the site itself.
pub const INTERNAL_ASSET_PREFIX: &str = "/assets/";

fn url_pattern() -> &'static Regex {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE.get_or_init(|| {
        // Either an explicit http(s) URL, or a bare dotted host with an
        // optional path (scheme optional per the form rules).
        Regex::new(r"^(https?://\S+|([\w-]+\.)+[a-zA-Z]{2,}(:\d+)?(/\S*)?)$")
            .expect("url pattern is valid")
    })
}

/// An image/logo/PDF reference is valid as an absolute URL, an internal
/// asset path, or a data URL produced by upload encoding. All three are
/// equally acceptable everywhere a reference is consumed.
pub fn is_valid_asset_reference(value: &str) -> bool {
    value.starts_with(INTERNAL_ASSET_PREFIX)
        || value.starts_with("data:")
        || url_pattern().is_match(value)
}

/// Apply the field's rule list in order and return the first failure, or
/// `None` when the value is valid. Format rules only fire on non-empty
/// values; `Required` decides whether empty is acceptable at all.
pub fn validate_field(field: FieldId, value: &str) -> Option<String> {
    let trimmed = value.trim();
    for rule in field.rules() {
        match rule {
            Rule::Required => {
                if trimmed.is_empty() {
                    return Some("This field is required".to_string());
                }
            }
            Rule::EmailShaped => {
                if !trimmed.is_empty() && EmailAddress::from_str(trimmed).is_err() {
                    return Some("Enter a valid email address".to_string());
                }
            }
            Rule::UrlShaped => {
                if !trimmed.is_empty() && !url_pattern().is_match(trimmed) {
                    return Some("Enter a valid URL".to_string());
                }
            }
            Rule::NumericShaped => {
                if !trimmed.is_empty() && trimmed.parse::<f64>().is_err() {
                    return Some("Enter a number".to_string());
                }
            }
            Rule::ImageRefShaped => {
                if !trimmed.is_empty() && !is_valid_asset_reference(trimmed) {
                    return Some(
                        "Use an absolute URL, an /assets/ path or an uploaded file".to_string(),
                    );
                }
            }
        }
    }
    None
}

fn collect(entries: Vec<(FieldId, Option<String>)>) -> ErrorMap {
    let mut map = ErrorMap::new();
    for (field, error) in entries {
        if let Some(message) = error {
            map.insert(field.key().to_string(), message);
        }
    }
    map
}

pub fn validate_project(project: &Project) -> ErrorMap {
    collect(vec![
        (
            FieldId::ProjectTitle,
            validate_field(FieldId::ProjectTitle, &project.title),
        ),
        (
            FieldId::ProjectCompany,
            validate_field(FieldId::ProjectCompany, &project.company),
        ),
        (
            FieldId::ProjectSummary,
            validate_field(FieldId::ProjectSummary, &project.summary),
        ),
        (
            FieldId::ProjectImpact,
            validate_field(FieldId::ProjectImpact, &project.impact),
        ),
        (
            FieldId::ProjectImage,
            validate_field(FieldId::ProjectImage, &project.image),
        ),
    ])
}

pub fn validate_experience(experience: &Experience) -> ErrorMap {
    collect(vec![
        (
            FieldId::ExperienceTitle,
            validate_field(FieldId::ExperienceTitle, &experience.title),
        ),
        (
            FieldId::ExperienceCompany,
            validate_field(FieldId::ExperienceCompany, &experience.company),
        ),
        (
            FieldId::ExperienceDuration,
            validate_field(FieldId::ExperienceDuration, &experience.duration),
        ),
    ])
}

pub fn validate_skill(skill: &SkillGroup) -> ErrorMap {
    collect(vec![(
        FieldId::SkillCategory,
        validate_field(FieldId::SkillCategory, &skill.category),
    )])
}

pub fn validate_client(client: &Client) -> ErrorMap {
    collect(vec![
        (
            FieldId::ClientName,
            validate_field(FieldId::ClientName, &client.name),
        ),
        (
            FieldId::ClientLogo,
            validate_field(FieldId::ClientLogo, &client.logo),
        ),
    ])
}

pub fn validate_testimonial(testimonial: &Testimonial) -> ErrorMap {
    collect(vec![
        (
            FieldId::TestimonialQuote,
            validate_field(FieldId::TestimonialQuote, &testimonial.quote),
        ),
        (
            FieldId::TestimonialAuthor,
            validate_field(FieldId::TestimonialAuthor, &testimonial.author),
        ),
    ])
}

/// Singleton form sections of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Contact,
    About,
    Education,
    Stats,
}

/// Validate a singleton section against the current document. `about` and
/// `education` carry no enforced rules; they are intentionally permissive,
/// not forgotten.
pub fn validate_section(section: Section, document: &PortfolioDocument) -> ErrorMap {
    match section {
        Section::Contact => collect(vec![
            (
                FieldId::ContactName,
                validate_field(FieldId::ContactName, &document.contact.name),
            ),
            (
                FieldId::ContactTitle,
                validate_field(FieldId::ContactTitle, &document.contact.title),
            ),
            (
                FieldId::ContactEmail,
                validate_field(FieldId::ContactEmail, &document.contact.email),
            ),
            (
                FieldId::PortfolioUrl,
                validate_field(FieldId::PortfolioUrl, &document.contact.portfolio_url),
            ),
            (
                FieldId::LinkedinUrl,
                validate_field(FieldId::LinkedinUrl, &document.contact.linkedin_url),
            ),
            (
                FieldId::WhatsappUrl,
                validate_field(FieldId::WhatsappUrl, &document.contact.whatsapp_url),
            ),
        ]),
        Section::Stats => collect(vec![
            (
                FieldId::ProjectsDelivered,
                validate_field(FieldId::ProjectsDelivered, &document.stats.projects_delivered),
            ),
            (
                FieldId::GlobalClients,
                validate_field(FieldId::GlobalClients, &document.stats.global_clients),
            ),
        ]),
        Section::About | Section::Education => ErrorMap::new(),
    }
}
