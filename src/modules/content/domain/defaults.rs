use super::entities::{
    About, Client, ContactInfo, DatedItem, Education, Experience, Hobby, PortfolioDocument,
    Project, SkillGroup, Stats, Testimonial,
};

/// Built-in baseline content. Used only when neither a local state entry nor
/// a server-persisted document is available (lowest rung of the resolution
/// precedence).
pub fn baseline_document() -> PortfolioDocument {
    PortfolioDocument {
        contact: ContactInfo {
            name: "Arjun Mehta".to_string(),
            title: "Senior UX Designer".to_string(),
            tagline: "Designing clear, measurable product experiences".to_string(),
            location: "Bengaluru, India".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "hello@arjunmehta.design".to_string(),
            portfolio_url: "https://arjunmehta.design".to_string(),
            linkedin_url: "https://linkedin.com/in/arjunmehta-ux".to_string(),
            whatsapp_url: "https://wa.me/919876543210".to_string(),
            profile_image: "/assets/profile.jpg".to_string(),
            resume_file: "/assets/arjun-mehta-resume.pdf".to_string(),
        },
        stats: Stats {
            projects_delivered: "30+".to_string(),
            global_clients: "12".to_string(),
            usability_improvement: "40%".to_string(),
            client_satisfaction: "98%".to_string(),
        },
        about: About {
            background:
                "Product designer with eight years across fintech, health and e-commerce, \
                 moving from agency work to embedded product teams."
                    .to_string(),
            specialization:
                "Research-led UX for complex workflows: dashboards, onboarding funnels and \
                 multi-step transactional flows."
                    .to_string(),
            approach:
                "Start from the user's job to be done, prototype early, measure everything \
                 that ships."
                    .to_string(),
        },
        projects: vec![
            Project {
                id: 1,
                title: "Merchant Onboarding Redesign".to_string(),
                company: "PayStack Labs".to_string(),
                duration: "Jan 2024 - Jun 2024".to_string(),
                role: "Lead UX Designer".to_string(),
                summary: "Rebuilt a seven-step merchant onboarding flow into three steps."
                    .to_string(),
                impact: "Drop-off fell from 54% to 21% within one quarter.".to_string(),
                category: "Fintech".to_string(),
                problem_statement:
                    "Merchants abandoned onboarding because document upload and KYC were \
                     interleaved with account configuration."
                        .to_string(),
                deliverables: vec![
                    "Journey map".to_string(),
                    "Interactive prototype".to_string(),
                    "Design system additions".to_string(),
                ],
                tags: vec!["UX".to_string(), "Onboarding".to_string()],
                image: "/assets/projects/onboarding.png".to_string(),
                featured: true,
            },
            Project {
                id: 2,
                title: "Clinical Notes Companion".to_string(),
                company: "Medline Health".to_string(),
                duration: "Aug 2023 - Dec 2023".to_string(),
                role: "Product Designer".to_string(),
                summary: "Voice-first note capture for outpatient clinicians.".to_string(),
                impact: "Cut average per-patient documentation time by 11 minutes.".to_string(),
                category: "Healthcare".to_string(),
                problem_statement:
                    "Clinicians transcribed notes after hours because the EMR form did not \
                     match how consultations actually flow."
                        .to_string(),
                deliverables: vec![
                    "Field study report".to_string(),
                    "High-fidelity prototype".to_string(),
                ],
                tags: vec!["Research".to_string(), "Voice UI".to_string()],
                image: "/assets/projects/clinical-notes.png".to_string(),
                featured: true,
            },
            Project {
                id: 3,
                title: "Storefront Analytics Dashboard".to_string(),
                company: "Cartwheel Commerce".to_string(),
                duration: "Feb 2023 - Jul 2023".to_string(),
                role: "UX Designer".to_string(),
                summary: "Self-serve analytics for small storefront owners.".to_string(),
                impact: "Weekly active usage of reports tripled after launch.".to_string(),
                category: "E-commerce".to_string(),
                problem_statement:
                    "Store owners exported raw CSVs because the built-in reports answered \
                     none of their day-to-day questions."
                        .to_string(),
                deliverables: vec!["Dashboard IA".to_string(), "Usability test plan".to_string()],
                tags: vec!["Dashboards".to_string(), "Data viz".to_string()],
                image: "/assets/projects/storefront.png".to_string(),
                featured: false,
            },
        ],
        experience: vec![
            Experience {
                id: 1,
                title: "Senior UX Designer".to_string(),
                company: "PayStack Labs".to_string(),
                duration: "2022 - Present".to_string(),
                current: true,
                highlights: vec![
                    "Own end-to-end design for the merchant activation funnel".to_string(),
                    "Mentor two mid-level designers".to_string(),
                ],
            },
            Experience {
                id: 2,
                title: "Product Designer".to_string(),
                company: "Bright Agency".to_string(),
                duration: "2018 - 2022".to_string(),
                current: false,
                highlights: vec![
                    "Shipped 20+ client engagements across fintech and health".to_string(),
                ],
            },
        ],
        education: Education {
            degree: "B.Des, Interaction Design".to_string(),
            institution: "National Institute of Design".to_string(),
            location: "Ahmedabad, India".to_string(),
            duration: "2014 - 2018".to_string(),
            cgpa: "8.6".to_string(),
            focus: "Human-centered design, design research".to_string(),
        },
        certifications: vec![
            DatedItem {
                title: "NN/g UX Certification".to_string(),
                date: "2021".to_string(),
            },
            DatedItem {
                title: "Google UX Design Professional Certificate".to_string(),
                date: "2020".to_string(),
            },
        ],
        activities: vec![DatedItem {
            title: "Speaker, DesignUp Conference".to_string(),
            date: "2023".to_string(),
        }],
        skills: vec![
            SkillGroup {
                category: "Research".to_string(),
                items: vec![
                    "Contextual inquiry".to_string(),
                    "Usability testing".to_string(),
                    "Survey design".to_string(),
                ],
            },
            SkillGroup {
                category: "Design".to_string(),
                items: vec![
                    "Figma".to_string(),
                    "Prototyping".to_string(),
                    "Design systems".to_string(),
                ],
            },
        ],
        hobbies: vec![Hobby {
            icon: "camera".to_string(),
            title: "Street photography".to_string(),
            description: "Documenting Bengaluru's old markets on film.".to_string(),
        }],
        clients: vec![
            Client {
                name: "PayStack Labs".to_string(),
                logo: "/assets/clients/paystack.svg".to_string(),
            },
            Client {
                name: "Medline Health".to_string(),
                logo: "/assets/clients/medline.svg".to_string(),
            },
        ],
        testimonials: vec![Testimonial {
            quote: "Arjun turned a flow everyone dreaded into our best-converting screen."
                .to_string(),
            author: "Priya Nair".to_string(),
            role: "VP Product".to_string(),
            company: "PayStack Labs".to_string(),
            image: None,
        }],
    }
}
