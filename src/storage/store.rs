//! The content store.
//!
//! Owns the six immutable collections for the lifetime of the process. The
//! collections are parsed once from the JSON documents bundled into the
//! binary; everything downstream borrows read access through
//! `Arc<ContentStore>`. There is no create/update/delete path anywhere.
//!
//! Load is the only fallible operation. Malformed JSON or a duplicate
//! slug/id is a fatal startup error: duplicate keys are rejected here so
//! every later lookup is unambiguous.

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::content::{
    BlogPost, CaseStudy, CompanyConfig, Service, TeamMember, Testimonial,
};

const SERVICES_JSON: &str = include_str!("../../content/services.json");
const CASE_STUDIES_JSON: &str = include_str!("../../content/case_studies.json");
const BLOG_POSTS_JSON: &str = include_str!("../../content/blog_posts.json");
const TESTIMONIALS_JSON: &str = include_str!("../../content/testimonials.json");
const TEAM_JSON: &str = include_str!("../../content/team.json");
const COMPANY_JSON: &str = include_str!("../../content/company.json");

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to parse {collection}: {source}")]
    Parse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {key_kind} '{key}' in {collection}")]
    DuplicateKey {
        collection: &'static str,
        key_kind: &'static str,
        key: String,
    },
}

#[derive(Debug)]
pub struct ContentStore {
    services: Vec<Service>,
    case_studies: Vec<CaseStudy>,
    blog_posts: Vec<BlogPost>,
    testimonials: Vec<Testimonial>,
    team: Vec<TeamMember>,
    company: CompanyConfig,
}

impl ContentStore {
    /// Parses the bundled content files and validates key uniqueness.
    pub fn load() -> Result<Self, StoreError> {
        let services: Vec<Service> = parse("services", SERVICES_JSON)?;
        let case_studies: Vec<CaseStudy> = parse("case_studies", CASE_STUDIES_JSON)?;
        let blog_posts: Vec<BlogPost> = parse("blog_posts", BLOG_POSTS_JSON)?;
        let testimonials: Vec<Testimonial> = parse("testimonials", TESTIMONIALS_JSON)?;
        let team: Vec<TeamMember> = parse("team", TEAM_JSON)?;
        let company: CompanyConfig = parse("company", COMPANY_JSON)?;

        Self::from_collections(services, case_studies, blog_posts, testimonials, team, company)
    }

    /// Builds a store from already-parsed collections. Used by `load` and
    /// by tests that need small hand-built fixtures; the uniqueness
    /// validation applies either way.
    pub fn from_collections(
        services: Vec<Service>,
        case_studies: Vec<CaseStudy>,
        blog_posts: Vec<BlogPost>,
        testimonials: Vec<Testimonial>,
        team: Vec<TeamMember>,
        company: CompanyConfig,
    ) -> Result<Self, StoreError> {
        ensure_unique("services", "slug", services.iter().map(|s| s.slug.as_str()))?;
        ensure_unique("services", "id", services.iter().map(|s| s.id.as_str()))?;
        ensure_unique(
            "case_studies",
            "slug",
            case_studies.iter().map(|c| c.slug.as_str()),
        )?;
        ensure_unique("case_studies", "id", case_studies.iter().map(|c| c.id.as_str()))?;
        ensure_unique("blog_posts", "slug", blog_posts.iter().map(|p| p.slug.as_str()))?;
        ensure_unique("blog_posts", "id", blog_posts.iter().map(|p| p.id.as_str()))?;
        ensure_unique(
            "testimonials",
            "id",
            testimonials.iter().map(|t| t.id.as_str()),
        )?;
        ensure_unique("team", "id", team.iter().map(|m| m.id.as_str()))?;

        Ok(Self {
            services,
            case_studies,
            blog_posts,
            testimonials,
            team,
            company,
        })
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn company(&self) -> &CompanyConfig {
        &self.company
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    collection: &'static str,
    raw: &str,
) -> Result<T, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Parse { collection, source })
}

fn ensure_unique<'a>(
    collection: &'static str,
    key_kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(StoreError::DuplicateKey {
                collection,
                key_kind,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}
