//! Domain model for the site content collections.
//!
//! Every type here is immutable application data: records are deserialized
//! once from the bundled content files and never written back. The structs
//! mirror the content-file schema field for field.

pub mod company;
pub mod entities;
pub mod search;

pub use company::{
    CompanyConfig, CompanyInfo, CompanyStats, CoreValue, IconName, Mission, ProcessStep, Vision,
};
pub use entities::{
    BlogPost, CaseStudy, CaseStudyResult, CaseStudyTestimonial, PostAuthor, Pricing, Service,
    ServiceFeature, ServiceStats, SocialLinks, TeamMember, Testimonial, TestimonialClient,
};
pub use search::SearchResults;
