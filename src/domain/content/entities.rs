use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A service offering. `slug` is the external lookup key (unique within the
/// collection, enforced at load); `id` is the internal key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub features: Vec<ServiceFeature>,
    pub technologies: Vec<String>,
    pub pricing: Pricing,
    pub timeline: String,
    pub stats: ServiceStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceFeature {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub starting_price: String,
    pub currency: String,
    pub billing: String,
}

/// Display statistics shown on the service card. Pre-formatted strings,
/// never parsed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStats {
    pub projects: String,
    pub clients: String,
    pub satisfaction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub client: String,
    pub industry: String,
    /// Expected to match a `Service` slug for cross-linking. A dangling
    /// value is tolerated: the cross-filter simply yields no matches.
    pub service: String,
    pub image: String,
    pub summary: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<CaseStudyResult>,
    pub technologies: Vec<String>,
    pub timeline: String,
    pub team_size: String,
    pub testimonial: CaseStudyTestimonial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyResult {
    pub metric: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyTestimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub author: PostAuthor,
    pub category: String,
    pub tags: Vec<String>,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
    pub reading_time: String,
    #[serde(default)]
    pub featured: bool,
    pub image: String,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub client: TestimonialClient,
    pub content: String,
    /// Expected range 1-5. Exactly 5 marks the testimonial as featured.
    pub rating: u8,
    pub service: String,
    pub project: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialClient {
    pub name: String,
    pub company: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub bio: String,
    pub expertise: Vec<String>,
    #[serde(default)]
    pub social: SocialLinks,
}

/// Each platform link is optional independently of the others.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dribbble: Option<String>,
}
