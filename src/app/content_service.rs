//! The content query service.
//!
//! Read-only accessors over the `ContentStore`. Every accessor is async and
//! sleeps an injectable artificial delay before computing its result, so
//! callers compose the service the same way they would a remote content
//! API; the delay carries no semantics and defaults to zero.
//!
//! Accessors are total: a missing slug/id or an unknown filter value is an
//! empty result, never an error. The store never changes after load, so
//! concurrent callers need no coordination, and the fan-out reads below
//! (`search`, `statistics`) join without any partial-failure handling.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::content::{
    BlogPost, CaseStudy, CompanyInfo, CompanyStats, CoreValue, Mission, ProcessStep,
    SearchResults, Service, TeamMember, Testimonial, Vision,
};
use crate::storage::ContentStore;

const DEFAULT_FEATURED_TESTIMONIALS: usize = 3;

/// Site statistics: the pre-formatted company metrics passed through
/// untouched, plus two counts derived live from the collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(flatten)]
    pub company: CompanyStats,
    pub case_studies_count: usize,
    pub testimonials_count: usize,
}

#[derive(Clone)]
pub struct ContentService {
    store: Arc<ContentStore>,
    fetch_delay: Duration,
}

impl ContentService {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            store,
            fetch_delay: Duration::ZERO,
        }
    }

    /// Sets the artificial per-accessor delay (emulates a remote source).
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    async fn fetch(&self) {
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
    }

    pub async fn services(&self) -> Vec<Service> {
        self.fetch().await;
        self.store.services().to_vec()
    }

    pub async fn service_by_slug(&self, slug: &str) -> Option<Service> {
        self.fetch().await;
        self.store.services().iter().find(|s| s.slug == slug).cloned()
    }

    pub async fn service_by_id(&self, id: &str) -> Option<Service> {
        self.fetch().await;
        self.store.services().iter().find(|s| s.id == id).cloned()
    }

    pub async fn case_studies(&self) -> Vec<CaseStudy> {
        self.fetch().await;
        self.store.case_studies().to_vec()
    }

    pub async fn case_study_by_slug(&self, slug: &str) -> Option<CaseStudy> {
        self.fetch().await;
        self.store
            .case_studies()
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
    }

    pub async fn case_study_by_id(&self, id: &str) -> Option<CaseStudy> {
        self.fetch().await;
        self.store.case_studies().iter().find(|c| c.id == id).cloned()
    }

    pub async fn case_studies_by_industry(&self, industry: &str) -> Vec<CaseStudy> {
        self.fetch().await;
        self.store
            .case_studies()
            .iter()
            .filter(|c| c.industry.eq_ignore_ascii_case(industry))
            .cloned()
            .collect()
    }

    pub async fn case_studies_by_service(&self, service: &str) -> Vec<CaseStudy> {
        self.fetch().await;
        self.store
            .case_studies()
            .iter()
            .filter(|c| c.service.eq_ignore_ascii_case(service))
            .cloned()
            .collect()
    }

    /// All posts, re-sorted by publish date descending on every call.
    /// The sort is recomputed rather than cached: it is derived from the
    /// current collection, and the stable sort keeps ties in collection
    /// order.
    pub async fn blog_posts(&self) -> Vec<BlogPost> {
        self.fetch().await;
        let mut posts = self.store.blog_posts().to_vec();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts
    }

    pub async fn blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.fetch().await;
        self.store
            .blog_posts()
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
    }

    pub async fn blog_posts_by_category(&self, category: &str) -> Vec<BlogPost> {
        let mut posts = self.blog_posts().await;
        posts.retain(|p| p.category.eq_ignore_ascii_case(category));
        posts
    }

    pub async fn blog_posts_by_tag(&self, tag: &str) -> Vec<BlogPost> {
        let mut posts = self.blog_posts().await;
        posts.retain(|p| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)));
        posts
    }

    /// Posts with the explicit `featured` flag, in sorted order. No limit.
    pub async fn featured_blog_posts(&self) -> Vec<BlogPost> {
        let mut posts = self.blog_posts().await;
        posts.retain(|p| p.featured);
        posts
    }

    /// All testimonials, re-sorted by date descending on every call.
    pub async fn testimonials(&self) -> Vec<Testimonial> {
        self.fetch().await;
        let mut testimonials = self.store.testimonials().to_vec();
        testimonials.sort_by(|a, b| b.date.cmp(&a.date));
        testimonials
    }

    pub async fn testimonial_by_id(&self, id: &str) -> Option<Testimonial> {
        self.fetch().await;
        self.store
            .testimonials()
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub async fn testimonials_by_service(&self, service: &str) -> Vec<Testimonial> {
        let mut testimonials = self.testimonials().await;
        testimonials.retain(|t| t.service.eq_ignore_ascii_case(service));
        testimonials
    }

    /// Featured testimonials are exactly the five-star ones (rating == 5,
    /// not >=), truncated to `limit` (default 3), in sorted order.
    pub async fn featured_testimonials(&self, limit: Option<usize>) -> Vec<Testimonial> {
        let mut testimonials = self.testimonials().await;
        testimonials.retain(|t| t.rating == 5);
        testimonials.truncate(limit.unwrap_or(DEFAULT_FEATURED_TESTIMONIALS));
        testimonials
    }

    pub async fn team_members(&self) -> Vec<TeamMember> {
        self.fetch().await;
        self.store.team().to_vec()
    }

    pub async fn team_member_by_id(&self, id: &str) -> Option<TeamMember> {
        self.fetch().await;
        self.store.team().iter().find(|m| m.id == id).cloned()
    }

    /// Case-insensitive substring search over the three searchable
    /// collections. The three reads are issued concurrently and joined; a
    /// match is binary (any listed field or tag contains the query) and
    /// each array keeps its collection order. The empty query matches
    /// every record.
    pub async fn search(&self, query: &str) -> SearchResults {
        let needle = query.to_lowercase();

        let (services, case_studies, posts) =
            tokio::join!(self.services(), self.case_studies(), async {
                self.fetch().await;
                self.store.blog_posts().to_vec()
            });

        let services = services
            .into_iter()
            .filter(|s| {
                contains(&s.title, &needle)
                    || contains(&s.description, &needle)
                    || s.technologies.iter().any(|t| contains(t, &needle))
            })
            .collect();
        let case_studies = case_studies
            .into_iter()
            .filter(|c| {
                contains(&c.title, &needle)
                    || contains(&c.summary, &needle)
                    || contains(&c.industry, &needle)
            })
            .collect();
        let posts = posts
            .into_iter()
            .filter(|p| {
                contains(&p.title, &needle)
                    || contains(&p.excerpt, &needle)
                    || p.tags.iter().any(|t| contains(t, &needle))
            })
            .collect();

        SearchResults {
            services,
            case_studies,
            posts,
        }
    }

    /// Merges the pass-through company metrics with the live collection
    /// counts. The two underlying reads fan out concurrently.
    pub async fn statistics(&self) -> Statistics {
        let (case_studies, testimonials) =
            tokio::join!(self.case_studies(), self.testimonials());

        Statistics {
            company: self.store.company().stats.clone(),
            case_studies_count: case_studies.len(),
            testimonials_count: testimonials.len(),
        }
    }

    pub async fn company_info(&self) -> CompanyInfo {
        self.fetch().await;
        self.store.company().info.clone()
    }

    pub async fn company_stats(&self) -> CompanyStats {
        self.fetch().await;
        self.store.company().stats.clone()
    }

    pub async fn mission(&self) -> Mission {
        self.fetch().await;
        self.store.company().mission.clone()
    }

    pub async fn vision(&self) -> Vision {
        self.fetch().await;
        self.store.company().vision.clone()
    }

    pub async fn core_values(&self) -> Vec<CoreValue> {
        self.fetch().await;
        self.store.company().values.clone()
    }

    pub async fn process_steps(&self) -> Vec<ProcessStep> {
        self.fetch().await;
        self.store.company().process.clone()
    }

    pub async fn company_features(&self) -> Vec<String> {
        self.fetch().await;
        self.store.company().features.clone()
    }
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{
        CaseStudyTestimonial, CompanyConfig, CompanyInfo, CompanyStats, Mission, PostAuthor,
        Pricing, ServiceStats, TestimonialClient, Vision,
    };
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn service(id: &str, slug: &str, title: &str, technologies: &[&str]) -> Service {
        Service {
            id: id.to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
            description: format!("{title} for growing teams"),
            features: vec![],
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            pricing: Pricing {
                starting_price: "$8,000".to_string(),
                currency: "USD".to_string(),
                billing: "project".to_string(),
            },
            timeline: "6-8 weeks".to_string(),
            stats: ServiceStats {
                projects: "40+".to_string(),
                clients: "25+".to_string(),
                satisfaction: "99%".to_string(),
            },
        }
    }

    fn case_study(id: &str, slug: &str, title: &str, industry: &str, svc: &str) -> CaseStudy {
        CaseStudy {
            id: id.to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
            client: "Acme".to_string(),
            industry: industry.to_string(),
            service: svc.to_string(),
            image: "/images/case.jpg".to_string(),
            summary: format!("How we helped with {title}"),
            challenge: String::new(),
            solution: String::new(),
            results: vec![],
            technologies: vec![],
            timeline: "3 months".to_string(),
            team_size: "4".to_string(),
            testimonial: CaseStudyTestimonial {
                quote: "Great work".to_string(),
                author: "Jo Client".to_string(),
                role: "CTO".to_string(),
            },
        }
    }

    fn post(id: &str, slug: &str, published: &str, featured: bool, tags: &[&str]) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: format!("Post {id}"),
            slug: slug.to_string(),
            excerpt: "Notes from the field".to_string(),
            content: String::new(),
            author: PostAuthor {
                name: "Dana Writer".to_string(),
                role: "Engineer".to_string(),
                avatar: "/avatars/dana.jpg".to_string(),
            },
            category: "Engineering".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published_at: date(published),
            updated_at: None,
            reading_time: "5 min".to_string(),
            featured,
            image: "/images/post.jpg".to_string(),
            seo_title: None,
            seo_description: None,
        }
    }

    fn testimonial(id: &str, rating: u8, when: &str) -> Testimonial {
        Testimonial {
            id: id.to_string(),
            client: TestimonialClient {
                name: "Pat".to_string(),
                company: "Acme".to_string(),
                role: "CEO".to_string(),
                avatar: "/avatars/pat.jpg".to_string(),
            },
            content: "Delivered on time".to_string(),
            rating,
            service: "software-development".to_string(),
            project: "Platform rebuild".to_string(),
            date: date(when),
        }
    }

    fn company() -> CompanyConfig {
        CompanyConfig {
            info: CompanyInfo {
                name: "Vertex Digital".to_string(),
                tagline: "Build what matters".to_string(),
                description: String::new(),
                founded: "2015".to_string(),
                email: "hello@vertexdigital.io".to_string(),
                support_email: "support@vertexdigital.io".to_string(),
                social: Default::default(),
            },
            stats: CompanyStats {
                projects_completed: "150+".to_string(),
                happy_clients: "90+".to_string(),
                years_experience: "10+".to_string(),
                client_satisfaction: "98%".to_string(),
                success_rate: "95%".to_string(),
                team_size: "25+".to_string(),
                average_rating: "4.9".to_string(),
            },
            mission: Mission {
                title: "Our mission".to_string(),
                content: String::new(),
                points: vec![],
            },
            vision: Vision {
                title: "Our vision".to_string(),
                content: String::new(),
                benefits: vec![],
            },
            values: vec![],
            process: vec![],
            features: vec![],
        }
    }

    fn fixture_service() -> ContentService {
        let store = ContentStore::from_collections(
            vec![
                service("svc-1", "software-development", "Software Development", &["React", "Rust"]),
                service("svc-2", "ai-automation", "AI & Automation", &["Python", "LangChain"]),
            ],
            vec![
                case_study("cs-1", "fintech-platform", "Fintech Platform", "Finance", "software-development"),
                case_study("cs-2", "retail-chatbot", "Retail Chatbot", "Retail", "ai-automation"),
                case_study("cs-3", "clinic-portal", "Clinic Portal", "Healthcare", "legacy-service"),
            ],
            vec![
                post("post-1", "january-notes", "2024-01-01", false, &["react", "frontend"]),
                post("post-2", "march-notes", "2024-03-01", true, &["rust"]),
                post("post-3", "february-notes", "2024-02-01", false, &["ai"]),
            ],
            vec![
                testimonial("t-1", 5, "2024-02-10"),
                testimonial("t-2", 4, "2024-03-05"),
                testimonial("t-3", 5, "2024-01-20"),
                testimonial("t-4", 5, "2024-04-01"),
            ],
            vec![],
            company(),
        )
        .unwrap();
        ContentService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn slug_lookup_returns_matching_record() {
        let svc = fixture_service();
        let found = svc.service_by_slug("software-development").await.unwrap();
        assert_eq!(found.slug, "software-development");
        assert!(svc.service_by_slug("nonexistent").await.is_none());
        // Slug lookups are case-sensitive.
        assert!(svc.service_by_slug("Software-Development").await.is_none());
    }

    #[tokio::test]
    async fn id_and_slug_resolve_to_the_same_record() {
        let svc = fixture_service();
        let by_slug = svc.service_by_slug("ai-automation").await.unwrap();
        let by_id = svc.service_by_id("svc-2").await.unwrap();
        assert_eq!(by_slug, by_id);
    }

    #[tokio::test]
    async fn blog_posts_sorted_by_publish_date_descending() {
        let svc = fixture_service();
        let posts = svc.blog_posts().await;
        let dates: Vec<_> = posts.iter().map(|p| p.published_at).collect();
        assert_eq!(
            dates,
            vec![date("2024-03-01"), date("2024-02-01"), date("2024-01-01")]
        );
        for pair in posts.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }

    #[tokio::test]
    async fn testimonials_sorted_by_date_descending() {
        let svc = fixture_service();
        let testimonials = svc.testimonials().await;
        for pair in testimonials.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[tokio::test]
    async fn featured_posts_are_the_flagged_subset_in_order() {
        let svc = fixture_service();
        let all = svc.blog_posts().await;
        let featured = svc.featured_blog_posts().await;
        let expected: Vec<_> = all.into_iter().filter(|p| p.featured).collect();
        assert_eq!(featured, expected);
    }

    #[tokio::test]
    async fn featured_testimonials_are_five_star_and_limited() {
        let svc = fixture_service();
        let featured = svc.featured_testimonials(Some(2)).await;
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|t| t.rating == 5));
        // Sorted order survives the filter: newest five-star first.
        assert_eq!(featured[0].id, "t-4");

        // Default limit is 3; the four-star entry never qualifies.
        let defaulted = svc.featured_testimonials(None).await;
        assert_eq!(defaulted.len(), 3);
        assert!(defaulted.iter().all(|t| t.rating == 5));
    }

    #[tokio::test]
    async fn category_and_tag_filters_are_case_insensitive() {
        let svc = fixture_service();
        assert_eq!(svc.blog_posts_by_category("engineering").await.len(), 3);
        assert_eq!(svc.blog_posts_by_tag("RUST").await.len(), 1);
        assert_eq!(svc.case_studies_by_industry("FINANCE").await.len(), 1);
        assert_eq!(svc.blog_posts_by_category("marketing").await.len(), 0);
    }

    #[tokio::test]
    async fn dangling_service_reference_yields_no_cross_matches() {
        let svc = fixture_service();
        // cs-3 points at a service slug that no longer exists; the filter
        // still works for it by literal value...
        assert_eq!(svc.case_studies_by_service("legacy-service").await.len(), 1);
        // ...and looking up the slug itself finds nothing.
        assert!(svc.service_by_slug("legacy-service").await.is_none());
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let svc = fixture_service();
        let upper = svc.search("REACT").await;
        let lower = svc.search("react").await;
        assert_eq!(upper, lower);
        assert_eq!(upper.services.len(), 1);
        assert_eq!(upper.posts.len(), 1);
    }

    #[tokio::test]
    async fn empty_query_matches_everything() {
        let svc = fixture_service();
        let results = svc.search("").await;
        assert_eq!(results.services.len(), 2);
        assert_eq!(results.case_studies.len(), 3);
        assert_eq!(results.posts.len(), 3);
    }

    #[tokio::test]
    async fn search_matches_are_independent_per_collection() {
        let svc = fixture_service();
        let results = svc.search("fintech").await;
        assert_eq!(results.case_studies.len(), 1);
        assert!(results.services.is_empty());
        assert!(results.posts.is_empty());
    }

    #[tokio::test]
    async fn accessors_are_idempotent() {
        let svc = fixture_service();
        assert_eq!(svc.blog_posts().await, svc.blog_posts().await);
        assert_eq!(svc.search("rust").await, svc.search("rust").await);
        assert_eq!(svc.statistics().await, svc.statistics().await);
    }

    #[tokio::test]
    async fn statistics_merges_live_counts_with_display_strings() {
        let svc = fixture_service();
        let stats = svc.statistics().await;
        assert_eq!(stats.case_studies_count, 3);
        assert_eq!(stats.testimonials_count, 4);
        // Pass-through strings stay opaque.
        assert_eq!(stats.company.projects_completed, "150+");
    }

    #[tokio::test]
    async fn delayed_accessors_still_resolve() {
        let svc = fixture_service().with_fetch_delay(Duration::from_millis(5));
        let start = std::time::Instant::now();
        let posts = svc.blog_posts().await;
        assert_eq!(posts.len(), 3);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
