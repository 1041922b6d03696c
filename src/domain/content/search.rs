use serde::{Deserialize, Serialize};

use super::entities::{BlogPost, CaseStudy, Service};

/// Result bundle of a free-text search across the three searchable
/// collections. The arrays are independent filters over their collections:
/// no ranking, no deduplication, collection order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub services: Vec<Service>,
    pub case_studies: Vec<CaseStudy>,
    pub posts: Vec<BlogPost>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.case_studies.is_empty() && self.posts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.services.len() + self.case_studies.len() + self.posts.len()
    }
}
