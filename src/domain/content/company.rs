use serde::{Deserialize, Serialize};

/// Singleton company record: identity, display statistics, and the
/// mission/vision/values/process copy used across the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyConfig {
    pub info: CompanyInfo,
    pub stats: CompanyStats,
    pub mission: Mission,
    pub vision: Vision,
    pub values: Vec<CoreValue>,
    pub process: Vec<ProcessStep>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub founded: String,
    pub email: String,
    pub support_email: String,
    #[serde(default)]
    pub social: super::entities::SocialLinks,
}

/// Business metrics as pre-formatted display strings ("25+", "98%").
/// Opaque presentation values: nothing in the service parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStats {
    pub projects_completed: String,
    pub happy_clients: String,
    pub years_experience: String,
    pub client_satisfaction: String,
    pub success_rate: String,
    pub team_size: String,
    pub average_rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub title: String,
    pub content: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vision {
    pub title: String,
    pub content: String,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreValue {
    pub id: String,
    pub title: String,
    pub icon: IconName,
    pub description: String,
}

/// Closed set of icon tags the frontend can render. Kept as an enum so an
/// unknown tag is a load-time error, not a silent broken icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Lightbulb,
    ShieldCheck,
    Users,
    Rocket,
    Target,
    Handshake,
    Sparkles,
    TrendingUp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: String,
    pub title: String,
    pub description: String,
}
