use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The singleton site configuration row. All content fields are optional;
/// the public site renders whatever is present and skips the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub id: Uuid,
    pub site_name: Option<String>,
    pub description: Option<String>,
    pub hero_name: Option<String>,
    pub hero_headline: Option<String>,
    pub hero_photo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub cv_url: Option<String>,
    pub about_text: Option<String>,
    pub github_username: Option<String>,
}

/// Partial update: `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfigDraft {
    pub site_name: Option<String>,
    pub description: Option<String>,
    pub hero_name: Option<String>,
    pub hero_headline: Option<String>,
    pub hero_photo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub cv_url: Option<String>,
    pub about_text: Option<String>,
    pub github_username: Option<String>,
}
