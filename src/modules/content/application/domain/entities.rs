use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A draft either targets an existing row (`id: Some`) or asks for a new one.
/// Every section entity shares this shape, which is what lets one service
/// drive all six tables.
pub trait SectionDraft {
    fn id(&self) -> Option<Uuid>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub live_demo_url: Option<String>,
    pub github_url: Option<String>,
    pub screenshot_url: Option<String>,
    pub featured: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectDraft {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub live_demo_url: Option<String>,
    pub github_url: Option<String>,
    pub screenshot_url: Option<String>,
    pub featured: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillDraft {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryItemDraft {
    pub id: Option<Uuid>,
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationDraft {
    pub id: Option<Uuid>,
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub year: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceDraft {
    pub id: Option<Uuid>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: Uuid,
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLinkDraft {
    pub id: Option<Uuid>,
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}

macro_rules! impl_section_draft {
    ($($draft:ty),+ $(,)?) => {
        $(impl SectionDraft for $draft {
            fn id(&self) -> Option<Uuid> {
                self.id
            }
        })+
    };
}

impl_section_draft!(
    ProjectDraft,
    SkillDraft,
    GalleryItemDraft,
    EducationDraft,
    ExperienceDraft,
    SocialLinkDraft,
);
