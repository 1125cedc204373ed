//! Portfolio entry types
//!
//! [`Project`] is the unit the public grid renders and the admin screen
//! edits. Its serialized form is the camel-cased JSON the site has always
//! stored, so existing slots keep loading.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::links::{normalize_image_url, normalize_video_url};

/// Director credited on house productions by default
pub const STUDIO_NAME: &str = "INV-FILM";

/// Thumbnail used when an entry is created without one
pub const FALLBACK_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=1364&auto=format&fit=crop";

/// Video used when an entry is created without one
pub const FALLBACK_VIDEO_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

/// Portfolio category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "BRANDED CONTENT")]
    BrandedContent,
    #[serde(rename = "INTERVIEW")]
    Interview,
    #[serde(rename = "MAKING")]
    Making,
    #[serde(rename = "AI-STUDIO")]
    AiStudio,
}

impl Category {
    /// Convert to the wire string stored in slots
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BrandedContent => "BRANDED CONTENT",
            Category::Interview => "INTERVIEW",
            Category::Making => "MAKING",
            Category::AiStudio => "AI-STUDIO",
        }
    }

    /// Parse from a wire or form string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "BRANDED CONTENT" => Some(Category::BrandedContent),
            "INTERVIEW" => Some(Category::Interview),
            "MAKING" => Some(Category::Making),
            "AI-STUDIO" => Some(Category::AiStudio),
            _ => None,
        }
    }

    /// Get all categories, in the order the site lists them
    pub fn all() -> &'static [Category] {
        &[
            Category::BrandedContent,
            Category::Interview,
            Category::Making,
            Category::AiStudio,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Frame shape an entry is shot and rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// Convert to the wire string stored in slots
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }

    /// Parse from a wire or form string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "16:9" => Some(AspectRatio::Landscape),
            "9:16" => Some(AspectRatio::Portrait),
            _ => None,
        }
    }

    /// Human-readable label shown in the admin form
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "Landscape (16:9)",
            AspectRatio::Portrait => "Portrait (9:16)",
        }
    }

    pub fn all() -> &'static [AspectRatio] {
        &[AspectRatio::Landscape, AspectRatio::Portrait]
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A portfolio entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique, opaque identifier
    pub id: String,
    /// Display title, e.g. "SAMSUNG - THE ALLIANCE"
    pub title: String,
    /// Grid category the entry files under
    pub category: Category,
    /// Still shown in the grid, canonical image form
    pub thumbnail: String,
    /// Film played in the project modal, canonical embed form
    pub video_url: String,
    /// Commissioning client
    pub client: String,
    /// Credited director
    pub director: String,
    /// Production year, stored as text
    pub year: String,
    /// Long-form description shown in the modal
    pub description: String,
    /// Additional stills, canonical image form
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Frame shape the entry renders in
    pub aspect_ratio: AspectRatio,
}

impl Project {
    /// Build a new entry from a (possibly sparse) admin submission.
    ///
    /// Unset fields take the house defaults, the id is freshly assigned,
    /// and link fields are canonicalized.
    pub fn from_patch(patch: ProjectPatch) -> Self {
        let mut project = Self {
            id: Uuid::now_v7().to_string(),
            title: patch.title.unwrap_or_else(|| "Untitled".to_string()),
            category: patch.category.unwrap_or_default(),
            thumbnail: patch.thumbnail.unwrap_or_else(|| FALLBACK_THUMBNAIL.to_string()),
            video_url: patch.video_url.unwrap_or_else(|| FALLBACK_VIDEO_URL.to_string()),
            client: patch.client.unwrap_or_else(|| "N/A".to_string()),
            director: patch.director.unwrap_or_else(|| STUDIO_NAME.to_string()),
            year: patch.year.unwrap_or_else(|| Utc::now().year().to_string()),
            description: patch.description.unwrap_or_default(),
            gallery: patch.gallery.unwrap_or_default(),
            aspect_ratio: patch.aspect_ratio.unwrap_or_default(),
        };
        project.normalize_links();
        project
    }

    /// Merge the set fields of `patch` over this entry and re-canonicalize
    /// link fields. The id never changes.
    pub fn apply_patch(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = thumbnail;
        }
        if let Some(video_url) = patch.video_url {
            self.video_url = video_url;
        }
        if let Some(client) = patch.client {
            self.client = client;
        }
        if let Some(director) = patch.director {
            self.director = director;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(gallery) = patch.gallery {
            self.gallery = gallery;
        }
        if let Some(aspect_ratio) = patch.aspect_ratio {
            self.aspect_ratio = aspect_ratio;
        }
        self.normalize_links();
    }

    /// Rewrite thumbnail, video, and gallery links to their canonical
    /// forms. Idempotent; also applied when loading entries written by
    /// older site builds.
    pub fn normalize_links(&mut self) {
        self.thumbnail = normalize_image_url(&self.thumbnail);
        self.video_url = normalize_video_url(&self.video_url);
        for entry in &mut self.gallery {
            *entry = normalize_image_url(entry);
        }
    }
}

/// A sparse admin submission: only the set fields are applied
///
/// Used both to create entries (unset fields fall back to the house
/// defaults) and to edit them (unset fields keep their current value).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub thumbnail: Option<String>,
    pub video_url: Option<String>,
    pub client: Option<String>,
    pub director: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub aspect_ratio: Option<AspectRatio>,
}

impl ProjectPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_video_url(mut self, video_url: impl Into<String>) -> Self {
        self.video_url = Some(video_url.into());
        self
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_gallery(mut self, gallery: Vec<String>) -> Self {
        self.gallery = Some(gallery);
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }
}
