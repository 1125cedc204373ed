//! Site copy - the editable text of the directors and about pages
//!
//! One [`SiteContent`] singleton per installation. The `Default` impl is
//! the copy the site launched with; it doubles as the fallback whenever
//! the content slot is absent or unreadable.

use serde::{Deserialize, Serialize};

use crate::links::normalize_image_url;
use crate::portfolio::STUDIO_NAME;

/// A single accolade on the directors page, e.g. `12+` / `Years of
/// Industry Excellence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Copy for the directors page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorsContent {
    /// Featured director's name
    pub name: String,
    /// Role line shown above the name
    pub sub_name: String,
    /// Large manifesto quote
    pub manifesto: String,
    pub process_title: String,
    pub process_desc: String,
    pub tech_title: String,
    pub tech_desc: String,
    /// Core disciplines, in display order
    pub disciplines: Vec<String>,
    /// Accolades, in display order
    pub stats: Vec<Stat>,
}

impl Default for DirectorsContent {
    fn default() -> Self {
        Self {
            name: "JUNG JUNE".to_string(),
            sub_name: "Lead Creative Director".to_string(),
            manifesto: "WE DON'T JUST RECORD MOMENTS. WE INVENTORY THE ESSENCE OF HUMAN EMOTION THROUGH LIGHT AND SHADOW.".to_string(),
            process_title: "Process".to_string(),
            process_desc: "Jung June operates at the intersection of cinematic tradition and digital evolution. His process involves a rigorous deconstruction of brand DNA to find the singular visual hook that resonates on a subconscious level.".to_string(),
            tech_title: "Technology".to_string(),
            tech_desc: "Utilizing state-of-the-art optical tools and proprietary AI-driven pre-visualization, he bridges the gap between impossible imagination and physical reality.".to_string(),
            disciplines: vec![
                "Cinematic Storytelling".to_string(),
                "Automotive Art".to_string(),
                "Luxury Branding".to_string(),
                "Abstract Narratives".to_string(),
                "AI-Enhanced Vision".to_string(),
                "Futuristic Minimalism".to_string(),
            ],
            stats: vec![
                Stat::new("12+", "Years of Industry Excellence"),
                Stat::new("500", "Global Campaign Deliveries"),
                Stat::new("∞", "Commitment to Innovation"),
                Stat::new("ONE", "Uncompromising Vision"),
            ],
        }
    }
}

/// Copy for the about page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    /// Oversized statement headline
    pub headline: String,
    pub description1: String,
    pub description2: String,
    /// Studio stills, canonical image form
    pub img1: String,
    pub img2: String,
    pub philosophy: String,
    pub hub: String,
    pub innovation: String,
}

impl AboutContent {
    /// Rewrite the still links to their canonical forms. Idempotent.
    pub fn normalize_links(&mut self) {
        self.img1 = normalize_image_url(&self.img1);
        self.img2 = normalize_image_url(&self.img2);
    }
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            headline: "WE CRAFT VISUAL NARRATIVES FOR THE BOLD.".to_string(),
            description1: format!(
                "Founded with the vision to bridge the gap between commercial efficiency and cinematic art, {STUDIO_NAME} has become the primary destination for global brands seeking distinctive visual identities."
            ),
            description2: "We believe every frame is an inventory of human emotion, technical precision, and cultural zeitgeist. From Samsung to Genesis, our portfolio reflects a commitment to the \"Bold\" aesthetic—high contrast, precise lines, and emotional weight.".to_string(),
            img1: "https://images.unsplash.com/photo-1492691523567-6170c81efad1?q=80&w=1470&auto=format&fit=crop".to_string(),
            img2: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=1470&auto=format&fit=crop".to_string(),
            philosophy: "PRECISION IN CHAOS".to_string(),
            hub: "SEOUL & BEYOND".to_string(),
            innovation: "NEURAL CINEMA LABS".to_string(),
        }
    }
}

/// The whole editable site copy, persisted as one slot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteContent {
    pub directors: DirectorsContent,
    pub about: AboutContent,
}

impl SiteContent {
    /// Rewrite all image links to their canonical forms. Idempotent.
    pub fn normalize_links(&mut self) {
        self.about.normalize_links();
    }
}
