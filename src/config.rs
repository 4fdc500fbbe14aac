use serde::Deserialize;

use crate::components::icon::Icon;
use crate::error::PageError;

const SITE_JSON: &str = include_str!("../static/site.json");

pub const DEFAULT_VOLUME: f64 = 0.25;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub profile: Profile,
    pub title: String,
    pub media: MediaAssets,
    pub main_links: Vec<LinkRecord>,
    pub social_links: Vec<LinkRecord>,
    #[serde(default)]
    pub typewriter: TypewriterTimings,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub avatar_url: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MediaAssets {
    pub video: String,
    pub audio: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LinkRecord {
    pub title: String,
    pub url: String,
    pub icon: Icon,
}

/// Step delays for the title animation, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypewriterTimings {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            type_ms: 200,
            delete_ms: 100,
            hold_full_ms: 2000,
            hold_empty_ms: 500,
        }
    }
}

impl SiteConfig {
    pub fn load() -> Result<Self, PageError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Profile {
    /// Avatar fallback text: first two characters of the name, uppercased.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}
