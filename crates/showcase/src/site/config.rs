//! Site configuration.
//!
//! Everything the pages show comes from a [`SiteConfig`], normally loaded
//! from YAML:
//!
//! ```yaml
//! owner: Samuel Jones
//! headline: FULL STACK DEVELOPMENT
//! contact_email: sam@example.com
//! carousel:
//!   interval_ms: 6000
//! projects:
//!   - title: SearchSafe
//!     blurb: Scan product ingredients against allergy profiles.
//!     image: assets/scansafe.png
//!     path: /searchsafe
//! ```
//!
//! Only `owner` and `projects` are required; every other field has a default.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

use super::cards::AboutCard;
use super::gallery::GalleryItem;
use super::nav::is_reserved;
use crate::carousel::{DEFAULT_INTERVAL, DEFAULT_SWIPE_THRESHOLD};
use crate::theme::DEFAULT_STORAGE_KEY;

/// Error loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read site config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid site config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid site config: {0}")]
    Invalid(String),
}

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    #[serde(default = "default_headline")]
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub carousel: CarouselSettings,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub about: Vec<AboutCard>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSettings {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_px: f64,
}

impl CarouselSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            swipe_threshold_px: default_swipe_threshold(),
        }
    }
}

/// One showcased project: a carousel card plus its detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Derived from the title when omitted.
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub blurb: String,
    pub image: String,
    #[serde(default = "default_cta")]
    pub cta: String,
    /// Route of the project's detail page.
    pub path: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl SiteConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = serde_yaml::from_str(yaml)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// The sample site shipped with the crate.
    pub fn sample() -> Result<Self, ConfigError> {
        Self::from_yaml_str(SAMPLE_CONFIG)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Fills derived fields: missing ids and leading slashes on routes.
    fn normalize(&mut self) {
        for project in &mut self.projects {
            if project.id.trim().is_empty() {
                project.id = slugify(&project.title);
            }
            if !project.path.starts_with('/') {
                project.path.insert(0, '/');
            }
        }
    }

    /// Checks the invariants the rest of the crate relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.trim().is_empty() {
            return Err(ConfigError::Invalid("owner must not be empty".into()));
        }
        if self.projects.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one project is required for the carousel".into(),
            ));
        }
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "carousel.interval_ms must be positive".into(),
            ));
        }
        let threshold = self.carousel.swipe_threshold_px;
        if threshold.is_nan() || threshold < 0.0 {
            return Err(ConfigError::Invalid(
                "carousel.swipe_threshold_px must be zero or more".into(),
            ));
        }
        if !self.contact_email.contains('@') {
            return Err(ConfigError::Invalid(format!(
                "contact_email '{}' is not an email address",
                self.contact_email
            )));
        }
        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme.storage_key must not be empty".into()));
        }

        let mut ids = HashSet::new();
        let mut paths = HashSet::new();
        for project in &self.projects {
            if project.id.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "project '{}' has no usable id",
                    project.title
                )));
            }
            if !ids.insert(project.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate project id '{}'",
                    project.id
                )));
            }
            if is_reserved(&project.path) {
                return Err(ConfigError::Invalid(format!(
                    "project path '{}' clashes with a navigation route",
                    project.path
                )));
            }
            if !paths.insert(project.path.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate project path '{}'",
                    project.path
                )));
            }
        }
        Ok(())
    }
}

/// Sample configuration shipped with the crate.
pub const SAMPLE_CONFIG: &str = include_str!("../../sample/site.yaml");

/// Lowercase ASCII slug: `"Pax Équestrian"` → `"pax-equestrian"`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text).to_lowercase();
    let mut slug = String::with_capacity(ascii.len());
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn default_headline() -> String {
    "FULL STACK DEVELOPMENT".into()
}

fn default_contact_email() -> String {
    "you@example.com".into()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.into()
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL.as_millis() as u64
}

fn default_swipe_threshold() -> f64 {
    DEFAULT_SWIPE_THRESHOLD
}

fn default_cta() -> String {
    "Find Out More".into()
}
