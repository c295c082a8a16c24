use config::{Config as ConfigBuilder, File, FileFormat};
use serde::Deserialize;

const BUNDLED_PROFILE: &str = include_str!("../content/profile.toml");

/// Page sections in scroll order, used for navigation anchors.
pub const SECTIONS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub tagline: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: ContactDetails,
    #[serde(default)]
    pub socials: Vec<Social>,
    pub footer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

impl SkillGroup {
    pub fn badge(&self) -> String {
        self.title.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub code_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub details: Option<ProjectDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDetails {
    pub description: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub implementation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Social {
    pub label: String,
    pub url: String,
}

impl Profile {
    /// Bundled profile, or the TOML file at `path` when given.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let source = match path {
            Some(path) => {
                tracing::info!(path, "Loading profile content");
                ConfigBuilder::builder().add_source(File::new(path, FileFormat::Toml))
            }
            None => ConfigBuilder::builder()
                .add_source(File::from_str(BUNDLED_PROFILE, FileFormat::Toml)),
        };

        source.build()?.try_deserialize()
    }
}
