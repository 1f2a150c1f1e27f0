//! Page content: immutable records loaded once from the embedded `content/` folder.

mod credentials;
mod model;
mod projects;

pub use credentials::{group_by_category, Certification, CredentialStatus, YearMonth};
pub use model::{
    AboutBadge, BlogPost, ContactChannel, Emphasis, Experience, GithubActivity, Icon, Profile,
    Segment, SkillCategory, Stat, Testimonial, Tone,
};
pub use projects::{filter_projects, Project, ProjectCategory, ProjectFilter, ProjectStat};

use rust_embed::Embed;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use thiserror::Error;

use crate::contact::{looks_like_email, MailSettings, DEFAULT_SUBJECT};

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().unwrap_or_else(|err| {
        log::error!("Couldn't load portfolio content: {err}");
        Portfolio::default()
    })
});

/// Shared, lazily loaded content for every section.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[derive(Embed)]
#[folder = "content"]
pub struct ContentFiles;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    NotFound(String),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("Invalid {file}: {reason}")]
    Invalid { file: &'static str, reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<SkillCategory>,
    pub github: GithubActivity,
    pub posts: Vec<BlogPost>,
    pub testimonials: Vec<Testimonial>,
    pub contact: Vec<ContactChannel>,
}

fn load_file<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = ContentFiles::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let mut posts: Vec<BlogPost> = load_file("posts.json")?;
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        let portfolio = Self {
            profile: load_file("profile.json")?,
            experiences: load_file("experience.json")?,
            projects: load_file("projects.json")?,
            certifications: load_file("certifications.json")?,
            skills: load_file("skills.json")?,
            github: load_file("github.json")?,
            posts,
            testimonials: load_file("testimonials.json")?,
            contact: load_file("contact.json")?,
        };
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if !looks_like_email(&self.profile.email) {
            return Err(ContentError::Invalid {
                file: "profile.json",
                reason: format!("email '{}' is not an address", self.profile.email),
            });
        }
        if let Some(t) = self
            .testimonials
            .iter()
            .find(|t| !(1..=5).contains(&t.rating))
        {
            return Err(ContentError::Invalid {
                file: "testimonials.json",
                reason: format!("rating {} from {} is outside 1..=5", t.rating, t.name),
            });
        }
        if let Some(p) = self
            .projects
            .iter()
            .find(|p| p.github.is_empty() || p.demo.is_empty())
        {
            return Err(ContentError::Invalid {
                file: "projects.json",
                reason: format!("project '{}' is missing a link", p.title),
            });
        }
        Ok(())
    }

    pub fn mail_settings(&self) -> MailSettings {
        MailSettings {
            recipient: self.profile.email.clone(),
            greeting_name: self.profile.first_name.clone(),
            default_subject: if self.profile.default_subject.trim().is_empty() {
                DEFAULT_SUBJECT.to_string()
            } else {
                self.profile.default_subject.clone()
            },
        }
    }
}
