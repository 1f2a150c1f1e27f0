use chrono::NaiveDate;
use serde::Deserialize;

use crate::contact::DEFAULT_SUBJECT;

/// Color family shared by badges, icons and stat tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Primary,
    Secondary,
    Accent,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Award,
    Building,
    Calendar,
    ChevronDown,
    Clock,
    ExternalLink,
    GitBranch,
    Github,
    Linkedin,
    Mail,
    MapPin,
    Quote,
    Send,
    Star,
    Users,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    Plain,
    Strong,
    Accent,
}

/// A run of text inside an about paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Segment {
    pub text: String,
    #[serde(default)]
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AboutBadge {
    pub label: String,
    pub tone: Tone,
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub intro: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default = "default_subject")]
    pub default_subject: String,
    #[serde(default)]
    pub portrait: Option<String>,
    pub about: Vec<Vec<Segment>>,
    pub badges: Vec<AboutBadge>,
    pub contact_blurb: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    pub icon: Icon,
    pub highlights: Vec<String>,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub icon: Icon,
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GithubActivity {
    pub stats: Vec<Stat>,
    pub contribution_seed: u64,
    pub months: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub read_minutes: u32,
    pub category: String,
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
    pub icon: Icon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_defaults_to_plain() {
        let seg: Segment = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(seg.emphasis, Emphasis::Plain);
    }

    #[test]
    fn test_icon_names() {
        let icons: Vec<Icon> =
            serde_json::from_str(r#"["git-branch", "map-pin", "chevron-down"]"#).unwrap();
        assert_eq!(icons, vec![Icon::GitBranch, Icon::MapPin, Icon::ChevronDown]);
    }

    #[test]
    fn test_post_labels() {
        let post = BlogPost {
            title: "t".to_string(),
            excerpt: "e".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            read_minutes: 4,
            category: "Development".to_string(),
            tags: vec![],
        };
        assert_eq!(post.date_label(), "Jan 5, 2025");
        assert_eq!(post.read_time_label(), "4 min read");
    }
}
