use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "ML Projects")]
    MachineLearning,
    #[serde(rename = "Web Apps")]
    WebApps,
}

impl ProjectCategory {
    pub const ALL: [Self; 2] = [Self::MachineLearning, Self::WebApps];

    pub fn label(self) -> &'static str {
        match self {
            Self::MachineLearning => "ML Projects",
            Self::WebApps => "Web Apps",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    pub github: String,
    pub demo: String,
    #[serde(default)]
    pub stats: Vec<ProjectStat>,
}

/// The filter buttons above the project grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(ProjectCategory::ALL.into_iter().map(Self::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

/// Projects shown for `filter`, in their listed order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, category: ProjectCategory) -> Project {
        Project {
            title: title.to_string(),
            description: String::new(),
            image: None,
            technologies: vec![],
            category,
            github: "https://github.com/x".to_string(),
            demo: "https://example.com".to_string(),
            stats: vec![],
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("a", ProjectCategory::WebApps),
            project("b", ProjectCategory::MachineLearning),
            project("c", ProjectCategory::WebApps),
            project("d", ProjectCategory::MachineLearning),
        ]
    }

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_all_keeps_everything_in_order() {
        let projects = sample();
        let shown = filter_projects(&projects, ProjectFilter::All);
        assert_eq!(titles(&shown), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_category_is_ordered_subsequence() {
        let projects = sample();
        let web = filter_projects(&projects, ProjectFilter::Only(ProjectCategory::WebApps));
        assert_eq!(titles(&web), vec!["a", "c"]);
        let ml = filter_projects(
            &projects,
            ProjectFilter::Only(ProjectCategory::MachineLearning),
        );
        assert_eq!(titles(&ml), vec!["b", "d"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let projects = sample();
        for filter in ProjectFilter::options() {
            let once: Vec<Project> = filter_projects(&projects, filter)
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<Project> = filter_projects(&once, filter)
                .into_iter()
                .cloned()
                .collect();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_empty_category() {
        let projects = vec![project("a", ProjectCategory::WebApps)];
        assert!(filter_projects(
            &projects,
            ProjectFilter::Only(ProjectCategory::MachineLearning)
        )
        .is_empty());
    }

    #[test]
    fn test_filter_options() {
        let labels: Vec<&str> = ProjectFilter::options().map(ProjectFilter::label).collect();
        assert_eq!(labels, vec!["All", "ML Projects", "Web Apps"]);
    }

    #[test]
    fn test_category_labels_round_trip_serde() {
        for category in ProjectCategory::ALL {
            let json = format!("\"{}\"", category.label());
            let parsed: ProjectCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, category);
        }
    }
}
