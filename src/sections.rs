use crate::reveal::Threshold;

/// Every region of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Projects,
    Certifications,
    Skills,
    GithubStats,
    Blog,
    Testimonials,
    Contact,
}

pub const PAGE_ORDER: [SectionId; 10] = [
    SectionId::Hero,
    SectionId::About,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Certifications,
    SectionId::Skills,
    SectionId::GithubStats,
    SectionId::Blog,
    SectionId::Testimonials,
    SectionId::Contact,
];

impl SectionId {
    /// Element id used for in-page navigation.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Skills => "skills",
            Self::GithubStats => "github-stats",
            Self::Blog => "blog",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Skills => "Skills",
            Self::GithubStats => "GitHub",
            Self::Blog => "Blog",
            Self::Testimonials => "Testimonials",
            Self::Contact => "Contact",
        }
    }

    /// The hero animates on load and has no reveal.
    pub fn reveal_threshold(self) -> Option<Threshold> {
        let ratio = match self {
            Self::Hero => return None,
            Self::Certifications => 0.1,
            Self::About | Self::Skills | Self::GithubStats => 0.3,
            Self::Experience | Self::Projects | Self::Blog | Self::Testimonials | Self::Contact => {
                0.2
            }
        };
        Some(Threshold::new(ratio))
    }

    /// Delay between consecutive cards of the section, in milliseconds.
    pub fn stagger_step_ms(self) -> u32 {
        match self {
            Self::Hero | Self::About | Self::Contact => 0,
            Self::Certifications => 150,
            Self::Experience | Self::Skills | Self::GithubStats => 200,
            Self::Projects | Self::Blog | Self::Testimonials => 300,
        }
    }

    pub fn in_nav(self) -> bool {
        self != Self::Hero
    }
}

pub fn nav_sections() -> impl Iterator<Item = SectionId> {
    PAGE_ORDER.into_iter().filter(|s| s.in_nav())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_page_order() {
        let anchors: Vec<&str> = PAGE_ORDER.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec![
                "hero",
                "about",
                "experience",
                "projects",
                "certifications",
                "skills",
                "github-stats",
                "blog",
                "testimonials",
                "contact"
            ]
        );
    }

    #[test]
    fn test_anchors_unique() {
        let anchors: HashSet<&str> = PAGE_ORDER.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), PAGE_ORDER.len());
    }

    #[test]
    fn test_thresholds() {
        assert!(SectionId::Hero.reveal_threshold().is_none());
        for section in PAGE_ORDER.iter().filter(|s| **s != SectionId::Hero) {
            let threshold = section
                .reveal_threshold()
                .expect("every section but the hero reveals");
            assert!(threshold.ratio() >= 0.1 && threshold.ratio() <= 0.3);
        }
        assert_eq!(
            SectionId::Certifications.reveal_threshold(),
            Some(Threshold::new(0.1))
        );
    }

    #[test]
    fn test_nav_skips_hero() {
        let nav: Vec<SectionId> = nav_sections().collect();
        assert_eq!(nav.len(), PAGE_ORDER.len() - 1);
        assert_eq!(nav.first(), Some(&SectionId::About));
        assert_eq!(nav.last(), Some(&SectionId::Contact));
    }
}
