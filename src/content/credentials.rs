use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Calendar month, written as `YYYY-MM` in content files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }
}

impl FromStr for YearMonth {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").map(Self)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = chrono::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%B %Y"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    Active,
    Expired,
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Certification {
    pub name: String,
    pub organization: String,
    pub category: String,
    pub issued: YearMonth,
    /// `None` for credentials that never expire.
    #[serde(default)]
    pub expires: Option<YearMonth>,
    pub credential_id: String,
    pub link: String,
}

impl Certification {
    /// A credential stays active through its expiration month.
    pub fn status_on(&self, today: NaiveDate) -> CredentialStatus {
        match self.expires {
            Some(expires) if expires < YearMonth::containing(today) => CredentialStatus::Expired,
            _ => CredentialStatus::Active,
        }
    }

    pub fn expires_label(&self) -> String {
        self.expires
            .map(|e| e.to_string())
            .unwrap_or_else(|| "No Expiration".to_string())
    }
}

/// Certifications grouped by category, groups in order of first appearance.
pub fn group_by_category(certs: &[Certification]) -> Vec<(&str, Vec<&Certification>)> {
    let mut groups: Vec<(&str, Vec<&Certification>)> = Vec::new();
    for cert in certs {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == cert.category.as_str())
        {
            Some((_, group)) => group.push(cert),
            None => groups.push((cert.category.as_str(), vec![cert])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(name: &str, category: &str, expires: Option<YearMonth>) -> Certification {
        Certification {
            name: name.to_string(),
            organization: "Org".to_string(),
            category: category.to_string(),
            issued: YearMonth::new(2023, 9).unwrap(),
            expires,
            credential_id: "ID".to_string(),
            link: "https://example.com".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_month_parse_and_display() {
        let ym: YearMonth = "2024-03".parse().unwrap();
        assert_eq!(ym, YearMonth::new(2024, 3).unwrap());
        assert_eq!(ym.to_string(), "March 2024");
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("March".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_year_month_deserialize() {
        let ym: YearMonth = serde_json::from_str("\"2027-03\"").unwrap();
        assert_eq!(ym.to_string(), "March 2027");
        assert!(serde_json::from_str::<YearMonth>("\"soon\"").is_err());
    }

    #[test]
    fn test_status_through_expiration_month() {
        let c = cert("CSM", "Agile", YearMonth::new(2025, 9));
        assert_eq!(c.status_on(day(2025, 9, 30)), CredentialStatus::Active);
        assert_eq!(c.status_on(day(2025, 10, 1)), CredentialStatus::Expired);
        assert_eq!(c.status_on(day(2024, 1, 1)), CredentialStatus::Active);
    }

    #[test]
    fn test_no_expiration() {
        let c = cert("AZ-900", "Cloud", None);
        assert_eq!(c.status_on(day(2100, 1, 1)), CredentialStatus::Active);
        assert_eq!(c.expires_label(), "No Expiration");
    }

    #[test]
    fn test_group_by_category_keeps_first_appearance_order() {
        let certs = vec![
            cert("a", "Cloud", None),
            cert("b", "Analytics", None),
            cert("c", "Cloud", None),
            cert("d", "Agile", None),
        ];
        let groups = group_by_category(&certs);
        let categories: Vec<&str> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, vec!["Cloud", "Analytics", "Agile"]);
        let cloud: Vec<&str> = groups[0].1.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(cloud, vec!["a", "c"]);
    }
}
