//! Job posting records and the feed's sort selector.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Contract type of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Freelance,
    Internship,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Internship => "Internship",
        }
    }
}

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkMode {
    Remote,
    Hybrid,
    OnSite,
}

impl WorkMode {
    pub fn label(self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::Hybrid => "Hybrid",
            WorkMode::OnSite => "On-site",
        }
    }
}

/// Immutable job listing shown in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    /// Logo asset reference (path or URL); rendered as a monogram in the TUI.
    pub logo: String,
    pub location: String,
    /// Human label such as "10 days ago".
    pub posted: String,
    /// Human label such as "0 - 3y of exp".
    pub experience: String,
    pub employment: EmploymentType,
    pub work_mode: WorkMode,
    /// Dash-separated category list, e.g. "Creative / Design - Gaming".
    pub category: String,
}

impl JobPosting {
    /// Category names split out of the dash-separated `category` string.
    pub fn categories(&self) -> Vec<&str> {
        self.category.split(" - ").map(str::trim).filter(|c| !c.is_empty()).collect()
    }

    /// Two-letter monogram standing in for the logo image.
    pub fn monogram(&self) -> String {
        let mut letters = self.company.split_whitespace().filter_map(|word| word.chars().next());
        match (letters.next(), letters.next()) {
            (Some(first), Some(second)) => format!("{first}{second}").to_uppercase(),
            (Some(first), None) => first.to_uppercase().collect(),
            _ => "??".to_string(),
        }
    }
}

/// Sort order selector for the feed. Selection is tracked for display; the
/// feed keeps its fixed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "top-match")]
    TopMatch,
    #[serde(rename = "newest")]
    NewestFirst,
    #[serde(rename = "salary-high")]
    SalaryHigh,
    #[serde(rename = "salary-low")]
    SalaryLow,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::TopMatch, SortKey::NewestFirst, SortKey::SalaryHigh, SortKey::SalaryLow];

    pub fn id(self) -> &'static str {
        match self {
            SortKey::TopMatch => "top-match",
            SortKey::NewestFirst => "newest",
            SortKey::SalaryHigh => "salary-high",
            SortKey::SalaryLow => "salary-low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::TopMatch => "Top match",
            SortKey::NewestFirst => "Newest",
            SortKey::SalaryHigh => "Highest Salary",
            SortKey::SalaryLow => "Lowest Salary",
        }
    }

    /// The next key in selector order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortKeyError(pub String);

impl fmt::Display for ParseSortKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort key '{}'", self.0)
    }
}

impl std::error::Error for ParseSortKeyError {}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.id() == s.trim())
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(company: &str, category: &str) -> JobPosting {
        JobPosting {
            id: 1,
            title: "Gaming UI Designer".into(),
            company: company.into(),
            logo: "/jobs/1.png".into(),
            location: "Cairo, Egypt".into(),
            posted: "month ago".into(),
            experience: "0 - 3y of exp".into(),
            employment: EmploymentType::FullTime,
            work_mode: WorkMode::Remote,
            category: category.into(),
        }
    }

    #[test]
    fn categories_are_trimmed() {
        let job = posting("Rockstar Games", "Creative / Design    -   IT / Software development  -  Gaming ");
        assert_eq!(job.categories(), vec!["Creative / Design", "IT / Software development", "Gaming"]);
        assert_eq!(job.monogram(), "RG");
        assert_eq!(posting("Egabi", "").monogram(), "E");
        assert!(posting("Egabi", "").categories().is_empty());
    }

    #[test]
    fn sort_keys_parse_and_cycle() {
        assert_eq!("salary-low".parse::<SortKey>(), Ok(SortKey::SalaryLow));
        assert!("cheapest".parse::<SortKey>().is_err());
        assert_eq!(SortKey::default(), SortKey::TopMatch);
        assert_eq!(SortKey::SalaryLow.next(), SortKey::TopMatch);
        assert_eq!(SortKey::TopMatch.next(), SortKey::NewestFirst);
        assert_eq!(serde_json::to_string(&SortKey::SalaryHigh).unwrap(), "\"salary-high\"");
    }
}
