//! Compiled-in data: the default menu served by the mock source and the
//! static job postings shown in the feed.

use jobdeck_types::{EmploymentType, JobPosting, NavItem, WorkMode};

/// Title shown in the feed banner.
pub const FEED_TITLE: &str = "UI Designer in Egypt";

/// Number of open positions advertised by the feed banner.
pub const FEED_POSITIONS: usize = 70;

/// The menu served by [`crate::MockNavigationSource`].
pub fn default_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("dashboard", "Dashboard", "dashboard", true),
        NavItem::new("job-application", "Job Application", "application", true),
        NavItem::new("john-doe", "John Doe", "user", true),
        NavItem::new("james-bond", "James Bond", "user", true),
        NavItem::new("scarlett", "Scarlett Johansson", "user", false),
        NavItem::new("qualifications", "Qualifications", "qualifications", true),
        NavItem::new("about", "About", "about", true),
        NavItem::new("contact", "Contact", "contact", true),
    ]
}

#[allow(clippy::too_many_arguments)]
fn posting(
    id: u32,
    title: &str,
    company: &str,
    logo: &str,
    location: &str,
    posted: &str,
    experience: &str,
    employment: EmploymentType,
    work_mode: WorkMode,
    category: &str,
) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        company: company.to_string(),
        logo: logo.to_string(),
        location: location.to_string(),
        posted: posted.to_string(),
        experience: experience.to_string(),
        employment,
        work_mode,
        category: category.to_string(),
    }
}

/// The fixed feed. Never mutated.
pub fn job_postings() -> Vec<JobPosting> {
    use EmploymentType::*;
    use WorkMode::*;

    const GAMING: &str = "Creative / Design - IT / Software development - Gaming";
    const DESIGN: &str = "Creative / Design - IT / Software development";

    vec![
        posting(1, "Gaming UI Designer", "Rockstar Games", "/jobs/1.png", "El Mansoura, Egypt", "10 days ago", "0 - 3y of exp", FullTime, Remote, GAMING),
        posting(2, "Senior UX UI Designer", "Egabi", "/jobs/2.png", "Cairo, Egypt", "month ago", "0 - 3y of exp", FullTime, Hybrid, DESIGN),
        posting(3, "Gaming UI designer", "Rockstar Games", "/jobs/3.png", "Cairo, Egypt", "month ago", "5 - 7y of exp", Freelance, Remote, DESIGN),
        posting(4, "Gaming UI Designer", "Rockstar Games", "/jobs/1.png", "El Mansoura, Egypt", "10 days ago", "0 - 3y of exp", FullTime, Remote, GAMING),
        posting(5, "Senior UX UI Designer", "Egabi", "/jobs/2.png", "Cairo, Egypt", "month ago", "0 - 3y of exp", FullTime, Hybrid, DESIGN),
        posting(6, "Gaming UI designer", "Rockstar Games", "/jobs/3.png", "Cairo, Egypt", "month ago", "5 - 7y of exp", Freelance, Remote, DESIGN),
    ]
}
