//! Decide where to go from an organization homepage.
//!
//! Each level has its own flow:
//! - youth: platform paths, then the best directory link, then keyword
//!   links, then suffix guesses
//! - high school: extract the homepage itself when it already looks like a
//!   staff directory, else the best directory link, else suffix guesses
//! - college: the best directory link, else suffix guesses, extracting the
//!   homepage too when it looks like a staff directory
//!
//! The planner only returns URLs. Fetching, retries and politeness belong
//! to the scheduler.

use indexmap::IndexSet;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::document::joined_text;
use crate::extractors::page::{find_staff_directory_links, is_navigable, is_staff_directory_page};
use crate::extractors::platform::{detect_platform, Platform};
use crate::types::{ExtractionConfig, Level, OrganizationContext, StaffPage};
use crate::urls;

/// Staff paths on SportsEngine-hosted sites.
const SPORTSENGINE_PATHS: &[&str] = &["/staff", "/contacts", "/about/staff", "/page/show/staff"];

/// Staff paths on LeagueApps-hosted sites.
const LEAGUEAPPS_PATHS: &[&str] = &["/staff", "/contacts", "/about", "/coaches"];

/// Anchor text worth following when no scored directory link exists.
const NAVIGATION_KEYWORDS: &[&str] = &[
    "coaches",
    "staff",
    "about",
    "contact",
    "our team",
    "trainers",
    "instructors",
    "directors",
    "league info",
    "programs",
    "board of directors",
    "board members",
    "league officers",
    "volunteer coaches",
    "team managers",
    "coaching staff",
    "our coaches",
    "meet our coaches",
    "league contacts",
    "administration",
    "leadership",
    "who we are",
];

/// Paths guessed when a youth homepage offers no usable links.
pub const STAFF_PATH_SUFFIXES: &[&str] = &[
    "/staff",
    "/coaches",
    "/about/staff",
    "/our-team",
    "/staff-directory",
    "/coaching-staff",
    "/contacts",
    "/about-us",
    "/board-of-directors",
    "/board",
    "/leadership",
    "/our-coaches",
    "/league-officers",
];

/// Paths guessed on a high school site with no directory link.
pub const HIGH_SCHOOL_SUFFIXES: &[&str] = &[
    "/staff",
    "/coaches",
    "/athletics/staff",
    "/athletics/coaches",
    "/about/staff",
    "/our-team",
    "/staff-directory",
    "/coaching-staff",
];

/// Paths guessed on a college athletics site with no directory link.
/// `/staff-directory` is left out; see [`staff_directory_url`].
pub const COLLEGE_SUFFIXES: &[&str] = &["/sports/staff", "/athletics/staff", "/staff", "/coaches"];

/// Homepage templates tried for youth organizations with no known URL.
const YOUTH_TEMPLATES: &[&str] = &[
    "https://www.{slug}.org",
    "https://{slug}.org",
    "https://www.{slug}.com",
    "https://www.{slug}.net",
    "https://{slug}.sportsengine.com",
    "https://{slug}.leagueapps.com",
];

/// Homepage templates tried for high schools, after any district templates.
const HIGH_SCHOOL_TEMPLATES: &[&str] = &[
    "https://www.{slug}.org",
    "https://{slug}.org",
    "https://www.{slug}.net",
    "https://www.{slug}.com",
    "https://www.{slug}hs.org",
    "https://www.{slug}highschool.org",
];

/// School district domains for states that name districts in the domain.
const DISTRICT_TEMPLATES: &[(&str, &[&str])] = &[
    ("TX", &["https://www.{slug}isd.org", "https://www.{slug}isd.net"]),
    ("KS", &["https://www.{slug}usd.org", "https://www.usd{slug}.org"]),
    ("CA", &["https://www.{slug}unified.org", "https://www.{slug}usd.org"]),
];

/// Staff directory locations tried for colleges with no known athletics URL.
const COLLEGE_TEMPLATES: &[&str] = &[
    "https://{slug}athletics.com/staff-directory",
    "https://www.{slug}.edu/athletics/staff-directory",
];

/// Generic words dropped from the end of a youth organization name before
/// slugging it.
const TRAILING_ORG_WORDS: &[&str] = &[
    "youth",
    "sports",
    "league",
    "club",
    "association",
    "organization",
    "inc",
    "inc.",
    "llc",
];

lazy_static! {
    static ref ANCHOR_SELECTOR: Selector = Selector::parse("a").unwrap();

    static ref SCHOOL_SUFFIX_REGEX: Regex = Regex::new(
        r"(?i)\s*\b(?:high\s+school|hs|senior\s+high|jr[./]?\s*sr[./]?|middle\s+school|ms)\s*$"
    ).unwrap();

    static ref K12_SUFFIX_REGEX: Regex =
        Regex::new(r"(?i)\s*\b(?:high\s+school|hs|senior\s+high)\s*$").unwrap();
}

/// Next step after looking at a homepage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationPlan {
    /// Known platform: try its standard staff paths. When `extract_here`
    /// is set, the homepage itself also carries contacts.
    PlatformPaths {
        platform: Platform,
        urls: Vec<String>,
        extract_here: bool,
    },

    /// The homepage already looks like a staff directory; extract it and
    /// go no further.
    ExtractHere { confidence: f32 },

    /// Best-scored staff directory link.
    DirectoryLink { url: String, score: f32 },

    /// Every link whose text mentions staff-like keywords.
    KeywordLinks { urls: Vec<String> },

    /// Nothing on the page helped; guess common staff paths.
    SuffixGuesses { urls: Vec<String>, extract_here: bool },
}

impl NavigationPlan {
    /// URLs to fetch next, in priority order.
    pub fn urls(&self) -> Vec<String> {
        match self {
            NavigationPlan::PlatformPaths { urls, .. }
            | NavigationPlan::KeywordLinks { urls }
            | NavigationPlan::SuffixGuesses { urls, .. } => urls.clone(),
            NavigationPlan::DirectoryLink { url, .. } => vec![url.clone()],
            NavigationPlan::ExtractHere { .. } => Vec::new(),
        }
    }

    /// Whether the homepage itself should be run through extraction.
    pub fn extract_here(&self) -> bool {
        match self {
            NavigationPlan::ExtractHere { .. } => true,
            NavigationPlan::PlatformPaths { extract_here, .. }
            | NavigationPlan::SuffixGuesses { extract_here, .. } => *extract_here,
            NavigationPlan::DirectoryLink { .. } | NavigationPlan::KeywordLinks { .. } => false,
        }
    }
}

fn join_paths(base: &str, paths: &[&str]) -> Vec<String> {
    let base = base.trim_end_matches('/');
    paths.iter().map(|path| format!("{}{}", base, path)).collect()
}

fn best_directory_link(page: &StaffPage) -> Option<NavigationPlan> {
    find_staff_directory_links(page)
        .into_iter()
        .next()
        .map(|best| NavigationPlan::DirectoryLink {
            url: best.url,
            score: best.score,
        })
}

/// Keyword-matched links, resolved, in page order. Hrefs that lead nowhere
/// and links back to the page itself are dropped; duplicates are compared
/// in normalized form.
fn keyword_links(page: &StaffPage) -> Vec<String> {
    let mut seen = HashSet::new();
    seen.insert(urls::normalize_url(page.url()));

    page.select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href").unwrap_or_default().trim();
            if !is_navigable(href) {
                return None;
            }
            let text = joined_text(anchor).to_lowercase();
            NAVIGATION_KEYWORDS
                .iter()
                .any(|keyword| text.contains(keyword))
                .then(|| page.resolve(href))
        })
        .filter(|url| seen.insert(urls::normalize_url(url)))
        .collect()
}

fn plan_youth(page: &StaffPage, config: &ExtractionConfig) -> NavigationPlan {
    let platform = detect_platform(page.markup());
    let platform_paths = match platform {
        Platform::SportsEngine => Some(SPORTSENGINE_PATHS),
        Platform::LeagueApps => Some(LEAGUEAPPS_PATHS),
        _ => None,
    };

    if let Some(paths) = platform_paths {
        return NavigationPlan::PlatformPaths {
            platform,
            urls: join_paths(page.url(), paths),
            extract_here: is_staff_directory_page(page) > config.staff_page_threshold,
        };
    }

    if let Some(plan) = best_directory_link(page) {
        return plan;
    }

    let urls = keyword_links(page);
    if urls.is_empty() {
        NavigationPlan::SuffixGuesses {
            urls: join_paths(page.url(), STAFF_PATH_SUFFIXES),
            extract_here: false,
        }
    } else {
        NavigationPlan::KeywordLinks { urls }
    }
}

fn plan_high_school(page: &StaffPage, config: &ExtractionConfig) -> NavigationPlan {
    let confidence = is_staff_directory_page(page);
    if confidence > config.school_homepage_threshold {
        return NavigationPlan::ExtractHere { confidence };
    }

    best_directory_link(page).unwrap_or_else(|| NavigationPlan::SuffixGuesses {
        urls: join_paths(page.url(), HIGH_SCHOOL_SUFFIXES),
        extract_here: false,
    })
}

fn plan_college(page: &StaffPage, config: &ExtractionConfig) -> NavigationPlan {
    best_directory_link(page).unwrap_or_else(|| NavigationPlan::SuffixGuesses {
        urls: join_paths(page.url(), COLLEGE_SUFFIXES),
        extract_here: is_staff_directory_page(page) > config.school_homepage_threshold,
    })
}

/// Plan navigation from the homepage of an organization at `level`.
pub fn plan_navigation(
    page: &StaffPage,
    level: Level,
    config: &ExtractionConfig,
) -> NavigationPlan {
    let plan = match level {
        Level::Youth => plan_youth(page, config),
        Level::HighSchool => plan_high_school(page, config),
        Level::College => plan_college(page, config),
    };

    debug!(url = %page.url(), level = %level, plan = ?plan, "Planned navigation");
    plan
}

fn alphanumeric_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Slug for guessing a youth organization's domain, or an empty string.
pub fn org_slug(org_name: &str) -> String {
    let mut words: Vec<&str> = org_name.split_whitespace().collect();
    if let Some(last) = words.last() {
        if TRAILING_ORG_WORDS.contains(&last.to_lowercase().as_str()) {
            words.pop();
        }
    }

    alphanumeric_slug(&words.concat())
}

/// Slug for a school domain: "Allen High School" becomes `allen`.
pub fn school_slug(school_name: &str) -> String {
    alphanumeric_slug(&SCHOOL_SUFFIX_REGEX.replace(school_name, ""))
}

/// Hyphenated slug used by k12 domains: "Cedar Ridge HS" becomes
/// `cedar-ridge`.
pub fn k12_slug(school_name: &str) -> String {
    let stripped = K12_SUFFIX_REGEX.replace(school_name, "").to_lowercase();
    let kept: String = stripped
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .trim_matches('-')
        .to_string()
}

fn fill(templates: &[&str], slug: &str) -> Vec<String> {
    templates
        .iter()
        .map(|template| template.replace("{slug}", slug))
        .collect()
}

fn high_school_guesses(name: &str, state: &str) -> Vec<String> {
    let slug = school_slug(name);
    if slug.is_empty() {
        return Vec::new();
    }

    let state_upper = state.trim().to_uppercase();
    let state_lower = state_upper.to_lowercase();
    let mut guesses: IndexSet<String> = IndexSet::new();

    if let Some((_, templates)) = DISTRICT_TEMPLATES.iter().find(|(code, _)| *code == state_upper) {
        guesses.extend(fill(templates, &slug));
    }
    guesses.extend(fill(HIGH_SCHOOL_TEMPLATES, &slug));

    if !state_lower.is_empty() {
        guesses.insert(format!("https://www.{}.k12.{}.us", slug, state_lower));
        let hyphenated = k12_slug(name);
        if !hyphenated.is_empty() {
            guesses.insert(format!("https://www.{}.k12.{}.us", hyphenated, state_lower));
        }
    }

    guesses.into_iter().collect()
}

/// Candidate entry URLs for an organization with no known URL, most likely
/// first. Youth and high school guesses are homepages; college guesses are
/// staff directories. Empty when the name yields no slug.
pub fn homepage_guesses(org: &OrganizationContext) -> Vec<String> {
    match org.level {
        Level::Youth => {
            let slug = org_slug(&org.name);
            if slug.is_empty() {
                return Vec::new();
            }
            fill(YOUTH_TEMPLATES, &slug)
        }
        Level::HighSchool => high_school_guesses(&org.name, &org.state),
        Level::College => {
            let slug = alphanumeric_slug(&org.name);
            if slug.is_empty() {
                return Vec::new();
            }
            fill(COLLEGE_TEMPLATES, &slug)
        }
    }
}

/// Conventional staff directory location under an athletics site.
pub fn staff_directory_url(athletics_url: &str) -> String {
    format!("{}/staff-directory", athletics_url.trim_end_matches('/'))
}
