//! Staff-directory heuristics: scoring outbound links, and scoring a page
//! for being a directory itself.
//!
//! Both scores are additive and capped so every signal stays explainable.

use lazy_static::lazy_static;
use scraper::Selector;
use std::collections::HashSet;
use tracing::debug;

use crate::document::joined_text;
use crate::types::{DirectoryLinkCandidate, StaffPage};
use crate::urls;

/// URL path fragments that indicate a staff directory.
pub const STAFF_URL_PATTERNS: &[&str] = &[
    "/staff-directory",
    "/staff",
    "/coaches",
    "/coaching-staff",
    "/athletics/staff",
    "/about/staff",
    "/directory",
    "/sports-information/staff",
    "/athletic-department/staff",
    "/athletic-staff",
    "/sports/staff",
    "/athletics-staff",
    // Youth organizations
    "/board-of-directors",
    "/board",
    "/our-board",
    "/leadership",
    "/about-us",
    "/our-league",
    "/coaches-and-managers",
    "/league-officers",
    "/contacts",
    "/meet-our-team",
    "/volunteer-coaches",
    "/our-staff",
];

/// Link text phrases that lead to a staff directory.
pub const STAFF_LINK_TEXT_PATTERNS: &[&str] = &[
    "staff directory",
    "coaching staff",
    "our coaches",
    "athletic staff",
    "meet the coaches",
    "staff & coaches",
    "department staff",
    "coaches & staff",
    "administration",
    "staff listing",
    "athletic directory",
    "coaches directory",
    // Youth organizations
    "board of directors",
    "board members",
    "league officers",
    "volunteer coaches",
    "team managers",
    "league contacts",
    "meet our team",
    "league leadership",
    "who we are",
    "our staff",
    "contact us",
];

/// Titles whose presence suggests the page lists staff.
pub const COACHING_TITLE_KEYWORDS: &[&str] = &[
    "head coach",
    "assistant coach",
    "associate head coach",
    "athletic director",
    "offensive coordinator",
    "defensive coordinator",
    "pitching coach",
    "hitting coach",
    "goalkeeping coach",
    "director of operations",
    "director of player development",
    "strength and conditioning",
    "sports information director",
    // Youth organizations
    "league president",
    "vice president",
    "board member",
    "league director",
    "commissioner",
    "registrar",
    "team manager",
    "volunteer coach",
    "league administrator",
    "treasurer",
    "secretary",
    "safety officer",
    "player agent",
    "coaching coordinator",
    "program director",
];

const PATH_MATCH_SCORE: f32 = 0.5;
const TEXT_MATCH_SCORE: f32 = 0.4;

lazy_static! {
    static ref ANCHOR_SELECTOR: Selector = Selector::parse("a").unwrap();
    static ref CARD_SELECTOR: Selector = Selector::parse(
        r#"[class*="staff"], [class*="person"], [class*="coach"], [class*="card"]"#
    ).unwrap();
}

/// Whether a lower-cased path contains a known staff-directory fragment.
pub fn matches_staff_path(path: &str) -> bool {
    STAFF_URL_PATTERNS.iter().any(|pattern| path.contains(pattern))
}

pub(crate) fn is_navigable(href: &str) -> bool {
    let lower = href.to_lowercase();
    !(href.is_empty()
        || href.starts_with('#')
        || lower.starts_with("javascript:")
        || lower.starts_with("mailto:"))
}

/// Score one link. Path and text agreeing is treated as certain.
pub fn score_link(href: &str, text: &str) -> f32 {
    let path = urls::path_of(href).to_lowercase();
    let path_hit = matches_staff_path(path.trim_end_matches('/'));

    let text = text.to_lowercase();
    let text_hit = STAFF_LINK_TEXT_PATTERNS
        .iter()
        .any(|pattern| text.contains(pattern));

    match (path_hit, text_hit) {
        (true, true) => 1.0,
        (true, false) => PATH_MATCH_SCORE,
        (false, true) => TEXT_MATCH_SCORE,
        (false, false) => 0.0,
    }
}

/// Links on `page` likely to lead to a staff directory, best first, one
/// entry per resolved URL.
pub fn find_staff_directory_links(page: &StaffPage) -> Vec<DirectoryLinkCandidate> {
    let mut candidates: Vec<DirectoryLinkCandidate> = page
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href").unwrap_or_default().trim();
            if !is_navigable(href) {
                return None;
            }

            let score = score_link(href, &joined_text(anchor));
            (score > 0.0).then(|| DirectoryLinkCandidate::new(page.resolve(href), score))
        })
        .collect();

    // Stable: equal scores keep document order.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut seen = HashSet::new();
    candidates.retain(|candidate| seen.insert(candidate.url.clone()));

    debug!(
        url = %page.url(),
        count = candidates.len(),
        "Scored staff directory links"
    );

    candidates
}

/// Confidence in 0.0..=1.0 that `page` is itself a staff directory.
pub fn is_staff_directory_page(page: &StaffPage) -> f32 {
    let markup = page.markup().to_lowercase();
    let mut score = 0.0_f32;

    let title_hits = COACHING_TITLE_KEYWORDS
        .iter()
        .filter(|keyword| markup.contains(*keyword))
        .count();
    if title_hits >= 5 {
        score += 0.4;
    } else if title_hits >= 2 {
        score += 0.2;
    }

    let mailto_count = markup.matches("mailto:").count();
    if mailto_count >= 5 {
        score += 0.3;
    } else if mailto_count >= 2 {
        score += 0.15;
    }

    let path_hit = matches_staff_path(&page.path());
    if path_hit {
        score += 0.2;
    }

    let card_count = page.select(&CARD_SELECTOR).count();
    if card_count >= 3 {
        score += 0.2;
    }

    let score = score.min(1.0);

    debug!(
        url = %page.url(),
        title_hits,
        mailto_count,
        path_hit,
        card_count,
        score,
        "Scored staff directory page"
    );

    score
}
