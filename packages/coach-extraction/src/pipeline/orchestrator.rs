//! Turn one fetched staff page into coach candidates.
//!
//! Two paths produce candidates:
//! - card extraction, for platforms with a known staff-card layout
//! - the generic path, which associates each address with the nearest
//!   heading and title text in the DOM
//!
//! Card extraction falls back to the generic path when the page has no
//! cards carrying a mailto link.

use std::collections::HashSet;
use tracing::{debug, info};

use crate::extractors::email::{address_from_mailto, email_hash, extract_with_context, is_excluded};
use crate::extractors::platform::{detect_platform, CardProfile};
use crate::extractors::{name, role, sport};
use crate::types::{CoachCandidate, ExtractionConfig, OrganizationContext, Sport, StaffPage};
use crate::validators::email::is_valid_format;

/// Extract coach candidates from `page`, in page order, one per address.
///
/// Organization fields come from `org`, never from the page. Nothing is
/// persisted here.
pub fn extract_coaches(
    page: &StaffPage,
    org: &OrganizationContext,
    config: &ExtractionConfig,
) -> Vec<CoachCandidate> {
    let platform = detect_platform(page.markup());

    let from_cards = if config.platform_cards {
        platform
            .card_profile()
            .map(|profile| extract_from_cards(page, org, profile))
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    let candidates = if from_cards.is_empty() {
        debug!(url = %page.url(), platform = %platform, "Using generic extraction");
        extract_generic(page, org)
    } else {
        debug!(url = %page.url(), platform = %platform, "Using platform card extraction");
        from_cards
    };

    info!(
        url = %page.url(),
        organization = %org.name,
        count = candidates.len(),
        "Extracted coach candidates"
    );

    candidates
}

/// Build a candidate from the raw name and title found for one address.
fn build_candidate(
    page: &StaffPage,
    org: &OrganizationContext,
    email: String,
    full_name: Option<&str>,
    title: Option<String>,
    sport_fallback: impl FnOnce() -> Option<Sport>,
    confidence: f32,
) -> CoachCandidate {
    let parsed = name::parse(full_name);
    let sport_normalized = sport::classify(title.as_deref()).or_else(sport_fallback);

    let hash = email_hash(&email);
    let mut candidate = CoachCandidate::new(email, hash, org, page.url(), confidence);
    candidate.first_name = parsed.first_name;
    candidate.last_name = parsed.last_name;
    candidate.full_name = parsed.full_name;
    candidate.role_category = role::classify(title.as_deref());
    candidate.sport = title.clone();
    candidate.sport_normalized = sport_normalized;
    candidate.title = title;
    candidate
}

fn extract_generic(page: &StaffPage, org: &OrganizationContext) -> Vec<CoachCandidate> {
    let mut seen = HashSet::new();

    extract_with_context(page)
        .into_iter()
        .map(|found| {
            build_candidate(
                page,
                org,
                found.email,
                found.context_name.as_deref(),
                found.context_title,
                || sport::classify_from_url(page.url()),
                found.confidence,
            )
        })
        .filter(|candidate| seen.insert(candidate.email_hash.clone()))
        .collect()
}

fn extract_from_cards(
    page: &StaffPage,
    org: &OrganizationContext,
    profile: &CardProfile,
) -> Vec<CoachCandidate> {
    let mut seen = HashSet::new();

    profile
        .read_cards(page)
        .into_iter()
        .filter_map(|card| {
            let email = address_from_mailto(&card.mailto_href)?;
            if !is_valid_format(&email) || is_excluded(&email) {
                return None;
            }

            Some(build_candidate(
                page,
                org,
                email,
                card.name.as_deref(),
                card.title,
                || profile.fallback_sport(page),
                profile.confidence,
            ))
        })
        .filter(|candidate| seen.insert(candidate.email_hash.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Level, RoleCategory, SourceMethod, SubLevel};

    fn org() -> OrganizationContext {
        OrganizationContext::new("ABC College", Level::College, "OH").with_id(42)
    }

    #[test]
    fn test_generic_candidate_fields() {
        let page = StaffPage::parse(
            "https://abccollege.edu/staff-directory",
            r#"<html><body>
                <div><h3>John Doe</h3><span class="title">Head Baseball Coach</span>
                <a href="mailto:coach@abccollege.edu">Email</a></div>
            </body></html>"#,
        );

        let candidates = extract_coaches(&page, &org(), &ExtractionConfig::default());
        assert_eq!(candidates.len(), 1);

        let coach = &candidates[0];
        assert_eq!(coach.email, "coach@abccollege.edu");
        assert_eq!(coach.email_hash, email_hash("coach@abccollege.edu"));
        assert_eq!(coach.first_name.as_deref(), Some("John"));
        assert_eq!(coach.last_name.as_deref(), Some("Doe"));
        assert_eq!(coach.title.as_deref(), Some("Head Baseball Coach"));
        assert_eq!(coach.role_category, Some(RoleCategory::HeadCoach));
        assert_eq!(coach.sport_normalized, Some(Sport::Baseball));
        assert_eq!(coach.confidence_score, SourceMethod::Mailto.confidence());
        assert_eq!(coach.organization_id, Some(42));
        assert_eq!(coach.source_url, "https://abccollege.edu/staff-directory");
    }

    #[test]
    fn test_sport_falls_back_to_url() {
        let page = StaffPage::parse(
            "https://abccollege.edu/sports/softball/coaches",
            r#"<div><h3>Ann Lee</h3><span class="title">Assistant Coach</span>
               <a href="mailto:alee@abccollege.edu">Email</a></div>"#,
        );

        let candidates = extract_coaches(&page, &org(), &ExtractionConfig::default());
        assert_eq!(candidates[0].sport_normalized, Some(Sport::Softball));
        assert_eq!(candidates[0].role_category, Some(RoleCategory::AssistantCoach));
    }

    #[test]
    fn test_text_only_addresses_have_no_context() {
        let page = StaffPage::parse(
            "https://club.org/contacts",
            "<html><body><p>Questions? Email registrar@club.org or treasurer [at] club [dot] org</p></body></html>",
        );
        let youth = OrganizationContext::new("North Club", Level::Youth, "MN")
            .with_sub_level(SubLevel::ClubTeam);

        let candidates = extract_coaches(&page, &youth, &ExtractionConfig::default());
        let emails: Vec<_> = candidates.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, vec!["registrar@club.org", "treasurer@club.org"]);
        assert!(candidates.iter().all(|c| c.full_name.is_none() && c.role_category.is_none()));
        assert_eq!(candidates[0].confidence_score, 0.80);
        assert_eq!(candidates[1].confidence_score, 0.70);
        assert_eq!(candidates[0].sub_level, Some(SubLevel::ClubTeam));
        assert_eq!(candidates[0].organization_id, None);
    }

    const SIDEARM_PAGE: &str = r#"<html><head>
        <script src="https://sidearmsports.com/common.js"></script></head><body>
        <ul class="breadcrumb">Home / Volleyball / Staff</ul>
        <div class="s-person-card">
          <h3>Maria Ortiz</h3>
          <div class="s-person-details__title">Head Coach</div>
          <a href="mailto:MOrtiz@abccollege.edu">Email</a>
        </div>
        <div class="s-person-card">
          <h3>Webmaster</h3>
          <a href="mailto:webmaster@abccollege.edu">Email</a>
        </div>
        </body></html>"#;

    #[test]
    fn test_sidearm_cards() {
        let page = StaffPage::parse("https://abccollege.edu/sports/volleyball/coaches", SIDEARM_PAGE);
        let candidates = extract_coaches(&page, &org(), &ExtractionConfig::default());

        assert_eq!(candidates.len(), 1);
        let coach = &candidates[0];
        assert_eq!(coach.email, "mortiz@abccollege.edu");
        assert_eq!(coach.full_name.as_deref(), Some("Maria Ortiz"));
        assert_eq!(coach.role_category, Some(RoleCategory::HeadCoach));
        assert_eq!(coach.sport_normalized, Some(Sport::Volleyball));
        assert_eq!(coach.confidence_score, 0.95);
    }

    #[test]
    fn test_cards_disabled_uses_generic_path() {
        let page = StaffPage::parse("https://abccollege.edu/staff", SIDEARM_PAGE);
        let config = ExtractionConfig::default().with_platform_cards(false);
        let candidates = extract_coaches(&page, &org(), &config);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].full_name.as_deref(), Some("Maria Ortiz"));
    }

    #[test]
    fn test_platform_without_cards_falls_back() {
        let page = StaffPage::parse(
            "https://abccollege.edu/staff",
            r#"<html><head><meta name="generator" content="PrestoSports"></head><body>
               <table><tr><td><b>Sam Park</b></td><td class="position">Head Wrestling Coach</td>
               <td><a href="mailto:spark@abccollege.edu">spark@abccollege.edu</a></td></tr></table>
               </body></html>"#,
        );

        let candidates = extract_coaches(&page, &org(), &ExtractionConfig::default());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].full_name.as_deref(), Some("Sam Park"));
        assert_eq!(candidates[0].sport_normalized, Some(Sport::Wrestling));
        assert_eq!(candidates[0].role_category, Some(RoleCategory::HeadCoach));
    }
}
