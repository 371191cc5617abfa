//! Email discovery with confidence tiers and DOM context association.
//!
//! Three strategies run in priority order (mailto, plain regex, obfuscated);
//! an address found by an earlier strategy is never replaced by a later one.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Selector};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::document::{class_attr_contains, has_class, nearest_ancestors, own_text, subtree_elements, tag_name};
use crate::types::{CandidateEmail, SourceMethod, StaffPage};
use crate::validators::email::is_valid_format;

/// Infrastructure, social and platform domains that never host coach inboxes.
pub const EXCLUDED_DOMAINS: &[&str] = &[
    "example.com",
    "sidearm.com",
    "sidearmsports.com",
    "prestosports.com",
    "maxpreps.com",
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "youtube.com",
    "google.com",
    "w3.org",
    "schema.org",
    "jquery.com",
    "wordpress.org",
    "wordpress.com",
    "squarespace.com",
    "wix.com",
    "godaddy.com",
    "cloudflare.com",
    "amazonaws.com",
    // Youth platforms
    "sportsengine.com",
    "leagueapps.com",
    "teamsnap.com",
    "bluestarsports.com",
    "stacksports.com",
    "sportsconnect.com",
    "teamsideline.com",
];

/// Role-inbox local parts.
pub const EXCLUDED_PREFIXES: &[&str] = &[
    "noreply",
    "no-reply",
    "webmaster",
    "info",
    "admin",
    "support",
    "contact",
    "help",
    "abuse",
    "postmaster",
    "mailer-daemon",
    "donotreply",
    "do-not-reply",
];

/// Asset extensions that the plain regex picks up from file paths.
const ASSET_EXTENSIONS: &[&str] = &[".png", ".jpg", ".gif", ".css", ".js"];

/// Ancestors searched for name/title context around a mailto anchor.
const CONTEXT_ANCESTOR_DEPTH: usize = 4;

/// Context strings must be longer than this many characters.
const MIN_CONTEXT_CHARS: usize = 3;

lazy_static! {
    static ref MAILTO_REGEX: Regex = Regex::new(
        r#"(?i)href=["']mailto:([a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,})"#
    ).unwrap();

    static ref PLAIN_EMAIL_REGEX: Regex = Regex::new(
        r"\b([a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,})\b"
    ).unwrap();

    static ref OBFUSCATED_REGEX: Regex = Regex::new(
        r"\b([a-zA-Z0-9._%+\-]+)\s*[\[(]?\s*(?:at|AT)\s*[\])]?\s*([a-zA-Z0-9.\-]+)\s*[\[(]?\s*(?:dot|DOT)\s*[\])]?\s*([a-zA-Z]{2,})\b"
    ).unwrap();

    static ref MAILTO_HREF_REGEX: Regex = Regex::new(r"(?i)^mailto:([^?]+)").unwrap();

    static ref MAILTO_ANCHOR_SELECTOR: Selector = Selector::parse(r#"a[href^="mailto:"]"#).unwrap();
}

const NAME_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "strong", "b"];

/// Hex SHA-256 of the normalized address. Persistence keys on this.
pub fn email_hash(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.trim().to_lowercase().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Whether an address should be dropped regardless of how it was found.
pub fn is_excluded(email: &str) -> bool {
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => (email, ""),
    };
    let local = local.to_lowercase();
    let domain = domain.to_lowercase();

    EXCLUDED_DOMAINS.contains(&domain.as_str())
        || EXCLUDED_PREFIXES.contains(&local.as_str())
        || ASSET_EXTENSIONS.iter().any(|ext| domain.ends_with(ext))
}

/// Decode and normalize the address part of a mailto href.
///
/// Returns `None` for hrefs that are not mailto links or carry no address.
pub fn address_from_mailto(href: &str) -> Option<String> {
    let raw = MAILTO_HREF_REGEX.captures(href.trim())?.get(1)?.as_str();
    let email = decode(raw).trim().to_lowercase();
    (!email.is_empty()).then_some(email)
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Find every well-formed, non-excluded address in `html`, one entry per
/// address.
///
/// `_source_url` is accepted for log correlation by callers that have it.
pub fn extract(html: &str, _source_url: &str) -> Vec<CandidateEmail> {
    let mut found: IndexMap<String, CandidateEmail> = IndexMap::new();

    for caps in MAILTO_REGEX.captures_iter(html) {
        let email = decode(&caps[1]).trim().to_lowercase();
        if is_valid_format(&email) && !is_excluded(&email) {
            found
                .entry(email.clone())
                .or_insert_with(|| CandidateEmail::new(email, SourceMethod::Mailto));
        }
    }

    for caps in PLAIN_EMAIL_REGEX.captures_iter(html) {
        let email = caps[1].trim().to_lowercase();
        if !found.contains_key(&email) && is_valid_format(&email) && !is_excluded(&email) {
            found.insert(email.clone(), CandidateEmail::new(email, SourceMethod::Regex));
        }
    }

    for caps in OBFUSCATED_REGEX.captures_iter(html) {
        let email = format!("{}@{}.{}", &caps[1], &caps[2], &caps[3]).to_lowercase();
        if !found.contains_key(&email) && is_valid_format(&email) && !is_excluded(&email) {
            found.insert(email.clone(), CandidateEmail::new(email, SourceMethod::Obfuscated));
        }
    }

    found.into_values().collect()
}

/// Extract addresses and associate each mailto anchor with nearby name and
/// title text. Addresses only present in text are appended without context.
pub fn extract_with_context(page: &StaffPage) -> Vec<CandidateEmail> {
    let mut found: IndexMap<String, CandidateEmail> = IndexMap::new();

    for anchor in page.select(&MAILTO_ANCHOR_SELECTOR) {
        let Some(email) = anchor.value().attr("href").and_then(address_from_mailto) else {
            continue;
        };
        if !is_valid_format(&email) || is_excluded(&email) || found.contains_key(&email) {
            continue;
        }

        let (name, title) = anchor_context(anchor);
        found.insert(
            email.clone(),
            CandidateEmail::new(email, SourceMethod::Mailto).with_context(name, title),
        );
    }

    let with_context = found.len();

    for candidate in extract(&page.body_markup(), page.url()) {
        if !found.contains_key(&candidate.email) {
            found.insert(candidate.email.clone(), candidate);
        }
    }

    debug!(
        url = %page.url(),
        with_context,
        total = found.len(),
        "Email discovery complete"
    );

    found.into_values().collect()
}

/// Name and title near a mailto anchor, searching its nearest ancestors
/// from the closest outward.
fn anchor_context(anchor: ElementRef<'_>) -> (Option<String>, Option<String>) {
    let mut name = None;
    let mut title = None;

    for ancestor in nearest_ancestors(anchor, CONTEXT_ANCESTOR_DEPTH) {
        if name.is_none() {
            name = find_name(ancestor);
        }
        if title.is_none() {
            title = find_title(ancestor);
        }
        if name.is_some() && title.is_some() {
            break;
        }
    }

    (name, title)
}

fn find_name(scope: ElementRef<'_>) -> Option<String> {
    subtree_elements(scope)
        .filter(|el| NAME_TAGS.contains(&tag_name(el)))
        .flat_map(own_text)
        .find(|text| text.chars().count() > MIN_CONTEXT_CHARS && !text.contains('@'))
        .map(str::to_string)
}

fn is_title_element(el: ElementRef<'_>) -> bool {
    has_class(el, "title")
        || has_class(el, "position")
        || has_class(el, "role")
        || class_attr_contains(el, "title")
        || class_attr_contains(el, "position")
}

fn find_title(scope: ElementRef<'_>) -> Option<String> {
    subtree_elements(scope)
        .filter(|el| is_title_element(*el))
        .flat_map(own_text)
        .find(|text| text.chars().count() > MIN_CONTEXT_CHARS)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(local: &str, domain: &str) -> String {
        format!("{}@{}", local, domain)
    }

    #[test]
    fn test_mailto_link() {
        let addr = email("coach", "university.edu");
        let html = format!(r#"<a href="mailto:{}">Email Coach</a>"#, addr);
        let results = extract(&html, "");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].email, addr);
        assert_eq!(results[0].confidence, 0.95);
        assert_eq!(results[0].source_method, SourceMethod::Mailto);
    }

    #[test]
    fn test_plain_text_email() {
        let addr = email("info.coach", "school.edu");
        let html = format!("Contact us at {} for more info.", addr);
        let results = extract(&html, "");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].email, addr);
        assert_eq!(results[0].confidence, 0.80);
        assert_eq!(results[0].source_method, SourceMethod::Regex);
    }

    #[test]
    fn test_obfuscated_email() {
        let results = extract("Email: jsmith [at] university [dot] edu", "");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].email, email("jsmith", "university.edu"));
        assert_eq!(results[0].confidence, 0.70);
        assert_eq!(results[0].source_method, SourceMethod::Obfuscated);
    }

    #[test]
    fn test_obfuscated_with_parens_and_caps() {
        let results = extract("Reach me: pat.lee (AT) state-college (DOT) org", "");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].email, email("pat.lee", "state-college.org"));
    }

    #[test]
    fn test_obfuscated_match_with_empty_label_is_dropped() {
        assert!(extract("Built on platform.dotnet and hosted in house", "").is_empty());

        let results = extract("Built on platform.dotnet; email kim [at] club [dot] org", "");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].email, email("kim", "club.org"));
    }

    #[test]
    fn test_mailto_is_url_decoded() {
        let html = r#"<a href="mailto:j%2Bdoe@school.edu">x</a>"#;
        let results = extract(html, "");
        assert_eq!(results[0].email, email("j+doe", "school.edu"));
        assert_eq!(results[0].source_method, SourceMethod::Mailto);
    }

    #[test]
    fn test_excludes_role_inbox_in_any_case() {
        for local in ["noreply", "NoReply", "INFO", "Webmaster"] {
            let addr = email(local, "school.edu");
            assert!(is_excluded(&addr), "{} should be excluded", addr);
            let html = format!(r#"<a href="mailto:{}">No Reply</a>"#, addr);
            assert!(extract(&html, "").is_empty());
        }
    }

    #[test]
    fn test_excludes_blocklisted_domains_in_any_case() {
        for domain in ["facebook.com", "FaceBook.COM", "sportsengine.com"] {
            let addr = email("coach", domain);
            assert!(is_excluded(&addr));
            let html = format!("Contact {} for info", addr);
            assert!(extract(&html, "").is_empty());
        }
    }

    #[test]
    fn test_excludes_asset_paths() {
        assert!(is_excluded("logo@2x.png"));
        assert!(is_excluded("bundle@main.js"));
        assert!(!is_excluded("coach@school.edu"));
    }

    #[test]
    fn test_multiple_emails() {
        let a1 = email("coach.a", "school.edu");
        let a2 = email("coach.b", "school.edu");
        let a3 = email("admin.c", "other.edu");
        let html = format!(
            r#"<a href="mailto:{}">Coach A</a>
               <a href="mailto:{}">Coach B</a>
               Contact {} as well."#,
            a1, a2, a3
        );
        let results = extract(&html, "");
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].source_method, SourceMethod::Regex);
    }

    #[test]
    fn test_mailto_wins_over_plain_text() {
        let addr = email("coach", "school.edu");
        let html = format!(
            r#"<a href="mailto:{}">Email</a> Also reach out to {} directly."#,
            addr, addr
        );
        let results = extract(&html, "");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].confidence, 0.95);
    }

    #[test]
    fn test_empty_and_no_emails() {
        assert!(extract("", "").is_empty());
        assert!(extract("<p>No contact information available.</p>", "").is_empty());
    }

    #[test]
    fn test_email_hash_normalizes() {
        assert_eq!(email_hash(" Coach@School.EDU "), email_hash("coach@school.edu"));
        assert_eq!(email_hash("coach@school.edu").len(), 64);
    }

    #[test]
    fn test_address_from_mailto() {
        assert_eq!(
            address_from_mailto("MAILTO:Coach@School.edu?subject=Hi"),
            Some("coach@school.edu".to_string())
        );
        assert_eq!(address_from_mailto("mailto:"), None);
        assert_eq!(address_from_mailto("https://school.edu"), None);
    }

    #[test]
    fn test_context_from_card() {
        let html = r#"
            <div class="staff">
              <div class="card">
                <h3>John Doe</h3>
                <span class="title">Head Baseball Coach</span>
                <a href="mailto:coach@abccollege.edu">Email</a>
              </div>
            </div>"#;
        let page = StaffPage::parse("https://abccollege.edu/staff", html);
        let results = extract_with_context(&page);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].context_name.as_deref(), Some("John Doe"));
        assert_eq!(results[0].context_title.as_deref(), Some("Head Baseball Coach"));
        assert_eq!(results[0].source_method, SourceMethod::Mailto);
    }

    #[test]
    fn test_context_uses_nearest_card() {
        let html = r#"
            <ul>
              <li><strong>Anna Berg</strong><em class="position">Assistant Coach</em>
                  <a href="mailto:aberg@school.edu">Email</a></li>
              <li><strong>Carl Diaz</strong><em class="position">Head Coach</em>
                  <a href="mailto:cdiaz@school.edu">Email</a></li>
            </ul>"#;
        let page = StaffPage::parse("https://school.edu/staff", html);
        let results = extract_with_context(&page);
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].context_name.as_deref(), Some("Carl Diaz"));
        assert_eq!(results[1].context_title.as_deref(), Some("Head Coach"));
    }

    #[test]
    fn test_context_skips_short_and_email_like_names() {
        let html = r#"<div><b>Bio</b><strong>x@y.edu</strong><h4>Maria Lopez</h4>
                      <a href="mailto:mlopez@school.edu">mlopez@school.edu</a></div>"#;
        let page = StaffPage::parse("https://school.edu", html);
        let results = extract_with_context(&page);
        assert_eq!(results[0].context_name.as_deref(), Some("Maria Lopez"));
        assert_eq!(results[0].context_title, None);
    }

    #[test]
    fn test_context_fallback_appends_text_emails() {
        let html = r#"<div><h3>Sam Park</h3><a href="mailto:spark@school.edu">Email</a></div>
                      <p>Questions: office.athletics@school.edu or ticket [at] school [dot] edu</p>"#;
        let page = StaffPage::parse("https://school.edu", html);
        let results = extract_with_context(&page);
        let emails: Vec<_> = results.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(
            emails,
            vec!["spark@school.edu", "office.athletics@school.edu", "ticket@school.edu"]
        );
        assert!(results[1].context_name.is_none());
        assert_eq!(results[2].source_method, SourceMethod::Obfuscated);
    }

    #[test]
    fn test_context_dedupes_repeated_mailto() {
        let html = r#"<div><h3>Lee Chen</h3><a href="mailto:lchen@school.edu">Email</a>
                      <a href="mailto:LChen@school.edu">Again</a></div>"#;
        let page = StaffPage::parse("https://school.edu", html);
        assert_eq!(extract_with_context(&page).len(), 1);
    }
}
