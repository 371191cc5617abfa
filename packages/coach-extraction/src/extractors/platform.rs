//! Hosting platform detection and per-platform staff card profiles.

use lazy_static::lazy_static;
use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::document::own_text;
use crate::extractors::sport;
use crate::types::{Sport, StaffPage};

/// How much of the page head is inspected for platform markers.
const DETECTION_WINDOW_CHARS: usize = 5000;

/// Site platform, detected from markers in the page head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Sidearm,
    PrestoSports,
    SportsEngine,
    LeagueApps,
    Wix,
    Squarespace,
    Custom,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Sidearm => "sidearm",
            Platform::PrestoSports => "prestosports",
            Platform::SportsEngine => "sportsengine",
            Platform::LeagueApps => "leagueapps",
            Platform::Wix => "wix",
            Platform::Squarespace => "squarespace",
            Platform::Custom => "custom",
        }
    }

    /// Card layout for platforms with a known staff-card structure.
    pub fn card_profile(self) -> Option<&'static CardProfile> {
        match self {
            Platform::Sidearm => Some(&SIDEARM_PROFILE),
            Platform::PrestoSports => Some(&PRESTOSPORTS_PROFILE),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markers checked in order; the first platform with any marker wins.
const PLATFORM_MARKERS: &[(Platform, &[&str])] = &[
    (Platform::Sidearm, &["sidearm", "sidearmsports"]),
    (Platform::PrestoSports, &["prestosports", "presto"]),
    (Platform::SportsEngine, &["sportsengine", "se-page", ".sportsengine.com"]),
    (Platform::LeagueApps, &["leagueapps", ".leagueapps.com"]),
    (Platform::Wix, &["wix.com", "wixsite"]),
    (Platform::Squarespace, &["squarespace", "sqsp"]),
];

/// Detect the platform from the first few thousand characters of markup.
pub fn detect_platform(markup: &str) -> Platform {
    let end = markup
        .char_indices()
        .nth(DETECTION_WINDOW_CHARS)
        .map(|(idx, _)| idx)
        .unwrap_or(markup.len());
    let head = markup[..end].to_lowercase();

    PLATFORM_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| head.contains(marker)))
        .map(|(platform, _)| *platform)
        .unwrap_or(Platform::Custom)
}

/// Where a card profile looks for a sport when the title has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SportFallback {
    /// Text of the page breadcrumb
    Breadcrumb,
    /// The page URL
    PageUrl,
}

/// Selectors describing one platform's staff cards.
#[derive(Debug)]
pub struct CardProfile {
    pub platform: Platform,
    pub cards: Selector,
    pub name: Selector,
    pub title: Selector,
    pub sport_fallback: SportFallback,
    pub confidence: f32,
}

/// Raw fields read from one staff card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffCard {
    pub name: Option<String>,
    pub title: Option<String>,
    pub mailto_href: String,
}

lazy_static! {
    static ref SIDEARM_PROFILE: CardProfile = CardProfile {
        platform: Platform::Sidearm,
        cards: Selector::parse(
            ".s-person-card, .staff-member, [class*='person-card'], [class*='staff-member']"
        ).unwrap(),
        name: Selector::parse(
            "h3, h4, .s-person-details__name, [class*='name'], .staff-name"
        ).unwrap(),
        title: Selector::parse(
            ".s-person-details__title, [class*='title'], .staff-title, [class*='position']"
        ).unwrap(),
        sport_fallback: SportFallback::Breadcrumb,
        confidence: 0.95,
    };

    static ref PRESTOSPORTS_PROFILE: CardProfile = CardProfile {
        platform: Platform::PrestoSports,
        cards: Selector::parse(
            ".staff-list-item, .roster-coach, [class*='staff-member'], [class*='coach-card'], .coach-info"
        ).unwrap(),
        name: Selector::parse(
            "h3, h4, .coach-name, [class*='name'], strong"
        ).unwrap(),
        title: Selector::parse(
            "[class*='title'], [class*='position'], .coach-title, em"
        ).unwrap(),
        sport_fallback: SportFallback::PageUrl,
        confidence: 0.90,
    };

    static ref MAILTO_LINK_SELECTOR: Selector = Selector::parse("a[href^='mailto:']").unwrap();
    static ref BREADCRUMB_SELECTOR: Selector = Selector::parse(".breadcrumb, .s-breadcrumb").unwrap();
}

fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .flat_map(own_text)
        .next()
        .map(str::to_string)
}

impl CardProfile {
    /// Cards on `page` that carry a mailto link, in document order.
    pub fn read_cards(&self, page: &StaffPage) -> Vec<StaffCard> {
        page.select(&self.cards)
            .filter_map(|card| {
                let mailto_href = card
                    .select(&MAILTO_LINK_SELECTOR)
                    .next()?
                    .value()
                    .attr("href")?
                    .to_string();

                Some(StaffCard {
                    name: first_text(card, &self.name),
                    title: first_text(card, &self.title),
                    mailto_href,
                })
            })
            .collect()
    }

    /// Sport for a card whose title did not name one.
    pub fn fallback_sport(&self, page: &StaffPage) -> Option<Sport> {
        match self.sport_fallback {
            SportFallback::Breadcrumb => {
                let crumbs: Vec<&str> = page
                    .select(&BREADCRUMB_SELECTOR)
                    .flat_map(own_text)
                    .collect();
                sport::classify(Some(&crumbs.join(" ")))
            }
            SportFallback::PageUrl => sport::classify_from_url(page.url()),
        }
    }
}
