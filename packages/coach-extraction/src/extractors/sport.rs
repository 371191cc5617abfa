//! Normalize sport mentions in titles and URLs.
//!
//! Gendered and compound forms are listed before their generic form so the
//! more specific label wins.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Sport;

lazy_static! {
    static ref SPORT_RULES: Vec<(Regex, Sport)> = {
        let table: &[(&str, Sport)] = &[
            (r"\bfootball\b", Sport::Football),
            (r"\bmen['’]?s?\s+basketball\b", Sport::MensBasketball),
            (r"\bwomen['’]?s?\s+basketball\b", Sport::WomensBasketball),
            (r"\bbasketball\b", Sport::Basketball),
            (r"\bbaseball\b", Sport::Baseball),
            (r"\bsoftball\b", Sport::Softball),
            (r"\bmen['’]?s?\s+soccer\b", Sport::MensSoccer),
            (r"\bwomen['’]?s?\s+soccer\b", Sport::WomensSoccer),
            (r"\bsoccer\b", Sport::Soccer),
            (r"\bvolleyball\b", Sport::Volleyball),
            (r"\bmen['’]?s?\s+tennis\b", Sport::MensTennis),
            (r"\bwomen['’]?s?\s+tennis\b", Sport::WomensTennis),
            (r"\btennis\b", Sport::Tennis),
            (r"\bmen['’]?s?\s+golf\b", Sport::MensGolf),
            (r"\bwomen['’]?s?\s+golf\b", Sport::WomensGolf),
            (r"\bgolf\b", Sport::Golf),
            (r"\btrack\s*(?:&|and)\s*field\b", Sport::TrackAndField),
            (r"\bcross\s+country\b", Sport::CrossCountry),
            (r"\bswimming\s*(?:&|and)?\s*diving\b", Sport::SwimmingDiving),
            (r"\bswimming\b", Sport::Swimming),
            (r"\bwrestling\b", Sport::Wrestling),
            (r"\blacrosse\b", Sport::Lacrosse),
            (r"\bfield\s+hockey\b", Sport::FieldHockey),
            (r"\bice\s+hockey|hockey\b", Sport::IceHockey),
            (r"\bgymnastics\b", Sport::Gymnastics),
            (r"\browing\b", Sport::Rowing),
            (r"\bwater\s+polo\b", Sport::WaterPolo),
            (r"\bcheer(?:leading)?\b", Sport::Cheerleading),
            (r"\bdance\b", Sport::Dance),
            (r"\bfencing\b", Sport::Fencing),
            (r"\brifl(?:e|ery)\b", Sport::Rifle),
            (r"\bbowling\b", Sport::Bowling),
            (r"\beach\s+volleyball\b|sand\s+volleyball\b", Sport::BeachVolleyball),
        ];

        table
            .iter()
            .map(|(pattern, sport)| (Regex::new(&format!("(?i){}", pattern)).unwrap(), *sport))
            .collect()
    };
}

/// Classify free text. `None` when absent, blank or unmatched.
pub fn classify(text: Option<&str>) -> Option<Sport> {
    let text = text.filter(|t| !t.trim().is_empty())?;

    SPORT_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, sport)| *sport)
}

/// Classify a URL by treating its path separators and hyphens as spaces.
pub fn classify_from_url(url: &str) -> Option<Sport> {
    classify(Some(&url.replace(['-', '/'], " ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gendered_form_wins() {
        assert_eq!(classify(Some("Women's Soccer Head Coach")), Some(Sport::WomensSoccer));
        assert_eq!(classify(Some("Mens Basketball")), Some(Sport::MensBasketball));
        assert_eq!(classify(Some("Women’s Golf")), Some(Sport::WomensGolf));
        assert_eq!(classify(Some("Soccer Assistant")), Some(Sport::Soccer));
    }

    #[test]
    fn test_women_does_not_match_men() {
        assert_eq!(classify(Some("Women's Tennis")), Some(Sport::WomensTennis));
    }

    #[test]
    fn test_compound_sports() {
        assert_eq!(classify(Some("Track & Field")), Some(Sport::TrackAndField));
        assert_eq!(classify(Some("Swimming and Diving")), Some(Sport::SwimmingDiving));
        assert_eq!(classify(Some("Swimming Coach")), Some(Sport::Swimming));
        assert_eq!(classify(Some("Field Hockey")), Some(Sport::FieldHockey));
        assert_eq!(classify(Some("Hockey")), Some(Sport::IceHockey));
        assert_eq!(classify(Some("Cheer Coach")), Some(Sport::Cheerleading));
        assert_eq!(classify(Some("Riflery")), Some(Sport::Rifle));
    }

    #[test]
    fn test_first_rule_wins_on_volleyball() {
        // The generic rule precedes the beach rule in the table.
        assert_eq!(classify(Some("Beach Volleyball")), Some(Sport::Volleyball));
    }

    #[test]
    fn test_from_url() {
        assert_eq!(
            classify_from_url("https://gohawks.com/sports/womens-soccer/coaches"),
            Some(Sport::WomensSoccer)
        );
        assert_eq!(
            classify_from_url("https://example.edu/sports/cross-country/roster"),
            Some(Sport::CrossCountry)
        );
        assert_eq!(classify_from_url("https://example.edu/staff-directory"), None);
    }

    #[test]
    fn test_none_and_unknown() {
        assert_eq!(classify(None), None);
        assert_eq!(classify(Some("")), None);
        assert_eq!(classify(Some("Esports")), None);
    }
}
