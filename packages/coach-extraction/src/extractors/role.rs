//! Map free-text job titles onto the role taxonomy.
//!
//! Rules are checked in table order and the first match wins. The order is
//! part of the behavior: "head coach" is checked before "associate head
//! coach", and the bare word "coach" is the last resort.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::RoleCategory;

lazy_static! {
    static ref ROLE_RULES: Vec<(Regex, RoleCategory)> = {
        let table: &[(&str, RoleCategory)] = &[
            (r"\bhead\s+(?:[a-z'’&.\-]+\s+){0,4}coach\b", RoleCategory::HeadCoach),
            (r"\bassociate\s+head\s+coach\b", RoleCategory::AssociateHeadCoach),
            (r"\b(?:assistant\s+coach|asst\.?\s+coach)\b", RoleCategory::AssistantCoach),
            (r"\b(?:offensive\s+coordinator|oc)\b", RoleCategory::Coordinator),
            (r"\b(?:defensive\s+coordinator|dc)\b", RoleCategory::Coordinator),
            (r"\bcoordinator\b", RoleCategory::Coordinator),
            (r"\b(?:athletic\s+director|ad|director\s+of\s+athletics)\b", RoleCategory::AthleticDirector),
            (r"\bdirector\s+of\s+(?:operations|player\s+development|recruiting|performance)\b", RoleCategory::Director),
            (r"\b(?:strength\s+and\s+conditioning|s&c)\b", RoleCategory::SupportStaff),
            (r"\b(?:sports\s+information|sid|media\s+relations)\b", RoleCategory::SupportStaff),
            (r"\b(?:trainer|athletic\s+trainer)\b", RoleCategory::SupportStaff),
            // Youth organizations
            (r"\b(?:league\s+president|president)\b", RoleCategory::LeagueOfficer),
            (r"\b(?:league\s+director|program\s+director)\b", RoleCategory::Director),
            (r"\bcommissioner\b", RoleCategory::LeagueOfficer),
            (r"\b(?:team\s+manager|manager)\b", RoleCategory::TeamManager),
            (r"\bregistrar\b", RoleCategory::SupportStaff),
            (r"\bplayer\s+agent\b", RoleCategory::SupportStaff),
            (r"\bsafety\s+officer\b", RoleCategory::SupportStaff),
            (r"\bboard\s+(?:member|chair(?:man|person|woman)?)\b", RoleCategory::BoardMember),
            (r"\b(?:treasurer|secretary)\b", RoleCategory::BoardMember),
            (r"\bvolunteer\s+(?:assistant|coach)\b", RoleCategory::Volunteer),
            (r"\b(?:graduate\s+assistant|ga)\b", RoleCategory::GraduateAssistant),
            (r"\bintern\b", RoleCategory::Intern),
            (r"\bcoach\b", RoleCategory::Coach),
        ];

        table
            .iter()
            .map(|(pattern, category)| {
                (Regex::new(&format!("(?i){}", pattern)).unwrap(), *category)
            })
            .collect()
    };
}

/// Classify a title. `None` when absent, blank or unmatched.
pub fn classify(title: Option<&str>) -> Option<RoleCategory> {
    let title = title.filter(|t| !t.trim().is_empty())?;

    ROLE_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(title))
        .map(|(_, category)| *category)
}
