//! Closed taxonomies assigned by the role and sport classifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standardized staff role. Unclassified titles are `None` at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    HeadCoach,
    AssociateHeadCoach,
    AssistantCoach,
    Coordinator,
    AthleticDirector,
    Director,
    SupportStaff,
    LeagueOfficer,
    TeamManager,
    BoardMember,
    Volunteer,
    GraduateAssistant,
    Intern,
    /// Generic fallback for any title containing the word "coach"
    Coach,
}

impl RoleCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleCategory::HeadCoach => "head_coach",
            RoleCategory::AssociateHeadCoach => "associate_head_coach",
            RoleCategory::AssistantCoach => "assistant_coach",
            RoleCategory::Coordinator => "coordinator",
            RoleCategory::AthleticDirector => "athletic_director",
            RoleCategory::Director => "director",
            RoleCategory::SupportStaff => "support_staff",
            RoleCategory::LeagueOfficer => "league_officer",
            RoleCategory::TeamManager => "team_manager",
            RoleCategory::BoardMember => "board_member",
            RoleCategory::Volunteer => "volunteer",
            RoleCategory::GraduateAssistant => "graduate_assistant",
            RoleCategory::Intern => "intern",
            RoleCategory::Coach => "coach",
        }
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical sport identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Football,
    MensBasketball,
    WomensBasketball,
    Basketball,
    Baseball,
    Softball,
    MensSoccer,
    WomensSoccer,
    Soccer,
    Volleyball,
    MensTennis,
    WomensTennis,
    Tennis,
    MensGolf,
    WomensGolf,
    Golf,
    TrackAndField,
    CrossCountry,
    SwimmingDiving,
    Swimming,
    Wrestling,
    Lacrosse,
    FieldHockey,
    IceHockey,
    Gymnastics,
    Rowing,
    WaterPolo,
    Cheerleading,
    Dance,
    Fencing,
    Rifle,
    Bowling,
    BeachVolleyball,
}

impl Sport {
    pub fn as_str(self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::MensBasketball => "mens_basketball",
            Sport::WomensBasketball => "womens_basketball",
            Sport::Basketball => "basketball",
            Sport::Baseball => "baseball",
            Sport::Softball => "softball",
            Sport::MensSoccer => "mens_soccer",
            Sport::WomensSoccer => "womens_soccer",
            Sport::Soccer => "soccer",
            Sport::Volleyball => "volleyball",
            Sport::MensTennis => "mens_tennis",
            Sport::WomensTennis => "womens_tennis",
            Sport::Tennis => "tennis",
            Sport::MensGolf => "mens_golf",
            Sport::WomensGolf => "womens_golf",
            Sport::Golf => "golf",
            Sport::TrackAndField => "track_and_field",
            Sport::CrossCountry => "cross_country",
            Sport::SwimmingDiving => "swimming_diving",
            Sport::Swimming => "swimming",
            Sport::Wrestling => "wrestling",
            Sport::Lacrosse => "lacrosse",
            Sport::FieldHockey => "field_hockey",
            Sport::IceHockey => "ice_hockey",
            Sport::Gymnastics => "gymnastics",
            Sport::Rowing => "rowing",
            Sport::WaterPolo => "water_polo",
            Sport::Cheerleading => "cheerleading",
            Sport::Dance => "dance",
            Sport::Fencing => "fencing",
            Sport::Rifle => "rifle",
            Sport::Bowling => "bowling",
            Sport::BeachVolleyball => "beach_volleyball",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
