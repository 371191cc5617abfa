//! Organization context inherited from the crawl, never derived from a page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Competition level of an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    College,
    HighSchool,
    Youth,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::College => "college",
            Level::HighSchool => "high_school",
            Level::Youth => "youth",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "college" => Ok(Level::College),
            "high_school" => Ok(Level::HighSchool),
            "youth" => Ok(Level::Youth),
            other => Err(format!("unknown level: {}", other)),
        }
    }
}

/// Finer-grained organization kind within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubLevel {
    // High school
    HighSchool,
    MiddleSchool,
    // Youth
    ClubTeam,
    RecLeague,
    Academy,
    Camp,
    Ymca,
    PopWarner,
    LittleLeague,
    Aau,
    TravelTeam,
    CommunityCenter,
    NationalOrg,
    MunicipalRec,
    Other,
}

const HIGH_SCHOOL_SUB_LEVELS: &[SubLevel] = &[SubLevel::HighSchool, SubLevel::MiddleSchool];

const YOUTH_SUB_LEVELS: &[SubLevel] = &[
    SubLevel::ClubTeam,
    SubLevel::RecLeague,
    SubLevel::Academy,
    SubLevel::Camp,
    SubLevel::Ymca,
    SubLevel::PopWarner,
    SubLevel::LittleLeague,
    SubLevel::Aau,
    SubLevel::TravelTeam,
    SubLevel::CommunityCenter,
    SubLevel::NationalOrg,
    SubLevel::MunicipalRec,
    SubLevel::Other,
];

impl SubLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SubLevel::HighSchool => "high_school",
            SubLevel::MiddleSchool => "middle_school",
            SubLevel::ClubTeam => "club_team",
            SubLevel::RecLeague => "rec_league",
            SubLevel::Academy => "academy",
            SubLevel::Camp => "camp",
            SubLevel::Ymca => "ymca",
            SubLevel::PopWarner => "pop_warner",
            SubLevel::LittleLeague => "little_league",
            SubLevel::Aau => "aau",
            SubLevel::TravelTeam => "travel_team",
            SubLevel::CommunityCenter => "community_center",
            SubLevel::NationalOrg => "national_org",
            SubLevel::MunicipalRec => "municipal_rec",
            SubLevel::Other => "other",
        }
    }

    /// Sub-levels that are valid for a level. Colleges have none.
    pub fn allowed_for(level: Level) -> &'static [SubLevel] {
        match level {
            Level::College => &[],
            Level::HighSchool => HIGH_SCHOOL_SUB_LEVELS,
            Level::Youth => YOUTH_SUB_LEVELS,
        }
    }

    pub fn belongs_to(self, level: Level) -> bool {
        Self::allowed_for(level).contains(&self)
    }
}

impl fmt::Display for SubLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        HIGH_SCHOOL_SUB_LEVELS
            .iter()
            .chain(YOUTH_SUB_LEVELS)
            .copied()
            .find(|sub| sub.as_str() == wanted)
            .ok_or_else(|| format!("unknown sub-level: {}", s))
    }
}

/// Identifiers of the organization whose page is being extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationContext {
    /// Persistence id, when the organization has been stored
    pub id: Option<i64>,
    pub name: String,
    pub level: Level,
    pub sub_level: Option<SubLevel>,
    pub state: String,
    pub division: Option<String>,
}

impl OrganizationContext {
    pub fn new(name: impl Into<String>, level: Level, state: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            level,
            sub_level: None,
            state: state.into(),
            division: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_sub_level(mut self, sub_level: SubLevel) -> Self {
        self.sub_level = Some(sub_level);
        self
    }

    pub fn with_division(mut self, division: impl Into<String>) -> Self {
        self.division = Some(division.into());
        self
    }
}
