//! Tournament, its format and bracket configuration.

use crate::models::game::{GameMatch, MatchId, Stage};
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Tournament or team name is blank.
    EmptyName,
    /// Need at least 2 teams.
    NotEnoughTeams,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName(String),
    /// Teams cannot be split evenly into the requested number of groups.
    UnevenGroups { teams: usize, groups: usize },
    /// Group count / advancing count do not describe a playable bracket.
    InvalidBracket(String),
    MatchNotFound(MatchId),
    /// A match side is not in the roster (unknown id or the TBD placeholder).
    TeamNotFound(TeamId),
    /// Knockout match ended level and no shootout score was given.
    KnockoutDrawNeedsPenalties,
    /// Shootout scores are equal.
    PenaltyShootoutDraw,
    TournamentNotFound(TournamentId),
    /// The backing store could not be accessed.
    StoreUnavailable,
    /// Snapshot or export could not be (de)serialized.
    Serialization(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::EmptyName => write!(f, "Name cannot be empty"),
            TournamentError::NotEnoughTeams => write!(f, "Need at least 2 teams"),
            TournamentError::DuplicateTeamName(name) => {
                write!(f, "A team named '{}' already exists", name)
            }
            TournamentError::UnevenGroups { teams, groups } => {
                write!(f, "{} teams cannot be split evenly into {} groups", teams, groups)
            }
            TournamentError::InvalidBracket(reason) => write!(f, "Invalid bracket: {}", reason),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::KnockoutDrawNeedsPenalties => write!(
                f,
                "Knockout matches cannot end in a draw. Please enter penalty scores."
            ),
            TournamentError::PenaltyShootoutDraw => write!(
                f,
                "Penalty shootout cannot end in a draw. Please enter a winner."
            ),
            TournamentError::TournamentNotFound(_) => write!(f, "No tournament"),
            TournamentError::StoreUnavailable => write!(f, "Tournament store unavailable"),
            TournamentError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Competition format. Fixed at creation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Single round-robin table; most points wins.
    #[default]
    League,
    /// Round-robin groups feeding a knockout bracket.
    GroupsKnockout,
}

/// How knockout rounds are derived from the group stage.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BracketConfig {
    /// Any group count; top `advancing_per_group` of each group qualify and
    /// rounds are created one at a time as the previous one completes.
    Generic {
        num_groups: usize,
        advancing_per_group: usize,
    },
    /// Two groups with the fixed A/B seeding table; the final is created early
    /// with TBD sides and filled in as semi-finals are decided.
    LegacyTwoGroup,
}

impl Default for BracketConfig {
    fn default() -> Self {
        BracketConfig::Generic {
            num_groups: 2,
            advancing_per_group: 2,
        }
    }
}

impl BracketConfig {
    pub fn num_groups(&self) -> usize {
        match self {
            BracketConfig::Generic { num_groups, .. } => *num_groups,
            BracketConfig::LegacyTwoGroup => 2,
        }
    }
}

/// Who can see the tournament. Passed through untouched by the engine.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Full tournament snapshot: roster, fixtures and results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: TournamentFormat,
    /// Ranked by the last standings computation.
    pub teams: Vec<Team>,
    pub matches: Vec<GameMatch>,
    /// Group labels in display order, e.g. `["A", "B"]`. Empty for a league.
    pub groups: Vec<String>,
    /// Informational only; never drives progression.
    pub current_stage: Stage,
    pub created_at: DateTime<Utc>,
    /// Set only for the groups + knockout format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracket: Option<BracketConfig>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Tournament {
    /// Empty tournament of the given format; setup fills teams and fixtures.
    pub fn new(name: impl Into<String>, format: TournamentFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            teams: Vec::new(),
            matches: Vec::new(),
            groups: Vec::new(),
            current_stage: Stage::Group,
            created_at: Utc::now(),
            bracket: None,
            visibility: Visibility::default(),
        }
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn get_match(&self, id: &str) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Bracket configuration, falling back to the two-group default.
    pub fn bracket_config(&self) -> BracketConfig {
        self.bracket.unwrap_or_default()
    }

    /// Teams of one group in table order.
    pub fn group_table(&self, group: &str) -> Vec<&Team> {
        self.teams
            .iter()
            .filter(|t| t.group.as_deref() == Some(group))
            .collect()
    }

    /// Matches of one stage in creation order.
    pub fn matches_in_stage(&self, stage: Stage) -> Vec<&GameMatch> {
        self.matches.iter().filter(|m| m.stage == stage).collect()
    }
}
