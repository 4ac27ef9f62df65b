//! Match (game), Stage and MatchStatus for group and knockout play.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match (opaque string, unique within a tournament).
pub type MatchId = String;

/// Group label given to every match of a flat league.
pub const LEAGUE_GROUP: &str = "LEAGUE";

/// Side id used by the legacy bracket for a finalist that is not known yet.
pub const TBD_TEAM_ID: &str = "TBD";

/// Whether the match has been played.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Finished,
}

/// Phase of the tournament this match belongs to.
///
/// `QuarterFinal` doubles as the label for any knockout round played before
/// the quarter-finals proper (round of 16).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Group,
    QuarterFinal,
    SemiFinal,
    Final,
}

impl Stage {
    pub fn is_knockout(self) -> bool {
        self != Stage::Group
    }

    /// Heading used when listing matches by stage.
    pub fn title(self) -> &'static str {
        match self {
            Stage::Group => "Group Stage",
            Stage::QuarterFinal => "Quarter Finals",
            Stage::SemiFinal => "Semi Finals",
            Stage::Final => "Final",
        }
    }
}

/// A single match between a home and an away team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    /// None if not yet played.
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    /// Shootout score, only for a knockout match level after normal time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_penalty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_penalty: Option<u32>,
    pub status: MatchStatus,
    pub stage: Stage,
    /// Group label, group-stage matches only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Opaque date metadata; never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl GameMatch {
    /// A scheduled match with no score.
    pub fn new(home_team_id: impl Into<TeamId>, away_team_id: impl Into<TeamId>, stage: Stage) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            home_team_id: home_team_id.into(),
            away_team_id: away_team_id.into(),
            home_score: None,
            away_score: None,
            home_penalty: None,
            away_penalty: None,
            status: MatchStatus::Scheduled,
            stage,
            group: None,
            date: None,
        }
    }

    /// A scheduled group-stage match tagged with its group label.
    pub fn group_match(home_team_id: impl Into<TeamId>, away_team_id: impl Into<TeamId>, group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::new(home_team_id, away_team_id, Stage::Group)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// True if either side is still the legacy placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.home_team_id == TBD_TEAM_ID || self.away_team_id == TBD_TEAM_ID
    }

    /// True if the given team plays in this match.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}
