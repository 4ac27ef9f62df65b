//! Recording a match result: validation, the pure match-list reducer, and the
//! full update of a tournament snapshot.

use crate::logic::knockout::advance_knockouts;
use crate::logic::standings::calculate_standings;
use crate::logic::winner::new_champion;
use crate::models::{
    GameMatch, MatchId, MatchStatus, Stage, Team, Tournament, TournamentError, TournamentFormat,
};
use serde::{Deserialize, Serialize};

/// A score entered for one match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: MatchId,
    pub home_score: u32,
    pub away_score: u32,
    #[serde(default)]
    pub home_penalty: Option<u32>,
    #[serde(default)]
    pub away_penalty: Option<u32>,
}

impl MatchResult {
    pub fn new(match_id: impl Into<MatchId>, home_score: u32, away_score: u32) -> Self {
        Self {
            match_id: match_id.into(),
            home_score,
            away_score,
            home_penalty: None,
            away_penalty: None,
        }
    }

    pub fn with_penalties(mut self, home_penalty: u32, away_penalty: u32) -> Self {
        self.home_penalty = Some(home_penalty);
        self.away_penalty = Some(away_penalty);
        self
    }
}

/// Reject a result the engine must never see.
pub fn validate_result(
    teams: &[Team],
    matches: &[GameMatch],
    result: &MatchResult,
) -> Result<(), TournamentError> {
    let m = matches
        .iter()
        .find(|m| m.id == result.match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(result.match_id.clone()))?;

    for side in [&m.home_team_id, &m.away_team_id] {
        if !teams.iter().any(|t| &t.id == side) {
            return Err(TournamentError::TeamNotFound(side.clone()));
        }
    }

    if m.stage.is_knockout() && result.home_score == result.away_score {
        match (result.home_penalty, result.away_penalty) {
            (Some(hp), Some(ap)) if hp == ap => return Err(TournamentError::PenaltyShootoutDraw),
            (Some(_), Some(_)) => {}
            _ => return Err(TournamentError::KnockoutDrawNeedsPenalties),
        }
    }
    Ok(())
}

/// Fold a result into the match list. Pure: returns a new list.
///
/// Shootout scores are kept only for a level knockout match.
pub fn apply_result(matches: &[GameMatch], result: &MatchResult) -> Vec<GameMatch> {
    matches
        .iter()
        .map(|m| {
            if m.id != result.match_id {
                return m.clone();
            }
            let shootout = m.stage.is_knockout() && result.home_score == result.away_score;
            GameMatch {
                home_score: Some(result.home_score),
                away_score: Some(result.away_score),
                home_penalty: result.home_penalty.filter(|_| shootout),
                away_penalty: result.away_penalty.filter(|_| shootout),
                status: MatchStatus::Finished,
                ..m.clone()
            }
        })
        .collect()
}

/// Validate and record a result, then re-derive standings and knockout rounds.
///
/// Teams and matches are swapped in together at the end, so a rejected result
/// leaves the tournament untouched.
pub fn record_match_result(
    tournament: &mut Tournament,
    result: &MatchResult,
) -> Result<(), TournamentError> {
    validate_result(&tournament.teams, &tournament.matches, result)?;

    let matches = apply_result(&tournament.matches, result);
    let teams = calculate_standings(&tournament.teams, &matches);
    // Groups are taken in the order they first appear in the ranked table.
    let matches = match tournament.format {
        TournamentFormat::League => matches,
        TournamentFormat::GroupsKnockout => {
            advance_knockouts(&teams, &matches, &tournament.bracket_config())
        }
    };

    if let Some(winner) = new_champion(&tournament.matches, &matches) {
        let name = teams.iter().find(|t| t.id == winner).map_or(winner, |t| t.name.as_str());
        log::info!("Tournament '{}' won by {}", tournament.name, name);
    }

    tournament.current_stage = current_stage(&matches);
    tournament.teams = teams;
    tournament.matches = matches;
    Ok(())
}

/// Stage of the first unfinished match, or of the last match once all are played.
pub fn current_stage(matches: &[GameMatch]) -> Stage {
    matches
        .iter()
        .find(|m| !m.is_finished())
        .or_else(|| matches.last())
        .map(|m| m.stage)
        .unwrap_or_default()
}
