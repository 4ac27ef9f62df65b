//! Winner resolution for a single match, including penalty shootouts.

use crate::models::{GameMatch, Stage};

/// Winning team id, or `None` if the match is unplayed or undecided.
///
/// Level scores are decided by the shootout when both penalty scores are
/// present; otherwise the match is a draw with no winner.
pub fn match_winner(m: &GameMatch) -> Option<&str> {
    let (home, away) = (m.home_score?, m.away_score?);
    if home > away {
        return Some(&m.home_team_id);
    }
    if away > home {
        return Some(&m.away_team_id);
    }
    match (m.home_penalty, m.away_penalty) {
        (Some(hp), Some(ap)) if hp > ap => Some(&m.home_team_id),
        (Some(hp), Some(ap)) if ap > hp => Some(&m.away_team_id),
        _ => None,
    }
}

/// Champion: winner of the finished final, if there is one.
pub fn champion(matches: &[GameMatch]) -> Option<&str> {
    matches
        .iter()
        .find(|m| m.stage == Stage::Final && m.is_finished())
        .and_then(match_winner)
}

/// Champion of `current` if it differs from the one in `previous`: the update
/// that decided (or changed) the final.
pub fn new_champion<'a>(previous: &[GameMatch], current: &'a [GameMatch]) -> Option<&'a str> {
    let before = champion(previous);
    champion(current).filter(|winner| before != Some(*winner))
}
