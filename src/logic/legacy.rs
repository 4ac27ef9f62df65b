//! Legacy two-group bracket (groups A and B) with a fixed seeding table.
//!
//! More than 8 teams: quarter-finals A1-B4, B2-A3, B1-A4, A2-B3, then
//! semi-finals W(QF1)-W(QF2) and W(QF3)-W(QF4). Otherwise semi-finals A1-B2
//! and B1-A2 straight from the groups. Unlike the generic strategy, every step
//! runs in the same pass, and the final is created with TBD sides as soon as
//! both semi-finals exist, each side filled in once its semi-final is decided.

use crate::logic::knockout::group_stage_complete;
use crate::logic::standings::{calculate_standings, group_labels};
use crate::logic::winner::match_winner;
use crate::models::{GameMatch, Stage, Team, TeamId, TBD_TEAM_ID};

/// Above this many teams the legacy bracket starts with quarter-finals.
pub const LEGACY_QUARTER_FINAL_THRESHOLD: usize = 8;

/// Run the legacy bracket over the current match list.
pub fn advance_legacy(teams: &[Team], matches: &[GameMatch]) -> Vec<GameMatch> {
    let mut updated = matches.to_vec();
    if !group_stage_complete(matches) {
        return updated;
    }

    let table = calculate_standings(teams, matches);
    let labels = group_labels(teams);
    let (Some(label_a), Some(label_b)) = (labels.first(), labels.get(1)) else {
        log::warn!("legacy bracket needs two groups, found {}", labels.len());
        return updated;
    };
    let a = ranked_group(&table, label_a);
    let b = ranked_group(&table, label_b);

    if teams.len() > LEGACY_QUARTER_FINAL_THRESHOLD {
        if !has_stage(&updated, Stage::QuarterFinal) {
            if a.len() < 4 || b.len() < 4 {
                log::warn!("legacy quarter-finals need 4 teams per group");
                return updated;
            }
            let pairs = [(&a[0], &b[3]), (&b[1], &a[2]), (&b[0], &a[3]), (&a[1], &b[2])];
            updated.extend(
                pairs
                    .into_iter()
                    .map(|(home, away)| GameMatch::new(home.clone(), away.clone(), Stage::QuarterFinal)),
            );
        }
        if !has_stage(&updated, Stage::SemiFinal) {
            let Some(w) = decided_winners(&updated, Stage::QuarterFinal, 4) else {
                return updated;
            };
            updated.push(GameMatch::new(w[0].clone(), w[1].clone(), Stage::SemiFinal));
            updated.push(GameMatch::new(w[2].clone(), w[3].clone(), Stage::SemiFinal));
        }
    } else if !has_stage(&updated, Stage::SemiFinal) {
        if a.len() < 2 || b.len() < 2 {
            log::warn!("legacy semi-finals need 2 teams per group");
            return updated;
        }
        updated.push(GameMatch::new(a[0].clone(), b[1].clone(), Stage::SemiFinal));
        updated.push(GameMatch::new(b[0].clone(), a[1].clone(), Stage::SemiFinal));
    }

    fill_final(&mut updated);
    updated
}

fn ranked_group(table: &[Team], label: &str) -> Vec<TeamId> {
    table
        .iter()
        .filter(|t| t.group.as_deref() == Some(label))
        .map(|t| t.id.clone())
        .collect()
}

fn has_stage(matches: &[GameMatch], stage: Stage) -> bool {
    matches.iter().any(|m| m.stage == stage)
}

/// Winners of every match in `stage`, if there are exactly `expected` and all are decided.
fn decided_winners(matches: &[GameMatch], stage: Stage, expected: usize) -> Option<Vec<TeamId>> {
    let round: Vec<&GameMatch> = matches.iter().filter(|m| m.stage == stage).collect();
    if round.len() != expected {
        return None;
    }
    round
        .into_iter()
        .map(|m| m.is_finished().then(|| match_winner(m)).flatten().map(str::to_owned))
        .collect()
}

/// Create the TBD final once both semi-finals exist, then fill in decided sides.
fn fill_final(matches: &mut Vec<GameMatch>) {
    let semi_winners: Vec<Option<TeamId>> = matches
        .iter()
        .filter(|m| m.stage == Stage::SemiFinal)
        .map(|m| m.is_finished().then(|| match_winner(m)).flatten().map(str::to_owned))
        .collect();
    if semi_winners.len() != 2 {
        return;
    }

    if !has_stage(matches, Stage::Final) {
        log::debug!("legacy bracket: final scheduled with TBD sides");
        matches.push(GameMatch::new(TBD_TEAM_ID, TBD_TEAM_ID, Stage::Final));
    }
    let Some(fin) = matches
        .iter_mut()
        .find(|m| m.stage == Stage::Final)
        .filter(|m| m.has_placeholder())
    else {
        return;
    };
    if fin.home_team_id == TBD_TEAM_ID {
        if let Some(winner) = &semi_winners[0] {
            fin.home_team_id = winner.clone();
        }
    }
    if fin.away_team_id == TBD_TEAM_ID {
        if let Some(winner) = &semi_winners[1] {
            fin.away_team_id = winner.clone();
        }
    }
}
