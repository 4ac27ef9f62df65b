//! Knockout progression: decides after each result whether the next round
//! can be drawn.
//!
//! Nothing here is stored between calls. The bracket state is read back from
//! the match list every time, so calling `advance_knockouts` again without new
//! results returns the same list.

use crate::logic::legacy::{advance_legacy, LEGACY_QUARTER_FINAL_THRESHOLD};
use crate::logic::standings::{calculate_standings, group_labels};
use crate::logic::winner::match_winner;
use crate::models::{BracketConfig, GameMatch, Stage, Team, TeamId};
use std::collections::HashMap;

/// One round of a bracket: the stage label it is played under and its size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tier {
    pub stage: Stage,
    pub matches: usize,
}

const fn tier(stage: Stage, matches: usize) -> Tier {
    Tier { stage, matches }
}

const PLAN_16: [Tier; 4] = [
    tier(Stage::QuarterFinal, 8),
    tier(Stage::SemiFinal, 4),
    tier(Stage::SemiFinal, 2),
    tier(Stage::Final, 1),
];
const PLAN_8: [Tier; 3] = [
    tier(Stage::QuarterFinal, 4),
    tier(Stage::SemiFinal, 2),
    tier(Stage::Final, 1),
];
const PLAN_4: [Tier; 2] = [tier(Stage::SemiFinal, 2), tier(Stage::Final, 1)];
const PLAN_2: [Tier; 1] = [tier(Stage::Final, 1)];

/// Rounds played for a given number of qualifiers, first round first.
///
/// With 16 qualifiers the round of 16 is labelled `QuarterFinal`, which pushes
/// the real quarter-finals onto the `SemiFinal` label; that label then carries
/// two consecutive rounds (4 matches, then 2).
pub fn round_plan(total_advancing: usize) -> Option<&'static [Tier]> {
    match total_advancing {
        16 => Some(&PLAN_16),
        8 => Some(&PLAN_8),
        4 => Some(&PLAN_4),
        2 => Some(&PLAN_2),
        _ => None,
    }
}

/// Apply the configured strategy and return the (possibly extended) match list.
pub fn advance_knockouts(teams: &[Team], matches: &[GameMatch], config: &BracketConfig) -> Vec<GameMatch> {
    match *config {
        BracketConfig::Generic {
            num_groups,
            advancing_per_group,
        } => advance_generic(teams, matches, num_groups, advancing_per_group),
        BracketConfig::LegacyTwoGroup => advance_legacy(teams, matches),
    }
}

/// True once at least one group match exists and every group match is finished.
pub fn group_stage_complete(matches: &[GameMatch]) -> bool {
    let mut group_matches = matches.iter().filter(|m| m.stage == Stage::Group).peekable();
    group_matches.peek().is_some() && group_matches.all(|m| m.is_finished())
}

/// Top `advancing_per_group` of each group, groups in roster order.
pub fn qualifiers(teams: &[Team], matches: &[GameMatch], advancing_per_group: usize) -> Vec<TeamId> {
    let table = calculate_standings(teams, matches);
    group_labels(teams)
        .iter()
        .flat_map(|label| {
            table
                .iter()
                .filter(|t| t.group.as_ref() == Some(label))
                .take(advancing_per_group)
                .map(|t| t.id.clone())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Pair entrant `i` with entrant `n - 1 - i`: best against worst.
pub fn fold_pairings(entrants: &[TeamId], stage: Stage) -> Vec<GameMatch> {
    let n = entrants.len();
    (0..n / 2)
        .map(|i| GameMatch::new(entrants[i].clone(), entrants[n - 1 - i].clone(), stage))
        .collect()
}

/// Config-driven strategy for any number of groups.
///
/// Walks the round plan. The first round with no matches yet is drawn from
/// the entrants of the round before it, and the walk stops there; a round
/// that exists but is not fully decided also stops the walk. At most one
/// round is created per call.
pub fn advance_generic(
    teams: &[Team],
    matches: &[GameMatch],
    num_groups: usize,
    advancing_per_group: usize,
) -> Vec<GameMatch> {
    let mut updated = matches.to_vec();
    if !group_stage_complete(matches) {
        return updated;
    }

    let bracket = num_groups
        .checked_mul(advancing_per_group)
        .and_then(|total| round_plan(total).map(|plan| (total, plan)));
    let Some((total, plan)) = bracket else {
        log::warn!(
            "{} groups x {} advancing do not form a supported bracket; no knockout rounds drawn",
            num_groups,
            advancing_per_group
        );
        return updated;
    };

    let mut entrants = qualifiers(teams, matches, advancing_per_group);
    if entrants.len() != total {
        log::warn!(
            "expected {} qualifiers but groups produced {}; knockout draw skipped",
            total,
            entrants.len()
        );
        return updated;
    }

    let mut consumed: HashMap<Stage, usize> = HashMap::new();
    for step in plan {
        let offset = consumed.entry(step.stage).or_insert(0);
        let round: Vec<&GameMatch> = matches
            .iter()
            .filter(|m| m.stage == step.stage)
            .skip(*offset)
            .take(step.matches)
            .collect();
        *offset += step.matches;

        if round.is_empty() {
            if entrants.len() == step.matches * 2 {
                log::debug!("drawing {} {:?} matches", step.matches, step.stage);
                updated.extend(fold_pairings(&entrants, step.stage));
            }
            return updated;
        }

        match round_winners(&round, step.matches) {
            Some(winners) => entrants = winners,
            None => return updated,
        }
    }
    updated
}

/// Winners of a complete round in match order; `None` while any match is
/// unplayed or unresolved.
fn round_winners(round: &[&GameMatch], expected: usize) -> Option<Vec<TeamId>> {
    if round.len() != expected {
        return None;
    }
    round
        .iter()
        .map(|m| {
            if m.is_finished() {
                match_winner(m).map(str::to_owned)
            } else {
                None
            }
        })
        .collect()
}

fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Display name of the first knockout round for a bracket configuration.
pub fn first_knockout_round_name(num_groups: usize, advancing_per_group: usize) -> String {
    let Some(total) = num_groups
        .checked_mul(advancing_per_group)
        .filter(|&n| is_power_of_two(n))
    else {
        return "Play-off".to_string();
    };
    match total {
        16 => "Round of 16".to_string(),
        8 => "Quarter-finals".to_string(),
        4 => "Semi-finals".to_string(),
        2 => "Final".to_string(),
        n => format!("Round of {}", n),
    }
}

/// First knockout round of a tournament with `team_count` teams.
pub fn first_round_name(config: &BracketConfig, team_count: usize) -> String {
    match *config {
        BracketConfig::Generic {
            num_groups,
            advancing_per_group,
        } => first_knockout_round_name(num_groups, advancing_per_group),
        BracketConfig::LegacyTwoGroup if team_count > LEGACY_QUARTER_FINAL_THRESHOLD => {
            "Quarter-finals".to_string()
        }
        BracketConfig::LegacyTwoGroup => "Semi-finals".to_string(),
    }
}
