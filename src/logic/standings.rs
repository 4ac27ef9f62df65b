//! League table: statistics rebuilt from finished group matches.

use crate::models::{GameMatch, Stage, Team, TeamStats};
use std::cmp::Ordering;

/// Recompute every team's statistics from scratch and rank the roster.
///
/// Only finished `Group` matches count; knockout results never touch the
/// table. Ranking is points, then goal difference, then goals for. The sort
/// is stable, so teams level on all three keep their roster order.
pub fn calculate_standings(teams: &[Team], matches: &[GameMatch]) -> Vec<Team> {
    let mut table: Vec<Team> = teams
        .iter()
        .map(|t| Team {
            stats: TeamStats::default(),
            ..t.clone()
        })
        .collect();

    for m in matches
        .iter()
        .filter(|m| m.is_finished() && m.stage == Stage::Group)
    {
        let (Some(home_score), Some(away_score)) = (m.home_score, m.away_score) else {
            continue;
        };
        let home = table.iter().position(|t| t.id == m.home_team_id);
        let away = table.iter().position(|t| t.id == m.away_team_id);
        // Matches naming a team outside the roster are ignored.
        if let (Some(h), Some(a)) = (home, away) {
            table[h].stats.record(home_score, away_score);
            table[a].stats.record(away_score, home_score);
        }
    }

    table.sort_by(compare_table_rows);
    table
}

/// Ordering of two table rows: better team first.
pub fn compare_table_rows(a: &Team, b: &Team) -> Ordering {
    b.stats
        .points
        .cmp(&a.stats.points)
        .then_with(|| b.stats.gd.cmp(&a.stats.gd))
        .then_with(|| b.stats.gf.cmp(&a.stats.gf))
}

/// Group labels in the order they are first seen on the roster.
pub fn group_labels(teams: &[Team]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for group in teams.iter().filter_map(|t| t.group.as_ref()) {
        if !labels.contains(group) {
            labels.push(group.clone());
        }
    }
    labels
}
