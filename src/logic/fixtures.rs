//! Initial fixture list: single round-robin, flat or per group.

use crate::logic::standings::group_labels;
use crate::models::{GameMatch, Team, TournamentFormat, LEAGUE_GROUP};

/// Generate every group-stage match for a fresh tournament.
///
/// League: each unordered pair plays once, the earlier roster entry at home.
/// Groups + knockout: the same within each pre-assigned group, no matches
/// between groups. Teams without a group are not scheduled in that format.
pub fn generate_fixtures(teams: &[Team], format: TournamentFormat) -> Vec<GameMatch> {
    match format {
        TournamentFormat::League => {
            let roster: Vec<&Team> = teams.iter().collect();
            round_robin(&roster, LEAGUE_GROUP)
        }
        TournamentFormat::GroupsKnockout => group_labels(teams)
            .iter()
            .flat_map(|label| {
                let members: Vec<&Team> = teams
                    .iter()
                    .filter(|t| t.group.as_ref() == Some(label))
                    .collect();
                round_robin(&members, label)
            })
            .collect(),
    }
}

fn round_robin(teams: &[&Team], group: &str) -> Vec<GameMatch> {
    let mut matches = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1) / 2);
    for (i, home) in teams.iter().enumerate() {
        for away in &teams[i + 1..] {
            matches.push(GameMatch::group_match(home.id.clone(), away.id.clone(), group));
        }
    }
    matches
}
