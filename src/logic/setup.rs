//! Setup: validate the creation request, draw groups, schedule the group stage.

use crate::logic::fixtures::generate_fixtures;
use crate::logic::standings::calculate_standings;
use crate::models::{
    BracketConfig, Team, Tournament, TournamentError, TournamentFormat, Visibility,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Group labels run `A`..`Z`.
pub const MAX_GROUPS: usize = 26;

/// Everything the creation wizard collects.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewTournament {
    pub name: String,
    #[serde(default)]
    pub format: TournamentFormat,
    pub team_names: Vec<String>,
    /// Ignored for a league; defaults to two groups, two advancing.
    #[serde(default)]
    pub bracket: Option<BracketConfig>,
    #[serde(default)]
    pub visibility: Visibility,
}

/// Label of the `index`-th group: 0 -> "A", 1 -> "B", ...
pub fn group_label(index: usize) -> String {
    char::from(b'A' + (index % MAX_GROUPS) as u8).to_string()
}

/// Create a tournament, drawing groups with the thread-local RNG.
pub fn create_tournament(request: &NewTournament) -> Result<Tournament, TournamentError> {
    create_tournament_with_rng(request, &mut rand::thread_rng())
}

/// Create a tournament with a caller-supplied RNG (seeded in tests).
///
/// 1. Validate names (non-empty, unique ignoring case) and the group split.
/// 2. Shuffle the team names.
/// 3. Deal them into groups `A`, `B`, ... in equal consecutive blocks.
/// 4. Generate the group-stage fixtures.
pub fn create_tournament_with_rng<R: Rng + ?Sized>(
    request: &NewTournament,
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyName);
    }
    let mut names = validate_team_names(&request.team_names)?;

    let mut tournament = Tournament::new(name, request.format);
    tournament.visibility = request.visibility;

    names.shuffle(rng);

    match request.format {
        TournamentFormat::League => {
            tournament.teams = names.into_iter().map(Team::new).collect();
        }
        TournamentFormat::GroupsKnockout => {
            let bracket = request.bracket.unwrap_or_default();
            let num_groups = validate_bracket(names.len(), &bracket)?;
            let group_size = names.len() / num_groups;
            tournament.groups = (0..num_groups).map(group_label).collect();
            tournament.teams = names
                .into_iter()
                .enumerate()
                .map(|(i, n)| Team::in_group(n, group_label((i / group_size).min(num_groups - 1))))
                .collect();
            tournament.bracket = Some(bracket);
        }
    }

    tournament.matches = generate_fixtures(&tournament.teams, tournament.format);
    tournament.teams = calculate_standings(&tournament.teams, &tournament.matches);

    log::info!(
        "Created {:?} tournament '{}' with {} teams and {} fixtures",
        tournament.format,
        tournament.name,
        tournament.teams.len(),
        tournament.matches.len()
    );
    Ok(tournament)
}

/// Trimmed team names; rejects blanks, case-insensitive duplicates and fewer than 2 teams.
fn validate_team_names(raw: &[String]) -> Result<Vec<String>, TournamentError> {
    if raw.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }
    let mut names: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if names.iter().any(|n| n.eq_ignore_ascii_case(trimmed)) {
            return Err(TournamentError::DuplicateTeamName(trimmed.to_string()));
        }
        names.push(trimmed.to_string());
    }
    Ok(names)
}

/// Check that `team_count` teams fit the bracket; returns the number of groups.
fn validate_bracket(team_count: usize, bracket: &BracketConfig) -> Result<usize, TournamentError> {
    let num_groups = bracket.num_groups();
    if num_groups == 0 || num_groups > MAX_GROUPS {
        return Err(TournamentError::InvalidBracket(format!(
            "group count must be between 1 and {}",
            MAX_GROUPS
        )));
    }
    if team_count % num_groups != 0 {
        return Err(TournamentError::UnevenGroups {
            teams: team_count,
            groups: num_groups,
        });
    }
    let group_size = team_count / num_groups;
    match *bracket {
        BracketConfig::Generic {
            advancing_per_group,
            ..
        } => {
            if advancing_per_group == 0 || advancing_per_group > group_size {
                return Err(TournamentError::InvalidBracket(format!(
                    "{} teams cannot advance from groups of {}",
                    advancing_per_group, group_size
                )));
            }
            let total = num_groups * advancing_per_group;
            if !total.is_power_of_two() {
                log::warn!(
                    "{} qualifiers make an irregular play-off bracket; knockout rounds will not be drawn",
                    total
                );
            }
        }
        BracketConfig::LegacyTwoGroup => {
            if group_size < 2 {
                return Err(TournamentError::InvalidBracket(
                    "legacy bracket needs at least 2 teams per group".to_string(),
                ));
            }
        }
    }
    Ok(num_groups)
}
