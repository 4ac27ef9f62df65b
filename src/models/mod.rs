//! Data structures for the tournament: teams, matches, tournament snapshot.

mod game;
mod team;
mod tournament;

pub use game::{GameMatch, MatchId, MatchStatus, Stage, LEAGUE_GROUP, TBD_TEAM_ID};
pub use team::{Team, TeamId, TeamStats};
pub use tournament::{
    BracketConfig, Tournament, TournamentError, TournamentFormat, TournamentId, Visibility,
};
