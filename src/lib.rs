//! Football tournament organizer: library with models and the progression engine.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::ServerConfig;
pub use logic::{
    advance_knockouts, apply_result, calculate_standings, champion, create_tournament,
    create_tournament_with_rng, first_knockout_round_name, first_round_name, generate_fixtures,
    match_winner, new_champion, record_match_result, standings_csv, validate_result, MatchResult,
    NewTournament,
};
pub use models::{
    BracketConfig, GameMatch, MatchId, MatchStatus, Stage, Team, TeamId, TeamStats, Tournament,
    TournamentError, TournamentFormat, TournamentId, Visibility, LEAGUE_GROUP, TBD_TEAM_ID,
};
pub use store::{export_snapshot, import_snapshot, InMemoryStore, TournamentStore, TournamentSummary};
