//! Tournament business logic: fixtures, standings, knockout progression, results.

mod export;
mod fixtures;
mod knockout;
mod legacy;
mod results;
mod setup;
mod standings;
mod winner;

pub use export::standings_csv;
pub use fixtures::generate_fixtures;
pub use knockout::{
    advance_generic, advance_knockouts, first_knockout_round_name, first_round_name,
    fold_pairings, group_stage_complete, qualifiers, round_plan, Tier,
};
pub use legacy::{advance_legacy, LEGACY_QUARTER_FINAL_THRESHOLD};
pub use results::{apply_result, current_stage, record_match_result, validate_result, MatchResult};
pub use setup::{create_tournament, create_tournament_with_rng, group_label, NewTournament, MAX_GROUPS};
pub use standings::{calculate_standings, compare_table_rows, group_labels};
pub use winner::{champion, match_winner, new_champion};
