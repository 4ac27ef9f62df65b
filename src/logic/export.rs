//! CSV export of a standings table.

use crate::models::{Team, TournamentError};
use serde::Serialize;

const HEADER: [&str; 11] = [
    "position", "team", "group", "played", "won", "drawn", "lost", "gf", "ga", "gd", "points",
];

#[derive(Serialize)]
struct StandingsRow<'a> {
    position: usize,
    team: &'a str,
    group: &'a str,
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    gf: u32,
    ga: u32,
    gd: i32,
    points: u32,
}

/// Render teams (already ranked) as CSV. The header row is always written,
/// even for an empty table.
pub fn standings_csv(teams: &[Team]) -> Result<String, TournamentError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(HEADER)
        .map_err(|e| TournamentError::Serialization(e.to_string()))?;
    for (i, t) in teams.iter().enumerate() {
        wtr.serialize(StandingsRow {
            position: i + 1,
            team: &t.name,
            group: t.group.as_deref().unwrap_or(""),
            played: t.stats.played,
            won: t.stats.won,
            drawn: t.stats.drawn,
            lost: t.stats.lost,
            gf: t.stats.gf,
            ga: t.stats.ga,
            gd: t.stats.gd,
            points: t.stats.points,
        })
        .map_err(|e| TournamentError::Serialization(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| TournamentError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Serialization(e.to_string()))
}
