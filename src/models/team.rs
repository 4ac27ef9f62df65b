//! Team and TeamStats data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (opaque string, unique within a tournament).
pub type TeamId = String;

/// League-table statistics. Always derived from the match list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    /// Goals for.
    pub gf: u32,
    /// Goals against.
    pub ga: u32,
    /// Goal difference.
    pub gd: i32,
    pub points: u32,
}

impl TeamStats {
    /// Fold one finished result into the record (`scored` by this team, `conceded` by the opponent).
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.gf += scored;
        self.ga += conceded;
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += 3;
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += 1;
            }
            std::cmp::Ordering::Less => self.lost += 1,
        }
        self.gd = self.gf as i32 - self.ga as i32;
    }
}

/// A team in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Group label, only for the groups + knockout format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub stats: TeamStats,
}

impl Team {
    /// Create a new team with the given name and zeroed stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            group: None,
            stats: TeamStats::default(),
        }
    }

    /// Same as `new`, placed in a group.
    pub fn in_group(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::new(name)
        }
    }
}
