//! Persistence gateway. The engine never touches storage; the application
//! loads a snapshot, runs the engine on plain data, and publishes the result
//! through a `TournamentStore`.

use crate::models::{Tournament, TournamentError, TournamentId, Visibility};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Listing entry for the public tournament browser.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub name: String,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
}

impl TournamentSummary {
    pub fn from_tournament(t: &Tournament) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            visibility: t.visibility,
            created_at: t.created_at,
        }
    }
}

/// Where tournament snapshots live.
pub trait TournamentStore: Send + Sync {
    fn insert(&self, tournament: Tournament) -> Result<TournamentId, TournamentError>;

    fn get(&self, id: TournamentId) -> Result<Tournament, TournamentError>;

    /// Run `apply` on a copy of the tournament and publish the copy only if it
    /// returns `Ok`. Returns the published snapshot.
    fn update(
        &self,
        id: TournamentId,
        apply: &mut dyn FnMut(&mut Tournament) -> Result<(), TournamentError>,
    ) -> Result<Tournament, TournamentError>;

    fn delete(&self, id: TournamentId) -> Result<(), TournamentError>;

    /// Public tournaments, newest first, optionally filtered by a
    /// case-insensitive name substring.
    fn list_public(&self, search: Option<&str>) -> Result<Vec<TournamentSummary>, TournamentError>;

    fn set_visibility(
        &self,
        id: TournamentId,
        visibility: Visibility,
    ) -> Result<Tournament, TournamentError> {
        self.update(id, &mut |t: &mut Tournament| {
            t.visibility = visibility;
            Ok(())
        })
    }
}

/// Per-tournament entry: snapshot + last activity time (for auto-cleanup).
struct StoreEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// Process-local store keyed by tournament id.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<TournamentId, StoreEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop tournaments not accessed within `timeout`. Returns how many were removed.
    pub fn remove_inactive(&self, timeout: Duration) -> Result<usize, TournamentError> {
        let mut g = self.entries.write().map_err(|_| TournamentError::StoreUnavailable)?;
        let before = g.len();
        g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
        Ok(before - g.len())
    }
}

impl TournamentStore for InMemoryStore {
    fn insert(&self, tournament: Tournament) -> Result<TournamentId, TournamentError> {
        let mut g = self.entries.write().map_err(|_| TournamentError::StoreUnavailable)?;
        let id = tournament.id;
        g.insert(
            id,
            StoreEntry {
                tournament,
                last_activity: Instant::now(),
            },
        );
        Ok(id)
    }

    fn get(&self, id: TournamentId) -> Result<Tournament, TournamentError> {
        // Reads refresh last_activity, so they take the write lock.
        let mut g = self.entries.write().map_err(|_| TournamentError::StoreUnavailable)?;
        let entry = g.get_mut(&id).ok_or(TournamentError::TournamentNotFound(id))?;
        entry.last_activity = Instant::now();
        Ok(entry.tournament.clone())
    }

    fn update(
        &self,
        id: TournamentId,
        apply: &mut dyn FnMut(&mut Tournament) -> Result<(), TournamentError>,
    ) -> Result<Tournament, TournamentError> {
        let mut g = self.entries.write().map_err(|_| TournamentError::StoreUnavailable)?;
        let entry = g.get_mut(&id).ok_or(TournamentError::TournamentNotFound(id))?;
        entry.last_activity = Instant::now();
        let mut next = entry.tournament.clone();
        apply(&mut next)?;
        entry.tournament = next.clone();
        Ok(next)
    }

    fn delete(&self, id: TournamentId) -> Result<(), TournamentError> {
        let mut g = self.entries.write().map_err(|_| TournamentError::StoreUnavailable)?;
        g.remove(&id)
            .map(|_| ())
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    fn list_public(&self, search: Option<&str>) -> Result<Vec<TournamentSummary>, TournamentError> {
        let g = self.entries.read().map_err(|_| TournamentError::StoreUnavailable)?;
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        let mut list: Vec<TournamentSummary> = g
            .values()
            .map(|e| &e.tournament)
            .filter(|t| t.visibility == Visibility::Public)
            .filter(|t| {
                needle
                    .as_ref()
                    .map_or(true, |n| t.name.to_lowercase().contains(n.as_str()))
            })
            .map(TournamentSummary::from_tournament)
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }
}

/// Serialize a tournament snapshot for an external store.
pub fn export_snapshot(tournament: &Tournament) -> Result<String, TournamentError> {
    serde_json::to_string(tournament).map_err(|e| TournamentError::Serialization(e.to_string()))
}

/// Load a snapshot written by `export_snapshot`.
pub fn import_snapshot(json: &str) -> Result<Tournament, TournamentError> {
    serde_json::from_str(json).map_err(|e| TournamentError::Serialization(e.to_string()))
}
