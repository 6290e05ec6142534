//! Saved/applied marker sets and result decoration.
//!
//! Marker sets belong to the persistence layer. The engine only reads
//! membership to decorate a result sequence; toggling goes through a
//! `MarkerStore` and never touches the catalog.

use crate::engine::ResultSequence;
use catalog::{InternshipId, InternshipRecord, UserId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Saved,
    Applied,
}

/// Contract of the marker persistence collaborator.
pub trait MarkerStore {
    /// Every internship id the user has marked with `kind`
    fn ids_for_user(&self, user: &str, kind: MarkerKind) -> BTreeSet<InternshipId>;

    /// Flip one marker. Returns whether the id is marked afterwards.
    fn toggle(&mut self, user: &str, kind: MarkerKind, internship: &str) -> bool;

    fn is_marked(&self, user: &str, kind: MarkerKind, internship: &str) -> bool {
        self.ids_for_user(user, kind).contains(internship)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct UserMarkers {
    #[serde(default)]
    saved: BTreeSet<InternshipId>,
    #[serde(default)]
    applied: BTreeSet<InternshipId>,
}

impl UserMarkers {
    fn set(&self, kind: MarkerKind) -> &BTreeSet<InternshipId> {
        match kind {
            MarkerKind::Saved => &self.saved,
            MarkerKind::Applied => &self.applied,
        }
    }

    fn set_mut(&mut self, kind: MarkerKind) -> &mut BTreeSet<InternshipId> {
        match kind {
            MarkerKind::Saved => &mut self.saved,
            MarkerKind::Applied => &mut self.applied,
        }
    }
}

/// Marker sets held in memory, serializable as one JSON document keyed by
/// user id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryMarkerStore {
    users: HashMap<UserId, UserMarkers>,
}

impl InMemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkerStore for InMemoryMarkerStore {
    fn ids_for_user(&self, user: &str, kind: MarkerKind) -> BTreeSet<InternshipId> {
        self.users
            .get(user)
            .map(|markers| markers.set(kind).clone())
            .unwrap_or_default()
    }

    fn toggle(&mut self, user: &str, kind: MarkerKind, internship: &str) -> bool {
        let set = self
            .users
            .entry(user.to_string())
            .or_default()
            .set_mut(kind);
        if set.remove(internship) {
            tracing::debug!("Unmarked {} as {:?} for {}", internship, kind, user);
            false
        } else {
            set.insert(internship.to_string());
            tracing::debug!("Marked {} as {:?} for {}", internship, kind, user);
            true
        }
    }

    fn is_marked(&self, user: &str, kind: MarkerKind, internship: &str) -> bool {
        self.users
            .get(user)
            .is_some_and(|markers| markers.set(kind).contains(internship))
    }
}

/// A result entry with the current user's marker state attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecoratedRecord<'a> {
    pub record: &'a InternshipRecord,
    pub is_saved: bool,
    pub is_applied: bool,
}

/// Attach saved/applied flags to each result. Pure read.
pub fn decorate<'a>(
    results: &ResultSequence<'a>,
    saved: &BTreeSet<InternshipId>,
    applied: &BTreeSet<InternshipId>,
) -> Vec<DecoratedRecord<'a>> {
    results
        .iter()
        .map(|record| DecoratedRecord {
            record,
            is_saved: saved.contains(&record.id),
            is_applied: applied.contains(&record.id),
        })
        .collect()
}

/// Decorate results for one user straight from a marker store.
pub fn decorate_for_user<'a>(
    results: &ResultSequence<'a>,
    store: &impl MarkerStore,
    user: &str,
) -> Vec<DecoratedRecord<'a>> {
    let saved = store.ids_for_user(user, MarkerKind::Saved);
    let applied = store.ids_for_user(user, MarkerKind::Applied);
    decorate(results, &saved, &applied)
}
