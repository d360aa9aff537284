// Roster storage abstraction
// Owns the live roster and serializes access to the core mutations

pub mod memory;

use crate::models::{Activity, Roster};
use crate::roster::RosterError;
use async_trait::async_trait;
use std::sync::Arc;

/// Storage backend trait for the activity roster
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Snapshot of every activity
    async fn list_activities(&self) -> Result<Roster, StoreError>;

    async fn get_activity(&self, name: &str) -> Result<Option<Activity>, StoreError>;

    async fn signup(&self, activity_name: &str, participant: &str) -> Result<(), StoreError>;

    async fn unregister(&self, activity_name: &str, participant: &str)
        -> Result<(), StoreError>;
}

/// Storage errors
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The roster rejected the mutation
    Roster(RosterError),
    /// The backing store could not be accessed
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Roster(err) => write!(f, "{}", err),
            StoreError::Unavailable(msg) => write!(f, "Roster store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Roster(err) => Some(err),
            StoreError::Unavailable(_) => None,
        }
    }
}

impl From<RosterError> for StoreError {
    fn from(err: RosterError) -> Self {
        StoreError::Roster(err)
    }
}

/// Factory function to create the roster store seeded with `roster`
pub fn create_roster_store(roster: Roster) -> Arc<dyn RosterStore> {
    Arc::new(memory::MemoryRosterStore::new(roster))
}
