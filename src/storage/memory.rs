// In-memory roster store
// Uses a Mutex around the roster for exclusive access

use super::*;
use crate::roster::{signup_participant, unregister_participant};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// In-memory roster store
pub struct MemoryRosterStore {
    roster: Arc<Mutex<Roster>>,
}

impl MemoryRosterStore {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(Mutex::new(roster)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Roster>, StoreError> {
        self.roster
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("Lock poisoned: {}", e)))
    }
}

impl Default for MemoryRosterStore {
    fn default() -> Self {
        Self::new(Roster::new())
    }
}

#[async_trait]
impl RosterStore for MemoryRosterStore {
    async fn list_activities(&self) -> Result<Roster, StoreError> {
        let roster = self.lock()?;
        Ok(roster.clone())
    }

    async fn get_activity(&self, name: &str) -> Result<Option<Activity>, StoreError> {
        let roster = self.lock()?;
        Ok(roster.get(name).cloned())
    }

    async fn signup(&self, activity_name: &str, participant: &str) -> Result<(), StoreError> {
        debug!("Signing up '{}' for '{}'", participant, activity_name);

        let mut roster = self.lock()?;
        if let Err(e) = signup_participant(&mut roster, activity_name, participant) {
            warn!("Signup on '{}' rejected: {}", activity_name, e.reason());
            debug!("Signup of '{}' rejected: {}", participant, e);
            return Err(e.into());
        }

        debug!("Signed up '{}' for '{}'", participant, activity_name);
        info!("Signup on '{}' succeeded", activity_name);
        Ok(())
    }

    async fn unregister(&self, activity_name: &str, participant: &str) -> Result<(), StoreError> {
        debug!("Unregistering '{}' from '{}'", participant, activity_name);

        let mut roster = self.lock()?;
        if let Err(e) = unregister_participant(&mut roster, activity_name, participant) {
            warn!("Unregister on '{}' rejected: {}", activity_name, e.reason());
            debug!("Unregister of '{}' rejected: {}", participant, e);
            return Err(e.into());
        }

        debug!("Unregistered '{}' from '{}'", participant, activity_name);
        info!("Unregister on '{}' succeeded", activity_name);
        Ok(())
    }
}
