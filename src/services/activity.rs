//! Activity directory — listing, signup, and unregister.
//!
//! DESIGN
//! ======
//! The directory is a plain owned value: a map from activity name to its
//! record. It has no interior locking; `AppState` wraps it in an async
//! `RwLock` so each membership check and its mutation happen under one
//! write guard.
//!
//! Activity names are fixed once the directory is built. There is no
//! operation to add or remove an activity, only its participant roster.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound { activity: String },
    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },
    #[error("Student is not signed up for this activity")]
    NotSignedUp { activity: String, email: String },
}

/// One club or event and its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advertised capacity. Informational only; signups beyond it are accepted.
    pub max_participants: u32,
    /// Participant emails in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    #[must_use]
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

// =============================================================================
// DIRECTORY
// =============================================================================

/// In-memory collection of activities keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityDirectory {
    activities: BTreeMap<String, Activity>,
}

impl ActivityDirectory {
    #[must_use]
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self { activities }
    }

    /// Full directory, keyed by activity name.
    #[must_use]
    pub fn list(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Append `email` to the roster of `activity`.
    ///
    /// Returns the confirmation message on success.
    ///
    /// # Errors
    ///
    /// `NotFound` if the activity does not exist, `AlreadySignedUp` if the
    /// email is already on its roster. The directory is unchanged on error.
    pub fn signup(&mut self, activity: &str, email: &str) -> Result<String, ActivityError> {
        let entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| ActivityError::NotFound { activity: activity.to_owned() })?;

        if entry.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp { activity: activity.to_owned(), email: email.to_owned() });
        }

        entry.participants.push(email.to_owned());
        Ok(format!("Signed up {email} for {activity}"))
    }

    /// Remove `email` from the roster of `activity`.
    ///
    /// # Errors
    ///
    /// `NotFound` if the activity does not exist, `NotSignedUp` if the email
    /// is not on its roster. The directory is unchanged on error.
    pub fn unregister(&mut self, activity: &str, email: &str) -> Result<String, ActivityError> {
        let entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| ActivityError::NotFound { activity: activity.to_owned() })?;

        let Some(pos) = entry.participants.iter().position(|p| p == email) else {
            return Err(ActivityError::NotSignedUp { activity: activity.to_owned(), email: email.to_owned() });
        };

        entry.participants.remove(pos);
        Ok(format!("Unregistered {email} from {activity}"))
    }
}

#[cfg(test)]
#[path = "activity_test.rs"]
mod tests;
