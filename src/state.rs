//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It owns the activity directory behind an async `RwLock`: listing takes
//! the read side, signup and unregister hold the write side across the
//! membership check and the mutation.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::activity::ActivityDirectory;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the directory is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<ActivityDirectory>>,
}

impl AppState {
    #[must_use]
    pub fn new(directory: ActivityDirectory) -> Self {
        Self { directory: Arc::new(RwLock::new(directory)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_one_directory() {
        let state = test_helpers::test_app_state();
        let other = state.clone();

        state
            .directory
            .write()
            .await
            .signup("Chess Club", "shared@mergington.edu")
            .unwrap();

        let dir = other.directory.read().await;
        assert!(dir.list()["Chess Club"].has_participant("shared@mergington.edu"));
    }

    #[tokio::test]
    async fn separate_states_are_isolated() {
        let a = test_helpers::test_app_state();
        let b = test_helpers::test_app_state();

        a.directory.write().await.signup("Art Club", "only-a@mergington.edu").unwrap();

        assert!(!b.directory.read().await.list()["Art Club"].has_participant("only-a@mergington.edu"));
    }
}
