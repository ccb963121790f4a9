use super::{ActivityRepository, seed};
use crate::error::ActivityError;
use crate::models::activity::{Activity, Catalog};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-lifetime catalog held in memory.
///
/// Lost on restart. Mutations take the write lock for the whole
/// check-and-mutate sequence.
#[derive(Debug, Default)]
pub struct InMemoryActivityStore {
    activities: RwLock<Catalog>,
}

impl InMemoryActivityStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            activities: RwLock::new(catalog),
        }
    }

    /// Store populated with the school's initial catalog.
    pub fn seeded() -> Self {
        Self::new(seed::initial_catalog())
    }

    /// Restores the initial catalog, discarding every roster change.
    pub async fn reset(&self) {
        *self.activities.write().await = seed::initial_catalog();
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityStore {
    async fn get_all(&self) -> Catalog {
        self.activities.read().await.clone()
    }

    async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    async fn add_participant(&self, name: &str, email: &str) -> Result<(), ActivityError> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(ActivityError::NotFound)?;

        if activity.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    async fn remove_participant(&self, name: &str, email: &str) -> Result<(), ActivityError> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(name).ok_or(ActivityError::NotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(ActivityError::NotSignedUp)?;
        activity.participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::join_all;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_is_exact_match() {
        let store = InMemoryActivityStore::seeded();

        assert!(store.get("Chess Club").await.is_some());
        assert!(store.get("chess club").await.is_none());
        assert!(store.get("Chess Club ").await.is_none());
    }

    #[tokio::test]
    async fn test_add_participant_appends() {
        let store = InMemoryActivityStore::seeded();

        store
            .add_participant("Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();

        let chess = store.get("Chess Club").await.unwrap();
        assert_eq!(chess.participants.len(), 3);
        assert_eq!(
            chess.participants.last().map(String::as_str),
            Some("newstudent@mergington.edu")
        );
    }

    #[tokio::test]
    async fn test_add_participant_rejects_duplicate_without_mutation() {
        let store = InMemoryActivityStore::seeded();

        let result = store
            .add_participant("Debate Team", "alex@mergington.edu")
            .await;

        assert_eq!(result, Err(ActivityError::AlreadySignedUp));
        assert_eq!(store.get("Debate Team").await.unwrap().participants.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_activity_is_not_found() {
        let store = InMemoryActivityStore::seeded();

        assert_eq!(
            store.add_participant("Nonexistent Club", "x@mergington.edu").await,
            Err(ActivityError::NotFound)
        );
        assert_eq!(
            store
                .remove_participant("Nonexistent Club", "x@mergington.edu")
                .await,
            Err(ActivityError::NotFound)
        );
        assert_eq!(store.get_all().await.len(), 9);
    }

    #[tokio::test]
    async fn test_remove_participant() {
        let store = InMemoryActivityStore::seeded();

        store
            .remove_participant("Robotics Club", "james@mergington.edu")
            .await
            .unwrap();

        let robotics = store.get("Robotics Club").await.unwrap();
        assert_eq!(robotics.participants, vec!["lucy@mergington.edu"]);
    }

    #[tokio::test]
    async fn test_remove_missing_participant_leaves_state() {
        let store = InMemoryActivityStore::seeded();
        let before = store.get_all().await;

        let result = store
            .remove_participant("Chess Club", "notregistered@mergington.edu")
            .await;

        assert_eq!(result, Err(ActivityError::NotSignedUp));
        assert_eq!(store.get_all().await, before);
    }

    #[tokio::test]
    async fn test_signup_then_unregister_restores_roster() {
        let store = InMemoryActivityStore::seeded();
        let before = store.get("Programming Class").await.unwrap();

        store
            .add_participant("Programming Class", "flowtest@mergington.edu")
            .await
            .unwrap();
        store
            .remove_participant("Programming Class", "flowtest@mergington.edu")
            .await
            .unwrap();

        assert_eq!(store.get("Programming Class").await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_capacity_is_not_enforced() {
        let store = InMemoryActivityStore::seeded();
        let capacity = store.get("Chess Club").await.unwrap().max_participants as usize;

        for i in 0..capacity {
            store
                .add_participant("Chess Club", &format!("student{}@mergington.edu", i))
                .await
                .unwrap();
        }

        let chess = store.get("Chess Club").await.unwrap();
        assert!(chess.participants.len() > capacity);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_signups_admit_one() {
        let store = Arc::new(InMemoryActivityStore::seeded());

        let attempts = (0..16).map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .add_participant("Art Studio", "racer@mergington.edu")
                    .await
            })
        });
        let results: Vec<_> = join_all(attempts)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            results
                .iter()
                .filter_map(|r| r.as_ref().err())
                .all(|e| *e == ActivityError::AlreadySignedUp)
        );
        let art = store.get("Art Studio").await.unwrap();
        assert_eq!(art.participants.len(), 2);
    }

    #[test]
    fn test_reset_restores_seed() {
        tokio_test::block_on(async {
            let store = InMemoryActivityStore::seeded();
            store
                .remove_participant("Debate Team", "alex@mergington.edu")
                .await
                .unwrap();
            store
                .add_participant("Gym Class", "extra@mergington.edu")
                .await
                .unwrap();

            store.reset().await;

            assert_eq!(store.get_all().await, seed::initial_catalog());
        });
    }
}
