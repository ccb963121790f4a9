use crate::error::ActivityError;
use crate::models::activity::{Activity, Catalog};
use async_trait::async_trait;

pub mod memory;
pub mod seed;

pub use memory::InMemoryActivityStore;

/// Storage seam for the activity catalog.
///
/// Handlers only see this trait, so the in-memory store can be replaced by a
/// persistent backend without touching the request layer. Implementations
/// must run the membership check and the mutation of `add_participant` and
/// `remove_participant` atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Snapshot of every activity, keyed by name.
    async fn get_all(&self) -> Catalog;

    /// Exact-match lookup. No case folding or trimming.
    async fn get(&self, name: &str) -> Option<Activity>;

    /// Adds `email` to the roster of `name`.
    ///
    /// # Errors
    /// - [`ActivityError::NotFound`] if no activity has that name
    /// - [`ActivityError::AlreadySignedUp`] if the email is already on the roster
    async fn add_participant(&self, name: &str, email: &str) -> Result<(), ActivityError>;

    /// Removes `email` from the roster of `name`.
    ///
    /// # Errors
    /// - [`ActivityError::NotFound`] if no activity has that name
    /// - [`ActivityError::NotSignedUp`] if the email is not on the roster
    async fn remove_participant(&self, name: &str, email: &str) -> Result<(), ActivityError>;
}
