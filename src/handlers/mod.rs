/// # Registration Operations
///
/// List, signup and unregister over an [`ActivityRepository`]. Shared by the
/// REST routes and the GraphQL resolvers so both surfaces return the same
/// messages and errors.
///
/// [`ActivityRepository`]: crate::store::ActivityRepository
pub mod registration;
