/// # Activity Models
///
/// The catalog record ([`Activity`]), the `email` query parameter, and the
/// `{message}` / `{detail}` response bodies of the REST surface.
///
/// ## Example JSON
/// ```json
/// {
///   "description": "Learn strategies and compete in chess tournaments",
///   "schedule": "Fridays, 3:30 PM - 5:00 PM",
///   "max_participants": 12,
///   "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
/// }
/// ```
///
/// [`Activity`]: crate::models::activity::Activity
pub mod activity;

/// # Health Status Response
///
/// Service status with a timestamp and the current catalog size.
pub mod health;
