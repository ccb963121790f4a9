pub mod activity;
pub mod handlers;
pub mod health;
pub mod schema;
