//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's gateway would deliver with an interaction or a
//! reaction.
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects wrapping a user

pub mod member;
pub mod user;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use user::create_test_user;
