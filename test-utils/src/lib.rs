//! Rollboard Test Utils
//!
//! Shared testing utilities for the rollboard bot. The bot's game logic is
//! tested against in-crate fakes; this crate covers the Discord side, building
//! Serenity model objects the way the gateway would deliver them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_user};
//!
//! #[test]
//! fn names_member() {
//!     let member = create_test_member(create_test_user(123, "moonman", None), Some("Tank"));
//!     assert_eq!(member.display_name(), "Tank");
//! }
//! ```

pub mod serenity;
