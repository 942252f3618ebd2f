//! Test factory for creating Serenity Member objects.

use serenity::all::{Member, User};

/// Guild the test members belong to.
pub const TEST_GUILD_ID: u64 = 900_000_000_000_000_001;

/// Creates a test Serenity guild Member for `user`.
///
/// The member has no roles, joined in 2020 and belongs to `TEST_GUILD_ID`.
///
/// # Arguments
/// - `user` - Account behind the membership, see `create_test_user`
/// - `nick` - Optional guild nickname
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(user: User, nick: Option<&str>) -> Member {
    serde_json::from_value(serde_json::json!({
        "user": user,
        "nick": nick,
        "avatar": null,
        "roles": [],
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
        "guild_id": TEST_GUILD_ID.to_string(),
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
