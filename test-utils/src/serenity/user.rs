//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User.
///
/// The user is a regular account with the new-style username system (no
/// discriminator) and no avatar.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique account username
/// - `global_name` - Optional display name shown instead of the username
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// let user = create_test_user(123456789, "moonman", Some("Tank Moonman"));
/// assert_eq!(user.display_name(), "Tank Moonman");
/// ```
pub fn create_test_user(user_id: u64, username: &str, global_name: Option<&str>) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": global_name,
        "avatar": null,
        "banner": null,
        "accent_color": null,
        "public_flags": null,
        "bot": false,
        "system": false,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
