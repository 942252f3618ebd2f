//! Conversion of Discord users and members into players.

use serenity::all::{Member, User};

use crate::model::player::Player;

/// Player for a guild member, named by their nickname when set.
pub fn player_from_member(member: &Member) -> Player {
    Player::new(member.user.id.get(), member.display_name())
}

/// Player for a user outside guild context, named by their global display name
/// or username.
pub fn player_from_user(user: &User) -> Player {
    Player::new(user.id.get(), user.display_name())
}

/// Placeholder player for a user whose profile could not be fetched.
pub fn unknown_player(user_id: u64) -> Player {
    Player::new(user_id, format!("User {}", user_id))
}
