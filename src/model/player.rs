/// A guild member identified by their Discord user id.
///
/// The display name is captured when the member first interacts with a game and
/// is not refreshed afterwards, so it may be stale if they rename mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Discord user id (snowflake)
    pub id: u64,
    /// Display name shown in the results table
    pub name: String,
}

impl Player {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Discord mention markup for this player, e.g. `<@1234>`.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mention_uses_user_id() {
        let player = Player::new(1234, "Moonman");
        assert_eq!(player.mention(), "<@1234>");
    }
}
