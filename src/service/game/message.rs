//! User-facing message texts.

use crate::model::{player::Player, reaction::ReactionSymbol};

pub const GAME_IN_PROGRESS: &str = "There's already a game in progress bro";
pub const INVALID_WAGER: &str = "The roll amount has to be a positive number";
pub const LAST_CALL: &str = "Last call for this game!";
pub const NOT_ENOUGH_PARTICIPANTS: &str =
    "Not enough participants to start a roll for this, create a new game to try again";
pub const STARTING_ROLL: &str = "Starting rolling for this game...";
pub const TIE: &str = "There was a tie, no clear winner this time. Start a new game to try again";

pub const GENERATING_TABLE_TITLE: &str = "GENERATING TABLE";

/// Announcement posted in answer to `start`.
pub fn announcement(host: &Player, wager: i64) -> String {
    format!(
        "New {} Rolling session started by {}!\n{} to participate {} for last call and {} to start",
        format_wager(wager),
        host.mention(),
        ReactionSymbol::OptIn.emoji(),
        ReactionSymbol::LastCall.emoji(),
        ReactionSymbol::Confirm.emoji(),
    )
}

/// Table title after `name` rolled.
pub fn results_title(name: &str) -> String {
    format!("RESULTS FOR {} ADDED......", name)
}

pub fn payout(payer: &Player, payee: &Player, amount: i64) -> String {
    format!(
        "{} needs to pay {} {}g for this game!",
        payer.mention(),
        payee.mention(),
        amount
    )
}

/// Formats a wager for the announcement: whole thousands as `100k`, anything
/// else as the plain number.
pub fn format_wager(wager: i64) -> String {
    if wager % 1000 == 0 {
        format!("{}k", wager / 1000)
    } else {
        wager.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_thousands() {
        assert_eq!(format_wager(100_000), "100k");
        assert_eq!(format_wager(1_000), "1k");
        assert_eq!(format_wager(1_500), "1500");
        assert_eq!(format_wager(999), "999");
    }

    #[test]
    fn announcement_mentions_host_and_symbols() {
        let text = announcement(&Player::new(77, "Host"), 100_000);

        assert!(text.starts_with("New 100k Rolling session started by <@77>!"));
        assert!(text.contains(ReactionSymbol::OptIn.emoji()));
        assert!(text.contains(ReactionSymbol::LastCall.emoji()));
        assert!(text.contains(ReactionSymbol::Confirm.emoji()));
    }

    #[test]
    fn payout_names_payer_then_payee() {
        let text = payout(&Player::new(2, "B"), &Player::new(1, "A"), 50_000);
        assert_eq!(text, "<@2> needs to pay <@1> 50000g for this game!");
    }
}
