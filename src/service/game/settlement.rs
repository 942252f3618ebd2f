use crate::{
    model::player::Player,
    service::{game::message, roll::RollExtremes},
};

/// Outcome of a fully rolled game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The lowest roller owes the highest roller the difference.
    Payout {
        payer: Player,
        payee: Player,
        amount: i64,
    },
    /// The same player holds both extremes, so nobody wins.
    Tie,
}

impl Settlement {
    /// Settles a game from its final extremes.
    ///
    /// The highest roll is paid `highest - lowest` by the lowest roll. When
    /// both extremes belong to one player (every roll equal) the game is a tie.
    pub fn from_extremes(extremes: &RollExtremes) -> Self {
        let (Some(highest), Some(lowest)) = (extremes.highest(), extremes.lowest()) else {
            return Settlement::Tie;
        };

        if highest.player.id == lowest.player.id {
            return Settlement::Tie;
        }

        Settlement::Payout {
            payer: lowest.player.clone(),
            payee: highest.player.clone(),
            amount: highest.roll - lowest.roll,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Settlement::Payout {
                payer,
                payee,
                amount,
            } => message::payout(payer, payee, *amount),
            Settlement::Tie => message::TIE.to_string(),
        }
    }
}
