const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Reactions the game listens for on its announcement message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionSymbol {
    /// `1️⃣` - join the game
    OptIn,
    /// `❗` - host announces last call
    LastCall,
    /// `☑️` - host closes entries and starts rolling
    Confirm,
    /// `🥲` - legacy host shortcut that rolls without a last call.
    ///
    /// Not attached to the announcement, but still honoured when added by hand.
    ForceRoll,
}

impl ReactionSymbol {
    /// Reactions the bot attaches to every announcement, in display order.
    pub const AFFORDANCES: [ReactionSymbol; 3] = [
        ReactionSymbol::OptIn,
        ReactionSymbol::LastCall,
        ReactionSymbol::Confirm,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            ReactionSymbol::OptIn => "1\u{FE0F}\u{20E3}",
            ReactionSymbol::LastCall => "\u{2757}",
            ReactionSymbol::Confirm => "\u{2611}\u{FE0F}",
            ReactionSymbol::ForceRoll => "\u{1F972}",
        }
    }

    /// Maps a unicode emoji name from Discord onto a symbol.
    ///
    /// Clients are inconsistent about emoji variation selectors, so they are
    /// ignored on both sides of the comparison.
    pub fn from_emoji(name: &str) -> Option<Self> {
        let wanted = strip_variation(name);

        [
            ReactionSymbol::OptIn,
            ReactionSymbol::LastCall,
            ReactionSymbol::Confirm,
            ReactionSymbol::ForceRoll,
        ]
        .into_iter()
        .find(|symbol| strip_variation(symbol.emoji()) == wanted)
    }
}

fn strip_variation(name: &str) -> String {
    name.chars().filter(|c| *c != VARIATION_SELECTOR).collect()
}
