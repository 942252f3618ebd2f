//! Slash command definitions.

use serenity::all::{
    CommandDataOptionValue, CommandInteraction, CommandOptionType, CreateCommand,
    CreateCommandOption,
};

use crate::{bot::identity, service::game::event::GameEvent};

pub const START_COMMAND: &str = "start";
const AMOUNT_OPTION: &str = "amount";

/// Builds the `start` command registered in the guild.
pub fn register_start() -> CreateCommand {
    CreateCommand::new(START_COMMAND)
        .description("Starts a new gambling session, defaults to 100k")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                AMOUNT_OPTION,
                "Set a custom roll amount",
            )
            .required(false)
            .min_int_value(1),
        )
}

/// Converts a `start` invocation into a game event.
pub fn start_event(command: &CommandInteraction) -> GameEvent {
    let requester = match command.member.as_deref() {
        Some(member) => identity::player_from_member(member),
        None => identity::player_from_user(&command.user),
    };

    GameEvent::StartRequested {
        requester,
        channel_id: command.channel_id.get(),
        wager: amount_option(
            command
                .data
                .options
                .iter()
                .map(|option| (option.name.as_str(), &option.value)),
        ),
    }
}

/// Reads the `amount` option from a command's options.
pub fn amount_option<'a>(
    mut options: impl Iterator<Item = (&'a str, &'a CommandDataOptionValue)>,
) -> Option<i64> {
    options
        .find(|(name, _)| *name == AMOUNT_OPTION)
        .and_then(|(_, value)| value.as_i64())
}
