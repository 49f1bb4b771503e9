//! Commands reserved for the bot owners.

use serenity::async_trait;

use crate::{
    command::{
        context::{CommandContext, CommandHandler},
        descriptor::{CommandCategory, CommandDescriptor},
    },
    error::command::CommandError,
    model::patron::PatronParam,
    service::patron::PatronService,
    util::parse::parse_snowflake,
};

pub fn commands() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor::new(
            "addpatron",
            CommandCategory::Owner,
            "Adds a patron. Without a guild the user is a patron everywhere.",
            AddPatronCommand,
        )
        .with_min_args(1)
        .with_usage("<user> [guild id]"),
        CommandDescriptor::new(
            "removepatron",
            CommandCategory::Owner,
            "Removes a patron.",
            RemovePatronCommand,
        )
        .with_min_args(1)
        .with_usage("<user>"),
    ]
}

pub struct AddPatronCommand;

#[async_trait]
impl CommandHandler for AddPatronCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let Some(user_id) = ctx.args.first().and_then(|arg| parse_snowflake(arg)) else {
            ctx.reply("That is not a valid user, mention a user or give their ID.");
            return Ok(());
        };

        let guild_id = match ctx.args.get(1) {
            Some(arg) => match parse_snowflake(arg) {
                Some(id) => Some(id),
                None => {
                    ctx.reply("That is not a valid guild ID.");
                    return Ok(());
                }
            },
            None => None,
        };

        PatronService::new(&ctx.state.db, &ctx.state.patrons)
            .add(PatronParam { user_id, guild_id })
            .await?;

        match guild_id {
            Some(guild_id) => ctx.reply(format!(
                "<@{}> is now a patron for guild {}.",
                user_id, guild_id
            )),
            None => ctx.reply(format!("<@{}> is now a patron.", user_id)),
        }

        Ok(())
    }
}

pub struct RemovePatronCommand;

#[async_trait]
impl CommandHandler for RemovePatronCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let Some(user_id) = ctx.args.first().and_then(|arg| parse_snowflake(arg)) else {
            ctx.reply("That is not a valid user, mention a user or give their ID.");
            return Ok(());
        };

        let removed = PatronService::new(&ctx.state.db, &ctx.state.patrons)
            .remove(user_id)
            .await?;

        if removed {
            ctx.reply(format!("<@{}> is no longer a patron.", user_id));
        } else {
            ctx.reply(format!("<@{}> was not a patron.", user_id));
        }

        Ok(())
    }
}
