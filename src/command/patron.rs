//! Commands gated behind patron status.

use std::time::Duration;

use serenity::async_trait;

use crate::{
    command::{
        context::{CommandContext, CommandHandler, OutboundFile},
        descriptor::{CommandCategory, CommandDescriptor, PermissionLevel},
    },
    error::command::CommandError,
};

pub fn commands() -> Vec<CommandDescriptor> {
    vec![CommandDescriptor::new(
        "exportsettings",
        CommandCategory::Patron,
        "Sends the settings of this server as a JSON file.",
        ExportSettingsCommand,
    )
    .with_permission(PermissionLevel::Admin)
    .with_cooldown(Duration::from_secs(30))]
}

pub struct ExportSettingsCommand;

#[async_trait]
impl CommandHandler for ExportSettingsCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let bytes = serde_json::to_vec_pretty(ctx.settings.as_ref())?;

        ctx.reply_file(
            OutboundFile {
                name: format!("settings-{}.json", ctx.guild_id()),
                bytes,
            },
            Some("Here are the settings of this server.".to_string()),
        );

        Ok(())
    }
}
