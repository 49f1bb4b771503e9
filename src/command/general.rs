//! Commands available to everyone.

use std::time::Duration;

use serenity::async_trait;

use crate::{
    command::{
        context::{CommandContext, CommandHandler, Embed},
        descriptor::{CommandCategory, CommandDescriptor},
    },
    error::command::CommandError,
};

const TRIGGER_GIF: &str =
    "https://cdn.discordapp.com/attachments/94831883505905664/176181155467493377/triggered.gif";
const RANDOM_DOG_BASE: &str = "https://random.dog/";

/// Categories in the order the help listing shows them.
const HELP_CATEGORIES: &[CommandCategory] = &[
    CommandCategory::General,
    CommandCategory::Fun,
    CommandCategory::Moderation,
    CommandCategory::Settings,
    CommandCategory::Patron,
];

pub fn commands() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor::new(
            "help",
            CommandCategory::General,
            "Shows a list of all the commands, or details about one command.",
            HelpCommand,
        )
        .with_alias("commands")
        .with_usage("[command]"),
        CommandDescriptor::new(
            "trigger",
            CommandCategory::Fun,
            "Use when you are triggered.",
            TriggerCommand,
        ),
        CommandDescriptor::new("dog", CommandCategory::Fun, "Here is a dog.", DogCommand)
            .with_cooldown(Duration::from_secs(5)),
    ]
}

pub struct HelpCommand;

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        if let Some(name) = ctx.args.first() {
            let Some(descriptor) = ctx.registry.resolve(name) else {
                ctx.reply(format!(
                    "That command could not be found, try {}help for a list of commands.",
                    ctx.prefix
                ));
                return Ok(());
            };

            let mut description = format!(
                "{}\nUsage: {}",
                descriptor.help(),
                descriptor.usage_line(&ctx.prefix)
            );
            if !descriptor.aliases().is_empty() {
                description.push_str(&format!(
                    "\nAliases: `{}`",
                    descriptor.aliases().join("`, `")
                ));
            }

            ctx.reply_embed(
                Embed::new()
                    .title(format!("Command help for {}", descriptor.name()))
                    .description(description),
            );
            return Ok(());
        }

        let mut embed = Embed::new().title("Command list").description(format!(
            "Use `{}help [command]` to get more info about a command.",
            ctx.prefix
        ));

        for category in HELP_CATEGORIES {
            let names: Vec<&str> = ctx
                .registry
                .commands()
                .iter()
                .filter(|d| d.category() == *category)
                .map(|d| d.name())
                .collect();

            if !names.is_empty() {
                embed = embed.field(
                    category.label(),
                    format!("`{}`", names.join("`, `")),
                    false,
                );
            }
        }

        ctx.reply_embed(embed);

        Ok(())
    }
}

pub struct TriggerCommand;

#[async_trait]
impl CommandHandler for TriggerCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        ctx.reply_embed(Embed::new().image(TRIGGER_GIF));

        Ok(())
    }
}

pub struct DogCommand;

#[async_trait]
impl CommandHandler for DogCommand {
    /// random.dog answers `/woof` with a bare file name.
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let file = ctx
            .state
            .http_client
            .get(format!("{}woof", RANDOM_DOG_BASE))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let url = format!("{}{}", RANDOM_DOG_BASE, file.trim());

        if url.contains(".mp4") {
            ctx.reply_embed(
                Embed::new()
                    .title("A video")
                    .description(format!("[OMG LOOK AT THIS CUTE VIDEO]({})", url)),
            );
        } else {
            ctx.reply_embed(Embed::new().image(url));
        }

        Ok(())
    }
}
