//! Guild configuration commands. All of them need Manage Server.
//!
//! Every change goes through `SettingsCache::modify`, so the value a command
//! replies with is the value that was stored.

use serenity::async_trait;

use crate::{
    command::{
        context::{CommandContext, CommandHandler, Embed},
        descriptor::{CommandCategory, CommandDescriptor, PermissionLevel},
    },
    error::command::CommandError,
    model::guild_settings::GuildSettings,
    util::parse::parse_snowflake,
};

const MAX_PREFIX_LEN: usize = 10;

pub fn commands() -> Vec<CommandDescriptor> {
    let admin = |descriptor: CommandDescriptor| descriptor.with_permission(PermissionLevel::Admin);

    vec![
        admin(
            CommandDescriptor::new(
                "toggleswearfilter",
                CommandCategory::Settings,
                "Turns the swearword filter on or off. `enableswearfilter` and `disableswearfilter` set it directly.",
                ToggleSwearFilterCommand,
            )
            .with_alias("enableswearfilter")
            .with_alias("disableswearfilter"),
        ),
        admin(CommandDescriptor::new(
            "togglespamfilter",
            CommandCategory::Settings,
            "Toggles whether incoming spam is handled. Needs a mute role.",
            ToggleSpamFilterCommand,
        )),
        admin(CommandDescriptor::new(
            "togglefilterinvites",
            CommandCategory::Settings,
            "Toggles whether messages containing invites to other servers are deleted.",
            ToggleFilterInvitesCommand,
        )),
        admin(CommandDescriptor::new(
            "togglejoinmessage",
            CommandCategory::Settings,
            "Turns the join message on or off.",
            ToggleJoinMessageCommand,
        )),
        admin(
            CommandDescriptor::new(
                "setprefix",
                CommandCategory::Settings,
                "Sets the command prefix for this server.",
                SetPrefixCommand,
            )
            .with_min_args(1)
            .with_usage("<prefix>"),
        ),
        admin(
            CommandDescriptor::new(
                "setmuterole",
                CommandCategory::Settings,
                "Sets the role given to spammers, or `none` to remove it.",
                SetMuteRoleCommand,
            )
            .with_alias("setspamrole")
            .with_min_args(1)
            .with_usage("<role|none>"),
        ),
        admin(
            CommandDescriptor::new(
                "setjoinmessage",
                CommandCategory::Settings,
                "Sets the join message. Placeholders: `{{USER_MENTION}}`, `{{USER_NAME}}`, `{{GUILD_NAME}}`.",
                SetJoinMessageCommand,
            )
            .with_min_args(1)
            .with_usage("<message>"),
        ),
        admin(
            CommandDescriptor::new(
                "settings",
                CommandCategory::Settings,
                "Shows the current settings of this server.",
                ShowSettingsCommand,
            )
            .with_alias("options"),
        ),
    ]
}

fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

pub struct ToggleSwearFilterCommand;

#[async_trait]
impl CommandHandler for ToggleSwearFilterCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let target = match ctx.invoke.as_str() {
            "enableswearfilter" => Some(true),
            "disableswearfilter" => Some(false),
            _ => None,
        };

        let updated = ctx
            .state
            .settings
            .modify(ctx.guild_id(), &ctx.message.guild_name, |s| {
                let enabled = target.unwrap_or(!s.enable_swear_filter);
                Some(s.clone().with_swear_filter(enabled))
            })
            .await?;

        if let Some(settings) = updated {
            ctx.reply(format!(
                "The swearword filter has been {}.",
                enabled_label(settings.enable_swear_filter)
            ));
        }

        Ok(())
    }
}

pub struct ToggleSpamFilterCommand;

#[async_trait]
impl CommandHandler for ToggleSpamFilterCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let updated = ctx
            .state
            .settings
            .modify(ctx.guild_id(), &ctx.message.guild_name, |s| {
                if !s.can_enable_spam_filter() {
                    return None;
                }
                let enabled = !s.enable_spam_filter;
                Some(s.clone().with_spam_filter(enabled))
            })
            .await?;

        let Some(settings) = updated else {
            ctx.reply("**__Please set a spam/mute role first!__**");
            return Ok(());
        };

        let state = if settings.enable_spam_filter {
            "activated"
        } else {
            "disabled"
        };
        let mut reply = format!("Spamfilter **{}**!", state);
        if let Some(role_id) = settings.mute_role_id {
            reply.push_str(&format!(
                "\nThe spam role is <@&{}>. Change it if it's outdated.",
                role_id
            ));
        }

        ctx.reply(reply);

        Ok(())
    }
}

pub struct ToggleFilterInvitesCommand;

#[async_trait]
impl CommandHandler for ToggleFilterInvitesCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let updated = ctx
            .state
            .settings
            .modify(ctx.guild_id(), &ctx.message.guild_name, |s| {
                let enabled = !s.filter_invites;
                Some(s.clone().with_filter_invites(enabled))
            })
            .await?;

        if let Some(settings) = updated {
            ctx.reply(format!(
                "Filtering discord invites has been **{}**",
                enabled_label(settings.filter_invites)
            ));
        }

        Ok(())
    }
}

pub struct ToggleJoinMessageCommand;

#[async_trait]
impl CommandHandler for ToggleJoinMessageCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let updated = ctx
            .state
            .settings
            .modify(ctx.guild_id(), &ctx.message.guild_name, |s| {
                let enabled = !s.enable_join_message;
                Some(s.clone().with_join_message_enabled(enabled))
            })
            .await?;

        if let Some(settings) = updated {
            ctx.reply(format!(
                "The join message has been **{}**",
                enabled_label(settings.enable_join_message)
            ));
        }

        Ok(())
    }
}

pub struct SetPrefixCommand;

#[async_trait]
impl CommandHandler for SetPrefixCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let Some(prefix) = ctx.args.first() else {
            return Ok(());
        };

        if prefix.chars().count() > MAX_PREFIX_LEN {
            ctx.reply(format!(
                "The prefix can be at most {} characters long.",
                MAX_PREFIX_LEN
            ));
            return Ok(());
        }

        ctx.state
            .settings
            .modify(ctx.guild_id(), &ctx.message.guild_name, |s| {
                Some(s.clone().with_prefix(prefix.as_str()))
            })
            .await?;

        ctx.reply(format!("The new prefix is now `{}`", prefix));

        Ok(())
    }
}

pub struct SetMuteRoleCommand;

#[async_trait]
impl CommandHandler for SetMuteRoleCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let Some(arg) = ctx.args.first() else {
            return Ok(());
        };

        let role_id = if arg.eq_ignore_ascii_case("none") || arg.eq_ignore_ascii_case("off") {
            None
        } else {
            match parse_snowflake(arg) {
                Some(id) => Some(id),
                None => {
                    ctx.reply("That is not a valid role, mention a role or give its ID.");
                    return Ok(());
                }
            }
        };

        let mut was_filtering = false;
        ctx.state
            .settings
            .modify(ctx.guild_id(), &ctx.message.guild_name, |s| {
                was_filtering = s.enable_spam_filter;
                Some(s.clone().with_mute_role(role_id))
            })
            .await?;

        match role_id {
            Some(id) => ctx.reply(format!("The spam role has been set to <@&{}>.", id)),
            None if was_filtering => {
                ctx.reply("The spam role has been removed and the spam filter disabled.")
            }
            None => ctx.reply("The spam role has been removed."),
        }

        Ok(())
    }
}

pub struct SetJoinMessageCommand;

#[async_trait]
impl CommandHandler for SetJoinMessageCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let template = ctx.raw_args.clone();

        ctx.state
            .settings
            .modify(ctx.guild_id(), &ctx.message.guild_name, |s| {
                Some(s.clone().with_join_message(template.as_str()))
            })
            .await?;

        ctx.reply(format!("The new join message has been set to `{}`", template));

        Ok(())
    }
}

pub struct ShowSettingsCommand;

#[async_trait]
impl CommandHandler for ShowSettingsCommand {
    async fn run(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let settings: &GuildSettings = &ctx.settings;
        let mute_role = match settings.mute_role_id {
            Some(id) => format!("<@&{}>", id),
            None => "not set".to_string(),
        };

        ctx.reply_embed(
            Embed::new()
                .title(format!("Settings for {}", ctx.message.guild_name))
                .field(
                    "Prefix",
                    format!(
                        "`{}`",
                        settings.effective_prefix(ctx.state.settings.default_prefix())
                    ),
                    true,
                )
                .field(
                    "Swearword filter",
                    enabled_label(settings.enable_swear_filter),
                    true,
                )
                .field(
                    "Spam filter",
                    enabled_label(settings.enable_spam_filter),
                    true,
                )
                .field("Spam role", mute_role, true)
                .field("Invite filter", enabled_label(settings.filter_invites), true)
                .field(
                    "Join message",
                    enabled_label(settings.enable_join_message),
                    true,
                )
                .field("Join message text", settings.custom_join_message.as_str(), false),
        );

        Ok(())
    }
}
