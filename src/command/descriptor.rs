use std::{fmt, sync::Arc, time::Duration};

use serenity::all::Permissions;

use crate::command::context::CommandHandler;

/// Grouping used for help output and category gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    General,
    Fun,
    Moderation,
    Settings,
    /// Only available to patrons or guilds a patron supports.
    Patron,
    /// Only available to configured bot owners.
    Owner,
}

impl CommandCategory {
    pub fn label(self) -> &'static str {
        match self {
            CommandCategory::General => "General",
            CommandCategory::Fun => "Fun",
            CommandCategory::Moderation => "Moderation",
            CommandCategory::Settings => "Settings",
            CommandCategory::Patron => "Patron",
            CommandCategory::Owner => "Owner",
        }
    }
}

/// Guild permission a member needs to run a command.
///
/// Members with Administrator satisfy every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PermissionLevel {
    Everyone,
    /// Manage Messages.
    Moderator,
    /// Manage Server.
    Admin,
}

impl PermissionLevel {
    pub fn required_permissions(self) -> Permissions {
        match self {
            PermissionLevel::Everyone => Permissions::empty(),
            PermissionLevel::Moderator => Permissions::MANAGE_MESSAGES,
            PermissionLevel::Admin => Permissions::MANAGE_GUILD,
        }
    }

    pub fn is_satisfied_by(self, permissions: Permissions) -> bool {
        permissions.contains(Permissions::ADMINISTRATOR)
            || permissions.contains(self.required_permissions())
    }

    /// Name of the permission as shown in the Discord client.
    pub fn label(self) -> &'static str {
        match self {
            PermissionLevel::Everyone => "none",
            PermissionLevel::Moderator => "Manage Messages",
            PermissionLevel::Admin => "Manage Server",
        }
    }
}

/// A registered command: its names, policy and handler.
///
/// Names and aliases are stored lowercase. Descriptors are immutable once
/// handed to the registry.
#[derive(Clone)]
pub struct CommandDescriptor {
    name: String,
    aliases: Vec<String>,
    category: CommandCategory,
    permission: PermissionLevel,
    min_args: usize,
    cooldown: Option<Duration>,
    usage: String,
    help: String,
    handler: Arc<dyn CommandHandler>,
}

impl CommandDescriptor {
    pub fn new<H>(name: &str, category: CommandCategory, help: &str, handler: H) -> Self
    where
        H: CommandHandler + 'static,
    {
        Self {
            name: name.to_lowercase(),
            aliases: Vec::new(),
            category,
            permission: PermissionLevel::Everyone,
            min_args: 0,
            cooldown: None,
            usage: String::new(),
            help: help.to_string(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_lowercase());
        self
    }

    pub fn with_permission(mut self, permission: PermissionLevel) -> Self {
        self.permission = permission;
        self
    }

    pub fn with_min_args(mut self, min_args: usize) -> Self {
        self.min_args = min_args;
        self
    }

    /// Per-user delay between two successful invocations.
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    /// Argument synopsis shown after the command name, e.g. `<prefix>`.
    pub fn with_usage(mut self, usage: &str) -> Self {
        self.usage = usage.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn category(&self) -> CommandCategory {
        self.category
    }

    pub fn permission(&self) -> PermissionLevel {
        self.permission
    }

    pub fn min_args(&self) -> usize {
        self.min_args
    }

    pub fn cooldown(&self) -> Option<Duration> {
        self.cooldown
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn handler(&self) -> Arc<dyn CommandHandler> {
        self.handler.clone()
    }

    /// Full invocation line for help and error messages.
    pub fn usage_line(&self, prefix: &str) -> String {
        if self.usage.is_empty() {
            format!("`{}{}`", prefix, self.name)
        } else {
            format!("`{}{} {}`", prefix, self.name, self.usage)
        }
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("category", &self.category)
            .field("permission", &self.permission)
            .field("min_args", &self.min_args)
            .field("cooldown", &self.cooldown)
            .finish_non_exhaustive()
    }
}
