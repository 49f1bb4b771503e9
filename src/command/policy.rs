//! Access checks run between resolving a command and invoking it.
//!
//! A failed check is a `Rejection` value, not an error: the dispatcher replies
//! with its message and stops.

use std::time::{Duration, Instant};

use dashmap::{mapref::entry::Entry, DashMap};

use crate::{
    command::descriptor::{CommandCategory, CommandDescriptor, PermissionLevel},
    model::message::InboundMessage,
    state::BotState,
};

/// Entries are pruned once the table grows past this size.
const COOLDOWN_PRUNE_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NotPatron,
    NotOwner,
    MissingPermission(PermissionLevel),
    MissingArguments { usage: String },
    CoolingDown { remaining: Duration },
}

impl Rejection {
    /// Reply sent to the user.
    pub fn message(&self) -> String {
        match self {
            Rejection::NotPatron => {
                "This command is only available to patrons and guilds they support.".to_string()
            }
            Rejection::NotOwner => "This command is reserved for the bot owners.".to_string(),
            Rejection::MissingPermission(level) => format!(
                "You need the `{}` permission to use this command.",
                level.label()
            ),
            Rejection::MissingArguments { usage } => {
                format!("Missing arguments, usage: {}", usage)
            }
            Rejection::CoolingDown { remaining } => format!(
                "This command is on cooldown, try again in {} seconds.",
                remaining.as_secs().max(1)
            ),
        }
    }
}

/// Per-user, per-command cooldown deadlines.
#[derive(Debug, Default)]
pub struct Cooldowns {
    expires: DashMap<(u64, String), Instant>,
}

impl Cooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a cooldown unless one is still running.
    ///
    /// # Returns
    /// - `Ok(())` - No cooldown was running; a new one now is
    /// - `Err(Duration)` - Time left on the running cooldown
    pub fn try_start(
        &self,
        user_id: u64,
        command: &str,
        cooldown: Duration,
    ) -> Result<(), Duration> {
        let now = Instant::now();

        if self.expires.len() > COOLDOWN_PRUNE_THRESHOLD {
            self.expires.retain(|_, deadline| *deadline > now);
        }

        match self.expires.entry((user_id, command.to_string())) {
            Entry::Occupied(mut entry) => {
                let deadline = *entry.get();
                if deadline > now {
                    return Err(deadline - now);
                }
                entry.insert(now + cooldown);
            }
            Entry::Vacant(entry) => {
                entry.insert(now + cooldown);
            }
        }

        Ok(())
    }
}

/// Runs every check in order: category, permission, arguments, cooldown.
///
/// The cooldown is only started when every other check passed.
pub fn check(
    descriptor: &CommandDescriptor,
    arg_count: usize,
    prefix: &str,
    message: &InboundMessage,
    state: &BotState,
    cooldowns: &Cooldowns,
) -> Result<(), Rejection> {
    let is_owner = state.is_owner(message.author_id);

    match descriptor.category() {
        CommandCategory::Owner if !is_owner => return Err(Rejection::NotOwner),
        CommandCategory::Patron
            if !is_owner
                && !state
                    .patrons
                    .is_user_or_guild_patron(message.author_id, message.guild_id) =>
        {
            return Err(Rejection::NotPatron)
        }
        _ => {}
    }

    let level = descriptor.permission();
    if !level.is_satisfied_by(message.author_permissions) {
        return Err(Rejection::MissingPermission(level));
    }

    if arg_count < descriptor.min_args() {
        return Err(Rejection::MissingArguments {
            usage: descriptor.usage_line(prefix),
        });
    }

    if let Some(cooldown) = descriptor.cooldown() {
        cooldowns
            .try_start(message.author_id, descriptor.name(), cooldown)
            .map_err(|remaining| Rejection::CoolingDown { remaining })?;
    }

    Ok(())
}
