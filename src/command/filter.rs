//! Message filters applied before command matching.

use serenity::all::Permissions;

use crate::model::{guild_settings::GuildSettings, message::InboundMessage};

const INVITE_PATTERNS: &[&str] = &[
    "discord.gg/",
    "discord.io/",
    "discord.me/",
    "discord.com/invite/",
    "discordapp.com/invite/",
];

const SWEAR_WORDS: &[&str] = &[
    "arse", "arsehole", "ass", "asshole", "bastard", "bitch", "bollocks", "bullshit", "cock",
    "crap", "cunt", "damn", "dick", "dickhead", "fuck", "fucker", "fucking", "motherfucker",
    "piss", "prick", "shit", "shitty", "slut", "twat", "wanker", "whore",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Invite,
    Swear,
}

impl FilterKind {
    /// Warning posted after the offending message is deleted.
    pub fn warning(self, author_id: u64) -> String {
        match self {
            FilterKind::Invite => format!(
                "<@{}>, please don't advertise other Discord servers here.",
                author_id
            ),
            FilterKind::Swear => format!("<@{}>, please watch your language.", author_id),
        }
    }
}

/// Returns the first enabled filter the message trips.
///
/// Members who can manage messages are never filtered.
pub fn check(settings: &GuildSettings, message: &InboundMessage) -> Option<FilterKind> {
    let permissions = message.author_permissions;
    if permissions.contains(Permissions::MANAGE_MESSAGES)
        || permissions.contains(Permissions::ADMINISTRATOR)
    {
        return None;
    }

    if settings.filter_invites && contains_invite(&message.content) {
        return Some(FilterKind::Invite);
    }

    if settings.enable_swear_filter && contains_swear(&message.content) {
        return Some(FilterKind::Swear);
    }

    None
}

fn contains_invite(content: &str) -> bool {
    let content = content.to_lowercase();
    INVITE_PATTERNS
        .iter()
        .any(|pattern| content.contains(pattern))
}

fn contains_swear(content: &str) -> bool {
    content
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| SWEAR_WORDS.contains(&word.to_lowercase().as_str()))
}
