use std::sync::Arc;

use serenity::all::{Context, EventHandler, Guild, Member, Message, Ready};
use serenity::async_trait;

use crate::command::Dispatcher;

pub mod guild;
pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub dispatcher: Arc<Dispatcher>,
}

impl Handler {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.dispatcher.state(), ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(self.dispatcher.state(), ctx, guild, is_new).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(self.dispatcher.state(), ctx, new_member).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.dispatcher, ctx, message).await;
    }
}
