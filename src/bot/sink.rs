use std::sync::Arc;

use serenity::all::{
    ChannelId, CreateAttachment, CreateEmbed, CreateEmbedFooter, CreateMessage, Http, MessageId,
};

use crate::command::context::{Embed, MessageSink, OutboundFile};

/// Sends outbound chat operations through the Discord REST API.
///
/// Every operation runs on its own task; failures are logged and dropped.
#[derive(Clone)]
pub struct DiscordSink {
    http: Arc<Http>,
}

impl DiscordSink {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    fn send(&self, channel_id: u64, message: CreateMessage) {
        let http = self.http.clone();

        tokio::spawn(async move {
            if let Err(e) = ChannelId::new(channel_id)
                .send_message(&http, message)
                .await
            {
                tracing::warn!("Failed to send message to channel {}: {}", channel_id, e);
            }
        });
    }
}

fn to_create_embed(embed: Embed) -> CreateEmbed {
    let mut create = CreateEmbed::new().colour(0x1e90ff);

    if let Some(title) = embed.title {
        create = create.title(title);
    }
    if let Some(description) = embed.description {
        create = create.description(description);
    }
    if let Some(url) = embed.image_url {
        create = create.image(url);
    }
    for field in embed.fields {
        create = create.field(field.name, field.value, field.inline);
    }
    if let Some(footer) = embed.footer {
        create = create.footer(CreateEmbedFooter::new(footer));
    }

    create
}

impl MessageSink for DiscordSink {
    fn send_text(&self, channel_id: u64, content: String) {
        self.send(channel_id, CreateMessage::new().content(content));
    }

    fn send_embed(&self, channel_id: u64, embed: Embed) {
        self.send(channel_id, CreateMessage::new().embed(to_create_embed(embed)));
    }

    fn send_file(&self, channel_id: u64, file: OutboundFile, content: Option<String>) {
        let mut message =
            CreateMessage::new().add_file(CreateAttachment::bytes(file.bytes, file.name));
        if let Some(content) = content {
            message = message.content(content);
        }
        self.send(channel_id, message);
    }

    fn delete_message(&self, channel_id: u64, message_id: u64) {
        let http = self.http.clone();

        tokio::spawn(async move {
            if let Err(e) = http
                .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
                .await
            {
                tracing::warn!(
                    "Failed to delete message {} in channel {}: {}",
                    message_id,
                    channel_id,
                    e
                );
            }
        });
    }
}
