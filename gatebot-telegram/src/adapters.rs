//! Adapters from Telegram (teloxide) types to gatebot_core types.
//! Depends only on teloxide and gatebot_core type definitions.

use gatebot_core::{Chat, ToCoreUpdate, ToCoreUser, Update, UpdateKind, User};
use teloxide::types::{CallbackQuery, Message, UpdateKind as TgUpdateKind};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Update for conversion to core [`Update`].
/// Text messages and callback queries convert; every other kind yields None.
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Update);

impl<'a> ToCoreUpdate for TelegramUpdateWrapper<'a> {
    fn to_core(&self) -> Option<Update> {
        let id = i64::from(self.0.id.0);
        match &self.0.kind {
            TgUpdateKind::Message(msg) => message_to_core(id, msg),
            TgUpdateKind::CallbackQuery(query) => callback_to_core(id, query),
            _ => None,
        }
    }
}

fn message_to_core(id: i64, msg: &Message) -> Option<Update> {
    let text = msg.text()?;
    let user = msg
        .from
        .as_ref()
        .map(|u| TelegramUserWrapper(u).to_core())
        .unwrap_or_else(User::unknown);
    Some(Update::new(
        id,
        user,
        chat_to_core(&msg.chat),
        UpdateKind::from_text(text),
    ))
}

/// A callback whose message is no longer accessible is attributed to the sender's private chat.
fn callback_to_core(id: i64, query: &CallbackQuery) -> Option<Update> {
    let data = query.data.clone()?;
    let user = TelegramUserWrapper(&query.from).to_core();
    let chat = query
        .message
        .as_ref()
        .map(|m| chat_to_core(m.chat()))
        .unwrap_or_else(|| Chat {
            id: user.id,
            chat_type: "private".to_string(),
        });
    Some(Update::new(
        id,
        user,
        chat,
        UpdateKind::Callback {
            query_id: query.id.0.clone(),
            data,
        },
    ))
}

fn chat_to_core(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}
