//! Unit test module
//!
//! Handler unit tests live here, separate from source files.

mod access_code_handler_test;
mod mock_bot;

use gatebot_core::{Chat, Update, UpdateKind, User};

pub(crate) fn sample_update(chat_id: i64, kind: UpdateKind) -> Update {
    Update::new(
        1,
        User {
            id: 100,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        kind,
    )
}

pub(crate) fn text_update(chat_id: i64, text: &str) -> Update {
    sample_update(chat_id, UpdateKind::from_text(text))
}

pub(crate) fn callback_update(chat_id: i64, data: &str) -> Update {
    sample_update(
        chat_id,
        UpdateKind::Callback {
            query_id: "cbq-1".to_string(),
            data: data.to_string(),
        },
    )
}
