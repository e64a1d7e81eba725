#![allow(dead_code)]

pub mod mock_bot;

use serde_json::{json, Value};

pub fn message_json(update_id: i64, chat_id: i64, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "date": 1706529600,
            "chat": {"id": chat_id, "type": "private", "first_name": "Test"},
            "from": {"id": chat_id, "is_bot": false, "first_name": "Test", "username": "tester"},
            "text": text
        }
    })
}

pub fn callback_json(update_id: i64, chat_id: i64, data: &str) -> Value {
    json!({
        "update_id": update_id,
        "callback_query": {
            "id": format!("cb-{update_id}"),
            "from": {"id": chat_id, "is_bot": false, "first_name": "Test"},
            "chat_instance": "1",
            "data": data,
            "message": {
                "message_id": 1,
                "date": 1706529600,
                "chat": {"id": chat_id, "type": "private", "first_name": "Test"},
                "text": "Welcome!"
            }
        }
    })
}

/// A message the bot does not react to (service message without text).
pub fn unsupported_json(update_id: i64) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": 9,
            "date": 1706529600,
            "chat": {"id": -300, "type": "group", "title": "Renamed"},
            "from": {"id": 1, "is_bot": false, "first_name": "Test"},
            "new_chat_title": "Renamed"
        }
    })
}
