//! Unit tests for EnterCodeHandler and AccessCodeHandler.

use std::sync::Arc;

use gatebot_core::{GatebotError, Handler, HandlerError, HandlerResponse};
use session_store::{InMemorySessionStore, SessionStore};

use super::mock_bot::{MockBot, Sent};
use super::{callback_update, text_update};
use crate::{texts, AccessCodeHandler, EnterCodeHandler};

fn setup() -> (Arc<MockBot>, Arc<InMemorySessionStore>) {
    (Arc::new(MockBot::new()), Arc::new(InMemorySessionStore::new()))
}

#[tokio::test]
async fn test_enter_code_sets_flag_and_prompts() {
    let (bot, sessions) = setup();
    let h = EnterCodeHandler::new(bot.clone(), sessions.clone());

    let response = h.handle(&callback_update(7, "enter_code")).await.unwrap();

    assert_eq!(
        response,
        HandlerResponse::Reply(texts::ENTER_CODE_PROMPT.to_string())
    );
    assert!(sessions.is_awaiting_code(7).await);
    assert_eq!(
        bot.sent(),
        vec![Sent::Message {
            chat_id: 7,
            text: texts::ENTER_CODE_PROMPT.to_string()
        }]
    );
}

#[tokio::test]
async fn test_code_accepted_in_any_case() {
    for candidate in ["BULLISH", "bullish", "Bullish", "bUlLiSh"] {
        let (bot, sessions) = setup();
        sessions.mark_awaiting_code(7).await;
        let h = AccessCodeHandler::new(bot.clone(), sessions.clone());

        let response = h.handle(&text_update(7, candidate)).await.unwrap();

        assert_eq!(
            response,
            HandlerResponse::Reply(texts::ACCESS_GRANTED.to_string()),
            "candidate {candidate}"
        );
        assert!(!sessions.is_awaiting_code(7).await);
    }
}

#[tokio::test]
async fn test_wrong_code_rejected_and_flag_cleared() {
    for candidate in ["bearish", " bullish", "bullish!", ""] {
        let (bot, sessions) = setup();
        sessions.mark_awaiting_code(7).await;
        let h = AccessCodeHandler::new(bot.clone(), sessions.clone());

        let response = h.handle(&text_update(7, candidate)).await.unwrap();

        assert_eq!(
            response,
            HandlerResponse::Reply(texts::ACCESS_DENIED.to_string()),
            "candidate {candidate:?}"
        );
        assert!(!sessions.is_awaiting_code(7).await);
        assert_eq!(
            bot.sent(),
            vec![Sent::Message {
                chat_id: 7,
                text: texts::ACCESS_DENIED.to_string()
            }]
        );
    }
}

#[tokio::test]
async fn test_text_without_flag_is_ignored() {
    let (bot, sessions) = setup();
    let h = AccessCodeHandler::new(bot.clone(), sessions);

    let response = h.handle(&text_update(7, "bullish")).await.unwrap();

    assert_eq!(response, HandlerResponse::Ignore);
    assert!(bot.sent().is_empty());
}

#[tokio::test]
async fn test_flag_restored_when_verdict_not_sent() {
    let bot = Arc::new(MockBot::failing());
    let sessions = Arc::new(InMemorySessionStore::new());
    sessions.mark_awaiting_code(7).await;
    let h = AccessCodeHandler::new(bot, sessions.clone());

    assert!(h.handle(&text_update(7, "bullish")).await.is_err());
    assert!(sessions.is_awaiting_code(7).await);
}

#[tokio::test]
async fn test_non_text_update_is_an_error() {
    let (bot, sessions) = setup();
    let h = AccessCodeHandler::new(bot, sessions);

    let err = h.handle(&callback_update(7, "enter_code")).await.unwrap_err();

    assert!(matches!(
        err,
        GatebotError::Handler(HandlerError::UnexpectedKind {
            expected: "text",
            got: "callback"
        })
    ));
}

#[tokio::test]
async fn test_custom_code() {
    let (bot, sessions) = setup();
    let h = AccessCodeHandler::with_code(bot, sessions, "Open-Sesame");

    assert!(h.is_valid("open-sesame"));
    assert!(h.is_valid("OPEN-SESAME"));
    assert!(!h.is_valid("bullish"));
}
