use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatebotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Dispatch error: {0}")]
    Dispatch(String),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Handler expected a {expected} update, got {got}")]
    UnexpectedKind {
        expected: &'static str,
        got: &'static str,
    },

    #[error("State error: {0}")]
    State(String),
}

pub type Result<T> = std::result::Result<T, GatebotError>;
