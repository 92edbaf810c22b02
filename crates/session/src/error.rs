use crate::session::SessionId;
use carmatch_engine::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Error, Debug)]
pub enum SessionError {
    /// The id was never created here, or the session has been evicted.
    /// Surfaced to the client; never retried internally.
    #[error("Unknown session id: {0}")]
    UnknownSession(SessionId),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
