use thiserror::Error;

/// The engine itself is total arithmetic over records: missing optional
/// fields resolve to documented defaults, empty requirement lists are
/// guarded, unknown enum strings fall through rule tables. Errors only
/// arise at the marshaling edges (decoding records, runner I/O).
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
