use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown method {0:?}")]
    UnknownVerb(String),

    #[error("unknown privilege {0:?}")]
    UnknownPrivilege(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
