use thiserror::Error;
use tollgate_core::error::CoreError;

/// Service layer errors
///
/// `InvalidAction`, `InvalidResource` and the wrapped core parse errors are
/// caller input problems. `Denied` is an ordinary policy outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("cannot authorize invalid action: {0}")]
    InvalidAction(String),

    #[error("invalid action resource: {0:?}, must be an absolute path")]
    InvalidResource(String),

    #[error("user {principal} does not have {privilege} privilege for resource {resource:?}")]
    Denied {
        principal: String,
        privilege: String,
        resource: String,
    },

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ServiceError {
    /// Returns `true` for malformed requests that indicate a bug in the caller.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::CoreError(CoreError::UnknownVerb(_) | CoreError::UnknownPrivilege(_))
                | Self::InvalidAction(_)
                | Self::InvalidResource(_)
        )
    }

    /// Returns `true` if this is a policy denial rather than a fault.
    #[must_use]
    pub const fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
