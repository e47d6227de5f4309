use thiserror::Error;
use tokio_postgres::error::SqlState;

#[derive(Debug, Error)]
pub enum LightbnbDbError {
    #[error(transparent)]
    Postgres(tokio_postgres::Error),

    #[error(transparent)]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Constraint violation ({constraint}): {message}")]
    ConstraintViolation { constraint: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parameter conversion error: {0}")]
    ParameterError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),
}

impl LightbnbDbError {
    /// True when the pool or the server connection failed, as opposed to the statement itself.
    #[must_use]
    pub fn is_connection_failure(&self) -> bool {
        match self {
            Self::Pool(_) | Self::ConnectionError(_) => true,
            Self::Postgres(err) => err.is_closed(),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Integrity errors (SQLSTATE class 23) are lifted into `ConstraintViolation`;
/// everything else stays a driver error.
impl From<tokio_postgres::Error> for LightbnbDbError {
    fn from(err: tokio_postgres::Error) -> Self {
        let Some(db_err) = err.as_db_error() else {
            return Self::Postgres(err);
        };

        let code = db_err.code();
        if is_integrity_violation(code) {
            let constraint = db_err
                .constraint()
                .or_else(|| db_err.column())
                .unwrap_or(code.code())
                .to_string();
            return Self::ConstraintViolation {
                constraint,
                message: db_err.message().to_string(),
            };
        }

        Self::Postgres(err)
    }
}

fn is_integrity_violation(code: &SqlState) -> bool {
    *code == SqlState::UNIQUE_VIOLATION
        || *code == SqlState::NOT_NULL_VIOLATION
        || *code == SqlState::FOREIGN_KEY_VIOLATION
        || *code == SqlState::CHECK_VIOLATION
        || code.code().starts_with("23")
}

pub type Result<T> = std::result::Result<T, LightbnbDbError>;
