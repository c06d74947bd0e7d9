use thiserror::Error;

/// Errors returned by formatters and typed parsers.
///
/// Boolean validators never produce this; they answer `false` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CodiciError {
    /// The input did not pass the validator guarding the operation.
    #[error("invalid {kind} '{value}': {reason}")]
    InvalidArgument {
        /// Identifier family, e.g. "IBAN" or "Partita IVA".
        kind: &'static str,
        /// The rejected input, as received.
        value: String,
        /// Which check failed.
        reason: String,
    },
}

impl CodiciError {
    /// Build a [`CodiciError::InvalidArgument`] and emit a debug event for it.
    pub fn invalid_argument(
        kind: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let value = value.into();
        let reason = reason.into();
        tracing::debug!(kind, value = %value, reason = %reason, "rejected identifier");
        Self::InvalidArgument {
            kind,
            value,
            reason,
        }
    }

    /// Identifier family the error refers to.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument { kind, .. } => kind,
        }
    }
}
