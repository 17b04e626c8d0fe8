//! ABI parsing error types.

/// Errors raised while decoding a contract ABI document or parsing the
/// Cairo type expressions inside it.
#[derive(Debug)]
pub enum AbiError {
    /// The document is not valid JSON.
    Json(serde_json::Error),

    /// The document parsed but does not have the shape of a contract ABI.
    Document {
        /// What was wrong with the top-level shape
        reason: String,
    },

    /// An ABI entry has no string `"type"` discriminator.
    MissingEntryKind {
        /// Position of the entry in the ABI array
        index: usize,
    },

    /// A type expression is outside the supported Cairo ABI subset.
    InvalidTypeExpression {
        /// The offending expression text
        expression: String,
    },
}

impl std::fmt::Display for AbiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbiError::Json(err) => {
                write!(f, "invalid ABI JSON: {}", err)
            }
            AbiError::Document { reason } => {
                write!(f, "invalid ABI document: {}", reason)
            }
            AbiError::MissingEntryKind { index } => {
                write!(f, "ABI entry {} has no \"type\" field", index)
            }
            AbiError::InvalidTypeExpression { expression } => {
                write!(f, "invalid Cairo type expression: {:?}", expression)
            }
        }
    }
}

impl std::error::Error for AbiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AbiError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AbiError {
    fn from(err: serde_json::Error) -> Self {
        AbiError::Json(err)
    }
}
