/// Convenience result type used across cloudanim.
pub type CloudResult<T> = Result<T, CloudError>;

/// Top-level error taxonomy.
///
/// The first three variants are the terminal dataset decode failures. A failed
/// decode never replaces an already loaded dataset.
#[derive(thiserror::Error, Debug)]
pub enum CloudError {
    /// The buffer has no `end_header` marker within the header scan window.
    #[error("malformed header: no end_header marker found")]
    MalformedHeader,

    /// The header has no `element vertex <N>` line.
    #[error("missing vertex count: header has no `element vertex <N>` line")]
    MissingVertexCount,

    /// The header declares a format other than `binary_little_endian`.
    #[error("unsupported format: {0} (only binary_little_endian is supported)")]
    UnsupportedFormat(String),

    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CloudError {
    /// Build a [`CloudError::UnsupportedFormat`] value.
    pub fn unsupported_format(declared: impl Into<String>) -> Self {
        Self::UnsupportedFormat(declared.into())
    }

    /// Build a [`CloudError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CloudError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for the three fatal decode failures.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedHeader | Self::MissingVertexCount | Self::UnsupportedFormat(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
