/// Convenience result type used across Spryte.
pub type SpryteResult<T> = Result<T, SpryteError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The compositing core itself is total: culling and rasterization never
/// fail, degenerate inputs produce empty draws. Errors belong to the
/// construction seams around it (buffer validation, scene data, decoding).
#[derive(thiserror::Error, Debug)]
pub enum SpryteError {
    /// Invalid user-provided buffer or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpryteError {
    /// Build a [`SpryteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpryteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            SpryteError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            SpryteError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = SpryteError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
