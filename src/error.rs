//! Errors reported by a copy.
//!
//! Every variant is recoverable and travels through the normal `Result`
//! channel. A copy that hits any of them is abandoned as a whole: no partially
//! built value is ever handed back.
//!
//! Shapes that cannot be copied at all (raw pointers) have no `DeepCopy`
//! implementation and are rejected by the compiler, so they have no variant
//! here.

use thiserror::Error;

/// Failure of a deep copy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    /// The value handed to the copy was absent where a concrete value was
    /// required (e.g. `Registry::copy_dynamic(None)`).
    #[error("invalid value")]
    InvalidValue,

    /// A field is tagged with a name that has no registered transformer.
    #[error("missing copy customiser for: {tag}")]
    MissingTransformer {
        /// The tag that could not be resolved.
        tag: String,
    },

    /// The registered transformer works on a different type than the field.
    #[error("copy customiser for `{tag}` transforms `{registered}`, but the field is `{expected}`")]
    TransformerTypeMismatch {
        /// The tag that was resolved.
        tag: String,
        /// Type of the tagged field.
        expected: &'static str,
        /// Type the registered transformer accepts and returns.
        registered: &'static str,
    },

    /// The object graph nests deeper than the registry allows.
    #[error("copy exceeded the maximum depth of {limit}")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl CopyError {
    /// Convenience constructor for [`CopyError::MissingTransformer`].
    pub fn missing(tag: impl Into<String>) -> Self {
        Self::MissingTransformer { tag: tag.into() }
    }

    /// `true` for errors caused by the registry contents rather than the data.
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            Self::MissingTransformer { .. } | Self::TransformerTypeMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_transformer_message_names_tag() {
        let err = CopyError::missing("A");
        assert_eq!(err.to_string(), "missing copy customiser for: A");
        assert!(err.is_registry_error());
    }

    #[test]
    fn test_depth_exceeded_is_not_a_registry_error() {
        let err = CopyError::DepthExceeded { limit: 8 };
        assert_eq!(err.to_string(), "copy exceeded the maximum depth of 8");
        assert!(!err.is_registry_error());
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = CopyError::TransformerTypeMismatch {
            tag: "name".into(),
            expected: "alloc::string::String",
            registered: "u32",
        };
        assert_eq!(
            err.to_string(),
            "copy customiser for `name` transforms `u32`, but the field is `alloc::string::String`"
        );
    }
}
