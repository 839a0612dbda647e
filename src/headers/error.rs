//! Error types that can occur during header validation.

/// An error that can occur when validating headers in strict mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Header name is empty.
    EmptyName,
    /// Header name contains byte outside of `token`.
    InvalidName {
        /// Offending header name.
        name: String,
    },
    /// Header value contains control character, e.g: CR or LF.
    InvalidValue {
        /// Name of the header holding the offending value.
        name: String,
    },
}

impl HeaderError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::EmptyName => "header name cannot be empty",
            Self::InvalidName { .. } => "header name contains invalid byte",
            Self::InvalidValue { .. } => "header value contains invalid byte",
        }
    }
}

impl std::error::Error for HeaderError {}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => f.write_str(self.message()),
            Self::InvalidName { name } | Self::InvalidValue { name } => {
                write!(f, "{}: {name:?}", self.message())
            }
        }
    }
}

/// Validate header name and value.
///
/// # Errors
///
/// Returns error if name is not a valid `token`, or value contains control character.
pub fn validate(name: &str, value: &str) -> Result<(), HeaderError> {
    use super::matches::{is_field_value, is_token};

    if name.is_empty() {
        return Err(HeaderError::EmptyName);
    }
    if !name.bytes().all(is_token) {
        return Err(HeaderError::InvalidName { name: name.into() });
    }
    if !value.bytes().all(is_field_value) {
        return Err(HeaderError::InvalidValue { name: name.into() });
    }
    Ok(())
}
