//! Crate-level error types.

use std::fmt;

/// Errors produced outside the cache's hot path (options loading).
#[derive(Debug)]
pub enum StateCacheError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for StateCacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for StateCacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for StateCacheError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A texture unit past the hardware limit was requested.
///
/// The cached active unit is left unchanged and nothing is forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureUnitError {
    /// Requested unit index.
    pub unit: u32,
    /// Units supported by the capability provider.
    pub max_units: u32,
}

impl fmt::Display for TextureUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "texture unit {} not supported (hardware exposes {} units)",
            self.unit, self.max_units
        )
    }
}

impl std::error::Error for TextureUnitError {}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err: StateCacheError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());
        assert!(StateCacheError::OptionsParse("bad".to_owned())
            .source()
            .is_none());
    }

    #[test]
    fn texture_unit_error_message() {
        let err = TextureUnitError {
            unit: 9,
            max_units: 8,
        };
        assert_eq!(
            err.to_string(),
            "texture unit 9 not supported (hardware exposes 8 units)"
        );
    }
}
