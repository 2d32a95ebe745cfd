//! Errors returned by scrolled frames.
use std::fmt;

use crate::config::Config;
use crate::host::WidgetId;

/// Error parsing or validating construction options.
///
/// Returned before any widget is created.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The padding is neither an integer nor a list of 2 or 4 integers.
    InvalidPadding {
        /// Value that was given.
        config: Config,
    },

    /// The scrollbar placement string is not made of up to two
    /// non-opposing edge codes.
    InvalidScrollbars {
        /// Placement string that was given.
        placement: String,
    },

    /// An option in a configuration blob has the wrong type.
    InvalidOption {
        /// Name of the option.
        key: String,
        /// Human readable description of the expected type.
        expected: &'static str,
        /// Value that was given.
        config: Config,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPadding { config } => write!(
                f,
                "padding must be either an integer (all sides) or a list of \
                 2 (vertical, horizontal) or 4 (top, right, bottom, left) \
                 non-negative integers, got {config}"
            ),
            ConfigError::InvalidScrollbars { placement } => write!(
                f,
                "scrollbars must be a combination of up to 2 non-opposing \
                 edges from (N=T | S=B) and (E=R | W=L), got {placement:?}"
            ),
            ConfigError::InvalidOption {
                key,
                expected,
                config,
            } => {
                write!(f, "option `{key}` must be {expected}, got {config}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error caused by a widget that does not exist (anymore) on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchWidget(pub WidgetId);

impl fmt::Display for NoSuchWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no such widget: {}", self.0)
    }
}

impl std::error::Error for NoSuchWidget {}

/// Any error a scrolled frame can return.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The construction options were invalid.
    Config(ConfigError),
    /// The host could not find a widget.
    Host(NoSuchWidget),
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<NoSuchWidget> for Error {
    fn from(err: NoSuchWidget) -> Self {
        Error::Host(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(err) => write!(f, "invalid options: {err}"),
            Error::Host(err) => write!(f, "host error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            Error::Host(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = ConfigError::InvalidScrollbars { placement: "NS".into() };
        assert!(err.to_string().contains("\"NS\""));

        let err = Error::from(NoSuchWidget(WidgetId(7)));
        assert_eq!(err.to_string(), "host error: no such widget: #7");
    }
}
