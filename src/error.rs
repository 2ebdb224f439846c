// Inactivity Detect - Error Types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DetectorError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetectorError {
    /// `start` was called while a session is already attached.
    #[error("already running, multiple detection sessions are not supported")]
    AlreadyRunning,

    /// An option value is out of range.
    #[error("invalid option `{option}`: {reason}")]
    Configuration {
        option: &'static str,
        reason: &'static str,
    },
}

impl DetectorError {
    pub(crate) fn configuration(option: &'static str, reason: &'static str) -> Self {
        Self::Configuration { option, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_option() {
        let err = DetectorError::configuration("numberOfAngles", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid option `numberOfAngles`: must be at least 1"
        );
        assert!(DetectorError::AlreadyRunning
            .to_string()
            .starts_with("already running"));
    }
}
