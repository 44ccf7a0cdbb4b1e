use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` directive string (e.g. `"info"`, `"canary_core=debug,warn"`).
///
/// The string is checked with `EnvFilter::try_new` on construction, so turning it into a filter later cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Validate and wrap a directive string.
    ///
    /// # Examples
    /// ```
    /// use canary_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("canary_core=trace,info").unwrap();
    /// assert_eq!(lvl.as_str(), "canary_core=trace,info");
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    /// The directive string as provided.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the `EnvFilter` for this directive.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_valid_directives() {
        for lvl in ["info", "warn", "trace", "canary_core=debug,info"] {
            assert!(
                lvl.parse::<LoggerLevel>().is_ok(),
                "expected valid LoggerLevel for {lvl}"
            );
        }
    }

    #[test]
    fn rejects_invalid_directives() {
        for lvl in ["canary_core=loud", "a=trace,b=wat"] {
            assert!(
                lvl.parse::<LoggerLevel>().is_err(),
                "expected error for {lvl}"
            );
        }
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _filter = lvl.to_env_filter();
    }

    #[test]
    fn serde_is_a_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.to_string(), "debug");
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""debug""#);

        assert!(serde_json::from_str::<LoggerLevel>(r#""x=nope""#).is_err());
    }
}
