use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LogTreeError;

/// Severity bitmask used both to configure a manager's sensitivity and to
/// tag an individual submission.
///
/// A configured mask accepts a requested level only when every bit of the
/// request is present in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogLevel(u8);

impl LogLevel {
    pub const ERROR: LogLevel = LogLevel(0x1);
    pub const REPLICATION: LogLevel = LogLevel(0x2);
    pub const DEBUG: LogLevel = LogLevel(0x4);
    pub const ALL: LogLevel = LogLevel(0x1 | 0x2 | 0x4);

    /// Whether every bit of `requested` is present in this mask.
    pub fn accepts(self, requested: LogLevel) -> bool {
        self.0 & requested.0 == requested.0
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Rebuild a mask from raw bits. Bits outside the named flags are
    /// rejected.
    pub fn from_bits(bits: u8) -> Option<LogLevel> {
        ((bits & !Self::ALL.0) == 0).then_some(LogLevel(bits))
    }
}

impl Default for LogLevel {
    /// The default severity of a raw submission.
    fn default() -> Self {
        LogLevel::ERROR
    }
}

impl BitOr for LogLevel {
    type Output = LogLevel;

    fn bitor(self, rhs: LogLevel) -> LogLevel {
        LogLevel(self.0 | rhs.0)
    }
}

impl FromStr for LogLevel {
    type Err = LogTreeError;

    /// Parses a single flag name (`"error"`, `"replication"`, `"debug"`,
    /// `"all"`) or a `|`-joined combination such as `"error|debug"`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut mask = LogLevel(0);
        for name in input.split('|') {
            let flag = match name.trim() {
                "error" => LogLevel::ERROR,
                "replication" => LogLevel::REPLICATION,
                "debug" => LogLevel::DEBUG,
                "all" => LogLevel::ALL,
                other => return Err(LogTreeError::UnknownLevel(other.to_string())),
            };
            mask = mask | flag;
        }
        Ok(mask)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == LogLevel::ALL {
            return f.write_str("all");
        }
        let mut names = Vec::new();
        if self.0 & LogLevel::ERROR.0 != 0 {
            names.push("error");
        }
        if self.0 & LogLevel::REPLICATION.0 != 0 {
            names.push("replication");
        }
        if self.0 & LogLevel::DEBUG.0 != 0 {
            names.push("debug");
        }
        f.write_str(&names.join("|"))
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
