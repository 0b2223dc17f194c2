use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// How often the generated workflow runs the sync job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncInterval {
    #[default]
    Hourly,
    Daily,
    Weekly,
}

impl SyncInterval {
    pub const ALL: [SyncInterval; 3] =
        [SyncInterval::Hourly, SyncInterval::Daily, SyncInterval::Weekly];

    pub fn label(self) -> &'static str {
        match self {
            SyncInterval::Hourly => "hourly",
            SyncInterval::Daily => "daily",
            SyncInterval::Weekly => "weekly",
        }
    }
}

impl fmt::Display for SyncInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SyncInterval {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(SyncInterval::Hourly),
            "daily" => Ok(SyncInterval::Daily),
            "weekly" => Ok(SyncInterval::Weekly),
            _ => Err(AppError::InvalidIntervalValue(s.to_string())),
        }
    }
}
