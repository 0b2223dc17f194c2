//! Mapping from sync cadence to a workflow cron schedule.

use std::fmt;

use serde::Serialize;

use crate::domain::SyncInterval;

/// Five-field cron expression as understood by the `schedule` trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CronExpression(&'static str);

impl CronExpression {
    pub const HOURLY: CronExpression = CronExpression("0 * * * *");
    pub const DAILY: CronExpression = CronExpression("0 0 * * *");
    pub const WEEKLY: CronExpression = CronExpression("0 0 * * 0");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Total over [`SyncInterval`]; hourly is the fallback cadence.
pub fn to_cron(interval: SyncInterval) -> CronExpression {
    match interval {
        SyncInterval::Daily => CronExpression::DAILY,
        SyncInterval::Weekly => CronExpression::WEEKLY,
        SyncInterval::Hourly => CronExpression::HOURLY,
    }
}
