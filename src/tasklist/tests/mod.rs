//! Unit tests for the task list module.

mod date_tests;

use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;

/// Clock pinned to noon on a fixed local calendar day.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub(crate) fn on(date: NaiveDate) -> Self {
        let now = date
            .and_hms_opt(12, 0, 0)
            .and_then(|noon| noon.and_local_timezone(Local).earliest())
            .expect("noon exists in the local time zone");
        Self { now }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

pub(crate) fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}
