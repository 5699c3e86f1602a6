//! Trading calendars: the [`TradingCalendar`] capability and the rule based
//! [`ExchangeCalendar`] every built-in exchange code resolves to.

use crate::rules::{HolidayRule, Schedule};
use chrono::{NaiveDate, NaiveTime};
use std::fmt::Debug;

/// Schedule queries every registered calendar answers.
///
/// Implementations must be shareable across threads since the registry hands
/// out the same instance to every caller.
pub trait TradingCalendar: Debug + Send + Sync {
    /// Exchange name, e.g. `NYSE`
    fn name(&self) -> &str;

    /// IANA time zone the trading hours are expressed in.
    fn timezone(&self) -> &str;

    fn open_time(&self) -> NaiveTime;

    fn close_time(&self) -> NaiveTime;

    /// Close time on early close sessions.
    fn early_close_time(&self) -> NaiveTime;

    fn schedule(&self) -> &Schedule;

    /// Returns true if the date falls on a weekend
    fn is_weekend(&self, date: NaiveDate) -> bool {
        self.schedule().is_weekend(date)
    }

    /// Returns true if the exchange is closed for a holiday
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.schedule().is_holiday(date)
    }

    /// Returns true if the exchange trades on `date`
    fn is_session(&self, date: NaiveDate) -> bool {
        self.schedule().is_session(date)
    }

    /// Returns true if `date` is a session closing at [`early_close_time`](Self::early_close_time)
    fn is_early_close(&self, date: NaiveDate) -> bool {
        self.schedule().is_early_close(date)
    }

    fn next_session(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.schedule().next_session(date)
    }

    fn previous_session(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.schedule().previous_session(date)
    }

    fn sessions_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        self.schedule().sessions_in_range(start, end)
    }

    /// Close time on `date`, or `None` when the exchange does not trade.
    fn close_on(&self, date: NaiveDate) -> Option<NaiveTime> {
        if !self.is_session(date) {
            None
        } else if self.is_early_close(date) {
            Some(self.early_close_time())
        } else {
            Some(self.close_time())
        }
    }

    fn first_year(&self) -> i32 {
        self.schedule().first_year()
    }

    fn last_year(&self) -> i32 {
        self.schedule().last_year()
    }
}

/// Regular and early trading hours of an exchange, in its local time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradingHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
    pub early_close: NaiveTime,
}

impl TradingHours {
    /// Hours from `(hour, minute)` pairs. Panics on an impossible time, so
    /// only use it for literals.
    pub fn new(open: (u32, u32), close: (u32, u32), early_close: (u32, u32)) -> Self {
        let hm = |(h, m): (u32, u32)| {
            NaiveTime::from_hms_opt(h, m, 0).expect("literal time out of range")
        };
        TradingHours {
            open: hm(open),
            close: hm(close),
            early_close: hm(early_close),
        }
    }
}

/// Calendar for a single exchange, computed from holiday rules
#[derive(Debug, Clone)]
pub struct ExchangeCalendar {
    name: String,
    timezone: String,
    hours: TradingHours,
    closures: Vec<HolidayRule>,
    early_closes: Vec<HolidayRule>,
    schedule: Schedule,
}

impl ExchangeCalendar {
    /// Build a calendar and compute its schedule for `start..=end`.
    pub fn new(
        name: impl Into<String>,
        timezone: impl Into<String>,
        hours: TradingHours,
        closures: Vec<HolidayRule>,
        early_closes: Vec<HolidayRule>,
        start: i32,
        end: i32,
    ) -> ExchangeCalendar {
        let schedule = Schedule::compute(&closures, &early_closes, start, end);
        ExchangeCalendar {
            name: name.into(),
            timezone: timezone.into(),
            hours,
            closures,
            early_closes,
            schedule,
        }
    }

    /// add an ad-hoc closure rule and recompute the schedule
    pub fn add_holiday_rule(&mut self, rule: HolidayRule) -> &mut Self {
        self.closures.push(rule);
        let (start, end) = (self.schedule.first_year(), self.schedule.last_year());
        self.recompute(start, end)
    }

    /// Recompute the schedule for `start..=end` years
    pub fn recompute(&mut self, start: i32, end: i32) -> &mut Self {
        self.schedule = Schedule::compute(&self.closures, &self.early_closes, start, end);
        self
    }

    pub fn closures(&self) -> &[HolidayRule] {
        &self.closures
    }

    pub fn hours(&self) -> TradingHours {
        self.hours
    }
}

impl TradingCalendar for ExchangeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn timezone(&self) -> &str {
        &self.timezone
    }

    fn open_time(&self) -> NaiveTime {
        self.hours.open
    }

    fn close_time(&self) -> NaiveTime {
        self.hours.close
    }

    fn early_close_time(&self) -> NaiveTime {
        self.hours.early_close
    }

    fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}
