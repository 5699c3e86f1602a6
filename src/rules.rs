//! Holiday rules and the trading schedule computed from them.
//!
//! Rules are plain serde data so they can be supplied as JSON through the
//! `ADDITIONAL_RULES` environment variable (see [`crate::config`]).

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Specifies the nth (or last) occurrence of a weekday in a month
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NthWeek {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// Marks the session before or after a holiday as an early close
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfCheck {
    Before,
    After,
}

/// How a fixed-date holiday is observed when it lands on a weekend
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Observance {
    /// Closed only if the date itself is a weekday.
    #[default]
    Actual,
    /// Saturday moves to Friday, Sunday moves to Monday.
    NearestWeekday,
    /// Like `NearestWeekday`, but a shifted date that lands on the last day
    /// of a month or year is dropped (NYSE does not close on Dec 31 for a
    /// Saturday New Year).
    NearestWeekdayInPeriod,
    /// Rolls forward past weekends and days already closed by earlier rules.
    NextFreeWeekday,
}

/// A single rule closing the exchange on zero or more days per year.
///
/// `first` and `last` bound the years a rule applies, inclusively.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum HolidayRule {
    /// A weekday that is never a session, e.g. `Sat`
    Weekend(Weekday),
    /// A holiday on the same month and day every year.
    Fixed {
        month: u32,
        day: u32,
        #[serde(default)]
        observance: Observance,
        first: Option<i32>,
        last: Option<i32>,
        half_check: Option<HalfCheck>,
    },
    /// The nth (or last) weekday of a month, e.g. the first Monday in September.
    NthWeekday {
        month: u32,
        weekday: Weekday,
        nth: NthWeek,
        first: Option<i32>,
        last: Option<i32>,
        half_check: Option<HalfCheck>,
    },
    /// The last `weekday` strictly before `month`/`day`, e.g. the Monday before May 25.
    WeekdayBefore {
        month: u32,
        day: u32,
        weekday: Weekday,
        first: Option<i32>,
        last: Option<i32>,
    },
    /// Days relative to (Western) Easter Sunday, -2 being Good Friday.
    EasterOffset {
        offset: i32,
        first: Option<i32>,
        last: Option<i32>,
    },
    /// A one-off closure.
    Once(NaiveDate),
}

impl HolidayRule {
    pub fn fixed(month: u32, day: u32, observance: Observance) -> Self {
        HolidayRule::Fixed {
            month,
            day,
            observance,
            first: None,
            last: None,
            half_check: None,
        }
    }

    pub fn nth_weekday(month: u32, weekday: Weekday, nth: NthWeek) -> Self {
        HolidayRule::NthWeekday {
            month,
            weekday,
            nth,
            first: None,
            last: None,
            half_check: None,
        }
    }

    pub fn weekday_before(month: u32, day: u32, weekday: Weekday) -> Self {
        HolidayRule::WeekdayBefore {
            month,
            day,
            weekday,
            first: None,
            last: None,
        }
    }

    pub fn easter(offset: i32) -> Self {
        HolidayRule::EasterOffset {
            offset,
            first: None,
            last: None,
        }
    }

    /// Restrict the rule to years starting at `year`.
    pub fn since(mut self, year: i32) -> Self {
        if let Some((first, _)) = self.bounds_mut() {
            *first = Some(year);
        }
        self
    }

    /// Restrict the rule to years up to and including `year`.
    pub fn until(mut self, year: i32) -> Self {
        if let Some((_, last)) = self.bounds_mut() {
            *last = Some(year);
        }
        self
    }

    /// Mark the session adjacent to this holiday as an early close.
    /// Only `Fixed` and `NthWeekday` rules carry a half check.
    pub fn half_day(mut self, check: HalfCheck) -> Self {
        match &mut self {
            HolidayRule::Fixed { half_check, .. } | HolidayRule::NthWeekday { half_check, .. } => {
                *half_check = Some(check)
            }
            _ => {}
        }
        self
    }

    fn bounds_mut(&mut self) -> Option<(&mut Option<i32>, &mut Option<i32>)> {
        match self {
            HolidayRule::Fixed { first, last, .. }
            | HolidayRule::NthWeekday { first, last, .. }
            | HolidayRule::WeekdayBefore { first, last, .. }
            | HolidayRule::EasterOffset { first, last, .. } => Some((first, last)),
            HolidayRule::Weekend(_) | HolidayRule::Once(_) => None,
        }
    }

    fn bounds(&self) -> (Option<i32>, Option<i32>) {
        match self {
            HolidayRule::Fixed { first, last, .. }
            | HolidayRule::NthWeekday { first, last, .. }
            | HolidayRule::WeekdayBefore { first, last, .. }
            | HolidayRule::EasterOffset { first, last, .. } => (*first, *last),
            HolidayRule::Weekend(_) | HolidayRule::Once(_) => (None, None),
        }
    }

    /// Check that the month and day of the rule name a real calendar day
    /// (Feb 29 included).
    pub fn validate(&self) -> Result<(), String> {
        let (month, day) = match self {
            HolidayRule::Fixed { month, day, .. } | HolidayRule::WeekdayBefore { month, day, .. } => {
                (*month, *day)
            }
            HolidayRule::NthWeekday { month, .. } => (*month, 1),
            HolidayRule::Weekend(_) | HolidayRule::EasterOffset { .. } | HolidayRule::Once(_) => {
                return Ok(())
            }
        };
        // 2000 is a leap year
        match NaiveDate::from_ymd_opt(2000, month, day) {
            Some(_) => Ok(()),
            None => Err(format!("no such day: month {month}, day {day}")),
        }
    }

    fn half_check(&self) -> Option<HalfCheck> {
        match self {
            HolidayRule::Fixed { half_check, .. } | HolidayRule::NthWeekday { half_check, .. } => {
                *half_check
            }
            _ => None,
        }
    }
}

/// Build a date from constant parts. Panics on an impossible date, so only
/// use it for literals.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal date out of range")
}

/// Closed days, early closes and weekend days for a range of years.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    closed: BTreeSet<NaiveDate>,
    early: BTreeSet<NaiveDate>,
    weekend: Vec<Weekday>,
    first_year: i32,
    last_year: i32,
}

/// Where a rule lands in a given year, and whether it was moved off its nominal date.
struct Observed {
    date: NaiveDate,
    shifted: bool,
}

impl Schedule {
    /// Evaluate `closures` and then `early_closes` over the years `start..=end`.
    ///
    /// Rules are applied in order, which matters for
    /// [`Observance::NextFreeWeekday`]. Early closes never overlap closed
    /// days or weekends.
    pub fn compute(
        closures: &[HolidayRule],
        early_closes: &[HolidayRule],
        start: i32,
        end: i32,
    ) -> Schedule {
        let weekend = closures
            .iter()
            .filter_map(|rule| match rule {
                HolidayRule::Weekend(day) => Some(*day),
                _ => None,
            })
            .collect();
        let mut schedule = Schedule {
            closed: BTreeSet::new(),
            early: BTreeSet::new(),
            weekend,
            first_year: start,
            last_year: end,
        };

        let mut half_days = BTreeSet::new();
        for rule in closures {
            for observed in schedule.observe_all(rule) {
                if !observed.shifted {
                    if let Some(day) = adjacent_half_day(observed.date, rule.half_check()) {
                        half_days.insert(day);
                    }
                }
                schedule.closed.insert(observed.date);
            }
        }
        for rule in early_closes {
            for observed in schedule.observe_all(rule) {
                half_days.insert(observed.date);
            }
        }
        half_days.retain(|day| !schedule.closed.contains(day) && !schedule.is_weekend(*day));
        schedule.early = half_days;
        schedule
    }

    fn observe_all(&self, rule: &HolidayRule) -> Vec<Observed> {
        if let HolidayRule::Once(date) = rule {
            let in_range = (self.first_year..=self.last_year).contains(&date.year());
            return if in_range {
                vec![Observed {
                    date: *date,
                    shifted: false,
                }]
            } else {
                Vec::new()
            };
        }
        let (first, last) = rule.bounds();
        let first = first.map_or(self.first_year, |year| year.max(self.first_year));
        let last = last.map_or(self.last_year, |year| year.min(self.last_year));
        // NextFreeWeekday has to see dates closed earlier in the same rule
        let mut view = self.clone();
        let mut observed = Vec::new();
        for year in first..=last {
            if let Some(hit) = view.observe(rule, year) {
                view.closed.insert(hit.date);
                observed.push(hit);
            }
        }
        observed
    }

    fn observe(&self, rule: &HolidayRule, year: i32) -> Option<Observed> {
        let unshifted = |date| Observed {
            date,
            shifted: false,
        };
        match rule {
            HolidayRule::Weekend(_) | HolidayRule::Once(_) => None,
            HolidayRule::Fixed {
                month,
                day,
                observance,
                ..
            } => {
                let date = NaiveDate::from_ymd_opt(year, *month, *day)?;
                self.apply_observance(date, *observance)
            }
            HolidayRule::NthWeekday {
                month, weekday, nth, ..
            } => nth_weekday_of_month(year, *month, *weekday, *nth).map(unshifted),
            HolidayRule::WeekdayBefore {
                month,
                day,
                weekday,
                ..
            } => {
                let mut date = NaiveDate::from_ymd_opt(year, *month, *day)?.pred_opt()?;
                while date.weekday() != *weekday {
                    date = date.pred_opt()?;
                }
                Some(unshifted(date))
            }
            HolidayRule::EasterOffset { offset, .. } => {
                let easter = computus::gregorian(year).ok()?;
                let easter = NaiveDate::from_ymd_opt(easter.year, easter.month, easter.day)?;
                easter
                    .checked_add_signed(Duration::days(*offset as i64))
                    .map(unshifted)
            }
        }
    }

    fn apply_observance(&self, date: NaiveDate, observance: Observance) -> Option<Observed> {
        match observance {
            Observance::Actual => (!self.is_weekend(date)).then_some(Observed {
                date,
                shifted: false,
            }),
            Observance::NearestWeekday | Observance::NearestWeekdayInPeriod => {
                let moved = match date.weekday() {
                    Weekday::Sat => date.pred_opt()?,
                    Weekday::Sun => date.succ_opt()?,
                    _ => date,
                };
                let shifted = moved != date;
                if shifted
                    && observance == Observance::NearestWeekdayInPeriod
                    && is_period_end(moved)
                {
                    return None;
                }
                Some(Observed {
                    date: moved,
                    shifted,
                })
            }
            Observance::NextFreeWeekday => {
                let mut moved = date;
                while self.is_weekend(moved) || self.closed.contains(&moved) {
                    moved = moved.succ_opt()?;
                }
                Some(Observed {
                    date: moved,
                    shifted: moved != date,
                })
            }
        }
    }

    /// Returns true if the date falls on one of the weekend days
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    /// Returns true if the exchange is closed for a holiday on `date`
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.closed.contains(&date)
    }

    /// Returns true if `date` is a session with an early close
    pub fn is_early_close(&self, date: NaiveDate) -> bool {
        self.early.contains(&date)
    }

    /// Returns true if the exchange trades on `date`
    pub fn is_session(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// The first session strictly after `date`, or `None` past the computed range.
    pub fn next_session(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut date = date.succ_opt()?;
        while date.year() <= self.last_year {
            if self.is_session(date) {
                return Some(date);
            }
            date = date.succ_opt()?;
        }
        None
    }

    /// The last session strictly before `date`, or `None` before the computed range.
    pub fn previous_session(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut date = date.pred_opt()?;
        while date.year() >= self.first_year {
            if self.is_session(date) {
                return Some(date);
            }
            date = date.pred_opt()?;
        }
        None
    }

    /// All sessions between `start` and `end`, inclusively.
    pub fn sessions_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .filter(|date| self.is_session(*date))
            .collect()
    }

    pub fn holidays(&self) -> impl Iterator<Item = &NaiveDate> {
        self.closed.iter()
    }

    pub fn early_closes(&self) -> impl Iterator<Item = &NaiveDate> {
        self.early.iter()
    }

    pub fn weekend_days(&self) -> &[Weekday] {
        &self.weekend
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn last_year(&self) -> i32 {
        self.last_year
    }
}

fn adjacent_half_day(holiday: NaiveDate, check: Option<HalfCheck>) -> Option<NaiveDate> {
    match (check?, holiday.weekday()) {
        (HalfCheck::Before, Weekday::Mon) | (HalfCheck::After, Weekday::Fri) => None,
        (HalfCheck::Before, _) => holiday.pred_opt(),
        (HalfCheck::After, _) => holiday.succ_opt(),
    }
}

fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, nth: NthWeek) -> Option<NaiveDate> {
    let n = match nth {
        NthWeek::First => 1,
        NthWeek::Second => 2,
        NthWeek::Third => 3,
        NthWeek::Fourth => 4,
        NthWeek::Last => {
            let mut date = last_day_of_month(year, month)?;
            while date.weekday() != weekday {
                date = date.pred_opt()?;
            }
            return Some(date);
        }
    };
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.checked_add(1)?, 1)
    };
    next_month?.pred_opt()
}

fn is_period_end(date: NaiveDate) -> bool {
    last_day_of_month(date.year(), date.month()) == Some(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_dates_schedule() {
        let rules = vec![
            HolidayRule::Once(ymd(2019, 11, 20)),
            HolidayRule::Once(ymd(2019, 11, 24)),
            HolidayRule::Once(ymd(2019, 11, 25)),
            HolidayRule::Weekend(Weekday::Sat),
            HolidayRule::Weekend(Weekday::Sun),
        ];
        let s = Schedule::compute(&rules, &[], 2019, 2019);

        assert!(!s.is_session(ymd(2019, 11, 20)));
        assert!(s.is_session(ymd(2019, 11, 21)));
        assert!(s.is_session(ymd(2019, 11, 22)));
        // weekend
        assert!(!s.is_session(ymd(2019, 11, 23)));
        assert!(s.is_weekend(ymd(2019, 11, 23)));
        assert!(!s.is_holiday(ymd(2019, 11, 23)));
        // weekend and holiday
        assert!(s.is_weekend(ymd(2019, 11, 24)));
        assert!(s.is_holiday(ymd(2019, 11, 24)));
        assert!(!s.is_session(ymd(2019, 11, 25)));
        assert!(s.is_session(ymd(2019, 11, 26)));
    }

    #[test]
    fn test_once_outside_range_is_ignored() {
        let rules = vec![HolidayRule::Once(ymd(2001, 9, 11))];
        let s = Schedule::compute(&rules, &[], 2010, 2020);
        assert_eq!(s.holidays().count(), 0);
    }

    #[test]
    fn test_nearest_weekday_in_period_skips_year_end() {
        let rules = vec![
            HolidayRule::Weekend(Weekday::Sat),
            HolidayRule::Weekend(Weekday::Sun),
            HolidayRule::fixed(1, 1, Observance::NearestWeekdayInPeriod),
        ];
        let s = Schedule::compute(&rules, &[], 2021, 2023);
        // 2022-01-01 is a Saturday
        assert!(!s.is_holiday(ymd(2021, 12, 31)));
        // 2023-01-01 is a Sunday
        assert!(s.is_holiday(ymd(2023, 1, 2)));
        assert!(s.is_holiday(ymd(2021, 1, 1)));
    }

    #[test]
    fn test_actual_observance_drops_weekend_dates() {
        let rules = vec![
            HolidayRule::Weekend(Weekday::Sat),
            HolidayRule::Weekend(Weekday::Sun),
            HolidayRule::fixed(4, 21, Observance::Actual),
        ];
        let s = Schedule::compute(&rules, &[], 2021, 2022);
        assert!(s.is_holiday(ymd(2021, 4, 21)));
        // 2022-04-21 is a Thursday, 2024 would be a Sunday
        assert!(s.is_holiday(ymd(2022, 4, 21)));
        let s = Schedule::compute(&rules, &[], 2024, 2024);
        assert_eq!(s.holidays().count(), 0);
    }

    #[test]
    fn test_next_free_weekday_rolls_past_earlier_closures() {
        let rules = vec![
            HolidayRule::Weekend(Weekday::Sat),
            HolidayRule::Weekend(Weekday::Sun),
            HolidayRule::fixed(12, 25, Observance::NextFreeWeekday),
            HolidayRule::fixed(12, 26, Observance::NextFreeWeekday),
        ];
        // 2021-12-25 is a Saturday, 2021-12-26 a Sunday
        let s = Schedule::compute(&rules, &[], 2021, 2021);
        assert!(s.is_holiday(ymd(2021, 12, 27)));
        assert!(s.is_holiday(ymd(2021, 12, 28)));
        assert!(s.is_session(ymd(2021, 12, 29)));
    }

    #[test]
    fn test_easter_offset() {
        let rules = vec![HolidayRule::easter(-2)];
        let s = Schedule::compute(&rules, &[], 2021, 2022);
        assert!(!s.is_session(ymd(2021, 4, 2)));
        assert!(!s.is_session(ymd(2022, 4, 15)));
    }

    #[test]
    fn test_nth_weekday() {
        let rules = vec![
            HolidayRule::nth_weekday(1, Weekday::Mon, NthWeek::Third),
            HolidayRule::nth_weekday(2, Weekday::Mon, NthWeek::Third),
            HolidayRule::nth_weekday(5, Weekday::Mon, NthWeek::Last),
        ];
        let s = Schedule::compute(&rules, &[], 2022, 2022);
        assert!(s.is_holiday(ymd(2022, 1, 17)));
        assert!(s.is_holiday(ymd(2022, 2, 21)));
        assert!(s.is_holiday(ymd(2022, 5, 30)));
    }

    #[test]
    fn test_weekday_before() {
        let rules = vec![HolidayRule::weekday_before(5, 25, Weekday::Mon)];
        let s = Schedule::compute(&rules, &[], 2020, 2021);
        assert!(s.is_holiday(ymd(2020, 5, 18)));
        assert!(s.is_holiday(ymd(2021, 5, 24)));
    }

    #[test]
    fn test_year_bounds() {
        let rules = vec![HolidayRule::fixed(6, 19, Observance::NearestWeekday).since(2022)];
        let s = Schedule::compute(&rules, &[], 2021, 2023);
        assert!(!s.is_holiday(ymd(2021, 6, 18)));
        assert!(s.is_holiday(ymd(2022, 6, 20)));
        assert!(s.is_holiday(ymd(2023, 6, 19)));
    }

    #[test]
    fn test_half_checks() {
        let rules = vec![
            HolidayRule::Weekend(Weekday::Sat),
            HolidayRule::Weekend(Weekday::Sun),
            HolidayRule::nth_weekday(11, Weekday::Thu, NthWeek::Fourth).half_day(HalfCheck::After),
            HolidayRule::fixed(7, 4, Observance::NearestWeekday).half_day(HalfCheck::Before),
        ];
        let s = Schedule::compute(&rules, &[], 2021, 2026);
        assert!(s.is_early_close(ymd(2021, 11, 26)));
        assert!(s.is_early_close(ymd(2024, 7, 3)));
        // 2026-07-04 is a Saturday, so the observed Friday gets no half day
        assert!(!s.is_early_close(ymd(2026, 7, 2)));
        // 2022-07-04 is a Monday
        assert!(!s.is_early_close(ymd(2022, 7, 1)));
    }

    #[test]
    fn test_early_close_rules_skip_closed_days() {
        let closures = vec![
            HolidayRule::Weekend(Weekday::Sat),
            HolidayRule::Weekend(Weekday::Sun),
        ];
        let early = vec![HolidayRule::fixed(12, 24, Observance::Actual)];
        let s = Schedule::compute(&closures, &early, 2021, 2023);
        assert!(s.is_early_close(ymd(2021, 12, 24)));
        // Saturday and Sunday
        assert!(!s.is_early_close(ymd(2022, 12, 24)));
        assert!(!s.is_early_close(ymd(2023, 12, 24)));
        assert!(s.is_session(ymd(2021, 12, 24)));
    }

    #[test]
    fn test_session_walking() {
        let rules = vec![
            HolidayRule::Weekend(Weekday::Sat),
            HolidayRule::Weekend(Weekday::Sun),
            HolidayRule::easter(-2),
        ];
        let s = Schedule::compute(&rules, &[], 2021, 2021);
        assert_eq!(s.next_session(ymd(2021, 4, 1)), Some(ymd(2021, 4, 5)));
        assert_eq!(s.previous_session(ymd(2021, 4, 5)), Some(ymd(2021, 4, 1)));
        assert_eq!(s.next_session(ymd(2021, 4, 19)), Some(ymd(2021, 4, 20)));
        assert_eq!(
            s.sessions_in_range(ymd(2021, 3, 31), ymd(2021, 4, 6)),
            vec![ymd(2021, 3, 31), ymd(2021, 4, 1), ymd(2021, 4, 5), ymd(2021, 4, 6)]
        );
    }

    #[test]
    fn test_session_walking_stops_outside_range() {
        let rules: Vec<HolidayRule> = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .map(HolidayRule::Weekend)
        .collect();
        let s = Schedule::compute(&rules, &[], 2021, 2021);
        assert_eq!(s.next_session(ymd(2021, 6, 1)), None);
        assert_eq!(s.previous_session(ymd(2021, 6, 1)), None);
    }

    #[test]
    fn test_session_walking_starting_outside_range() {
        let rules = vec![
            HolidayRule::Weekend(Weekday::Sat),
            HolidayRule::Weekend(Weekday::Sun),
        ];
        let s = Schedule::compute(&rules, &[], 2021, 2021);
        // 2022-01-04 and 2020-12-30 are weekdays, but outside the computed years
        assert_eq!(s.next_session(ymd(2022, 1, 3)), None);
        assert_eq!(s.previous_session(ymd(2020, 12, 31)), None);
        assert_eq!(s.next_session(ymd(2021, 12, 30)), Some(ymd(2021, 12, 31)));
        // 2022-01-01 is a Saturday, so 2021-12-31 has no later session in range
        assert_eq!(s.next_session(ymd(2021, 12, 31)), None);
        assert_eq!(s.previous_session(ymd(2021, 1, 4)), Some(ymd(2021, 1, 1)));
    }

    #[test]
    fn test_validate_rejects_impossible_days() {
        assert!(HolidayRule::fixed(2, 29, Observance::Actual).validate().is_ok());
        assert!(HolidayRule::fixed(2, 30, Observance::Actual).validate().is_err());
        assert!(HolidayRule::fixed(13, 1, Observance::Actual).validate().is_err());
        assert!(HolidayRule::nth_weekday(0, Weekday::Mon, NthWeek::First)
            .validate()
            .is_err());
        assert!(HolidayRule::nth_weekday(u32::MAX, Weekday::Mon, NthWeek::Last)
            .validate()
            .is_err());
        assert!(HolidayRule::weekday_before(5, 25, Weekday::Mon).validate().is_ok());
        assert!(HolidayRule::easter(-2).validate().is_ok());
    }

    #[test]
    fn test_last_weekday_of_out_of_range_month() {
        let rules = vec![HolidayRule::nth_weekday(u32::MAX, Weekday::Mon, NthWeek::Last)];
        let s = Schedule::compute(&rules, &[], 2021, 2021);
        assert_eq!(s.holidays().count(), 0);
    }

    #[test]
    /// Testing serialization and deserialization of holidays definitions
    fn serialize_rules() {
        let rules = vec![
            HolidayRule::Once(ymd(2019, 11, 25)),
            HolidayRule::Weekend(Weekday::Sat),
            HolidayRule::easter(-2),
        ];
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(
            json,
            r#"[{"Once":"2019-11-25"},{"Weekend":"Sat"},{"EasterOffset":{"offset":-2,"first":null,"last":null}}]"#
        );
        let back: Vec<HolidayRule> = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, back);
    }

    #[test]
    fn deserialize_fixed_with_defaults() {
        let rule: HolidayRule =
            serde_json::from_str(r#"{"Fixed":{"month":3,"day":17}}"#).unwrap();
        assert_eq!(rule, HolidayRule::fixed(3, 17, Observance::Actual));
    }
}
