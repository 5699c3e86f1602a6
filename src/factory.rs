//! Default calendars for each [`CalendarFamily`].

use crate::calendar::{ExchangeCalendar, TradingCalendar, TradingHours};
use crate::config::CalendarConfig;
use crate::family::CalendarFamily;
use crate::rules::{ymd, HalfCheck, HolidayRule, NthWeek, Observance};
use chrono::Weekday;
use std::sync::Arc;
use tracing::debug;

/// Constructs the default calendar of a family.
///
/// The registry calls this at most once per stored code. Any
/// `Fn(CalendarFamily) -> Arc<dyn TradingCalendar>` closure is a factory.
pub trait CalendarFactory: Send + Sync {
    fn create(&self, family: CalendarFamily) -> Arc<dyn TradingCalendar>;
}

impl<F> CalendarFactory for F
where
    F: Fn(CalendarFamily) -> Arc<dyn TradingCalendar> + Send + Sync,
{
    fn create(&self, family: CalendarFamily) -> Arc<dyn TradingCalendar> {
        self(family)
    }
}

/// Builds the built-in [`ExchangeCalendar`]s, extended by [`CalendarConfig`].
#[derive(Debug, Clone, Default)]
pub struct DefaultCalendarFactory {
    config: CalendarConfig,
}

impl DefaultCalendarFactory {
    pub fn new(config: CalendarConfig) -> Self {
        DefaultCalendarFactory { config }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Build the calendar for `family` over the configured year range.
    pub fn build(&self, family: CalendarFamily) -> ExchangeCalendar {
        let defaults = family_defaults(family);
        let mut closures = defaults.closures;
        closures.extend_from_slice(self.config.rules_for(family));
        debug!(
            %family,
            start = self.config.start_year,
            end = self.config.end_year,
            rules = closures.len(),
            "building exchange calendar"
        );
        ExchangeCalendar::new(
            family.canonical_name(),
            defaults.timezone,
            defaults.hours,
            closures,
            defaults.early_closes,
            self.config.start_year,
            self.config.end_year,
        )
    }
}

impl CalendarFactory for DefaultCalendarFactory {
    fn create(&self, family: CalendarFamily) -> Arc<dyn TradingCalendar> {
        Arc::new(self.build(family))
    }
}

struct FamilyDefaults {
    timezone: &'static str,
    hours: TradingHours,
    closures: Vec<HolidayRule>,
    early_closes: Vec<HolidayRule>,
}

fn family_defaults(family: CalendarFamily) -> FamilyDefaults {
    match family {
        CalendarFamily::Nyse => FamilyDefaults {
            timezone: "America/New_York",
            hours: TradingHours::new((9, 30), (16, 0), (13, 0)),
            closures: nyse_closures(),
            early_closes: vec![],
        },
        CalendarFamily::Cme => FamilyDefaults {
            timezone: "America/Chicago",
            hours: TradingHours::new((8, 30), (15, 15), (12, 0)),
            closures: cme_closures(),
            early_closes: cme_early_closes(),
        },
        CalendarFamily::Ice => FamilyDefaults {
            timezone: "America/New_York",
            hours: TradingHours::new((8, 20), (18, 0), (13, 0)),
            closures: ice_closures(),
            early_closes: vec![],
        },
        CalendarFamily::Cfe => FamilyDefaults {
            timezone: "America/Chicago",
            hours: TradingHours::new((8, 30), (15, 15), (12, 15)),
            closures: cfe_closures(),
            early_closes: vec![],
        },
        CalendarFamily::Bmf => FamilyDefaults {
            timezone: "America/Sao_Paulo",
            hours: TradingHours::new((10, 0), (17, 0), (13, 0)),
            closures: bmf_closures(),
            early_closes: vec![],
        },
        CalendarFamily::Lse => FamilyDefaults {
            timezone: "Europe/London",
            hours: TradingHours::new((8, 0), (16, 30), (12, 30)),
            closures: lse_closures(),
            early_closes: vec![
                HolidayRule::fixed(12, 24, Observance::Actual),
                HolidayRule::fixed(12, 31, Observance::Actual),
            ],
        },
        CalendarFamily::Tsx => FamilyDefaults {
            timezone: "America/Toronto",
            hours: TradingHours::new((9, 30), (16, 0), (13, 0)),
            closures: tsx_closures(),
            early_closes: vec![HolidayRule::fixed(12, 24, Observance::Actual)],
        },
    }
}

fn weekends() -> Vec<HolidayRule> {
    vec![
        HolidayRule::Weekend(Weekday::Sat),
        HolidayRule::Weekend(Weekday::Sun),
    ]
}

/// Regular holidays shared by the US equity and equity-option exchanges
fn us_equity_holidays() -> Vec<HolidayRule> {
    let mut rules = weekends();
    rules.extend([
        // New Year's day, not observed on Dec 31
        HolidayRule::fixed(1, 1, Observance::NearestWeekdayInPeriod),
        // MLK, 3rd Monday of January
        HolidayRule::nth_weekday(1, Weekday::Mon, NthWeek::Third),
        // Presidents' Day
        HolidayRule::nth_weekday(2, Weekday::Mon, NthWeek::Third),
        // Good Friday
        HolidayRule::easter(-2),
        // Memorial Day
        HolidayRule::nth_weekday(5, Weekday::Mon, NthWeek::Last),
        // Juneteenth National Independence Day
        HolidayRule::fixed(6, 19, Observance::NearestWeekday).since(2022),
        // Independence Day
        HolidayRule::fixed(7, 4, Observance::NearestWeekday).half_day(HalfCheck::Before),
        // Labor Day
        HolidayRule::nth_weekday(9, Weekday::Mon, NthWeek::First),
        // Thanksgiving Day
        HolidayRule::nth_weekday(11, Weekday::Thu, NthWeek::Fourth).half_day(HalfCheck::After),
        // Christmas Day
        HolidayRule::fixed(12, 25, Observance::NearestWeekday).half_day(HalfCheck::Before),
    ]);
    rules
}

fn hurricane_sandy() -> [HolidayRule; 2] {
    [
        HolidayRule::Once(ymd(2012, 10, 29)),
        HolidayRule::Once(ymd(2012, 10, 30)),
    ]
}

fn nyse_closures() -> Vec<HolidayRule> {
    let mut rules = us_equity_holidays();
    rules.extend([
        // September 11
        HolidayRule::Once(ymd(2001, 9, 11)),
        HolidayRule::Once(ymd(2001, 9, 12)),
        HolidayRule::Once(ymd(2001, 9, 13)),
        HolidayRule::Once(ymd(2001, 9, 14)),
        // national days of mourning
        HolidayRule::Once(ymd(2004, 6, 11)),
        HolidayRule::Once(ymd(2007, 1, 2)),
        HolidayRule::Once(ymd(2018, 12, 5)),
        HolidayRule::Once(ymd(2025, 1, 9)),
    ]);
    rules.extend(hurricane_sandy());
    rules
}

fn ice_closures() -> Vec<HolidayRule> {
    let mut rules = us_equity_holidays();
    rules.extend(hurricane_sandy());
    rules
}

fn cfe_closures() -> Vec<HolidayRule> {
    let mut rules = us_equity_holidays();
    rules.extend(hurricane_sandy());
    rules.extend([
        HolidayRule::Once(ymd(2018, 12, 5)),
        HolidayRule::Once(ymd(2025, 1, 9)),
    ]);
    rules
}

fn cme_closures() -> Vec<HolidayRule> {
    let mut rules = weekends();
    rules.extend([
        HolidayRule::fixed(1, 1, Observance::NearestWeekdayInPeriod),
        HolidayRule::easter(-2),
        HolidayRule::fixed(7, 4, Observance::NearestWeekday).half_day(HalfCheck::Before),
        HolidayRule::nth_weekday(11, Weekday::Thu, NthWeek::Fourth).half_day(HalfCheck::After),
        HolidayRule::fixed(12, 25, Observance::NearestWeekday).half_day(HalfCheck::Before),
    ]);
    rules.extend(hurricane_sandy());
    rules
}

/// Federal holidays on which Globex trades a shortened session
fn cme_early_closes() -> Vec<HolidayRule> {
    vec![
        HolidayRule::nth_weekday(1, Weekday::Mon, NthWeek::Third),
        HolidayRule::nth_weekday(2, Weekday::Mon, NthWeek::Third),
        HolidayRule::nth_weekday(5, Weekday::Mon, NthWeek::Last),
        HolidayRule::fixed(6, 19, Observance::NearestWeekday).since(2022),
        HolidayRule::nth_weekday(9, Weekday::Mon, NthWeek::First),
    ]
}

fn bmf_closures() -> Vec<HolidayRule> {
    let mut rules = weekends();
    rules.extend([
        HolidayRule::fixed(1, 1, Observance::Actual),
        // Sao Paulo city anniversary
        HolidayRule::fixed(1, 25, Observance::Actual),
        // Carnival Monday and Tuesday
        HolidayRule::easter(-48),
        HolidayRule::easter(-47),
        HolidayRule::easter(-2),
        // Tiradentes
        HolidayRule::fixed(4, 21, Observance::Actual),
        HolidayRule::fixed(5, 1, Observance::Actual),
        // Corpus Christi
        HolidayRule::easter(60),
        // Constitutionalist Revolution
        HolidayRule::fixed(7, 9, Observance::Actual),
        HolidayRule::fixed(9, 7, Observance::Actual),
        // Our Lady of Aparecida
        HolidayRule::fixed(10, 12, Observance::Actual),
        // All Souls' Day
        HolidayRule::fixed(11, 2, Observance::Actual),
        // Proclamation of the Republic
        HolidayRule::fixed(11, 15, Observance::Actual),
        // Black Consciousness Day
        HolidayRule::fixed(11, 20, Observance::Actual).since(2004),
        HolidayRule::fixed(12, 24, Observance::Actual),
        HolidayRule::fixed(12, 25, Observance::Actual),
        HolidayRule::fixed(12, 31, Observance::Actual),
    ]);
    rules
}

fn lse_closures() -> Vec<HolidayRule> {
    let mut rules = weekends();
    rules.extend([
        HolidayRule::fixed(1, 1, Observance::NextFreeWeekday),
        HolidayRule::easter(-2),
        // Easter Monday
        HolidayRule::easter(1),
        // Early May bank holiday, moved to VE day in 2020
        HolidayRule::nth_weekday(5, Weekday::Mon, NthWeek::First).until(2019),
        HolidayRule::Once(ymd(2020, 5, 8)),
        HolidayRule::nth_weekday(5, Weekday::Mon, NthWeek::First).since(2021),
        // Spring bank holiday
        HolidayRule::nth_weekday(5, Weekday::Mon, NthWeek::Last),
        // Summer bank holiday
        HolidayRule::nth_weekday(8, Weekday::Mon, NthWeek::Last),
        // Royal occasions
        HolidayRule::Once(ymd(2011, 4, 29)),
        HolidayRule::Once(ymd(2022, 9, 19)),
        HolidayRule::Once(ymd(2023, 5, 8)),
        // Christmas and Boxing Day roll to the next free weekday
        HolidayRule::fixed(12, 25, Observance::NextFreeWeekday),
        HolidayRule::fixed(12, 26, Observance::NextFreeWeekday),
    ]);
    rules
}

fn tsx_closures() -> Vec<HolidayRule> {
    let mut rules = weekends();
    rules.extend([
        HolidayRule::fixed(1, 1, Observance::NextFreeWeekday),
        // Family Day, Ontario
        HolidayRule::nth_weekday(2, Weekday::Mon, NthWeek::Third).since(2008),
        HolidayRule::easter(-2),
        // Victoria Day, the Monday before May 25
        HolidayRule::weekday_before(5, 25, Weekday::Mon),
        // Canada Day
        HolidayRule::fixed(7, 1, Observance::NextFreeWeekday),
        // Civic Holiday
        HolidayRule::nth_weekday(8, Weekday::Mon, NthWeek::First),
        HolidayRule::nth_weekday(9, Weekday::Mon, NthWeek::First),
        // Thanksgiving
        HolidayRule::nth_weekday(10, Weekday::Mon, NthWeek::Second),
        HolidayRule::fixed(12, 25, Observance::NextFreeWeekday),
        HolidayRule::fixed(12, 26, Observance::NextFreeWeekday),
    ]);
    rules
}
