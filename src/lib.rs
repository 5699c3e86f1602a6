//! Exchange trading calendars looked up by exchange code.
//!
//! ```
//! use tradecal::{get_calendar, ymd, TradingCalendar};
//!
//! let nyse = get_calendar("NYSE").unwrap();
//! assert!(nyse.is_holiday(ymd(2021, 1, 1)));
//! assert!(nyse.is_early_close(ymd(2021, 11, 26)));
//!
//! // the same instance comes back on every lookup
//! let again = get_calendar("NYSE").unwrap();
//! assert!(std::sync::Arc::ptr_eq(&nyse, &again));
//! ```
//!
//! Known codes are `NYSE`, `NASDAQ`, `BATS`, `CME`, `CBOT`, `COMEX`, `NYMEX`,
//! `ICEUS`, `NYFE`, `CFE`, `BMF`, `LSE` and `TSX`. Anything else has to be
//! registered first with [`register_calendar`].

pub mod calendar;
pub mod config;
pub mod error;
pub mod factory;
pub mod family;
pub mod registry;
pub mod rules;

pub use calendar::{ExchangeCalendar, TradingCalendar, TradingHours};
pub use config::CalendarConfig;
pub use error::CalendarError;
pub use factory::{CalendarFactory, DefaultCalendarFactory};
pub use family::{known_codes, CalendarFamily};
pub use registry::{
    clear_calendars, deregister_calendar, get_calendar, global, register_calendar,
    CalendarRegistry,
};
pub use rules::{ymd, HalfCheck, HolidayRule, NthWeek, Observance, Schedule};
