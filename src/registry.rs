//! Named registry of shared trading calendars.
//!
//! A [`CalendarRegistry`] maps exchange codes to calendar instances. Known
//! codes (see [`CalendarFamily`]) are constructed lazily on first lookup and
//! stored under the code that was asked for, so `NYSE`, `NASDAQ` and `BATS`
//! each get their own NYSE-family instance. Every later lookup returns the
//! stored `Arc` until the code is deregistered or the registry is cleared.
//!
//! All operations take one lock, so concurrent first lookups of a code build
//! exactly one calendar.

use crate::calendar::TradingCalendar;
use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::factory::{CalendarFactory, DefaultCalendarFactory};
use crate::family::CalendarFamily;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

type Table = HashMap<String, Arc<dyn TradingCalendar>>;

pub struct CalendarRegistry {
    factory: Box<dyn CalendarFactory>,
    calendars: Mutex<Table>,
}

impl CalendarRegistry {
    /// An empty registry building the built-in calendars with default settings.
    pub fn new() -> Self {
        Self::with_factory(DefaultCalendarFactory::default())
    }

    /// An empty registry building the built-in calendars from `config`.
    pub fn with_config(config: CalendarConfig) -> Self {
        Self::with_factory(DefaultCalendarFactory::new(config))
    }

    /// An empty registry constructing known codes through `factory`.
    pub fn with_factory(factory: impl CalendarFactory + 'static) -> Self {
        CalendarRegistry {
            factory: Box::new(factory),
            calendars: Mutex::new(HashMap::new()),
        }
    }

    // Every operation leaves the table consistent, so a poisoned lock is
    // still safe to use.
    fn table(&self) -> MutexGuard<'_, Table> {
        self.calendars
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Retrieve the calendar registered under `code`, constructing the
    /// default calendar for a known exchange code on first use.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidCalendarName`] when `code` is neither
    /// registered nor a known exchange code.
    pub fn get(&self, code: &str) -> Result<Arc<dyn TradingCalendar>, CalendarError> {
        let mut table = self.table();
        if let Some(calendar) = table.get(code) {
            return Ok(Arc::clone(calendar));
        }
        let family = CalendarFamily::from_code(code).ok_or_else(|| {
            debug!(code, "unknown calendar code");
            CalendarError::invalid_name(code)
        })?;
        debug!(code, %family, "constructing default calendar");
        let calendar = self.factory.create(family);
        table.insert(code.to_string(), Arc::clone(&calendar));
        Ok(calendar)
    }

    /// Register `calendar` under `code`.
    ///
    /// With `force` an existing calendar under `code` is replaced, otherwise
    /// the registry is left untouched and
    /// [`CalendarError::CalendarNameCollision`] is returned.
    pub fn register(
        &self,
        code: &str,
        calendar: Arc<dyn TradingCalendar>,
        force: bool,
    ) -> Result<(), CalendarError> {
        let mut table = self.table();
        if table.contains_key(code) {
            if !force {
                return Err(CalendarError::collision(code));
            }
            info!(code, "replacing registered calendar");
        } else {
            info!(code, "registering calendar");
        }
        table.insert(code.to_string(), calendar);
        Ok(())
    }

    /// Remove the calendar registered under `code`, if any.
    pub fn deregister(&self, code: &str) {
        if self.table().remove(code).is_some() {
            info!(code, "deregistered calendar");
        }
    }

    /// Remove every registered calendar.
    pub fn clear(&self) {
        let mut table = self.table();
        info!(count = table.len(), "clearing calendar registry");
        table.clear();
    }

    pub fn contains(&self, code: &str) -> bool {
        self.table().contains_key(code)
    }

    /// Registered codes, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.table().keys().cloned().collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }
}

impl Default for CalendarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CalendarRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarRegistry")
            .field("codes", &self.codes())
            .finish_non_exhaustive()
    }
}

static GLOBAL: Lazy<CalendarRegistry> = Lazy::new(|| match CalendarConfig::from_env() {
    Ok(config) => CalendarRegistry::with_config(config),
    Err(err) => {
        warn!(%err, "ignoring calendar configuration, using defaults");
        CalendarRegistry::new()
    }
});

/// The process-wide registry, configured from the environment on first use.
pub fn global() -> &'static CalendarRegistry {
    &GLOBAL
}

/// [`CalendarRegistry::get`] on the process-wide registry.
pub fn get_calendar(code: &str) -> Result<Arc<dyn TradingCalendar>, CalendarError> {
    global().get(code)
}

/// [`CalendarRegistry::register`] on the process-wide registry.
pub fn register_calendar(
    code: &str,
    calendar: Arc<dyn TradingCalendar>,
    force: bool,
) -> Result<(), CalendarError> {
    global().register(code, calendar, force)
}

/// [`CalendarRegistry::deregister`] on the process-wide registry.
pub fn deregister_calendar(code: &str) {
    global().deregister(code)
}

/// [`CalendarRegistry::clear`] on the process-wide registry.
pub fn clear_calendars() {
    global().clear()
}
