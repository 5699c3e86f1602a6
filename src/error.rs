//! Registry and configuration errors.

use thiserror::Error;

/// Errors raised by the calendar registry and its configuration layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// `name` is neither registered nor a known exchange code
    #[error("invalid calendar name: {name}")]
    InvalidCalendarName { name: String },

    /// A calendar is already registered under `name`
    #[error("a calendar is already registered under the name {name}")]
    CalendarNameCollision { name: String },

    #[error("invalid calendar configuration: {0}")]
    InvalidConfig(String),
}

impl CalendarError {
    pub(crate) fn invalid_name(name: &str) -> Self {
        CalendarError::InvalidCalendarName {
            name: name.to_string(),
        }
    }

    pub(crate) fn collision(name: &str) -> Self {
        CalendarError::CalendarNameCollision {
            name: name.to_string(),
        }
    }

    /// The calendar code that caused a registry error, `None` for config errors.
    pub fn name(&self) -> Option<&str> {
        match self {
            CalendarError::InvalidCalendarName { name }
            | CalendarError::CalendarNameCollision { name } => Some(name),
            CalendarError::InvalidConfig(_) => None,
        }
    }
}
