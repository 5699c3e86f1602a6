//! Exchange codes and the calendar family each one resolves to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A family of exchanges sharing one default calendar implementation.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CalendarFamily {
    Nyse,
    Cme,
    Ice,
    Cfe,
    Bmf,
    Lse,
    Tsx,
}

/// Alias groups. Every code appears in at most one group.
static ALIAS_GROUPS: &[(&[&str], CalendarFamily)] = &[
    (&["NYSE", "NASDAQ", "BATS"], CalendarFamily::Nyse),
    (&["CME", "CBOT", "COMEX", "NYMEX"], CalendarFamily::Cme),
    (&["ICEUS", "NYFE"], CalendarFamily::Ice),
    (&["CFE"], CalendarFamily::Cfe),
    (&["BMF"], CalendarFamily::Bmf),
    (&["LSE"], CalendarFamily::Lse),
    (&["TSX"], CalendarFamily::Tsx),
];

impl CalendarFamily {
    pub const ALL: [CalendarFamily; 7] = [
        CalendarFamily::Nyse,
        CalendarFamily::Cme,
        CalendarFamily::Ice,
        CalendarFamily::Cfe,
        CalendarFamily::Bmf,
        CalendarFamily::Lse,
        CalendarFamily::Tsx,
    ];

    /// The family whose alias group contains `code`, compared case-sensitively.
    pub fn from_code(code: &str) -> Option<CalendarFamily> {
        ALIAS_GROUPS
            .iter()
            .find(|(aliases, _)| aliases.iter().any(|alias| *alias == code))
            .map(|(_, family)| *family)
    }

    /// Every code resolving to this family.
    pub fn aliases(self) -> &'static [&'static str] {
        match ALIAS_GROUPS.iter().find(|(_, family)| *family == self) {
            Some((aliases, _)) => *aliases,
            None => &[],
        }
    }

    /// The first alias of the group, used as the calendar name and config key.
    pub fn canonical_name(self) -> &'static str {
        match self {
            CalendarFamily::Nyse => "NYSE",
            CalendarFamily::Cme => "CME",
            CalendarFamily::Ice => "ICEUS",
            CalendarFamily::Cfe => "CFE",
            CalendarFamily::Bmf => "BMF",
            CalendarFamily::Lse => "LSE",
            CalendarFamily::Tsx => "TSX",
        }
    }

    /// Look a family up by its canonical name.
    pub fn from_canonical_name(name: &str) -> Option<CalendarFamily> {
        CalendarFamily::ALL
            .into_iter()
            .find(|family| family.canonical_name() == name)
    }
}

impl fmt::Display for CalendarFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Every code `get` can construct a default calendar for.
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    ALIAS_GROUPS
        .iter()
        .flat_map(|(aliases, _)| aliases.iter().copied())
}
