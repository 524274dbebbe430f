use std::fmt;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Year every day-of-year index is measured against.
///
/// 2000 is a leap year, so Feb 29 owns index 59 and Dec 31 owns index 365.
pub const REFERENCE_YEAR: i32 = 2000;

/// Number of day slots in the reference year (indices `0..=365`).
pub const DAYS_IN_YEAR: usize = 366;

/// Index of Dec 31 in the reference year.
pub const LAST_DAY_INDEX: usize = DAYS_IN_YEAR - 1;

// 1970-01-01 .. 2000-01-01
const REFERENCE_EPOCH_OFFSET_DAYS: u64 = 10_957;

// The Gregorian calendar repeats every 400 years and 2000 starts a cycle.
const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn reference_jan_1() -> NaiveDate {
    NaiveDate::default() + Days::new(REFERENCE_EPOCH_OFFSET_DAYS)
}

fn reference_month_start(month: Moy) -> NaiveDate {
    reference_jan_1() + Months::new(month.index() as u32)
}

/// Month of year, cycling December back to January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Moy {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Moy {
    pub const ALL: [Moy; 12] = [
        Moy::January,
        Moy::February,
        Moy::March,
        Moy::April,
        Moy::May,
        Moy::June,
        Moy::July,
        Moy::August,
        Moy::September,
        Moy::October,
        Moy::November,
        Moy::December,
    ];

    /// Month for a zero-based index; any integer is folded into `0..12`.
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() as i64 + 1)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::from_index(self.index() as i64 - 1)
    }

    #[must_use]
    pub fn first_day(self) -> Doy {
        Doy::from_md(self, 1)
    }

    /// Day zero of the following month, i.e. this month's last date.
    #[must_use]
    pub fn last_day(self) -> Doy {
        Doy::from_md(self.next(), 0)
    }

    /// Three-letter display name (`"Jan"`, `"Feb"`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }
}

impl fmt::Display for Moy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Days between Jan 1 of the reference year and `(month, date)`.
///
/// `date` is not clamped: `index_of(Moy::January, 0)` is `-1` and
/// `index_of(Moy::February, 30)` lands on Mar 1. Results saturate at the
/// `i64` bounds.
#[must_use]
pub fn index_of(month: Moy, date: i64) -> i64 {
    (i64::from(reference_month_start(month).ordinal0()) - 1).saturating_add(date)
}

/// Calendar day of year, independent of any particular year.
///
/// Equality and ordering follow [`Doy::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "MonthDate", into = "MonthDate")]
pub struct Doy(NaiveDate);

impl Doy {
    /// Day reached by adding `index` days to Jan 1 of the reference year.
    ///
    /// Indices outside `0..=365` roll into neighbouring years and only the
    /// resulting (month, date) is kept.
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        let offset = index.rem_euclid(DAYS_PER_GREGORIAN_CYCLE) as u64;
        Self::from_naive_date(reference_jan_1() + Days::new(offset))
    }

    /// Builds a day from a month and a possibly out-of-range date.
    ///
    /// Dates roll over like calendar arithmetic does: date 0 is the last day
    /// of the previous month, date 32 of January is Feb 1.
    #[must_use]
    pub fn from_md(month: Moy, date: i64) -> Self {
        // whole 400-year cycles leave (month, date) unchanged
        Self::from_index(index_of(month, date.rem_euclid(DAYS_PER_GREGORIAN_CYCLE)))
    }

    /// Month and date of `date`, in whatever year it falls.
    #[must_use]
    pub fn from_naive_date(date: NaiveDate) -> Self {
        let month = Moy::from_index(i64::from(date.month0()));
        Self(reference_month_start(month) + Days::new(u64::from(date.day0())))
    }

    /// UTC month and date of a timestamp.
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self::from_naive_date(time.date_naive())
    }

    #[must_use]
    pub fn month(self) -> Moy {
        Moy::from_index(i64::from(self.0.month0()))
    }

    /// Day of month, starting at 1.
    #[must_use]
    pub fn date(self) -> u32 {
        self.0.day()
    }

    /// Zero-based day index in the reference year (`0..=365`).
    #[must_use]
    pub fn index(self) -> usize {
        self.0.ordinal0() as usize
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::from_index(self.index() as i64 - 1)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() as i64 + 1)
    }
}

impl fmt::Display for Doy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}", self.month().name(), self.date())
    }
}

/// Serialized form of [`Doy`]; out-of-range dates are normalized on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDate {
    pub month: Moy,
    pub date: i64,
}

impl From<MonthDate> for Doy {
    fn from(value: MonthDate) -> Self {
        Doy::from_md(value.month, value.date)
    }
}

impl From<Doy> for MonthDate {
    fn from(value: Doy) -> Self {
        Self {
            month: value.month(),
            date: i64::from(value.date()),
        }
    }
}
