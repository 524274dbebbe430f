use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::binning::{DayBucket, bin_by_day};
use crate::core::calendar::{Doy, LAST_DAY_INDEX, Moy};
use crate::core::scale::AxisScale;
use crate::core::storm::Storm;
use crate::error::{ChartError, ChartResult};

/// Inclusive run of days, `start <= end` by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDayWindow")]
pub struct DayWindow {
    start: Doy,
    end: Doy,
}

#[derive(Deserialize)]
struct RawDayWindow {
    start: Doy,
    end: Doy,
}

impl TryFrom<RawDayWindow> for DayWindow {
    type Error = ChartError;

    fn try_from(value: RawDayWindow) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl DayWindow {
    pub fn new(start: Doy, end: Doy) -> ChartResult<Self> {
        if start > end {
            return Err(ChartError::InvalidData(format!(
                "day window start ({start}) must not be after its end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Jan 1 through Dec 31 of the reference year.
    #[must_use]
    pub fn full_year() -> Self {
        Self {
            start: Doy::from_index(0),
            end: Doy::from_index(LAST_DAY_INDEX as i64),
        }
    }

    /// Jun 1 through Nov 30.
    #[must_use]
    pub fn atlantic_hurricane_season() -> Self {
        Self {
            start: Doy::from_md(Moy::June, 1),
            end: Doy::from_md(Moy::November, 30),
        }
    }

    #[must_use]
    pub fn start(self) -> Doy {
        self.start
    }

    #[must_use]
    pub fn end(self) -> Doy {
        self.end
    }

    /// Number of days covered, both ends included.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.index() - self.start.index() + 1
    }

    #[must_use]
    pub fn contains(self, day: Doy) -> bool {
        self.start <= day && day <= self.end
    }

    #[must_use]
    pub fn contains_window(self, other: DayWindow) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }
}

/// Day indices a month occupies within the laid-out window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSpan {
    pub month: Moy,
    pub start: usize,
    pub end: usize,
}

impl MonthSpan {
    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start + 1
    }
}

/// Month spans intersected with `window`, in calendar order.
#[must_use]
pub fn month_spans(window: DayWindow) -> Vec<MonthSpan> {
    let lo = window.start().index();
    let hi = window.end().index();
    Moy::ALL
        .iter()
        .filter_map(|&month| {
            let start = month.first_day().index().max(lo);
            let end = month.last_day().index().min(hi);
            (start <= end).then_some(MonthSpan { month, start, end })
        })
        .collect()
}

/// Renderable snapshot of storm activity per day.
///
/// Built once per data load and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGraphData {
    storms: Vec<Storm>,
    days: Vec<DayBucket>,
    months: Vec<MonthSpan>,
    window: DayWindow,
    season: DayWindow,
}

impl DayGraphData {
    /// Lays out the whole year; the season only drives the zoom target.
    #[must_use]
    pub fn full_year(storms: Vec<Storm>, season: DayWindow) -> Self {
        Self::layout(storms, DayWindow::full_year(), season)
    }

    /// Lays out `window` only. The season must fall inside it.
    pub fn build(storms: Vec<Storm>, window: DayWindow, season: DayWindow) -> ChartResult<Self> {
        if !window.contains_window(season) {
            return Err(ChartError::InvalidData(format!(
                "season {}..{} must lie inside window {}..{}",
                season.start(),
                season.end(),
                window.start(),
                window.end()
            )));
        }
        Ok(Self::layout(storms, window, season))
    }

    fn layout(storms: Vec<Storm>, window: DayWindow, season: DayWindow) -> Self {
        let days = bin_by_day(&storms, window.start(), window.end());
        let months = month_spans(window);
        let data = Self {
            storms,
            days,
            months,
            window,
            season,
        };
        debug!(
            storms = data.storms.len(),
            untracked = data.storms.iter().filter(|s| s.track.is_empty()).count(),
            days = data.days.len(),
            max_count = data.max_count(),
            "built day graph data"
        );
        data
    }

    #[must_use]
    pub fn storms(&self) -> &[Storm] {
        &self.storms
    }

    #[must_use]
    pub fn days(&self) -> &[DayBucket] {
        &self.days
    }

    #[must_use]
    pub fn months(&self) -> &[MonthSpan] {
        &self.months
    }

    #[must_use]
    pub fn window(&self) -> DayWindow {
        self.window
    }

    #[must_use]
    pub fn season(&self) -> DayWindow {
        self.season
    }

    /// Storms active on `bucket`, in input order.
    pub fn storms_in<'a>(&'a self, bucket: &'a DayBucket) -> impl Iterator<Item = &'a Storm> + 'a {
        bucket.members.iter().filter_map(|&i| self.storms.get(i))
    }

    #[must_use]
    pub fn counts(&self) -> Vec<usize> {
        self.days.iter().map(DayBucket::count).collect()
    }

    #[must_use]
    pub fn max_count(&self) -> usize {
        self.days.iter().map(DayBucket::count).max().unwrap_or(0)
    }

    /// Y-axis scale from zero to the busiest day.
    pub fn count_scale(&self, limit: f64) -> ChartResult<AxisScale> {
        AxisScale::for_range_with_limit(0.0, self.max_count() as f64, limit)
    }
}
