use chrono::{DateTime, Utc};

use crate::core::calendar::Doy;

/// One observation along a storm's track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackEntry {
    pub time: DateTime<Utc>,
    pub status: String,
    /// `[latitude, longitude]` in degrees.
    pub location: [f64; 2],
    pub max_wind: i32,
    pub min_pressure: i32,
    pub wind_radius_34kt: Option<f64>,
    pub wind_radius_50kt: Option<f64>,
    pub wind_radius_64kt: Option<f64>,
}

impl TrackEntry {
    /// Minimal entry carrying only a timestamp, as used by binning.
    #[must_use]
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            time,
            status: String::new(),
            location: [0.0, 0.0],
            max_wind: 0,
            min_pressure: 0,
            wind_radius_34kt: None,
            wind_radius_50kt: None,
            wind_radius_64kt: None,
        }
    }

    #[must_use]
    pub fn day(&self) -> Doy {
        Doy::from_datetime(self.time)
    }
}

/// A storm and its chronological track.
#[derive(Debug, Clone, PartialEq)]
pub struct Storm {
    pub id: String,
    pub name: Option<String>,
    pub year: i32,
    pub track: Vec<TrackEntry>,
}

impl Storm {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        year: i32,
        track: Vec<TrackEntry>,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            year,
            track,
        }
    }

    /// Display name, falling back to the identifier for unnamed storms.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Anything that is active over a contiguous run of calendar days.
pub trait ActiveSpan {
    /// First and last observed day, or `None` when there are no observations.
    fn active_span(&self) -> Option<(Doy, Doy)>;
}

impl ActiveSpan for Storm {
    fn active_span(&self) -> Option<(Doy, Doy)> {
        let first = self.track.first()?;
        let last = self.track.last()?;
        Some((first.day(), last.day()))
    }
}
