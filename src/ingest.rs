//! Conversion of the storm JSON export into typed [`Storm`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Storm, TrackEntry};
use crate::error::{ChartError, ChartResult};
use crate::extensions::Signal;

/// Storm record as it appears in the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStorm {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub track: Vec<RawTrackEntry>,
}

/// Track observation with its time as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTrackEntry {
    pub time: i64,
    pub status: String,
    pub location: [f64; 2],
    pub max_wind: i32,
    pub min_pressure: i32,
    #[serde(default)]
    pub wind_radius_34kt: Option<f64>,
    #[serde(default)]
    pub wind_radius_50kt: Option<f64>,
    #[serde(default)]
    pub wind_radius_64kt: Option<f64>,
}

impl RawTrackEntry {
    fn into_entry(self, storm_id: &str) -> ChartResult<TrackEntry> {
        let time = DateTime::<Utc>::from_timestamp_millis(self.time).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "storm `{storm_id}` has out-of-range track time {}",
                self.time
            ))
        })?;
        Ok(TrackEntry {
            time,
            status: self.status,
            location: self.location,
            max_wind: self.max_wind,
            min_pressure: self.min_pressure,
            wind_radius_34kt: self.wind_radius_34kt,
            wind_radius_50kt: self.wind_radius_50kt,
            wind_radius_64kt: self.wind_radius_64kt,
        })
    }
}

impl TryFrom<RawStorm> for Storm {
    type Error = ChartError;

    fn try_from(raw: RawStorm) -> Result<Self, Self::Error> {
        let year = parse_storm_year(&raw.id)?;
        let track = raw
            .track
            .into_iter()
            .map(|entry| entry.into_entry(&raw.id))
            .collect::<ChartResult<Vec<_>>>()?;
        if track.windows(2).any(|pair| pair[1].time < pair[0].time) {
            warn!(storm = %raw.id, "track is not chronological, keeping input order");
        }
        Ok(Storm::new(raw.id, raw.name, year, track))
    }
}

/// Year encoded in the digits after the four-character basin prefix,
/// e.g. `AL092021` is 2021.
pub fn parse_storm_year(id: &str) -> ChartResult<i32> {
    id.get(4..)
        .and_then(|digits| digits.parse::<i32>().ok())
        .ok_or_else(|| {
            ChartError::InvalidData(format!("storm id `{id}` does not end in a year"))
        })
}

/// Parses a JSON array of storms.
pub fn parse_storms_json(input: &str) -> ChartResult<Vec<Storm>> {
    let raw: Vec<RawStorm> = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse storms: {e}")))?;
    let storms = raw
        .into_iter()
        .map(Storm::try_from)
        .collect::<ChartResult<Vec<_>>>()?;
    debug!(storms = storms.len(), "storms parsed");
    Ok(storms)
}

/// Holds the "storms loaded" notification that views subscribe to.
#[derive(Debug, Default)]
pub struct StormModel {
    pub storms_did_load: Signal<Vec<Storm>>,
}

impl StormModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `input` and raises the storms to every subscriber.
    pub fn load_json(&mut self, input: &str) -> ChartResult<usize> {
        let storms = parse_storms_json(input)?;
        let count = storms.len();
        self.storms_did_load.raise(&storms);
        Ok(count)
    }
}
