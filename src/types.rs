use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::error::{PrayerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Marker {
    pub const ALL: [Marker; 6] = [
        Marker::Fajr,
        Marker::Sunrise,
        Marker::Dhuhr,
        Marker::Asr,
        Marker::Maghrib,
        Marker::Isha,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Marker::Fajr => "Fajr",
            Marker::Sunrise => "Sunrise",
            Marker::Dhuhr => "Dhuhr",
            Marker::Asr => "Asr",
            Marker::Maghrib => "Maghrib",
            Marker::Isha => "Isha",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres above sea level; lowers the horizon for sunrise and sunset.
    pub elevation: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Self::with_elevation(latitude, longitude, 0.0)
    }

    pub fn with_elevation(latitude: f64, longitude: f64, elevation: f64) -> Result<Self> {
        let coord = Self {
            latitude,
            longitude,
            elevation,
        };
        coord.validate()?;
        Ok(coord)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PrayerError::InvalidCoordinate(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PrayerError::InvalidCoordinate(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        if !self.elevation.is_finite() || self.elevation < 0.0 {
            return Err(PrayerError::InvalidCoordinate(format!(
                "elevation {} must be a non-negative number of metres",
                self.elevation
            )));
        }
        Ok(())
    }
}

/// How a twilight-based marker is located: by sun depression below the
/// horizon, or by a fixed number of minutes from its horizon marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TwilightAngle {
    Degrees(f64),
    Minutes(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AsrMethod {
    #[default]
    Standard,
    Hanafi,
}

impl AsrMethod {
    pub fn shadow_factor(self) -> f64 {
        match self {
            AsrMethod::Standard => 1.0,
            AsrMethod::Hanafi => 2.0,
        }
    }
}

impl FromStr for AsrMethod {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(AsrMethod::Standard),
            "hanafi" => Ok(AsrMethod::Hanafi),
            _ => Err(PrayerError::input_format("asr", "'standard' or 'hanafi'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighLatitudeRule {
    None,
    #[default]
    NightMiddle,
    OneSeventh,
    AngleBased,
}

impl HighLatitudeRule {
    /// Fraction of the night allowed between a twilight marker and its
    /// horizon marker.
    pub fn night_portion(self, angle: f64) -> f64 {
        match self {
            HighLatitudeRule::None | HighLatitudeRule::NightMiddle => 0.5,
            HighLatitudeRule::OneSeventh => 1.0 / 7.0,
            HighLatitudeRule::AngleBased => angle / 60.0,
        }
    }
}

impl FromStr for HighLatitudeRule {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "none" => Ok(HighLatitudeRule::None),
            "nightmiddle" => Ok(HighLatitudeRule::NightMiddle),
            "oneseventh" => Ok(HighLatitudeRule::OneSeventh),
            "anglebased" => Ok(HighLatitudeRule::AngleBased),
            _ => Err(PrayerError::input_format(
                "high-latitude",
                "one of 'none', 'night-middle', 'one-seventh', 'angle-based'",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayMarkerRecord {
    pub date: NaiveDate,
    /// `HH:MM` clock times, indexed by [`Marker::index`].
    pub times: [String; 6],
}

impl DayMarkerRecord {
    pub fn time(&self, marker: Marker) -> &str {
        &self.times[marker.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Marker, &str)> + '_ {
        Marker::ALL
            .into_iter()
            .map(move |marker| (marker, self.time(marker)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationConfig {
    pub default_minutes: u32,
    pub dhuhr_minutes: u32,
}

impl DurationConfig {
    pub fn new(default_minutes: u32, dhuhr_minutes: Option<u32>) -> Self {
        Self {
            default_minutes,
            dhuhr_minutes: dhuhr_minutes.unwrap_or(default_minutes),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_minutes == 0 {
            return Err(PrayerError::InvalidDuration(
                "default duration must be a positive number of minutes".to_string(),
            ));
        }
        if self.dhuhr_minutes == 0 {
            return Err(PrayerError::InvalidDuration(
                "Dhuhr duration must be a positive number of minutes".to_string(),
            ));
        }
        Ok(())
    }

    pub fn minutes_for(&self, marker: Marker) -> u32 {
        if marker.name().eq_ignore_ascii_case("dhuhr") {
            self.dhuhr_minutes
        } else {
            self.default_minutes
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerCalendarEvent {
    pub name: Marker,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub created_at: DateTime<Utc>,
}

impl PrayerCalendarEvent {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrayerEventCollection {
    events: Vec<PrayerCalendarEvent>,
}

impl PrayerEventCollection {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, event: PrayerCalendarEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrayerCalendarEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[PrayerCalendarEvent] {
        &self.events
    }
}

impl IntoIterator for PrayerEventCollection {
    type Item = PrayerCalendarEvent;
    type IntoIter = std::vec::IntoIter<PrayerCalendarEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a PrayerEventCollection {
    type Item = &'a PrayerCalendarEvent;
    type IntoIter = std::slice::Iter<'a, PrayerCalendarEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
