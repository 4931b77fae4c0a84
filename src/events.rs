use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, Utc};
use tracing::info;

use crate::error::{PrayerError, Result};
use crate::types::{DayMarkerRecord, DurationConfig, PrayerCalendarEvent, PrayerEventCollection};

pub fn parse_clock_time(time: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| PrayerError::TimeParse(time.to_string()))
}

pub fn materialize(
    records: &[DayMarkerRecord],
    durations: &DurationConfig,
) -> Result<PrayerEventCollection> {
    materialize_at(records, durations, Utc::now())
}

/// Builds six events per record, all stamped with `created_at`. Either every
/// event is built or none is.
pub fn materialize_at(
    records: &[DayMarkerRecord],
    durations: &DurationConfig,
    created_at: DateTime<Utc>,
) -> Result<PrayerEventCollection> {
    durations.validate()?;

    let mut collection = PrayerEventCollection::with_capacity(records.len() * 6);
    for record in records {
        for (marker, time) in record.iter() {
            let start = NaiveDateTime::new(record.date, parse_clock_time(time)?);
            let minutes = durations.minutes_for(marker);
            collection.push(PrayerCalendarEvent {
                name: marker,
                start,
                end: start + Duration::minutes(i64::from(minutes)),
                created_at,
            });
        }
    }

    info!(
        days = records.len(),
        events = collection.len(),
        default_minutes = durations.default_minutes,
        dhuhr_minutes = durations.dhuhr_minutes,
        "materialized prayer events"
    );
    Ok(collection)
}
