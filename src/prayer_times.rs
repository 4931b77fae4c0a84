use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::angles;
use crate::error::{PrayerError, Result};
use crate::methods::CalculationConfig;
use crate::types::{DayMarkerRecord, GeoCoordinate, HighLatitudeRule, Marker, TwilightAngle};

pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub day_of_year: i32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub noon: f64,
}

impl SolarDay {
    pub fn new(date: NaiveDate, longitude: f64, utc_offset: f64) -> Self {
        let n = angles::day_of_year(date);
        let eot = angles::equation_of_time(n);
        Self {
            day_of_year: n,
            declination: angles::solar_declination(n),
            equation_of_time: eot,
            noon: angles::solar_noon(longitude, eot, utc_offset),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    BeforeBase,
    AfterBase,
}

/// Raw marker times in clock hours, not yet normalized to a 24h day.
pub fn marker_hours(
    day: &SolarDay,
    coord: &GeoCoordinate,
    config: &CalculationConfig,
) -> [f64; 6] {
    let lat = coord.latitude;
    let decl = day.declination;
    let noon = day.noon;

    let horizon = angles::rise_set_altitude(coord.elevation);
    let rise_ha = angles::clamped_hour_angle(lat, decl, horizon);
    let sunrise = noon - rise_ha;
    let sunset = noon + rise_ha;
    let night = 24.0 - (sunset - sunrise);

    let dhuhr = noon + config.dhuhr_offset_minutes / 60.0;

    let asr_alt = angles::asr_altitude(lat, decl, config.asr.shadow_factor());
    let asr = noon + angles::clamped_hour_angle(lat, decl, asr_alt);

    let twilight = |depression: f64, side: Side| {
        angles::hour_angle_for_altitude(lat, decl, -depression).map(|h| match side {
            Side::BeforeBase => noon - h,
            Side::AfterBase => noon + h,
        })
    };

    let fajr = match config.fajr {
        TwilightAngle::Degrees(d) => bound_twilight(
            Marker::Fajr,
            twilight(d, Side::BeforeBase),
            sunrise,
            d,
            night,
            config.high_latitude,
            Side::BeforeBase,
        ),
        TwilightAngle::Minutes(m) => sunrise - m / 60.0,
    };

    let maghrib = match config.maghrib {
        TwilightAngle::Degrees(d) => bound_twilight(
            Marker::Maghrib,
            twilight(d, Side::AfterBase),
            sunset,
            d,
            night,
            config.high_latitude,
            Side::AfterBase,
        ),
        TwilightAngle::Minutes(m) => sunset + m / 60.0,
    };

    let isha = match config.isha {
        TwilightAngle::Degrees(d) => bound_twilight(
            Marker::Isha,
            twilight(d, Side::AfterBase),
            sunset,
            d,
            night,
            config.high_latitude,
            Side::AfterBase,
        ),
        TwilightAngle::Minutes(m) => maghrib + m / 60.0,
    };

    [fajr, sunrise, dhuhr, asr, maghrib, isha]
}

fn bound_twilight(
    marker: Marker,
    solved: Option<f64>,
    base: f64,
    angle: f64,
    night: f64,
    rule: HighLatitudeRule,
    side: Side,
) -> f64 {
    let portion = rule.night_portion(angle) * night;
    let limit = match side {
        Side::BeforeBase => base - portion,
        Side::AfterBase => base + portion,
    };
    match solved {
        None => {
            warn!(%marker, ?rule, "sun never reaches twilight angle {angle}, using night portion");
            limit
        }
        Some(time) => {
            let gap = match side {
                Side::BeforeBase => base - time,
                Side::AfterBase => time - base,
            };
            if rule != HighLatitudeRule::None && gap > portion {
                debug!(%marker, ?rule, gap, portion, "twilight bounded by night portion");
                limit
            } else {
                time
            }
        }
    }
}

pub fn validate_utc_offset(utc_offset: f64) -> Result<()> {
    if !utc_offset.is_finite() || utc_offset.abs() > MAX_UTC_OFFSET_HOURS {
        return Err(PrayerError::input_format(
            "utc-offset",
            "an hour offset between -14 and 14",
        ));
    }
    Ok(())
}

pub fn compute_day_markers(
    date: NaiveDate,
    coord: &GeoCoordinate,
    utc_offset: f64,
    config: &CalculationConfig,
) -> Result<DayMarkerRecord> {
    coord.validate()?;
    validate_utc_offset(utc_offset)?;
    Ok(day_record(date, coord, utc_offset, config))
}

fn day_record(
    date: NaiveDate,
    coord: &GeoCoordinate,
    utc_offset: f64,
    config: &CalculationConfig,
) -> DayMarkerRecord {
    let day = SolarDay::new(date, coord.longitude, utc_offset);
    let hours = marker_hours(&day, coord, config);
    let times = hours.map(angles::format_clock_time);
    debug!(
        %date,
        declination = day.declination,
        equation_of_time = day.equation_of_time,
        ?times,
        "computed prayer times"
    );
    DayMarkerRecord { date, times }
}

pub fn compute_range(
    start: NaiveDate,
    end: NaiveDate,
    coord: &GeoCoordinate,
    utc_offset: f64,
    config: &CalculationConfig,
) -> Result<Vec<DayMarkerRecord>> {
    if start > end {
        return Err(PrayerError::InvalidRange { start, end });
    }
    coord.validate()?;
    validate_utc_offset(utc_offset)?;

    let n_days = (end - start).num_days() as usize + 1;
    let records: Vec<DayMarkerRecord> = start
        .iter_days()
        .take(n_days)
        .map(|date| day_record(date, coord, utc_offset, config))
        .collect();

    info!(
        %start,
        %end,
        days = records.len(),
        method = %config.method,
        asr = ?config.asr,
        "computed prayer time table"
    );
    Ok(records)
}
