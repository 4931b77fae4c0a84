use chrono::{Datelike, NaiveDate};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
/// Apparent solar radius plus atmospheric refraction at the horizon.
pub const HORIZON_DEPRESSION: f64 = 0.833;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_hour(hours: f64) -> f64 {
    hours.rem_euclid(24.0)
}

pub fn day_of_year(date: NaiveDate) -> i32 {
    date.ordinal() as i32
}

pub fn intermediate_angle_b(n: i32) -> f64 {
    deg_to_rad((n - 1) as f64 * (360.0 / 365.0))
}

pub fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    229.18
        * (0.000075
            + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

pub fn utc_lst_correction(longitude: f64, eot: f64) -> f64 {
    (4.0 * longitude + eot) / 60.0
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

/// Clock time of apparent solar noon in hours, before normalization.
pub fn solar_noon(longitude: f64, eot: f64, utc_offset: f64) -> f64 {
    12.0 + utc_offset - utc_lst_correction(longitude, eot)
}

pub fn cos_hour_angle(latitude: f64, declination: f64, altitude: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let alt_rad = deg_to_rad(altitude);
    (alt_rad.sin() - lat_rad.sin() * dec_rad.sin()) / (lat_rad.cos() * dec_rad.cos())
}

/// Hours between solar noon and the moment the sun stands at `altitude`.
/// `None` when the sun never reaches that altitude on this day.
pub fn hour_angle_for_altitude(latitude: f64, declination: f64, altitude: f64) -> Option<f64> {
    let cos_h = cos_hour_angle(latitude, declination, altitude);
    if !cos_h.is_finite() || !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(rad_to_deg(cos_h.acos()) / DEGREES_PER_HOUR)
}

/// Like [`hour_angle_for_altitude`] but pins unreachable altitudes to noon
/// (sun always below) or to half a day (sun always above).
pub fn clamped_hour_angle(latitude: f64, declination: f64, altitude: f64) -> f64 {
    let cos_h = cos_hour_angle(latitude, declination, altitude);
    if cos_h.is_nan() || cos_h >= 1.0 {
        0.0
    } else if cos_h <= -1.0 {
        12.0
    } else {
        rad_to_deg(cos_h.acos()) / DEGREES_PER_HOUR
    }
}

pub fn rise_set_altitude(elevation: f64) -> f64 {
    -(HORIZON_DEPRESSION + 0.0347 * elevation.max(0.0).sqrt())
}

/// Sun altitude at which an object's shadow equals `shadow_factor` times its
/// height plus its noon shadow. When the noon sun stays below the horizon the
/// result approaches zero altitude.
pub fn asr_altitude(latitude: f64, declination: f64, shadow_factor: f64) -> f64 {
    let noon_zenith = (latitude - declination).abs().min(90.0);
    let noon_tan = deg_to_rad(noon_zenith).tan();
    rad_to_deg((1.0 / (shadow_factor + noon_tan)).atan())
}

/// Rounds to the nearest minute, half up, and renders `HH:MM`.
pub fn format_clock_time(hours: f64) -> String {
    let total = (normalize_hour(hours) * 60.0 + 0.5).floor() as i64;
    let total = total.rem_euclid(24 * 60);
    format!("{:02}:{:02}", total / 60, total % 60)
}
