pub mod angles;
pub mod error;
pub mod events;
pub mod ics;
pub mod methods;
pub mod prayer_times;
pub mod types;

pub use angles::{
    asr_altitude, clamped_hour_angle, day_of_year, deg_to_rad, equation_of_time,
    format_clock_time, hour_angle_for_altitude, normalize_hour, rad_to_deg,
    rise_set_altitude, solar_declination, solar_noon, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use error::PrayerError;

pub use events::{materialize, materialize_at, parse_clock_time};

pub use ics::{render_calendar, write_calendar, DEFAULT_FILE_NAME};

pub use methods::{CalculationConfig, Method};

pub use prayer_times::{compute_day_markers, compute_range, marker_hours, SolarDay};

pub use types::{
    AsrMethod, DayMarkerRecord, DurationConfig, GeoCoordinate, HighLatitudeRule, Marker,
    PrayerCalendarEvent, PrayerEventCollection, TwilightAngle,
};
