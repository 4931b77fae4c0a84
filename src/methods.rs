use std::fmt;
use std::str::FromStr;

use crate::error::{PrayerError, Result};
use crate::types::{AsrMethod, HighLatitudeRule, TwilightAngle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Mwl,
    Isna,
    Egypt,
    Makkah,
    Karachi,
    Tehran,
    Jafari,
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::Mwl,
        Method::Isna,
        Method::Egypt,
        Method::Makkah,
        Method::Karachi,
        Method::Tehran,
        Method::Jafari,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Mwl => "MWL",
            Method::Isna => "ISNA",
            Method::Egypt => "Egypt",
            Method::Makkah => "Makkah",
            Method::Karachi => "Karachi",
            Method::Tehran => "Tehran",
            Method::Jafari => "Jafari",
        }
    }

    pub fn fajr(self) -> TwilightAngle {
        match self {
            Method::Mwl => TwilightAngle::Degrees(18.0),
            Method::Isna => TwilightAngle::Degrees(15.0),
            Method::Egypt => TwilightAngle::Degrees(19.5),
            Method::Makkah => TwilightAngle::Degrees(18.5),
            Method::Karachi => TwilightAngle::Degrees(18.0),
            Method::Tehran => TwilightAngle::Degrees(17.7),
            Method::Jafari => TwilightAngle::Degrees(16.0),
        }
    }

    pub fn isha(self) -> TwilightAngle {
        match self {
            Method::Mwl => TwilightAngle::Degrees(17.0),
            Method::Isna => TwilightAngle::Degrees(15.0),
            Method::Egypt => TwilightAngle::Degrees(17.5),
            Method::Makkah => TwilightAngle::Minutes(90.0),
            Method::Karachi => TwilightAngle::Degrees(18.0),
            Method::Tehran | Method::Jafari => TwilightAngle::Degrees(14.0),
        }
    }

    pub fn maghrib(self) -> TwilightAngle {
        match self {
            Method::Tehran => TwilightAngle::Degrees(4.5),
            Method::Jafari => TwilightAngle::Degrees(4.0),
            _ => TwilightAngle::Minutes(0.0),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("jafri") {
            return Ok(Method::Jafari);
        }
        Method::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PrayerError::UnknownMethod(wanted.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationConfig {
    pub method: Method,
    pub fajr: TwilightAngle,
    pub isha: TwilightAngle,
    pub maghrib: TwilightAngle,
    pub asr: AsrMethod,
    pub dhuhr_offset_minutes: f64,
    pub high_latitude: HighLatitudeRule,
}

impl CalculationConfig {
    pub fn from_method(method: Method) -> Self {
        Self {
            method,
            fajr: method.fajr(),
            isha: method.isha(),
            maghrib: method.maghrib(),
            asr: AsrMethod::default(),
            dhuhr_offset_minutes: 0.0,
            high_latitude: HighLatitudeRule::default(),
        }
    }

    pub fn for_name(name: &str) -> Result<Self> {
        Ok(Self::from_method(name.parse()?))
    }

    pub fn with_asr(mut self, asr: AsrMethod) -> Self {
        self.asr = asr;
        self
    }

    pub fn with_high_latitude(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude = rule;
        self
    }

    pub fn with_dhuhr_offset(mut self, minutes: f64) -> Self {
        self.dhuhr_offset_minutes = minutes;
        self
    }
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self::from_method(Method::Mwl)
    }
}
