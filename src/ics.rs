//! iCalendar (RFC 5545) rendering of prayer events.
//!
//! Event start and end are written as floating local times, since they are
//! already expressed in the clock of the requested UTC offset. Creation stamps
//! are written in UTC.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::types::{PrayerCalendarEvent, PrayerEventCollection};

pub const DEFAULT_FILE_NAME: &str = "prayer_times.ics";
pub const PRODUCT_ID: &str = "-//prayer-calendar//EN";
const CRLF: &str = "\r\n";
const MAX_LINE_OCTETS: usize = 75;

pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;
    while rest.len() > limit {
        let mut split = limit;
        while !rest.is_char_boundary(split) {
            split -= 1;
        }
        out.push_str(&rest[..split]);
        out.push_str(CRLF);
        out.push(' ');
        rest = &rest[split..];
        // continuation lines lose one octet to the leading space
        limit = MAX_LINE_OCTETS - 1;
    }
    out.push_str(rest);
    out.push_str(CRLF);
}

fn format_local(dt: &NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

pub fn event_uid(event: &PrayerCalendarEvent) -> String {
    format!(
        "{}-{}@prayer-calendar",
        event.start.date().format("%Y%m%d"),
        event.name.name().to_ascii_lowercase()
    )
}

fn push_event(out: &mut String, event: &PrayerCalendarEvent) {
    let stamp = format_utc(&event.created_at);
    push_line(out, "BEGIN:VEVENT");
    push_line(out, &format!("UID:{}", event_uid(event)));
    push_line(out, &format!("DTSTAMP:{stamp}"));
    push_line(out, &format!("CREATED:{stamp}"));
    push_line(out, &format!("DTSTART:{}", format_local(&event.start)));
    push_line(out, &format!("DTEND:{}", format_local(&event.end)));
    push_line(out, &format!("SUMMARY:{}", escape_text(event.name.name())));
    push_line(out, "END:VEVENT");
}

pub fn render_calendar(events: &PrayerEventCollection) -> String {
    let mut out = String::with_capacity(64 + events.len() * 256);
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{PRODUCT_ID}"));
    push_line(&mut out, "CALSCALE:GREGORIAN");
    for event in events {
        push_event(&mut out, event);
    }
    push_line(&mut out, "END:VCALENDAR");
    out
}

/// Writes the calendar as [`DEFAULT_FILE_NAME`] inside `dir`.
pub fn write_calendar(events: &PrayerEventCollection, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(DEFAULT_FILE_NAME);
    let body = render_calendar(events);
    fs::write(&path, body.as_bytes())?;
    info!(path = %path.display(), events = events.len(), "wrote calendar");
    Ok(path)
}
