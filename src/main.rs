use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use prayer_calendar::{
    compute_range, materialize, write_calendar, CalculationConfig, DayMarkerRecord,
    DurationConfig, GeoCoordinate, Marker, PrayerError, DEFAULT_FILE_NAME,
};

#[derive(Parser, Debug)]
#[command(
    name = "prayer-calendar",
    about = "Export daily prayer times for a location as an iCalendar file"
)]
struct Cli {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    start: String,
    /// Last day of the range, inclusive (YYYY-MM-DD)
    #[arg(long)]
    end: String,
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// Metres above sea level
    #[arg(long, default_value_t = 0.0)]
    elevation: f64,
    /// Default event duration in minutes
    #[arg(long)]
    duration: String,
    /// Dhuhr event duration in minutes; blank or omitted uses --duration
    #[arg(long)]
    dhuhr_duration: Option<String>,
    /// Calculation method: MWL, ISNA, Egypt, Makkah, Karachi, Tehran, Jafari
    #[arg(long, default_value = "Karachi")]
    method: String,
    /// Asr juristic school: standard or hanafi
    #[arg(long, default_value = "hanafi")]
    asr: String,
    /// Higher latitude rule: none, night-middle, one-seventh, angle-based
    #[arg(long, default_value = "night-middle")]
    high_latitude: String,
    /// Fixed offset from UTC in hours
    #[arg(long, default_value_t = 6.0, allow_negative_numbers = true)]
    utc_offset: f64,
    /// Print the computed table before writing the calendar
    #[arg(long)]
    print_table: bool,
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, PrayerError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| PrayerError::input_format(field, "a date in YYYY-MM-DD format"))
}

fn parse_minutes(field: &str, value: &str) -> Result<u32, PrayerError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| PrayerError::input_format(field, "a whole number of minutes"))
}

fn parse_optional_minutes(field: &str, value: Option<&str>) -> Result<Option<u32>, PrayerError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_minutes(field, v).map(Some),
    }
}

fn print_table(records: &[DayMarkerRecord]) {
    let header: Vec<String> = Marker::ALL.iter().map(|m| format!("{:<8}", m.name())).collect();
    println!("{:<12}{}", "Date", header.join(""));
    for record in records {
        let row: Vec<String> = record.iter().map(|(_, t)| format!("{t:<8}")).collect();
        println!("{:<12}{}", record.date.to_string(), row.join(""));
    }
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let start = parse_date("start date", &cli.start)?;
    let end = parse_date("end date", &cli.end)?;
    let durations = DurationConfig::new(
        parse_minutes("duration", &cli.duration)?,
        parse_optional_minutes("Dhuhr duration", cli.dhuhr_duration.as_deref())?,
    );
    durations.validate()?;

    let coord = GeoCoordinate::with_elevation(cli.lat, cli.lon, cli.elevation)?;
    let config = CalculationConfig::for_name(&cli.method)?
        .with_asr(cli.asr.parse()?)
        .with_high_latitude(cli.high_latitude.parse()?);

    let records = compute_range(start, end, &coord, cli.utc_offset, &config)
        .context("computing prayer times")?;
    if cli.print_table {
        print_table(&records);
    }

    let events = materialize(&records, &durations).context("building calendar events")?;
    write_calendar(&events, Path::new("."))
        .with_context(|| format!("writing {DEFAULT_FILE_NAME}"))?;

    println!("{DEFAULT_FILE_NAME} file created successfully.");
    Ok(())
}
