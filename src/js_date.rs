use crate::core::time::{
    date_from_time, day, hour_from_time, min_from_time, month_from_time, ms_from_time, sec_from_time, time_within_day, week_day,
    year_from_time,
};
use crate::core::{LocalZone, make_date, make_day, make_time, time_clip};
use crate::error::DateError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::fmt;

const INVALID_DATE: &str = "Invalid Date";

/// A Date value: a time value in milliseconds since the epoch (NaN when
/// invalid) plus the zone its local-time fields are read in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Date {
    time_value: f64,
    zone: LocalZone,
}

impl Date {
    pub fn from_time_value(zone: LocalZone, t: f64) -> Self {
        Date {
            time_value: time_clip(t),
            zone,
        }
    }

    pub fn invalid(zone: LocalZone) -> Self {
        Date {
            time_value: f64::NAN,
            zone,
        }
    }

    pub fn now(zone: LocalZone) -> Self {
        Date::from_time_value(zone, Utc::now().timestamp_millis() as f64)
    }

    /// `new Date(year, month[, day[, hours[, minutes[, seconds[, ms]]]]])`, read as local time.
    ///
    /// Month is zero-based and years 0 through 99 mean 1900 through 1999.
    /// An empty slice or more than seven components gives an invalid date.
    pub fn from_components(zone: LocalZone, components: &[f64]) -> Self {
        if components.is_empty() || components.len() > 7 {
            return Date::invalid(zone);
        }
        let local = components_to_time_value(components);
        let date = Date::from_time_value(zone, zone.utc_from_local(local));
        log::debug!("Date::from_components {components:?} in {zone} -> {}", date.time_value);
        date
    }

    /// `Date.UTC(...)`: same component rules as `from_components`, read as UTC.
    pub fn utc(components: &[f64]) -> f64 {
        if components.is_empty() || components.len() > 7 {
            return f64::NAN;
        }
        time_clip(components_to_time_value(components))
    }

    /// `Date.parse`: the time value for `date_str`, or `None` if no known format matches.
    pub fn parse(zone: LocalZone, date_str: &str) -> Option<f64> {
        parse_date_string(zone, date_str.trim())
    }

    pub fn is_valid(&self) -> bool {
        !self.time_value.is_nan()
    }

    pub fn get_time(&self) -> f64 {
        self.time_value
    }

    pub fn value_of(&self) -> f64 {
        self.time_value
    }

    fn local_field(&self, field: fn(f64) -> f64) -> f64 {
        if self.time_value.is_nan() {
            return f64::NAN;
        }
        field(self.zone.local_time(self.time_value))
    }

    fn utc_field(&self, field: fn(f64) -> f64) -> f64 {
        if self.time_value.is_nan() {
            return f64::NAN;
        }
        field(self.time_value)
    }

    pub fn get_full_year(&self) -> f64 {
        self.local_field(year_from_time)
    }

    pub fn get_month(&self) -> f64 {
        self.local_field(month_from_time)
    }

    pub fn get_date(&self) -> f64 {
        self.local_field(date_from_time)
    }

    pub fn get_day(&self) -> f64 {
        self.local_field(week_day)
    }

    pub fn get_hours(&self) -> f64 {
        self.local_field(hour_from_time)
    }

    pub fn get_minutes(&self) -> f64 {
        self.local_field(min_from_time)
    }

    pub fn get_seconds(&self) -> f64 {
        self.local_field(sec_from_time)
    }

    pub fn get_milliseconds(&self) -> f64 {
        self.local_field(ms_from_time)
    }

    pub fn get_utc_full_year(&self) -> f64 {
        self.utc_field(year_from_time)
    }

    pub fn get_utc_month(&self) -> f64 {
        self.utc_field(month_from_time)
    }

    pub fn get_utc_date(&self) -> f64 {
        self.utc_field(date_from_time)
    }

    pub fn get_utc_day(&self) -> f64 {
        self.utc_field(week_day)
    }

    pub fn get_utc_hours(&self) -> f64 {
        self.utc_field(hour_from_time)
    }

    pub fn get_utc_minutes(&self) -> f64 {
        self.utc_field(min_from_time)
    }

    pub fn get_utc_seconds(&self) -> f64 {
        self.utc_field(sec_from_time)
    }

    pub fn get_utc_milliseconds(&self) -> f64 {
        self.utc_field(ms_from_time)
    }

    /// Minutes to add to local time to get UTC.
    pub fn get_timezone_offset(&self) -> f64 {
        if self.time_value.is_nan() {
            return f64::NAN;
        }
        (self.time_value - self.zone.local_time(self.time_value)) / 60_000.0
    }

    // Shared tail of the local-time setters: convert back to UTC, clip, store.
    fn store_local(&mut self, method: &str, local: f64) -> f64 {
        self.time_value = time_clip(self.zone.utc_from_local(local));
        log::debug!("Date.prototype.{method} -> {}", self.time_value);
        self.time_value
    }

    fn current_local(&self) -> Option<f64> {
        if self.time_value.is_nan() {
            None
        } else {
            Some(self.zone.local_time(self.time_value))
        }
    }

    pub fn set_time(&mut self, t: f64) -> f64 {
        self.time_value = time_clip(t);
        log::debug!("Date.prototype.setTime -> {}", self.time_value);
        self.time_value
    }

    pub fn set_milliseconds(&mut self, ms: f64) -> f64 {
        let Some(t) = self.current_local() else {
            return f64::NAN;
        };
        let time = make_time(hour_from_time(t), min_from_time(t), sec_from_time(t), ms);
        self.store_local("setMilliseconds", make_date(day(t), time))
    }

    /// `setSeconds(sec[, ms])`: only the second (and, if given, millisecond) field changes.
    pub fn set_seconds(&mut self, sec: f64, ms: Option<f64>) -> f64 {
        let Some(t) = self.current_local() else {
            return f64::NAN;
        };
        let milli = ms.unwrap_or_else(|| ms_from_time(t));
        let time = make_time(hour_from_time(t), min_from_time(t), sec, milli);
        self.store_local("setSeconds", make_date(day(t), time))
    }

    pub fn set_minutes(&mut self, min: f64, sec: Option<f64>, ms: Option<f64>) -> f64 {
        let Some(t) = self.current_local() else {
            return f64::NAN;
        };
        let s = sec.unwrap_or_else(|| sec_from_time(t));
        let milli = ms.unwrap_or_else(|| ms_from_time(t));
        let time = make_time(hour_from_time(t), min, s, milli);
        self.store_local("setMinutes", make_date(day(t), time))
    }

    pub fn set_hours(&mut self, hour: f64, min: Option<f64>, sec: Option<f64>, ms: Option<f64>) -> f64 {
        let Some(t) = self.current_local() else {
            return f64::NAN;
        };
        let m = min.unwrap_or_else(|| min_from_time(t));
        let s = sec.unwrap_or_else(|| sec_from_time(t));
        let milli = ms.unwrap_or_else(|| ms_from_time(t));
        let time = make_time(hour, m, s, milli);
        self.store_local("setHours", make_date(day(t), time))
    }

    pub fn set_date(&mut self, date: f64) -> f64 {
        let Some(t) = self.current_local() else {
            return f64::NAN;
        };
        let new_day = make_day(year_from_time(t), month_from_time(t), date);
        self.store_local("setDate", make_date(new_day, time_within_day(t)))
    }

    pub fn set_month(&mut self, month: f64, date: Option<f64>) -> f64 {
        let Some(t) = self.current_local() else {
            return f64::NAN;
        };
        let dt = date.unwrap_or_else(|| date_from_time(t));
        let new_day = make_day(year_from_time(t), month, dt);
        self.store_local("setMonth", make_date(new_day, time_within_day(t)))
    }

    /// Unlike the other setters, an invalid date is treated as +0 local time.
    pub fn set_full_year(&mut self, year: f64, month: Option<f64>, date: Option<f64>) -> f64 {
        let t = self.current_local().unwrap_or(0.0);
        let m = month.unwrap_or_else(|| month_from_time(t));
        let dt = date.unwrap_or_else(|| date_from_time(t));
        let new_day = make_day(year, m, dt);
        self.store_local("setFullYear", make_date(new_day, time_within_day(t)))
    }

    fn local_fields(&self) -> Option<Fields> {
        if self.time_value.is_nan() {
            return None;
        }
        let offset_ms = self.zone.offset_ms_at_utc(self.time_value);
        Some(Fields::at(self.time_value + offset_ms, offset_ms))
    }

    fn utc_fields(&self) -> Option<Fields> {
        if self.time_value.is_nan() {
            return None;
        }
        Some(Fields::at(self.time_value, 0.0))
    }

    fn format_local(&self, render: fn(&Fields) -> String) -> String {
        match self.local_fields() {
            Some(fields) => render(&fields),
            None => INVALID_DATE.to_string(),
        }
    }

    /// `"Ddd Mon  D HH:MM:SS YYYY"` in local time, day of month space-padded.
    pub fn to_locale_string(&self) -> String {
        self.format_local(|f| format!("{} {} {:>2} {} {}", f.weekday_name(), f.month_name(), f.date, f.clock(), f.year_string()))
    }

    pub fn to_locale_date_string(&self) -> String {
        self.format_local(|f| format!("{} {} {:>2} {}", f.weekday_name(), f.month_name(), f.date, f.year_string()))
    }

    pub fn to_locale_time_string(&self) -> String {
        self.format_local(Fields::clock)
    }

    pub fn to_date_string(&self) -> String {
        self.format_local(Fields::date_string)
    }

    pub fn to_time_string(&self) -> String {
        self.format_local(|f| format!("{} {}", f.clock(), f.zone_string()))
    }

    pub fn to_utc_string(&self) -> String {
        match self.utc_fields() {
            Some(f) => format!(
                "{}, {:02} {} {} {} GMT",
                f.weekday_name(),
                f.date,
                f.month_name(),
                f.year_string(),
                f.clock()
            ),
            None => INVALID_DATE.to_string(),
        }
    }

    pub fn to_iso_string(&self) -> Result<String, DateError> {
        let Some(f) = self.utc_fields() else {
            return Err(crate::range_error_here!("Invalid time value"));
        };
        let year = if (0..=9999).contains(&f.year) {
            format!("{:04}", f.year)
        } else {
            // Expanded years carry a sign and six digits.
            let sign = if f.year < 0 { '-' } else { '+' };
            format!("{sign}{:06}", f.year.unsigned_abs())
        };
        Ok(format!("{year}-{:02}-{:02}T{}.{:03}Z", f.month + 1, f.date, f.clock(), f.ms))
    }

    /// `None` where a script would see `null`.
    pub fn to_json(&self) -> Option<String> {
        self.to_iso_string().ok()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_local(|d| format!("{} {} {}", d.date_string(), d.clock(), d.zone_string())))
    }
}

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_NAMES: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

// Calendar fields of one time value, split with the crate's own arithmetic so
// every clipped time value (years -271821 through 275760) can be printed.
struct Fields {
    year: i32,
    month: usize,
    date: u32,
    week_day: usize,
    hour: u32,
    minute: u32,
    second: u32,
    ms: u32,
    offset_minutes: i32,
}

impl Fields {
    fn at(t: f64, offset_ms: f64) -> Self {
        Fields {
            year: year_from_time(t) as i32,
            month: month_from_time(t) as usize,
            date: date_from_time(t) as u32,
            week_day: week_day(t) as usize,
            hour: hour_from_time(t) as u32,
            minute: min_from_time(t) as u32,
            second: sec_from_time(t) as u32,
            ms: ms_from_time(t) as u32,
            offset_minutes: (offset_ms / 60_000.0).trunc() as i32,
        }
    }

    fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.week_day]
    }

    fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month]
    }

    /// At least four digits; negative years keep their minus sign, positive years get none.
    fn year_string(&self) -> String {
        if self.year < 0 {
            format!("-{:04}", self.year.unsigned_abs())
        } else {
            format!("{:04}", self.year)
        }
    }

    fn clock(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    fn date_string(&self) -> String {
        format!("{} {} {:02} {}", self.weekday_name(), self.month_name(), self.date, self.year_string())
    }

    fn zone_string(&self) -> String {
        let sign = if self.offset_minutes < 0 { '-' } else { '+' };
        let abs = self.offset_minutes.unsigned_abs();
        format!("GMT{sign}{:02}{:02}", abs / 60, abs % 60)
    }
}

fn components_to_time_value(components: &[f64]) -> f64 {
    let component = |i: usize, default: f64| components.get(i).copied().unwrap_or(default);

    let mut year = component(0, f64::NAN);
    if !year.is_nan() {
        let int_year = year.trunc();
        if (0.0..=99.0).contains(&int_year) {
            year = 1900.0 + int_year;
        }
    }
    let day = make_day(year, component(1, 0.0), component(2, 1.0));
    let time = make_time(component(3, 0.0), component(4, 0.0), component(5, 0.0), component(6, 0.0));
    make_date(day, time)
}

/// Parse a date string into a time value (milliseconds since Unix epoch)
fn parse_date_string(zone: LocalZone, date_str: &str) -> Option<f64> {
    // Try ISO 8601 format first (most common)
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.timestamp_millis() as f64);
    }

    // Try parsing as RFC 2822 (email format)
    if let Ok(dt) = DateTime::parse_from_rfc2822(date_str) {
        return Some(dt.timestamp_millis() as f64);
    }

    // Try parsing "Aug 9, 1995" format manually
    if let Some(local) = parse_month_day_year(date_str) {
        return Some(time_clip(zone.utc_from_local(local)));
    }

    // Explicit UTC designator
    for format in ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%SZ"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(Utc.from_utc_datetime(&dt).timestamp_millis() as f64);
        }
    }

    // Date-time forms without an offset are local time
    let local_formats = [
        "%Y-%m-%dT%H:%M:%S%.f", // ISO without designator
        "%Y-%m-%dT%H:%M",       // ISO without seconds
        "%Y-%m-%d %H:%M:%S",    // MySQL format
        "%Y/%m/%d %H:%M:%S",    // Alternative format
        "%m/%d/%Y %H:%M:%S",    // US format
    ];
    for format in &local_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            let local = Utc.from_utc_datetime(&dt).timestamp_millis() as f64;
            return Some(time_clip(zone.utc_from_local(local)));
        }
    }

    // Date-only ISO forms are UTC midnight
    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        let datetime = date.and_time(NaiveTime::MIN);
        return Some(Utc.from_utc_datetime(&datetime).timestamp_millis() as f64);
    }

    // Other date-only forms are local midnight
    for format in ["%m/%d/%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, format) {
            let local = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)).timestamp_millis() as f64;
            return Some(time_clip(zone.utc_from_local(local)));
        }
    }

    None
}

/// Parse dates in "Aug 9, 1995" format, returning a local time value
fn parse_month_day_year(date_str: &str) -> Option<f64> {
    let parts: Vec<&str> = date_str.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }
    let day_str = parts[1].trim_end_matches(',');
    let month = month_index(parts[0])?;
    let (Ok(day), Ok(year)) = (day_str.parse::<u32>(), parts[2].parse::<i32>()) else {
        return None;
    };
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)).timestamp_millis() as f64)
}

fn month_index(name: &str) -> Option<u32> {
    let month = match name {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sep" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => return None,
    };
    Some(month)
}
