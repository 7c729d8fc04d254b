//! Time value arithmetic on `f64` milliseconds since the Unix epoch.
//!
//! These follow the abstract operations of ECMA-262 section 21.4.1 so that
//! field overflow (e.g. 75 seconds) rolls into the next larger field instead
//! of being rejected the way `chrono` constructors reject it.

pub const MS_PER_SECOND: f64 = 1_000.0;
pub const MS_PER_MINUTE: f64 = 60_000.0;
pub const MS_PER_HOUR: f64 = 3_600_000.0;
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Largest magnitude a time value may have (100 000 000 days).
pub const MAX_TIME_VALUE: f64 = 8.64e15;

pub(crate) fn day(t: f64) -> f64 {
    (t / MS_PER_DAY).floor()
}

pub(crate) fn time_within_day(t: f64) -> f64 {
    t.rem_euclid(MS_PER_DAY)
}

pub(crate) fn days_in_year(y: f64) -> f64 {
    if y % 4.0 != 0.0 {
        365.0
    } else if y % 100.0 != 0.0 {
        366.0
    } else if y % 400.0 != 0.0 {
        365.0
    } else {
        366.0
    }
}

pub(crate) fn day_from_year(y: f64) -> f64 {
    365.0 * (y - 1970.0) + ((y - 1969.0) / 4.0).floor() - ((y - 1901.0) / 100.0).floor() + ((y - 1601.0) / 400.0).floor()
}

pub(crate) fn time_from_year(y: f64) -> f64 {
    MS_PER_DAY * day_from_year(y)
}

pub(crate) fn year_from_time(t: f64) -> f64 {
    // Estimate, then correct by at most a year either way.
    let mut y = (t / (MS_PER_DAY * 365.2425)).floor() + 1970.0;
    while time_from_year(y) > t {
        y -= 1.0;
    }
    while time_from_year(y + 1.0) <= t {
        y += 1.0;
    }
    y
}

pub(crate) fn in_leap_year(t: f64) -> bool {
    days_in_year(year_from_time(t)) == 366.0
}

fn day_within_year(t: f64) -> f64 {
    day(t) - day_from_year(year_from_time(t))
}

// Cumulative day counts at the start of each month in a common year.
const MONTH_STARTS: [f64; 13] = [0.0, 31.0, 59.0, 90.0, 120.0, 151.0, 181.0, 212.0, 243.0, 273.0, 304.0, 334.0, 365.0];

fn month_start(month: usize, leap: bool) -> f64 {
    let start = MONTH_STARTS[month];
    if leap && month >= 2 { start + 1.0 } else { start }
}

/// Zero-based month (0 = January).
pub(crate) fn month_from_time(t: f64) -> f64 {
    let d = day_within_year(t);
    let leap = in_leap_year(t);
    (0..12).find(|&m| d < month_start(m + 1, leap)).unwrap_or(11) as f64
}

/// One-based day of the month.
pub(crate) fn date_from_time(t: f64) -> f64 {
    let d = day_within_year(t);
    let m = month_from_time(t) as usize;
    d - month_start(m, in_leap_year(t)) + 1.0
}

/// Day of the week, 0 = Sunday.
pub(crate) fn week_day(t: f64) -> f64 {
    (day(t) + 4.0).rem_euclid(7.0)
}

pub(crate) fn hour_from_time(t: f64) -> f64 {
    (t / MS_PER_HOUR).floor().rem_euclid(24.0)
}

pub(crate) fn min_from_time(t: f64) -> f64 {
    (t / MS_PER_MINUTE).floor().rem_euclid(60.0)
}

pub(crate) fn sec_from_time(t: f64) -> f64 {
    (t / MS_PER_SECOND).floor().rem_euclid(60.0)
}

pub(crate) fn ms_from_time(t: f64) -> f64 {
    t.rem_euclid(MS_PER_SECOND)
}

fn to_integer(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.trunc() }
}

/// MakeTime: combine clock fields into milliseconds within a (possibly overflowing) day.
pub fn make_time(hour: f64, min: f64, sec: f64, ms: f64) -> f64 {
    if !(hour.is_finite() && min.is_finite() && sec.is_finite() && ms.is_finite()) {
        return f64::NAN;
    }
    to_integer(hour) * MS_PER_HOUR + to_integer(min) * MS_PER_MINUTE + to_integer(sec) * MS_PER_SECOND + to_integer(ms)
}

/// MakeDay: days since the epoch for a year, zero-based month and one-based date.
///
/// The month may lie outside 0..12; it is folded into the year first.
pub fn make_day(year: f64, month: f64, date: f64) -> f64 {
    if !(year.is_finite() && month.is_finite() && date.is_finite()) {
        return f64::NAN;
    }
    let y = to_integer(year);
    let m = to_integer(month);
    let dt = to_integer(date);
    let ym = y + (m / 12.0).floor();
    if ym.abs() > 400_000.0 {
        return f64::NAN;
    }
    let mn = m.rem_euclid(12.0) as usize;
    let leap = days_in_year(ym) == 366.0;
    day_from_year(ym) + month_start(mn, leap) + dt - 1.0
}

pub fn make_date(day: f64, time: f64) -> f64 {
    if !(day.is_finite() && time.is_finite()) {
        return f64::NAN;
    }
    let tv = day * MS_PER_DAY + time;
    if tv.is_finite() { tv } else { f64::NAN }
}

/// TimeClip: NaN outside the representable range, otherwise truncated toward zero.
pub fn time_clip(t: f64) -> f64 {
    if !t.is_finite() || t.abs() > MAX_TIME_VALUE {
        return f64::NAN;
    }
    t.trunc() + 0.0
}
