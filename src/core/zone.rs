use crate::core::time::MS_PER_DAY;
use crate::error::DateError;
use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone};
use std::fmt;
use std::str::FromStr;

/// The zone a `Date` uses for its local-time fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalZone {
    /// Whatever the host tz database says (`TZ`, `/etc/localtime`, ...).
    #[default]
    System,
    Fixed(FixedOffset),
}

impl LocalZone {
    pub fn utc() -> Self {
        LocalZone::Fixed(chrono::Utc.fix())
    }

    /// Offset east of UTC, in milliseconds, in effect at UTC time value `t`.
    pub fn offset_ms_at_utc(&self, t: f64) -> f64 {
        match self {
            LocalZone::Fixed(offset) => offset.local_minus_utc() as f64 * 1_000.0,
            LocalZone::System => {
                if !t.is_finite() {
                    return 0.0;
                }
                // Outside chrono's range there is no tz data to consult.
                let secs = DateTime::from_timestamp_millis(t.floor() as i64)
                    .map(|dt| Local.offset_from_utc_datetime(&dt.naive_utc()).local_minus_utc())
                    .unwrap_or(0);
                secs as f64 * 1_000.0
            }
        }
    }

    /// LocalTime(t).
    pub fn local_time(&self, t: f64) -> f64 {
        t + self.offset_ms_at_utc(t)
    }

    /// UTC(t): the time value whose local time is `local`.
    ///
    /// A repeated local time resolves to its earlier instant. A local time
    /// skipped by a forward transition is read with the offset in effect
    /// before it, so it lands after the transition.
    pub fn utc_from_local(&self, local: f64) -> f64 {
        resolve_local(local, |t| self.offset_ms_at_utc(t))
    }
}

// No zone changes its offset twice within a day, and no offset exceeds one.
fn resolve_local(local: f64, offset_at: impl Fn(f64) -> f64) -> f64 {
    if !local.is_finite() {
        return f64::NAN;
    }
    let before = offset_at(local - MS_PER_DAY);
    let after = offset_at(local + MS_PER_DAY);
    let earlier = local - before;
    if before == after {
        return earlier;
    }
    let later = local - after;
    if earlier + offset_at(earlier) == local {
        earlier
    } else if later + offset_at(later) == local {
        later
    } else {
        log::trace!("local time {local} falls in a transition gap");
        earlier
    }
}

impl fmt::Display for LocalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalZone::System => write!(f, "local"),
            LocalZone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for LocalZone {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let invalid = || DateError::InvalidZone { value: s.to_string() };

        if value.eq_ignore_ascii_case("local") || value.eq_ignore_ascii_case("system") {
            return Ok(LocalZone::System);
        }
        if value.eq_ignore_ascii_case("utc") || value.eq_ignore_ascii_case("gmt") || value.eq_ignore_ascii_case("z") {
            return Ok(LocalZone::utc());
        }

        let (sign, rest) = match value.as_bytes().first() {
            Some(b'+') => (1, &value[1..]),
            Some(b'-') => (-1, &value[1..]),
            _ => return Err(invalid()),
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let (hours, minutes) = match digits.len() {
            2 => (&digits[..2], "0"),
            4 => (&digits[..2], &digits[2..]),
            _ => return Err(invalid()),
        };
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }
        FixedOffset::east_opt(sign * (hours * 3_600 + minutes * 60))
            .map(LocalZone::Fixed)
            .ok_or_else(invalid)
    }
}
