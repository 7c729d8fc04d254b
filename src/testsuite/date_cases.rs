use super::Harness;
use crate::error::DateError;
use crate::js_date::Date;

pub(super) fn getters(h: &mut Harness) -> Result<(), DateError> {
    let d = Date::from_components(h.zone(), &[2023.0, 11.0, 25.0, 10.0, 30.0, 45.0, 123.0]);
    h.print(&d.to_locale_string())?;

    h.check(d.get_full_year() == 2023.0)?;
    h.check(d.get_month() == 11.0)?; // December
    h.check(d.get_date() == 25.0)?;
    h.check(d.get_day() == 1.0)?; // Monday
    h.check(d.get_hours() == 10.0)?;
    h.check(d.get_minutes() == 30.0)?;
    h.check(d.get_seconds() == 45.0)?;
    h.check(d.get_milliseconds() == 123.0)?;

    // two digit years are 19xx
    let d = Date::from_components(h.zone(), &[99.0, 0.0]);
    h.check(d.get_full_year() == 1999.0 && d.get_date() == 1.0)?;

    let d = Date::from_components(h.zone(), &[f64::NAN, 0.0]);
    h.check(!d.is_valid() && d.get_month().is_nan())?;
    Ok(())
}

pub(super) fn setters(h: &mut Harness) -> Result<(), DateError> {
    let zone = h.zone();
    let base = Date::from_components(zone, &[2023.0, 11.0, 25.0, 10.0, 30.0, 45.0, 123.0]);

    let mut d = base;
    d.set_milliseconds(7.0);
    h.check(d.get_milliseconds() == 7.0 && d.get_seconds() == 45.0)?;

    let mut d = base;
    d.set_seconds(75.0, None);
    h.check(d.get_minutes() == 31.0 && d.get_seconds() == 15.0 && d.get_milliseconds() == 123.0)?;

    let mut d = base;
    d.set_minutes(75.0, None, None);
    h.check(d.get_hours() == 11.0 && d.get_minutes() == 15.0 && d.get_seconds() == 45.0)?;

    let mut d = base;
    d.set_hours(23.0, Some(59.0), Some(59.0), Some(999.0));
    d.set_milliseconds(1000.0);
    h.check(d.to_locale_string() == "Tue Dec 26 00:00:00 2023")?;

    let mut d = base;
    d.set_date(32.0);
    h.check(d.get_full_year() == 2024.0 && d.get_month() == 0.0 && d.get_date() == 1.0 && d.get_hours() == 10.0)?;

    let mut d = base;
    d.set_full_year(2024.0, Some(1.0), Some(29.0));
    h.check(d.to_locale_date_string() == "Thu Feb 29 2024")?;
    d.set_full_year(2025.0, None, None);
    h.check(d.to_locale_date_string() == "Sat Mar  1 2025")?;

    let mut d = base;
    d.set_month(1.0, Some(31.0));
    h.check(d.get_month() == 2.0 && d.get_date() == 3.0)?;

    let mut d = Date::invalid(zone);
    h.check(d.set_seconds(20.0, None).is_nan())?;
    d.set_full_year(2000.0, None, None);
    h.check(d.get_full_year() == 2000.0 && d.get_month() == 0.0 && d.get_date() == 1.0)?;
    Ok(())
}

pub(super) fn format(h: &mut Harness) -> Result<(), DateError> {
    let zone = h.zone();
    let d = Date::from_components(zone, &[2009.0, 1.0, 13.0, 23.0, 31.0, 30.0]);
    h.print(&d.to_locale_string())?;
    h.check(d.to_locale_string() == "Fri Feb 13 23:31:30 2009")?;
    h.check(d.to_locale_date_string() == "Fri Feb 13 2009")?;
    h.check(d.to_locale_time_string() == "23:31:30")?;
    h.check(d.to_date_string() == "Fri Feb 13 2009")?;

    let u = Date::from_time_value(zone, Date::utc(&[2009.0, 1.0, 13.0, 23.0, 31.0, 30.0]));
    h.check(u.get_time() == 1_234_567_890_000.0)?;
    h.check(u.to_utc_string() == "Fri, 13 Feb 2009 23:31:30 GMT")?;
    h.check(u.to_iso_string()? == "2009-02-13T23:31:30.000Z")?;

    let invalid = Date::invalid(zone);
    h.check(invalid.to_locale_string() == "Invalid Date")?;
    h.check(invalid.to_iso_string().is_err() && invalid.to_json().is_none())?;
    Ok(())
}
