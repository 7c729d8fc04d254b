//! Case 1030: setSeconds() with and without a milliseconds argument.

use super::Harness;
use crate::error::DateError;
use crate::js_date::Date;

pub(super) fn run(h: &mut Harness) -> Result<(), DateError> {
    let mut d = Date::from_components(h.zone(), &[1900.0, 4.0 - 1.0, 2.0, 8.0, 10.0, 30.0]);
    let s = d.to_locale_string();
    h.print(&s)?;

    d.set_seconds(20.0, None);
    let s = d.to_locale_string();

    h.check(s == "Mon Apr  2 08:10:20 1900")?;

    d.set_seconds(20.0, Some(123.0));
    let s = d.to_locale_string();

    h.check(s == "Mon Apr  2 08:10:20 1900")?;
    h.check(d.get_milliseconds() == 123.0)?;
    Ok(())
}
