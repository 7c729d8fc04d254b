// Initialize logger for this integration test binary so `RUST_LOG` is honored.
// Using `ctor` ensures initialization runs before tests start.
#[ctor::ctor]
fn __init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).is_test(true).try_init();
}

#[cfg(test)]
mod date_tests {
    use esdate::{Date, DateError, LocalZone, MAX_TIME_VALUE};

    fn tokyo() -> LocalZone {
        "+09:00".parse().unwrap()
    }

    #[test]
    fn test_date_now_is_valid() {
        let d = Date::now(LocalZone::System);
        assert!(d.is_valid());
        assert!(d.get_full_year() >= 2024.0);
    }

    #[test]
    fn test_date_constructor_with_timestamp() {
        let d = Date::from_time_value(LocalZone::utc(), 1234567890000.0);
        assert_eq!(d.get_time(), 1234567890000.0);
        assert_eq!(d.value_of(), 1234567890000.0);
    }

    #[test]
    fn test_date_constructor_with_components_is_local() {
        let d = Date::from_components(tokyo(), &[2023.0, 11.0, 25.0, 10.0, 30.0, 0.0, 0.0]);
        assert_eq!(d.get_hours(), 10.0);
        assert_eq!(d.get_utc_hours(), 1.0);
        assert_eq!(d.get_timezone_offset(), -540.0);
    }

    #[test]
    fn test_date_constructor_bad_arity() {
        assert!(!Date::from_components(LocalZone::utc(), &[]).is_valid());
        assert!(!Date::from_components(LocalZone::utc(), &[1.0; 8]).is_valid());
    }

    #[test]
    fn test_date_get_methods() {
        let d = Date::from_components(LocalZone::utc(), &[2023.0, 11.0, 25.0, 10.0, 30.0, 45.0, 123.0]);
        assert_eq!(d.get_full_year(), 2023.0);
        assert_eq!(d.get_month(), 11.0); // December (0-based)
        assert_eq!(d.get_date(), 25.0);
        assert_eq!(d.get_day(), 1.0);
        assert_eq!(d.get_hours(), 10.0);
        assert_eq!(d.get_minutes(), 30.0);
        assert_eq!(d.get_seconds(), 45.0);
        assert_eq!(d.get_milliseconds(), 123.0);
    }

    #[test]
    fn test_date_utc_static() {
        assert_eq!(Date::utc(&[1970.0, 0.0, 1.0]), 0.0);
        assert_eq!(Date::utc(&[2009.0, 1.0, 13.0, 23.0, 31.0, 30.0]), 1234567890000.0);
        assert!(Date::utc(&[f64::NAN, 0.0]).is_nan());
    }

    #[test]
    fn test_date_parse() {
        let utc = LocalZone::utc();
        assert_eq!(Date::parse(utc, "2023-12-25T10:30:00Z"), Some(1703500200000.0));
        assert_eq!(Date::parse(utc, "2023-12-25"), Some(1703462400000.0));
        assert_eq!(Date::parse(tokyo(), "2023-12-25"), Some(1703462400000.0));
        // without an offset a date-time is local
        assert_eq!(Date::parse(tokyo(), "2023-12-25T10:30:00"), Some(1703500200000.0 - 9.0 * 3_600_000.0));
        assert_eq!(Date::parse(utc, "Aug 9, 1995"), Some(807926400000.0));
        assert_eq!(Date::parse(utc, "not a date"), None);
    }

    #[test]
    fn test_set_minutes_and_hours_roll_over() {
        let mut d = Date::from_components(LocalZone::utc(), &[2023.0, 11.0, 31.0, 23.0, 59.0, 0.0]);
        d.set_minutes(60.0, None, None);
        assert_eq!(d.to_locale_string(), "Mon Jan  1 00:00:00 2024");
        d.set_hours(-1.0, None, None, None);
        assert_eq!(d.to_locale_string(), "Sun Dec 31 23:00:00 2023");
    }

    #[test]
    fn test_set_time_clips() {
        let mut d = Date::from_time_value(LocalZone::utc(), 0.0);
        assert_eq!(d.set_time(1.7), 1.0);
        assert!(d.set_time(8.64e15 + 1.0).is_nan());
        assert!(!d.is_valid());
    }

    #[test]
    fn test_setters_on_invalid_date_stay_invalid() {
        let mut d = Date::invalid(LocalZone::utc());
        assert!(d.set_milliseconds(1.0).is_nan());
        assert!(d.set_minutes(1.0, None, None).is_nan());
        assert!(d.set_hours(1.0, None, None, None).is_nan());
        assert!(d.set_date(1.0).is_nan());
        assert!(d.set_month(1.0, None).is_nan());
        assert!(!d.is_valid());
    }

    #[test]
    fn test_date_to_string_formats() {
        let d = Date::from_time_value(tokyo(), 1234567890000.0);
        assert_eq!(d.to_string(), "Sat Feb 14 2009 08:31:30 GMT+0900");
        assert_eq!(d.to_time_string(), "08:31:30 GMT+0900");
        assert_eq!(d.to_locale_string(), "Sat Feb 14 08:31:30 2009");
        assert_eq!(d.to_utc_string(), "Fri, 13 Feb 2009 23:31:30 GMT");
        assert_eq!(d.to_iso_string().unwrap(), "2009-02-13T23:31:30.000Z");
        assert_eq!(d.to_json().as_deref(), Some("2009-02-13T23:31:30.000Z"));
    }

    #[test]
    fn test_iso_string_expanded_years() {
        let d = Date::from_time_value(LocalZone::utc(), Date::utc(&[-1.0, 0.0, 1.0]));
        assert_eq!(d.to_iso_string().unwrap(), "-000001-01-01T00:00:00.000Z");
        let d = Date::from_time_value(LocalZone::utc(), Date::utc(&[10000.0, 0.0, 1.0]));
        assert_eq!(d.to_iso_string().unwrap(), "+010000-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_formats_at_time_value_limits() {
        let d = Date::from_time_value(LocalZone::utc(), MAX_TIME_VALUE);
        assert!(d.is_valid());
        assert_eq!(d.get_full_year(), 275760.0);
        assert_eq!(d.to_locale_string(), "Sat Sep 13 00:00:00 275760");
        assert_eq!(d.to_string(), "Sat Sep 13 275760 00:00:00 GMT+0000");
        assert_eq!(d.to_utc_string(), "Sat, 13 Sep 275760 00:00:00 GMT");
        assert_eq!(d.to_iso_string().unwrap(), "+275760-09-13T00:00:00.000Z");

        let d = Date::from_time_value(LocalZone::utc(), -MAX_TIME_VALUE);
        assert!(d.is_valid());
        assert_eq!(d.to_locale_string(), "Tue Apr 20 00:00:00 -271821");
        assert_eq!(d.to_utc_string(), "Tue, 20 Apr -271821 00:00:00 GMT");
        assert_eq!(d.to_iso_string().unwrap(), "-271821-04-20T00:00:00.000Z");
    }

    #[test]
    fn test_local_formats_near_limit_use_zone_offset() {
        let d = Date::from_time_value(tokyo(), MAX_TIME_VALUE);
        assert_eq!(d.to_locale_string(), "Sat Sep 13 09:00:00 275760");
        assert_eq!(d.to_time_string(), "09:00:00 GMT+0900");
    }

    #[test]
    fn test_five_digit_year_has_no_plus_sign() {
        let d = Date::from_components(LocalZone::utc(), &[10000.0, 0.0, 1.0]);
        assert_eq!(d.to_locale_string(), "Sat Jan  1 00:00:00 10000");
        assert_eq!(d.to_string(), "Sat Jan 01 10000 00:00:00 GMT+0000");
        assert_eq!(d.to_date_string(), "Sat Jan 01 10000");
    }

    #[test]
    fn test_small_years_are_zero_padded() {
        let d = Date::from_time_value(LocalZone::utc(), Date::utc(&[-1.0, 0.0, 1.0]));
        assert_eq!(d.to_locale_date_string(), "Fri Jan  1 -0001");
        let mut d = Date::from_components(LocalZone::utc(), &[2000.0, 0.0, 1.0]);
        d.set_full_year(800.0, None, None);
        assert_eq!(d.to_utc_string(), "Sat, 01 Jan 0800 00:00:00 GMT");
    }

    #[test]
    fn test_invalid_date_formats() {
        let d = Date::invalid(LocalZone::utc());
        assert_eq!(d.to_string(), "Invalid Date");
        assert_eq!(d.to_locale_string(), "Invalid Date");
        assert_eq!(d.to_utc_string(), "Invalid Date");
        match d.to_iso_string() {
            Err(e @ DateError::RangeError { .. }) => assert_eq!(e.message(), "Invalid time value"),
            other => panic!("expected RangeError, got {other:?}"),
        }
    }
}
