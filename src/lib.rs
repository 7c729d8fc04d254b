pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod js_assert;
pub(crate) mod js_date;
pub(crate) mod js_system;
pub mod testsuite;

pub use crate::core::{LocalZone, MAX_TIME_VALUE, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, make_date, make_day, make_time, time_clip};
pub use error::DateError;
pub use js_assert::{CheckTally, ERROR_MARKER, OK_MARKER, check};
pub use js_date::Date;
pub use js_system::OutputStream;
pub use testsuite::{CaseReport, Harness, SuiteReport, TestCase, cases, find_case, run_case, run_cases};
