pub(crate) mod time;
pub(crate) mod zone;

pub use time::{MAX_TIME_VALUE, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, make_date, make_day, make_time, time_clip};
pub use zone::LocalZone;
