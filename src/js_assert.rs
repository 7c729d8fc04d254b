use crate::error::DateError;
use crate::js_system::OutputStream;

pub const OK_MARKER: &str = "OK\n";
pub const ERROR_MARKER: &str = "*** ERROR ***\n";

/// Print `OK` or `*** ERROR ***` for `result` and hand `result` back.
///
/// A false result is not an error; only a failing stream is.
pub fn check(out: &mut OutputStream, result: bool) -> Result<bool, DateError> {
    if result {
        out.write(OK_MARKER, 3)?;
    } else {
        out.write(ERROR_MARKER, 14)?;
    }
    Ok(result)
}

/// Running count of the markers a harness has printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckTally {
    pub passed: usize,
    pub failed: usize,
}

impl CheckTally {
    pub fn record(&mut self, result: bool) {
        if result {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
