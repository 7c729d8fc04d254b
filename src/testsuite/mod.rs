//! Registered Date regression cases and the harness they run in.
//!
//! Each case is a straight-line script over [`Date`](crate::Date): it prints
//! what it formats and reports every comparison through [`check`], so a run
//! passes exactly when no `*** ERROR ***` line was written.

mod date_cases;
mod set_seconds;

use crate::core::LocalZone;
use crate::error::DateError;
use crate::js_assert::{CheckTally, check};
use crate::js_system::OutputStream;
use std::fmt;

pub struct Harness {
    out: OutputStream,
    zone: LocalZone,
    tally: CheckTally,
}

impl Harness {
    pub fn new(zone: LocalZone, out: OutputStream) -> Self {
        Harness {
            out,
            zone,
            tally: CheckTally::default(),
        }
    }

    pub fn zone(&self) -> LocalZone {
        self.zone
    }

    pub fn tally(&self) -> CheckTally {
        self.tally
    }

    pub fn output(&self) -> &OutputStream {
        &self.out
    }

    pub fn into_output(self) -> OutputStream {
        self.out
    }

    /// `stdout.write(s + '\n', s.length + 1)`.
    pub fn print(&mut self, s: &str) -> Result<(), DateError> {
        self.out.write_line(s)?;
        Ok(())
    }

    pub fn check(&mut self, result: bool) -> Result<bool, DateError> {
        self.tally.record(result);
        check(&mut self.out, result)
    }
}

pub struct TestCase {
    pub id: &'static str,
    pub description: &'static str,
    pub run: fn(&mut Harness) -> Result<(), DateError>,
}

static CASES: &[TestCase] = &[
    TestCase {
        id: "1030",
        description: "setSeconds() with and without milliseconds",
        run: set_seconds::run,
    },
    TestCase {
        id: "date-getters",
        description: "component constructor against local getters",
        run: date_cases::getters,
    },
    TestCase {
        id: "date-setters",
        description: "local setters change only their fields and roll over",
        run: date_cases::setters,
    },
    TestCase {
        id: "date-format",
        description: "locale, UTC and ISO string formats",
        run: date_cases::format,
    },
];

pub fn cases() -> &'static [TestCase] {
    CASES
}

pub fn find_case(id: &str) -> Result<&'static TestCase, DateError> {
    CASES
        .iter()
        .find(|case| case.id == id)
        .ok_or_else(|| DateError::UnknownTestCase { id: id.to_string() })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub id: &'static str,
    pub passed: usize,
    pub failed: usize,
}

pub fn run_case(case: &TestCase, harness: &mut Harness) -> Result<CaseReport, DateError> {
    log::debug!("running case {} in zone {}", case.id, harness.zone());
    let before = harness.tally();
    (case.run)(harness)?;
    let after = harness.tally();
    let report = CaseReport {
        id: case.id,
        passed: after.passed - before.passed,
        failed: after.failed - before.failed,
    };
    if report.failed > 0 {
        log::warn!("case {} failed {} of {} checks", case.id, report.failed, report.passed + report.failed);
    }
    Ok(report)
}

/// Run the cases named by `ids` in order (every case when `ids` is empty).
///
/// All ids are resolved before anything runs.
pub fn run_cases<S: AsRef<str>>(ids: &[S], harness: &mut Harness) -> Result<SuiteReport, DateError> {
    let selected: Vec<&TestCase> = if ids.is_empty() {
        CASES.iter().collect()
    } else {
        ids.iter().map(|id| find_case(id.as_ref())).collect::<Result<_, _>>()?
    };

    let mut report = SuiteReport::default();
    for case in selected {
        report.cases.push(run_case(case, harness)?);
    }
    Ok(report)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().map(|c| c.passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.cases.iter().map(|c| c.failed).sum()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn to_json(&self) -> serde_json::Value {
        let cases: Vec<serde_json::Value> = self
            .cases
            .iter()
            .map(|c| serde_json::json!({ "id": c.id, "passed": c.passed, "failed": c.failed }))
            .collect();
        serde_json::json!({
            "cases": cases,
            "passed": self.passed(),
            "failed": self.failed(),
        })
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in &self.cases {
            let status = if case.failed == 0 { "PASS" } else { "FAIL" };
            writeln!(f, "{status} {} ({} ok, {} error)", case.id, case.passed, case.failed)?;
        }
        write!(f, "{} cases, {} ok, {} error", self.cases.len(), self.passed(), self.failed())
    }
}
