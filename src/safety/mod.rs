pub mod command_filter;
pub mod defaults;
pub mod fixtures;

use std::fmt;

use command_filter::{BlockedCommand, CommandFilter};

/// One fixture run through the filter, with its expected classification.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub command: String,
    pub expect_blocked: bool,
    pub verdict: Option<BlockedCommand>,
}

impl CaseResult {
    /// A case passes when the filter's verdict matches the expectation.
    pub fn passed(&self) -> bool {
        self.expect_blocked == self.verdict.is_some()
    }
}

/// Outcome of running every fixture through a filter.
#[derive(Debug)]
pub struct SmokeReport {
    pub cases: Vec<CaseResult>,
}

impl SmokeReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Run both fixture lists through the filter and collect per-case verdicts.
pub fn run_smoke_test(filter: &CommandFilter) -> SmokeReport {
    let mut cases = Vec::with_capacity(fixtures::EXPECTED_VALID.len() + fixtures::EXPECTED_BLOCKED.len());

    for command in fixtures::EXPECTED_VALID {
        cases.push(CaseResult {
            command: command.to_string(),
            expect_blocked: false,
            verdict: filter.check(command),
        });
    }
    for command in fixtures::EXPECTED_BLOCKED {
        cases.push(CaseResult {
            command: command.to_string(),
            expect_blocked: true,
            verdict: filter.check(command),
        });
    }

    let report = SmokeReport { cases };
    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        "Smoke-test complete"
    );
    report
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== stty blocklist smoke-test ===")?;
        for case in &self.cases {
            let status = if case.passed() { "PASS" } else { "FAIL" };
            writeln!(f, "{status}: {}", case.command)?;
            match (&case.verdict, case.expect_blocked) {
                (Some(blocked), true) => {
                    writeln!(f, "    Correctly blocked: {} (pattern `{}`)", blocked.reason, blocked.pattern)?
                }
                (Some(blocked), false) => {
                    writeln!(f, "    Wrongly blocked: {} (pattern `{}`)", blocked.reason, blocked.pattern)?
                }
                (None, true) => {
                    writeln!(f, "    WARNING: this dangerous command was not blocked")?
                }
                (None, false) => {}
            }
        }
        writeln!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}
