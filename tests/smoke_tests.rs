use s7doctor::safety::command_filter::CommandFilter;
use s7doctor::safety::{fixtures, run_smoke_test};

// ============================================================
// The full fixture suite against the default blocklist
// ============================================================

#[test]
fn test_fixture_suite_passes_with_defaults() {
    let filter = CommandFilter::from_defaults().unwrap();
    let report = run_smoke_test(&filter);

    assert!(report.all_passed(), "every fixture should match its expected classification");
    assert_eq!(report.failed(), 0);
    assert_eq!(
        report.passed(),
        fixtures::EXPECTED_VALID.len() + fixtures::EXPECTED_BLOCKED.len()
    );
}

#[test]
fn test_every_valid_fixture_is_allowed() {
    let filter = CommandFilter::from_defaults().unwrap();
    for command in fixtures::EXPECTED_VALID {
        assert!(
            filter.check(command).is_none(),
            "expected-valid command was blocked: {command}"
        );
    }
}

#[test]
fn test_every_blocked_fixture_is_blocked() {
    let filter = CommandFilter::from_defaults().unwrap();
    for command in fixtures::EXPECTED_BLOCKED {
        assert!(
            filter.check(command).is_some(),
            "expected-blocked command was allowed: {command}"
        );
    }
}

// ============================================================
// Report structure and rendering
// ============================================================

#[test]
fn test_report_case_order_matches_fixture_order() {
    let filter = CommandFilter::from_defaults().unwrap();
    let report = run_smoke_test(&filter);

    assert_eq!(
        report.cases.len(),
        fixtures::EXPECTED_VALID.len() + fixtures::EXPECTED_BLOCKED.len()
    );
    for (case, command) in report.cases.iter().zip(fixtures::EXPECTED_VALID) {
        assert_eq!(case.command, *command);
        assert!(!case.expect_blocked);
    }
    for (case, command) in report.cases[fixtures::EXPECTED_VALID.len()..]
        .iter()
        .zip(fixtures::EXPECTED_BLOCKED)
    {
        assert_eq!(case.command, *command);
        assert!(case.expect_blocked);
    }
}

#[test]
fn test_report_rendering_shows_verdicts() {
    let filter = CommandFilter::from_defaults().unwrap();
    let report = run_smoke_test(&filter);
    let rendered = report.to_string();

    assert!(rendered.contains("PASS:"));
    assert!(rendered.contains("Correctly blocked:"));
    assert!(rendered.contains(&format!("{} passed, 0 failed", report.passed())));
}

// ============================================================
// A deliberately weakened filter fails the suite
// ============================================================

#[test]
fn test_empty_blocklist_fails_blocked_fixtures() {
    let filter = CommandFilter::new(&[]).unwrap();
    let report = run_smoke_test(&filter);

    assert!(!report.all_passed());
    // Every valid fixture still passes; every blocked one leaks through.
    assert_eq!(report.passed(), fixtures::EXPECTED_VALID.len());
    assert_eq!(report.failed(), fixtures::EXPECTED_BLOCKED.len());

    let rendered = report.to_string();
    assert!(rendered.contains("WARNING: this dangerous command was not blocked"));
}

#[test]
fn test_overeager_filter_fails_valid_fixtures() {
    // A naive "dd anywhere" rule trips over the parodd/parenb parity flags.
    let naive = vec![(r"dd".to_string(), "dd not allowed".to_string())];
    let filter = CommandFilter::new(&naive).unwrap();
    let report = run_smoke_test(&filter);

    assert!(!report.all_passed());
    let rendered = report.to_string();
    assert!(rendered.contains("Wrongly blocked:"));
}
