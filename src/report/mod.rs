// src/report/mod.rs

/// The three fixed probe checks, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    BackendReachable,
    Health,
    StatusRoundtrip,
}

impl Check {
    pub const ALL: [Check; 3] = [
        Check::BackendReachable,
        Check::Health,
        Check::StatusRoundtrip,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Check::BackendReachable => "backend_reachable",
            Check::Health => "health_check",
            Check::StatusRoundtrip => "status_roundtrip",
        }
    }
}

#[derive(Debug)]
pub struct CheckResult {
    pub check: Check,
    pub passed: bool,
    pub response_time_ms: u64,
}

/// Aggregate outcome of a probe run. Populated once per check, in order,
/// then read once for the summary.
#[derive(Debug, Default)]
pub struct ProbeReport {
    results: Vec<CheckResult>,
}

impl ProbeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, check: Check, passed: bool, response_time_ms: u64) {
        self.results.push(CheckResult {
            check,
            passed,
            response_time_ms,
        });
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|r| r.passed)
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Print the human-readable summary table to stdout.
    pub fn print_summary(&self) {
        println!();
        println!("{}", "=".repeat(60));
        println!("  PROBE SUMMARY");
        println!("{}", "=".repeat(60));

        for result in &self.results {
            let verdict = if result.passed { "PASS" } else { "FAIL" };
            println!(
                "  {:<20} {}  ({} ms)",
                result.check.name(),
                verdict,
                result.response_time_ms
            );
        }

        println!();
        println!("  {}/{} checks passed", self.passed_count(), self.total());

        if self.all_passed() {
            println!("  All backend checks passed");
        } else {
            println!("  Some backend checks failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(outcomes: [bool; 3]) -> ProbeReport {
        let mut report = ProbeReport::new();
        for (check, passed) in Check::ALL.into_iter().zip(outcomes) {
            report.record(check, passed, 1);
        }
        report
    }

    #[test]
    fn exit_code_zero_only_when_all_pass() {
        assert_eq!(report_with([true, true, true]).exit_code(), 0);
        assert_eq!(report_with([false, true, true]).exit_code(), 1);
        assert_eq!(report_with([true, false, true]).exit_code(), 1);
        assert_eq!(report_with([true, true, false]).exit_code(), 1);
    }

    #[test]
    fn empty_report_is_not_a_pass() {
        assert_eq!(ProbeReport::new().exit_code(), 1);
    }

    #[test]
    fn counts_passed_checks() {
        let report = report_with([true, false, true]);
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.total(), 3);
        assert!(!report.all_passed());
    }

    #[test]
    fn results_keep_execution_order() {
        let report = report_with([true, true, true]);
        let names: Vec<_> = report.results().iter().map(|r| r.check.name()).collect();
        assert_eq!(
            names,
            ["backend_reachable", "health_check", "status_roundtrip"]
        );
    }
}
