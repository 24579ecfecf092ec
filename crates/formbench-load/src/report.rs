//! End-of-run aggregation of check results.
//!
//! Replaces per-request console chatter with structured records folded into
//! per-route pass/fail counts and latency stats.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::time::Duration;

use crate::scenario::CheckResult;

#[derive(Debug, Default, Clone)]
pub struct RouteStats {
    pub checks: u64,
    pub passed: u64,
    pub failed: u64,
    latency_sum: Duration,
    latency_min: Option<Duration>,
    latency_max: Duration,
}

impl RouteStats {
    fn observe(&mut self, r: &CheckResult) {
        self.checks += 1;
        if r.pass {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.latency_sum += r.latency;
        self.latency_min = Some(match self.latency_min {
            Some(min) => min.min(r.latency),
            None => r.latency,
        });
        self.latency_max = self.latency_max.max(r.latency);
    }

    pub fn latency_min(&self) -> Duration {
        self.latency_min.unwrap_or_default()
    }

    pub fn latency_max(&self) -> Duration {
        self.latency_max
    }

    pub fn latency_avg(&self) -> Duration {
        if self.checks == 0 {
            Duration::ZERO
        } else {
            self.latency_sum / self.checks as u32
        }
    }
}

/// Aggregated results for a whole run.
#[derive(Debug, Default)]
pub struct Summary {
    routes: BTreeMap<&'static str, RouteStats>,
}

impl Summary {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a CheckResult>,
    {
        let mut summary = Self::default();
        for r in results {
            summary.routes.entry(r.route).or_default().observe(r);
        }
        summary
    }

    pub fn route(&self, route: &str) -> Option<&RouteStats> {
        self.routes.get(route)
    }

    pub fn total_checks(&self) -> u64 {
        self.routes.values().map(|s| s.checks).sum()
    }

    pub fn total_failed(&self) -> u64 {
        self.routes.values().map(|s| s.failed).sum()
    }

    pub fn all_passed(&self) -> bool {
        self.total_failed() == 0
    }

    /// Human-readable table for end-of-run output.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<16} {:>8} {:>8} {:>8} {:>10} {:>10} {:>10}",
            "route", "checks", "pass", "fail", "min_ms", "avg_ms", "max_ms"
        );
        for (route, s) in &self.routes {
            let _ = writeln!(
                out,
                "{:<16} {:>8} {:>8} {:>8} {:>10.1} {:>10.1} {:>10.1}",
                route,
                s.checks,
                s.passed,
                s.failed,
                s.latency_min().as_secs_f64() * 1e3,
                s.latency_avg().as_secs_f64() * 1e3,
                s.latency_max().as_secs_f64() * 1e3,
            );
        }
        let _ = writeln!(
            out,
            "total: {} checks, {} failed",
            self.total_checks(),
            self.total_failed()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(route: &'static str, status: u16, latency_ms: u64) -> CheckResult {
        CheckResult {
            vu: 1,
            route,
            status: Some(status),
            latency: Duration::from_millis(latency_ms),
            pass: status == 200,
            error: None,
        }
    }

    #[test]
    fn aggregates_pass_and_fail_per_route() {
        let results = vec![
            result("/", 200, 10),
            result("/", 500, 30),
            result("/submit-form", 200, 20),
        ];
        let summary = Summary::from_results(&results);

        let root = summary.route("/").unwrap();
        assert_eq!(root.checks, 2);
        assert_eq!(root.passed, 1);
        assert_eq!(root.failed, 1);
        assert_eq!(root.latency_min(), Duration::from_millis(10));
        assert_eq!(root.latency_max(), Duration::from_millis(30));
        assert_eq!(root.latency_avg(), Duration::from_millis(20));

        assert_eq!(summary.total_checks(), 3);
        assert_eq!(summary.total_failed(), 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn transport_errors_count_as_failures() {
        let results = vec![CheckResult {
            vu: 1,
            route: "/click-button",
            status: None,
            latency: Duration::from_millis(5),
            pass: false,
            error: Some("connection refused".into()),
        }];
        let summary = Summary::from_results(&results);
        assert_eq!(summary.total_failed(), 1);
        let stats = summary.route("/click-button").unwrap();
        assert_eq!(stats.checks, 1);
        assert_eq!(stats.passed, 0);
    }

    #[test]
    fn render_lists_every_route() {
        let results = vec![result("/", 200, 10), result("/click-button", 200, 15)];
        let out = Summary::from_results(&results).render();
        assert!(out.contains("/click-button"));
        assert!(out.contains("total: 2 checks, 0 failed"));
    }
}
