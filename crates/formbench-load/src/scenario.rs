//! Virtual-client scenario.
//!
//! Each virtual client loops the fixed three-request sequence until the
//! shared deadline: GET /, wait, POST /submit-form, wait, GET /click-button,
//! wait. The deadline is checked only at iteration start, so a started
//! iteration always completes its three requests. Failed checks are recorded
//! and the loop continues; there are no retries.

use std::time::{Duration, Instant};

use formbench_core::form::FormSubmission;

/// One checked response. `status` is `None` on a transport-level failure.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub vu: u32,
    pub route: &'static str,
    pub status: Option<u16>,
    pub latency: Duration,
    pub pass: bool,
    pub error: Option<String>,
}

impl CheckResult {
    fn from_response(
        vu: u32,
        route: &'static str,
        started: Instant,
        res: reqwest::Result<reqwest::Response>,
    ) -> Self {
        let latency = started.elapsed();
        let result = match res {
            Ok(res) => {
                let status = res.status().as_u16();
                Self { vu, route, status: Some(status), latency, pass: status == 200, error: None }
            }
            Err(e) => Self {
                vu,
                route,
                status: None,
                latency,
                pass: false,
                error: Some(e.to_string()),
            },
        };
        tracing::debug!(
            vu = result.vu,
            route = result.route,
            status = result.status,
            latency_ms = result.latency.as_millis() as u64,
            pass = result.pass,
            "check"
        );
        result
    }
}

async fn check_get(client: &reqwest::Client, base: &str, route: &'static str, vu: u32) -> CheckResult {
    let started = Instant::now();
    let res = client.get(format!("{base}{route}")).send().await;
    CheckResult::from_response(vu, route, started, res)
}

async fn check_submit_form(client: &reqwest::Client, base: &str, vu: u32) -> CheckResult {
    let started = Instant::now();
    let res = client
        .post(format!("{base}/submit-form"))
        .json(&FormSubmission::sample())
        .send()
        .await;
    CheckResult::from_response(vu, "/submit-form", started, res)
}

/// Run one virtual client until `deadline`, returning every check it made.
pub async fn run_vu(
    client: reqwest::Client,
    base: String,
    vu: u32,
    deadline: Instant,
    think: Duration,
) -> Vec<CheckResult> {
    let mut results = Vec::new();

    while Instant::now() < deadline {
        results.push(check_get(&client, &base, "/", vu).await);
        tokio::time::sleep(think).await;

        results.push(check_submit_form(&client, &base, vu).await);
        tokio::time::sleep(think).await;

        results.push(check_get(&client, &base, "/click-button", vu).await);
        tokio::time::sleep(think).await;
    }

    results
}
