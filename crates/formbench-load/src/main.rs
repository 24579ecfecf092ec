//! formbench load generator.
//!
//! Runs `--vus` virtual clients against the demo server for
//! `--duration-secs`, each looping GET /, POST /submit-form, GET
//! /click-button with a think-time pause after every request, and prints a
//! per-route summary at the end. Exits nonzero when any check failed.

use std::time::Instant;

use clap::Parser;
use futures_util::future::join_all;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formbench_load::{opts::LoadOpts, report::Summary, scenario};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opts = LoadOpts::parse();
    tracing::info!(
        base_url = opts.base(),
        vus = opts.vus,
        duration_secs = opts.duration_secs,
        think_time_ms = opts.think_time_ms,
        "formbench-load starting"
    );

    let client = reqwest::Client::builder().build().expect("http client build failed");
    let deadline = Instant::now() + opts.duration();

    let tasks: Vec<_> = (0..opts.vus)
        .map(|vu| {
            let client = client.clone();
            let base = opts.base().to_owned();
            let think = opts.think_time();
            tokio::spawn(async move { scenario::run_vu(client, base, vu, deadline, think).await })
        })
        .collect();

    let mut results = Vec::new();
    for joined in join_all(tasks).await {
        match joined {
            Ok(mut vu_results) => results.append(&mut vu_results),
            Err(e) => tracing::error!(error = %e, "virtual client task panicked"),
        }
    }

    let summary = Summary::from_results(&results);
    print!("{}", summary.render());

    if !summary.all_passed() {
        tracing::warn!(failed = summary.total_failed(), "run finished with failed checks");
        std::process::exit(1);
    }
    tracing::info!(checks = summary.total_checks(), "run finished, all checks passed");
}
