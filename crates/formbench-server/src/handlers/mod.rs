//! Route handlers for the three demo endpoints.
//!
//! Each handler is stateless: it produces a canned response and appends one
//! audit line. The only failure modes are an unparseable form body (400) and
//! an unwritable audit sink (500, scoped to the one request).

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::json;

use formbench_core::error::FormbenchError;
use formbench_core::form::FormSubmission;

use crate::app_state::AppState;
use crate::error::{HandlerResult, HttpError};

/// Append an audit line, counting the failure before surfacing it.
async fn audit(state: &AppState, route: &'static str, event: &str) -> Result<(), HttpError> {
    if let Err(e) = state.audit().record(event).await {
        state.metrics().audit_failures.inc(&[("route", route)]);
        state.metrics().http_requests.inc(&[("route", route), ("status", "500")]);
        return Err(HttpError(e));
    }
    Ok(())
}

fn finish(state: &AppState, route: &'static str, status: &'static str, started: Instant) {
    state.metrics().http_requests.inc(&[("route", route), ("status", status)]);
    state.metrics().request_duration.observe(&[("route", route)], started.elapsed());
}

/// `GET /` — the landing document, fixed for the process lifetime.
pub async fn index(State(state): State<AppState>) -> HandlerResult<Html<String>> {
    let started = Instant::now();
    audit(&state, "/", "GET /").await?;
    finish(&state, "/", "200", started);
    Ok(Html(state.index_html().to_owned()))
}

/// `POST /submit-form` — parse the JSON body explicitly so a malformed body
/// becomes a deterministic 400 instead of a fault.
pub async fn submit_form(
    State(state): State<AppState>,
    body: Bytes,
) -> HandlerResult<Json<serde_json::Value>> {
    let started = Instant::now();

    let form: FormSubmission = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(e) => {
            tracing::debug!(error = %e, "rejecting malformed form body");
            state.metrics().malformed_bodies.inc(&[("route", "/submit-form")]);
            audit(&state, "/submit-form", "POST /submit-form - rejected: malformed body").await?;
            finish(&state, "/submit-form", "400", started);
            return Err(HttpError(FormbenchError::MalformedRequest(format!(
                "invalid json body: {e}"
            ))));
        }
    };

    let event = if state.cfg().server.redact_form_fields {
        form.audit_event_redacted()
    } else {
        form.audit_event()
    };
    audit(&state, "/submit-form", &event).await?;
    finish(&state, "/submit-form", "200", started);
    Ok(Json(json!({ "status": "Form submitted" })))
}

/// `GET /click-button` — fixed confirmation payload.
pub async fn click_button(
    State(state): State<AppState>,
) -> HandlerResult<Json<serde_json::Value>> {
    let started = Instant::now();
    audit(&state, "/click-button", "GET /click-button").await?;
    finish(&state, "/click-button", "200", started);
    Ok(Json(json!({ "status": "Button clicked" })))
}
