//! Form submission data model.
//!
//! All three fields are opaque text; no schema enforcement beyond structure.
//! The payload exists for one request only and is never persisted except as
//! an audit line.

use serde::{Deserialize, Serialize};

/// Body of `POST /submit-form`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormSubmission {
    /// Canonical sample payload used by the load generator and tests.
    pub fn sample() -> Self {
        Self {
            name: "John Doe".into(),
            email: "johndoe@example.com".into(),
            message: "This is a test message".into(),
        }
    }

    /// Audit event for this submission with field values verbatim.
    pub fn audit_event(&self) -> String {
        format!(
            "POST /submit-form - Name: {}, Email: {}, Message: {}",
            self.name, self.email, self.message
        )
    }

    /// Audit event with field values replaced by their lengths. Used when the
    /// operator opts out of logging personal data verbatim.
    pub fn audit_event_redacted(&self) -> String {
        format!(
            "POST /submit-form - Name: <{} chars>, Email: <{} chars>, Message: <{} chars>",
            self.name.chars().count(),
            self.email.chars().count(),
            self.message.chars().count()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sample_round_trips_as_json() {
        let json = serde_json::to_string(&FormSubmission::sample()).unwrap();
        let back: FormSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FormSubmission::sample());
    }

    #[test]
    fn audit_event_contains_all_fields_verbatim() {
        let ev = FormSubmission::sample().audit_event();
        assert_eq!(
            ev,
            "POST /submit-form - Name: John Doe, Email: johndoe@example.com, \
             Message: This is a test message"
        );
    }

    #[test]
    fn redacted_event_hides_values() {
        let ev = FormSubmission::sample().audit_event_redacted();
        assert!(!ev.contains("John Doe"));
        assert!(!ev.contains("johndoe@example.com"));
        assert!(ev.contains("<8 chars>"));
    }
}
