//! Contact form submission: payload and status.
//!
//! One submission moves `Idle → Sending → Succeeded | Failed → Idle`.
//! Nothing is queued or retried.

use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmissionState::Idle => None,
            SubmissionState::Sending => Some("Sending..."),
            SubmissionState::Succeeded => {
                Some("Thank you! Your message has been sent successfully.")
            }
            SubmissionState::Failed => {
                Some("Oops! There was a problem sending your message. Please try again.")
            }
        }
    }

    /// Class added to the status element next to `form-status`.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SubmissionState::Idle => None,
            SubmissionState::Sending => Some("sending"),
            SubmissionState::Succeeded => Some("success"),
            SubmissionState::Failed => Some("error"),
        }
    }

    /// The submit control is disabled while a submission is in flight or
    /// its result is still on screen.
    pub fn locks_submit(self) -> bool {
        self != SubmissionState::Idle
    }
}

/// Final state for an HTTP status code. Only 2xx counts as success.
pub fn outcome_for_status(status: u16) -> SubmissionState {
    if (200..300).contains(&status) {
        SubmissionState::Succeeded
    } else {
        SubmissionState::Failed
    }
}

/// Flat JSON object from `(name, value)` pairs. Unnamed fields are skipped,
/// a repeated name keeps its last value.
pub fn serialize_fields<I, K, V>(fields: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut map = Map::new();
    for (name, value) in fields {
        let name = name.into();
        if name.is_empty() {
            continue;
        }
        map.insert(name, Value::String(value.into()));
    }
    Value::Object(map)
}
