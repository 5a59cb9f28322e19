//! Posting a form to the spreadsheet webhook.
//!
//! The webhook is a cross-origin script that does not send CORS headers, so
//! the request goes out in `no-cors` mode and the response is opaque: status
//! and body can't be read. A request that comes back at all counts as
//! delivered. Only transport failures (DNS, refused connection, aborted
//! fetch) are reported as errors. Rejections by the webhook itself are
//! invisible here.

use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestMode;

use super::{FormFields, FormKind, Platform};

const SUBMITTED: &str = "Form submitted successfully";
const FAILED: &str = "Failed to submit form. Please try again.";

/// JSON body the webhook receives. Missing optionals are left out rather
/// than sent as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FormKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl From<&FormFields> for SubmissionPayload {
    fn from(fields: &FormFields) -> Self {
        let comment = if fields.kind.requires_comment() || !fields.comment.trim().is_empty() {
            Some(fields.comment.clone())
        } else {
            None
        };
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            comment,
            kind: Some(fields.kind),
            platform: fields.platform,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

impl SubmitOutcome {
    fn submitted() -> Self {
        Self {
            success: true,
            message: SUBMITTED.to_string(),
        }
    }

    fn failed() -> Self {
        Self {
            success: false,
            message: FAILED.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(String),
}

/// Sends one JSON body to a URL. Resolves `Ok` once the request completed,
/// whatever the response said.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<(), SubmitError>;
}

/// Browser `fetch` through gloo-net.
pub struct WebhookTransport;

impl Transport for WebhookTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<(), SubmitError> {
        Request::post(url)
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| SubmitError::Transport(e.to_string()))
    }
}

/// Delivers `payload` to `endpoint`, or pretends to when no endpoint is
/// configured so the forms work in local development.
pub async fn submit<T: Transport>(
    endpoint: Option<&str>,
    payload: &SubmissionPayload,
    transport: &T,
) -> SubmitOutcome {
    let Some(url) = endpoint else {
        info!("No webhook configured, form data: {:?}", payload);
        return SubmitOutcome::submitted();
    };

    match deliver(url, payload, transport).await {
        Ok(()) => SubmitOutcome::submitted(),
        Err(err) => {
            error!("Form submission error: {}", err);
            SubmitOutcome::failed()
        }
    }
}

async fn deliver<T: Transport>(
    url: &str,
    payload: &SubmissionPayload,
    transport: &T,
) -> Result<(), SubmitError> {
    let body = serde_json::to_string(payload)?;
    transport.post_json(url, body).await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    /// Records every request; answers with `fail` when set.
    #[derive(Default)]
    pub(crate) struct RecordingTransport {
        pub(crate) sent: RefCell<Vec<(String, String)>>,
        pub(crate) fail: Option<String>,
    }

    impl Transport for RecordingTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push((url.to_string(), body));
            match &self.fail {
                Some(reason) => Err(SubmitError::Transport(reason.clone())),
                None => Ok(()),
            }
        }
    }

    fn feedback_payload() -> SubmissionPayload {
        let fields = FormFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            comment: "Great app".into(),
            ..FormFields::new(FormKind::Feedback)
        };
        SubmissionPayload::from(&fields)
    }

    #[test]
    fn feedback_payload_carries_type() {
        let value = serde_json::to_value(feedback_payload()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "comment": "Great app",
                "type": "feedback",
            })
        );
    }

    #[test]
    fn waitlist_payload_skips_blank_comment() {
        let fields = FormFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            comment: "  ".into(),
            platform: Some(Platform::Ios),
            ..FormFields::new(FormKind::Waitlist)
        };
        let value = serde_json::to_value(SubmissionPayload::from(&fields)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "type": "waitlist",
                "platform": "ios",
            })
        );
    }

    #[test]
    fn no_endpoint_succeeds_without_a_request() {
        let transport = RecordingTransport::default();
        let outcome = block_on(submit(None, &feedback_payload(), &transport));
        assert!(outcome.success);
        assert_eq!(outcome.message, SUBMITTED);
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn delivered_request_is_success() {
        let transport = RecordingTransport::default();
        let outcome = block_on(submit(
            Some("https://script.example/exec"),
            &feedback_payload(),
            &transport,
        ));
        assert!(outcome.success);

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://script.example/exec");
        let body: serde_json::Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(body["type"], "feedback");
        assert_eq!(body["comment"], "Great app");
    }

    #[test]
    fn transport_error_maps_to_generic_message() {
        let transport = RecordingTransport {
            fail: Some("connection refused".into()),
            ..Default::default()
        };
        let outcome = block_on(submit(
            Some("https://script.example/exec"),
            &feedback_payload(),
            &transport,
        ));
        assert!(!outcome.success);
        assert_eq!(outcome.message, FAILED);
        assert_eq!(transport.sent.borrow().len(), 1);
    }
}
