use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::MailConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
}

/// Template parameters handed to the email relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Sent => "Message sent successfully!",
            Notice::Failed => "Failed to send. Please try again.",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("relay rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("contact form is not configured: {0}")]
    Unconfigured(String),
    #[error("sending is only available in the browser")]
    Unavailable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    /// Move to `Submitting` and hand back the message to send.
    ///
    /// No-op unless every field is filled in and no send is in flight.
    pub fn begin_submit(&mut self) -> Option<OutgoingMessage> {
        if self.phase != Phase::Editing || !self.is_complete() {
            return None;
        }
        self.phase = Phase::Submitting;
        Some(OutgoingMessage {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Record the outcome of a send. Fields are cleared only on success.
    pub fn settle(&mut self, outcome: Result<(), SendError>) -> Notice {
        self.phase = Phase::Editing;
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                Notice::Sent
            }
            Err(_) => Notice::Failed,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait MessageSender {
    async fn send(&self, message: &OutgoingMessage) -> Result<(), SendError>;
}

/// Send once, logging the failure detail for diagnostics.
pub async fn deliver<S: MessageSender>(
    sender: &S,
    message: &OutgoingMessage,
) -> Result<(), SendError> {
    let res = sender.send(message).await;
    if let Err(e) = &res {
        log::error!("contact form delivery failed: {e}");
    }
    res
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a OutgoingMessage,
}

/// Sender backed by the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJs {
    config: MailConfig,
}

impl EmailJs {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn request<'a>(&'a self, message: &'a OutgoingMessage) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        }
    }
}

impl MessageSender for EmailJs {
    #[cfg(feature = "hydrate")]
    async fn send(&self, message: &OutgoingMessage) -> Result<(), SendError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.config.endpoint)
            .json(&self.request(message))
            .map_err(|e| SendError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(SendError::Rejected { status, body })
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send(&self, message: &OutgoingMessage) -> Result<(), SendError> {
        log::debug!(
            "not sending {} bytes to {}: no browser transport",
            serde_json::to_string(&self.request(message))
                .map(|s| s.len())
                .unwrap_or_default(),
            self.config.endpoint
        );
        Err(SendError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct RecordingSender {
        sent: RefCell<Vec<OutgoingMessage>>,
        fail: Cell<bool>,
    }

    impl RecordingSender {
        fn new(fail: bool) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                fail: Cell::new(fail),
            }
        }
    }

    impl MessageSender for RecordingSender {
        async fn send(&self, message: &OutgoingMessage) -> Result<(), SendError> {
            self.sent.borrow_mut().push(message.clone());
            if self.fail.get() {
                Err(SendError::Rejected {
                    status: 400,
                    body: "The user ID is invalid".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Jane Doe".to_string());
        form.set(Field::Email, "jane@example.com".to_string());
        form.set(Field::Message, "Hello".to_string());
        form
    }

    // What the view does on submit: guard, send, settle.
    async fn submit<S: MessageSender>(form: &mut ContactForm, sender: &S) -> Option<Notice> {
        let message = form.begin_submit()?;
        let outcome = deliver(sender, &message).await;
        Some(form.settle(outcome))
    }

    #[tokio::test]
    async fn test_incomplete_form_never_sends() {
        let sender = RecordingSender::new(false);
        for missing in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.set(missing, String::new());
            let before = form.clone();

            assert_eq!(submit(&mut form, &sender).await, None);
            assert_eq!(form, before);
            assert_eq!(form.phase(), Phase::Editing);
        }
        assert!(ContactForm::new().begin_submit().is_none());
        assert_eq!(sender.sent.borrow().len(), 0);
    }

    #[tokio::test]
    async fn test_complete_form_sends_once() {
        let sender = RecordingSender::new(false);
        let mut form = filled();

        let notice = submit(&mut form, &sender).await;

        assert_eq!(notice, Some(Notice::Sent));
        let sent = sender.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            OutgoingMessage {
                from_name: "Jane Doe".to_string(),
                from_email: "jane@example.com".to_string(),
                message: "Hello".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let sender = RecordingSender::new(false);
        let mut form = filled();
        assert_eq!(submit(&mut form, &sender).await, Some(Notice::Sent));
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
        assert_eq!(form.phase(), Phase::Editing);
    }

    #[tokio::test]
    async fn test_failure_retains_fields_without_retry() {
        let sender = RecordingSender::new(true);
        let mut form = filled();
        assert_eq!(submit(&mut form, &sender).await, Some(Notice::Failed));
        assert_eq!(form, filled());
        assert_eq!(sender.sent.borrow().len(), 1);

        // user retries by hand once the relay recovers
        sender.fail.set(false);
        assert_eq!(submit(&mut form, &sender).await, Some(Notice::Sent));
        assert_eq!(sender.sent.borrow().len(), 2);
    }

    #[test]
    fn test_in_flight_submit_is_ignored() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert_eq!(form.phase(), Phase::Submitting);
        assert!(form.begin_submit().is_none());

        // typing stays possible while the send is outstanding
        form.set(Field::Message, "Hello again".to_string());
        assert_eq!(form.get(Field::Message), "Hello again");

        assert_eq!(form.settle(Err(SendError::Network("offline".into()))), Notice::Failed);
        assert_eq!(form.get(Field::Message), "Hello again");
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(Notice::Sent.message(), "Message sent successfully!");
        assert_eq!(Notice::Failed.message(), "Failed to send. Please try again.");
    }

    #[test]
    fn test_emailjs_request_shape() {
        let sender = EmailJs::new(MailConfig {
            service_id: "service_1".to_string(),
            template_id: "template_2".to_string(),
            public_key: "key_3".to_string(),
            endpoint: crate::config::DEFAULT_ENDPOINT.to_string(),
        });
        let message = filled().begin_submit().expect("complete form");
        let body = serde_json::to_value(sender.request(&message)).expect("serializable");
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_1",
                "template_id": "template_2",
                "user_id": "key_3",
                "template_params": {
                    "from_name": "Jane Doe",
                    "from_email": "jane@example.com",
                    "message": "Hello"
                }
            })
        );
    }
}
