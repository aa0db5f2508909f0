//! Contact form submission through a hosted email relay.
//!
//! The site runs no mail infrastructure of its own. A filled [`ContactForm`]
//! is handed to an [`EmailRelay`] (in production the EmailJS REST API via
//! [`HttpRelay`]) and the outcome drives the [`ContactState`] shown next to
//! the form. Nothing is retried automatically.

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

pub const FAILURE_NOTICE: &str = "There was an error sending the email. Please try again.";
pub const SUCCESS_NOTICE: &str = "Your message has been sent successfully!";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Template variables as named in the relay's email template.
    pub fn template_params(&self) -> serde_json::Value {
        json!({
            "from_name": self.name,
            "from_email": self.email,
            "subject": self.subject,
            "message": self.message,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Form fields plus where the current submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    status: Submission,
}

impl ContactState {
    pub fn status(&self) -> &Submission {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == Submission::Sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Starts a submission, clearing any earlier notice. Returns the payload
    /// to relay, or `None` if one is already in flight.
    pub fn begin(&mut self) -> Option<ContactForm> {
        if self.is_sending() {
            return None;
        }
        self.status = Submission::Sending;
        Some(self.form.clone())
    }

    /// Records the relay outcome. Success clears the fields, failure keeps
    /// them so the visitor can try again.
    pub fn finish(&mut self, result: Result<(), RelayError>) {
        self.status = match result {
            Ok(()) => {
                self.form = ContactForm::default();
                Submission::Sent
            }
            Err(_) => Submission::Failed(FAILURE_NOTICE.to_string()),
        };
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected message (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Identifiers of the hosted relay account, baked in at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub base_url: String,
}

impl RelayConfig {
    pub fn from_build_env() -> Self {
        Self {
            service_id: env!("RELAY_SERVICE_ID").to_string(),
            template_id: env!("RELAY_TEMPLATE_ID").to_string(),
            public_key: env!("RELAY_PUBLIC_KEY").to_string(),
            base_url: env!("RELAY_BASE_URL").to_string(),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError>;
}

#[derive(Debug, Clone)]
pub struct HttpRelay {
    config: RelayConfig,
    client: reqwest::Client,
}

impl HttpRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/v1.0/email/send",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

impl EmailRelay for HttpRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        let body = json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": form.template_params(),
        });
        let response = self.client.post(self.endpoint()).json(&body).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct StubRelay {
        accept: bool,
    }

    impl EmailRelay for StubRelay {
        async fn send(&self, _form: &ContactForm) -> Result<(), RelayError> {
            if self.accept {
                Ok(())
            } else {
                Err(RelayError::Rejected {
                    status: 400,
                    body: "The service ID is invalid".to_string(),
                })
            }
        }
    }

    fn filled() -> ContactState {
        ContactState {
            form: ContactForm {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Project".to_string(),
                message: "Let's build something.".to_string(),
            },
            ..Default::default()
        }
    }

    fn test_config(base_url: String) -> RelayConfig {
        RelayConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
            base_url,
        }
    }

    async fn submit(state: &mut ContactState, relay: &impl EmailRelay) {
        let form = state.begin().expect("should not already be sending");
        assert!(state.is_sending());
        assert_eq!(state.submit_label(), "Sending...");
        let result = relay.send(&form).await;
        state.finish(result);
    }

    #[tokio::test]
    async fn test_successful_submission_resets_form() {
        let mut state = filled();
        submit(&mut state, &StubRelay { accept: true }).await;

        assert_eq!(state.status(), &Submission::Sent);
        assert!(state.form.is_empty());
        assert!(!state.is_sending());
        assert_eq!(state.submit_label(), "Send Message");
    }

    #[tokio::test]
    async fn test_rejected_submission_keeps_fields() {
        let mut state = filled();
        let entered = state.form.clone();
        submit(&mut state, &StubRelay { accept: false }).await;

        assert_eq!(state.status(), &Submission::Failed(FAILURE_NOTICE.to_string()));
        assert_eq!(state.form, entered);
        assert!(!state.is_sending());
    }

    #[test]
    fn test_begin_while_sending_is_rejected() {
        let mut state = filled();
        assert!(state.begin().is_some());
        assert!(state.begin().is_none());
        state.finish(Ok(()));
        assert!(state.begin().is_some());
    }

    #[test]
    fn test_begin_clears_previous_notice() {
        let mut state = filled();
        state.begin();
        state.finish(Err(RelayError::Rejected {
            status: 500,
            body: String::new(),
        }));
        assert!(matches!(state.status(), Submission::Failed(_)));
        state.begin();
        assert_eq!(state.status(), &Submission::Sending);
    }

    #[test]
    fn test_template_params() {
        let state = filled();
        assert_eq!(
            state.form.template_params(),
            json!({
                "from_name": "Ada",
                "from_email": "ada@example.com",
                "subject": "Project",
                "message": "Let's build something.",
            })
        );
    }

    #[tokio::test]
    async fn test_http_relay_posts_to_send_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1.0/email/send")
                    .json_body(json!({
                        "service_id": "service_test",
                        "template_id": "template_test",
                        "user_id": "public_test",
                        "template_params": {
                            "from_name": "Ada",
                            "from_email": "ada@example.com",
                            "subject": "Project",
                            "message": "Let's build something.",
                        },
                    }));
                then.status(200).body("OK");
            })
            .await;

        let relay = HttpRelay::new(test_config(format!("{}/", server.base_url())));
        let result = relay.send(&filled().form).await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_http_relay_maps_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1.0/email/send");
                then.status(400).body("The Public Key is invalid");
            })
            .await;

        let relay = HttpRelay::new(test_config(server.base_url()));
        match relay.send(&filled().form).await {
            Err(RelayError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "The Public Key is invalid");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_relay_transport_failure() {
        // nothing listens on the discard port
        let relay = HttpRelay::new(test_config("http://127.0.0.1:9".to_string()));
        let result = relay.send(&filled().form).await;
        assert!(matches!(result, Err(RelayError::Transport(_))));
    }

    #[test]
    fn test_build_env_config_is_populated() {
        let config = RelayConfig::from_build_env();
        assert!(!config.service_id.is_empty());
        assert!(!config.template_id.is_empty());
        assert!(!config.public_key.is_empty());
        assert!(config.base_url.starts_with("http"));
    }
}
