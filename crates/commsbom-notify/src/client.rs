//! Multipart POST to the email form relay.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use commsbom_core::AppConfig;
use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use reqwest::{Client, Url};

use crate::error::NotifyError;
use crate::form::FormField;

/// Client for the form relay. At most one submission is in flight at a time;
/// failures are reported, never queued or retried.
pub struct NotifyClient {
    client: Client,
    endpoint: Url,
    sending: AtomicBool,
}

/// Clears the in-flight flag however `submit` exits.
struct SendingGuard<'a>(&'a AtomicBool);

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl NotifyClient {
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`NotifyError::InvalidEndpoint`] if `endpoint` does not
    /// parse.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        let endpoint = Url::parse(endpoint).map_err(|e| NotifyError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            endpoint,
            sending: AtomicBool::new(false),
        })
    }

    /// # Errors
    ///
    /// See [`NotifyClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, NotifyError> {
        Self::new(
            &config.form_endpoint,
            config.http_timeout_secs,
            &config.user_agent,
        )
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending.load(Ordering::Acquire)
    }

    /// Posts `fields` as a multipart form.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::AlreadySending`] if another submit is pending.
    /// - [`NotifyError::Http`] on network failure.
    /// - [`NotifyError::Rejected`] on a non-2xx response.
    pub async fn submit(&self, fields: &[FormField]) -> Result<(), NotifyError> {
        if self
            .sending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(NotifyError::AlreadySending);
        }
        let _guard = SendingGuard(&self.sending);

        let form = fields
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), fields = fields.len(), "notification sent");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), body = %body, "form relay rejected notification");
        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
