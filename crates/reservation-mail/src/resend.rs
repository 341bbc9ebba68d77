//! Resend HTTP API client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};

use reservation_common::{Locale, MailConfig};
use reservation_core::{NotificationReceipt, RepoResult, Reservation, ReservationNotifier};

use crate::error::MailError;
use crate::template::compose;

/// Body of `POST /emails`
#[derive(Debug, Clone, Serialize)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Delivers reservation emails through Resend
#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: String,
    api_url: String,
    from: String,
    admin_to: String,
    copy_customer: bool,
    locale: Locale,
    restaurant_name: String,
}

impl ResendMailer {
    /// Create a mailer from configuration
    ///
    /// # Errors
    ///
    /// Returns `MailError::MissingApiKey` if no key is configured
    pub fn from_config(config: &MailConfig, restaurant_name: &str) -> Result<Self, MailError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(MailError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MailError::ClientSetup(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            from: config.from.clone(),
            admin_to: config.admin_to.clone(),
            copy_customer: config.copy_customer,
            locale: config.locale,
            restaurant_name: restaurant_name.to_string(),
        })
    }

    /// Build the API request for a reservation
    pub fn build_request(&self, reservation: &Reservation) -> SendEmailRequest {
        let content = compose(reservation, self.locale.messages(), &self.restaurant_name);

        let mut to = vec![self.admin_to.clone()];
        if self.copy_customer {
            to.push(reservation.email.as_str().to_string());
        }

        SendEmailRequest {
            from: self.from.clone(),
            to,
            subject: content.subject,
            html: content.html,
            reply_to: Some(reservation.email.as_str().to_string()),
        }
    }

    /// Send one email
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or non-2xx API responses
    pub async fn send(&self, request: &SendEmailRequest) -> Result<NotificationReceipt, MailError> {
        let response = self
            .client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                // The message is accepted at this point; a body we cannot read
                // only costs us the provider id.
                let message_id = response
                    .json::<SendEmailResponse>()
                    .await
                    .ok()
                    .and_then(|body| body.id);
                Ok(NotificationReceipt::delivered(message_id))
            }
            StatusCode::TOO_MANY_REQUESTS => Err(MailError::RateLimited),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(MailError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(MailError::ApiError {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }
}

#[async_trait]
impl ReservationNotifier for ResendMailer {
    #[instrument(skip(self, reservation), fields(reservation_id = %reservation.id))]
    async fn notify(&self, reservation: &Reservation) -> RepoResult<NotificationReceipt> {
        let request = self.build_request(reservation);
        let receipt = self.send(&request).await?;

        info!(
            message_id = receipt.message_id.as_deref().unwrap_or("-"),
            recipients = request.to.len(),
            "Reservation email accepted"
        );
        Ok(receipt)
    }

    fn kind(&self) -> &'static str {
        "resend"
    }
}
