//! Contact form relay.
//!
//! The site itself stores nothing: submissions are validated and forwarded
//! to an external endpoint (`CONTACT_ENDPOINT`). Upstream 5xx and network
//! failures are retried with backoff; 4xx responses are not, since the
//! payload will not get better by resending it.

use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::info;

const MAX_NAME_LEN: usize = 200;
const MAX_EMAIL_LEN: usize = 254;
const MAX_PHONE_LEN: usize = 50;
const MAX_MESSAGE_LEN: usize = 5000;

/// A contact form submission as posted by the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
    /// Locale the form was submitted from, for the localized response
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("field `{field}` exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Errors from a single relay attempt; the retry predicate keys off the
/// variant.
#[derive(Debug, Error)]
enum RelayError {
    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"))
}

/// Validate a submission before relaying it.
pub fn validate(submission: &ContactSubmission) -> Result<(), ContactError> {
    if submission.name.trim().is_empty() {
        return Err(ContactError::MissingField("name"));
    }
    if submission.email.trim().is_empty() {
        return Err(ContactError::MissingField("email"));
    }
    if submission.message.trim().is_empty() {
        return Err(ContactError::MissingField("message"));
    }

    if submission.name.len() > MAX_NAME_LEN {
        return Err(ContactError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }
    if submission.email.len() > MAX_EMAIL_LEN {
        return Err(ContactError::TooLong {
            field: "email",
            max: MAX_EMAIL_LEN,
        });
    }
    if let Some(phone) = &submission.phone {
        if phone.len() > MAX_PHONE_LEN {
            return Err(ContactError::TooLong {
                field: "phone",
                max: MAX_PHONE_LEN,
            });
        }
    }
    if submission.message.len() > MAX_MESSAGE_LEN {
        return Err(ContactError::TooLong {
            field: "message",
            max: MAX_MESSAGE_LEN,
        });
    }

    if !email_regex().is_match(submission.email.trim()) {
        return Err(ContactError::InvalidEmail);
    }

    Ok(())
}

/// Forward a validated submission to the external endpoint.
pub async fn relay(
    client: &reqwest::Client,
    config: &Config,
    submission: &ContactSubmission,
) -> Result<()> {
    let result = with_retry_if(
        &RetryConfig::contact_relay(),
        "Contact relay",
        || async move {
            let response = client
                .post(&config.contact_endpoint)
                .json(submission)
                .send()
                .await
                .map_err(RelayError::Network)?;

            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                Err(RelayError::Status(status.as_u16()))
            }
        },
        |error: &RelayError| match error {
            RelayError::Network(_) => true,
            RelayError::Status(code) => *code >= 500,
        },
    )
    .await;

    result.context("Failed to relay contact submission")?;
    info!("Relayed contact submission from <{}>", submission.email);
    Ok(())
}
