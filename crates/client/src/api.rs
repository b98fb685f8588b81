//! Registration API: the trait the wizard submits through and its HTTP
//! implementation.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use domain::{
    AccountResponse, BusinessRegistration, Credentials, ExpertRegistration, FieldErrors,
    SessionResponse,
};

use crate::config::RegistrationClientConfig;
use crate::error::ApiError;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Remote registration and sign-in operations.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn register_business(&self, payload: &BusinessRegistration) -> Result<AccountResponse, ApiError>;

    async fn register_expert(&self, payload: &ExpertRegistration) -> Result<AccountResponse, ApiError>;

    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionResponse, ApiError>;
}

/// Error envelope returned by the gateway.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorPayload,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    code: String,
    message: String,
    #[serde(default)]
    fields: Option<FieldErrors>,
}

impl ApiError {
    /// Interpret a non-success response body.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) else {
            return ApiError::Unexpected {
                status,
                message: String::from_utf8_lossy(body).into_owned(),
            };
        };

        let ErrorPayload { code, message, fields } = envelope.error;
        match code.as_str() {
            "VALIDATION_ERROR" => ApiError::Validation {
                message,
                fields: fields.unwrap_or_default(),
            },
            "CONFLICT" => ApiError::Conflict(message),
            "INVALID_CREDENTIALS" => ApiError::InvalidCredentials,
            _ => ApiError::Unexpected { status, message },
        }
    }
}

/// [`RegistrationApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRegistrationApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRegistrationApi {
    pub fn new(config: &RegistrationClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let resp = self.client.post(&url).json(body).send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let bytes = resp.bytes().await?;
        let error = ApiError::from_body(status.as_u16(), &bytes);
        tracing::debug!(%url, %status, "Registration API returned an error: {}", error);
        Err(error)
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationApi {
    async fn register_business(&self, payload: &BusinessRegistration) -> Result<AccountResponse, ApiError> {
        self.post("/auth/register/business", payload).await
    }

    async fn register_expert(&self, payload: &ExpertRegistration) -> Result<AccountResponse, ApiError> {
        self.post("/auth/register/expert", payload).await
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionResponse, ApiError> {
        self.post("/auth/login", credentials).await
    }
}
