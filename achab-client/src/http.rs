//! HTTP client for the reservation API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{Reservation, ReservationPersonsUpdate, ReservationStatus, ReservationStatusUpdate};

/// Header carrying the shared admin secret on every privileged request.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// HTTP client for the backend reservation service
///
/// The admin key is passed per call rather than stored: the session gate owns
/// the credential and decides when it is still valid.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Handle a response with a JSON body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::classify_failure(status, response).await);
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle a response whose body is not needed
    async fn handle_empty_response(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::classify_failure(status, response).await);
        }

        Ok(())
    }

    async fn classify_failure(status: StatusCode, response: reqwest::Response) -> ClientError {
        let text = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(text)
            }
            _ => ClientError::Internal(text),
        }
    }

    // ========== Reservation API ==========

    /// Fetch the full reservation collection (admin only)
    pub async fn list_reservations(&self, admin_key: &str) -> ClientResult<Vec<Reservation>> {
        let response = self
            .client
            .get(self.url("api/reservations"))
            .header(ADMIN_KEY_HEADER, admin_key)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Change a reservation's status; returns the updated record
    pub async fn update_status(
        &self,
        admin_key: &str,
        id: &str,
        status: ReservationStatus,
    ) -> ClientResult<Reservation> {
        let path = format!("api/reservations/{}/status", urlencoding::encode(id));
        let response = self
            .client
            .patch(self.url(&path))
            .header(ADMIN_KEY_HEADER, admin_key)
            .json(&ReservationStatusUpdate { status })
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Change a reservation's party size; returns the updated record
    ///
    /// Caller contract: `persons` is already a validated non-negative integer.
    /// A raw edit value that does not parse must never reach this call.
    pub async fn update_persons(
        &self,
        admin_key: &str,
        id: &str,
        persons: u32,
    ) -> ClientResult<Reservation> {
        let path = format!("api/reservations/{}/persons", urlencoding::encode(id));
        let response = self
            .client
            .patch(self.url(&path))
            .header(ADMIN_KEY_HEADER, admin_key)
            .json(&ReservationPersonsUpdate { persons })
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Delete a reservation
    pub async fn delete_reservation(&self, admin_key: &str, id: &str) -> ClientResult<()> {
        let path = format!("api/reservations/{}", urlencoding::encode(id));
        let response = self
            .client
            .delete(self.url(&path))
            .header(ADMIN_KEY_HEADER, admin_key)
            .send()
            .await?;

        Self::handle_empty_response(response).await
    }
}
