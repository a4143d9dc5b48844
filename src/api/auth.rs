//! Session generation against the SmartAPI login endpoint.

use anyhow::Result;
use log::{debug, info};

use super::client::SmartApiClient;
use super::constants::{self, headers};
use super::models::{LoginRequest, LoginResponse, SessionTokens};

impl SmartApiClient {
    /// Exchange client code, PIN and a fresh TOTP code for a session token set.
    pub async fn generate_session(
        &self,
        clientcode: &str,
        pin: &str,
        totp: &str,
    ) -> Result<SessionTokens> {
        let url = constants::login_endpoint(&self.base_url);
        info!("Requesting session for {} from {}", clientcode, url);

        let request = LoginRequest {
            clientcode,
            password: pin,
            totp,
        };

        let response = self
            .http_client
            .post(&url)
            .header(headers::PRIVATE_KEY, &self.api_key)
            .header(headers::USER_TYPE, headers::USER_TYPE_VALUE)
            .header(headers::SOURCE_ID, headers::SOURCE_ID_VALUE)
            .header(headers::CLIENT_LOCAL_IP, headers::LOOPBACK_IP)
            .header(headers::CLIENT_PUBLIC_IP, headers::LOOPBACK_IP)
            .header(headers::MAC_ADDRESS, headers::PLACEHOLDER_MAC)
            .json(&request)
            .send()
            .await?;

        debug!("Login request status: {}", response.status());

        if !response.status().is_success() {
            let error_text = response.text().await?;
            anyhow::bail!("Login failed: {}", error_text);
        }

        let login: LoginResponse = response.json().await?;

        match login.data {
            Some(tokens) => {
                info!("Session established for client {}", clientcode);
                Ok(tokens)
            }
            None => {
                let message = login
                    .message
                    .unwrap_or_else(|| "no session data in response".to_string());
                match login.errorcode {
                    Some(code) => anyhow::bail!("Login rejected ({}): {}", code, message),
                    None => anyhow::bail!("Login rejected: {}", message),
                }
            }
        }
    }
}
