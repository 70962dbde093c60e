// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access-token acquisition from the backend token service.
//!
//! One join token is fetched per connect attempt and never cached; the token
//! is an opaque string passed straight through to the engine.

use crate::error::SessionError;
use futures::future::LocalBoxFuture;
use serde::Deserialize;

/// Identity and room name the user supplied at connect time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinCredential {
    pub identity: String,
    pub room_name: String,
}

/// Body of a successful token response.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

/// Seam over the token endpoint so controller tests can script failures.
pub trait TokenProvider {
    fn fetch_token<'a>(
        &'a self,
        credential: &'a JoinCredential,
    ) -> LocalBoxFuture<'a, Result<String, SessionError>>;
}

/// Production provider: `GET <base>/api/token?identity=..&room=..`.
pub struct HttpTokenProvider {
    api_base_url: String,
}

impl HttpTokenProvider {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn token_url(&self, credential: &JoinCredential) -> String {
        format!(
            "{}/api/token?identity={}&room={}",
            self.api_base_url,
            urlencoding::encode(&credential.identity),
            urlencoding::encode(&credential.room_name),
        )
    }
}

impl TokenProvider for HttpTokenProvider {
    fn fetch_token<'a>(
        &'a self,
        credential: &'a JoinCredential,
    ) -> LocalBoxFuture<'a, Result<String, SessionError>> {
        Box::pin(async move {
            let url = self.token_url(credential);
            log::info!("Fetching access token from {url}");

            let response = reqwest::get(&url).await.map_err(|e| SessionError::TokenFetch {
                status: 0,
                status_text: e.to_string(),
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(SessionError::TokenFetch {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
                });
            }

            let body: TokenResponse = response.json().await.map_err(|e| SessionError::TokenFetch {
                status: status.as_u16(),
                status_text: format!("invalid token response: {e}"),
            })?;
            Ok(body.token)
        })
    }
}
