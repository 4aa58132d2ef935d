//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::response::ApiErrorBody;

/// HTTP client for making requests to the EzyFix backend.
///
/// Holds the bearer token for the current session; every page of the
/// portal goes through this one client, so installing or clearing the
/// token at login/logout is the only auth plumbing the pages see.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
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
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Install the token issued at login/registration.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the token on logout.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(auth) = self.auth_header() {
            request.header(reqwest::header::AUTHORIZATION, auth)
        } else {
            request
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorized(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a multipart form body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.post(self.url(path)).multipart(form));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with a multipart form body
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.put(self.url(path)).multipart(form));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, discarding any response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.authorized(self.client.delete(self.url(path)));
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response.text().await?));
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from(status, response.text().await?));
        }

        response.json().await.map_err(Into::into)
    }

    /// Map a failed response to a `ClientError`, preferring the
    /// backend's own `msg`/`message` text when the body carries one.
    fn error_from(status: StatusCode, body: String) -> ClientError {
        let server_message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(ApiErrorBody::into_message);

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(server_message.unwrap_or(body)),
            StatusCode::NOT_FOUND => ClientError::NotFound(server_message.unwrap_or(body)),
            StatusCode::BAD_REQUEST => ClientError::Validation(server_message.unwrap_or(body)),
            _ => match server_message {
                Some(message) => ClientError::Api {
                    status: status.as_u16(),
                    message,
                },
                None => ClientError::Internal(body),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpClient {
        ClientConfig::new("http://localhost:5000/").build_http_client()
    }

    #[test]
    fn url_joins_without_duplicate_slashes() {
        let client = client();
        assert_eq!(
            client.url("/api/coupons/my-coupons"),
            "http://localhost:5000/api/coupons/my-coupons"
        );
        assert_eq!(client.url("api/auth/login"), "http://localhost:5000/api/auth/login");
    }

    #[test]
    fn error_mapping_prefers_server_message() {
        let err = HttpClient::error_from(
            StatusCode::CONFLICT,
            r#"{"msg":"Email already registered"}"#.to_string(),
        );
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Email already registered");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unauthorized_maps_to_dedicated_variant() {
        let err = HttpClient::error_from(StatusCode::UNAUTHORIZED, String::new());
        assert!(err.is_unauthorized());
    }

    #[test]
    fn unparseable_body_falls_back_to_internal() {
        let err = HttpClient::error_from(StatusCode::BAD_GATEWAY, "<html>".to_string());
        assert!(matches!(err, ClientError::Internal(body) if body == "<html>"));
    }
}
