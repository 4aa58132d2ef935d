//! Client configuration

/// Configuration for connecting to the EzyFix backend and the identity
/// verification service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "http://localhost:5000")
    pub base_url: String,

    /// Identity verification service base URL
    pub verify_base_url: String,

    /// Bearer token for authenticated endpoints
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            verify_base_url: "https://verify.ezyfix.in".to_string(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the identity verification service URL
    pub fn with_verify_url(mut self, url: impl Into<String>) -> Self {
        self.verify_base_url = url.into();
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }

    /// Create a verification-service client from this configuration
    pub fn build_verify_client(&self) -> super::VerifyClient {
        super::VerifyClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}
