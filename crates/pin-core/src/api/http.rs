//! HTTP implementation of the companion API.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, CompanionApi};
use crate::config::ClientConfig;
use crate::models::{DeviceInfo, FeatureFlag, Subscription};
use crate::util::{has_http_scheme, non_blank, trim_base_url};

/// Longest error body kept in [`ApiError::Status`]
const STATUS_MESSAGE_MAX_CHARS: usize = 180;

/// JSON client for the companion backend.
#[derive(Clone)]
pub struct HttpCompanionApi {
    base_url: String,
    access_token: Option<String>,
    client: Client,
}

impl fmt::Debug for HttpCompanionApi {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HttpCompanionApi")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish_non_exhaustive()
    }
}

impl HttpCompanionApi {
    /// Builds a client for an explicit API base URL.
    pub fn new(
        base_url: impl AsRef<str>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(base_url, access_token, client)
    }

    /// Builds a client around an already configured `reqwest::Client`.
    pub fn with_client(
        base_url: impl AsRef<str>,
        access_token: Option<String>,
        client: Client,
    ) -> ApiResult<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            access_token: non_blank(access_token),
            client,
        })
    }

    /// Builds a client from resolved client configuration.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        let base_url =
            non_blank(config.api_base_url.clone()).ok_or(ApiError::NotConfigured)?;
        Self::new(base_url, config.access_token.clone(), config.request_timeout())
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, route: &str) -> RequestBuilder {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, route))
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, route: &str) -> ApiResult<T> {
        let response = self.get(route).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: status_message(&body),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CompanionApi for HttpCompanionApi {
    async fn feature_flag(&self, name: &str) -> ApiResult<FeatureFlag> {
        let route = format!("/v1/feature-flags/{}", urlencoding::encode(name));
        let mut flag: FeatureFlag = self.fetch_json(&route).await?;
        if flag.name.is_empty() {
            flag.name = name.to_string();
        }
        Ok(flag)
    }

    async fn subscription(&self) -> ApiResult<Subscription> {
        self.fetch_json("/v1/subscription").await
    }

    async fn retrieve_detailed_device_info(&self) -> ApiResult<DeviceInfo> {
        self.fetch_json("/v1/device/detailed").await
    }
}

fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let base = trim_base_url(raw);
    if base.is_empty() {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must not be empty",
        ));
    }
    if !has_http_scheme(base) {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must include http:// or https://",
        ));
    }
    Ok(base.to_string())
}

/// Error body on one line, cut to [`STATUS_MESSAGE_MAX_CHARS`].
fn status_message(body: &str) -> String {
    let single_line = body.split_whitespace().collect::<Vec<_>>().join(" ");
    match single_line.char_indices().nth(STATUS_MESSAGE_MAX_CHARS) {
        Some((cut, _)) => single_line[..cut].to_string(),
        None => single_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Canned HTTP/1.1 responses keyed by request path; request heads are recorded.
    struct CannedServer {
        base_url: String,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl CannedServer {
        async fn start(routes: Vec<(&'static str, u16, String)>) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let base_url = format!("http://{}", listener.local_addr().unwrap());
            let requests = Arc::new(Mutex::new(Vec::new()));
            let recorded = Arc::clone(&requests);

            tokio::spawn(async move {
                while let Ok((mut socket, _)) = listener.accept().await {
                    let mut head = Vec::new();
                    let mut chunk = [0_u8; 1024];
                    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
                        let read = socket.read(&mut chunk).await.unwrap();
                        if read == 0 {
                            break;
                        }
                        head.extend_from_slice(&chunk[..read]);
                    }
                    let head = String::from_utf8_lossy(&head).to_string();
                    let path = head.split_whitespace().nth(1).unwrap_or_default().to_string();
                    recorded.lock().unwrap().push(head);

                    let (status, body) = routes
                        .iter()
                        .find(|(route, _, _)| *route == path)
                        .map_or((404, String::new()), |(_, status, body)| {
                            (*status, body.clone())
                        });
                    let response = format!(
                        "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    socket.write_all(response.as_bytes()).await.unwrap();
                    socket.shutdown().await.ok();
                }
            });

            Self { base_url, requests }
        }

        fn client(&self, token: Option<&str>) -> HttpCompanionApi {
            let client = Client::builder()
                .no_proxy()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap();
            HttpCompanionApi::with_client(&self.base_url, token.map(str::to_string), client)
                .unwrap()
        }

        fn request_heads(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("api.example.com").is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn from_config_requires_base_url() {
        let error = HttpCompanionApi::from_config(&ClientConfig::default()).unwrap_err();
        assert!(matches!(error, ApiError::NotConfigured));
    }

    #[test]
    fn from_config_drops_blank_token() {
        let config = ClientConfig {
            api_base_url: Some("http://localhost:8080/".to_string()),
            access_token: Some("   ".to_string()),
            ..ClientConfig::default()
        };
        let api = HttpCompanionApi::from_config(&config).unwrap();
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert!(api.access_token.is_none());
    }

    #[test]
    fn debug_output_redacts_access_token() {
        let api = HttpCompanionApi::new(
            "https://api.example.com",
            Some("secret-token".to_string()),
            Duration::from_secs(1),
        )
        .unwrap();

        let rendered = format!("{api:?}");
        assert!(rendered.contains("https://api.example.com"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("secret-token"));
    }

    #[test]
    fn status_message_joins_lines_and_truncates() {
        assert_eq!(status_message("  upstream\n\n  timeout \t"), "upstream timeout");
        let long = "é".repeat(400);
        assert_eq!(status_message(&long).chars().count(), STATUS_MESSAGE_MAX_CHARS);
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        let body = format!("{{\"error\": \"{}\"}}", "x".repeat(500));
        let server = CannedServer::start(vec![("/v1/subscription", 503, body)]).await;

        let error = server.client(None).subscription().await.unwrap_err();

        match error {
            ApiError::Status { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message.chars().count(), STATUS_MESSAGE_MAX_CHARS);
                assert!(message.starts_with("{\"error\": \"xxx"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn subscription_decodes_camel_case_body_with_bearer_token() {
        let body = r#"{
            "accountNumber": "A-100",
            "phoneNumber": "+15555550100",
            "status": "active",
            "planType": "standard",
            "planPrice": 2400
        }"#;
        let server =
            CannedServer::start(vec![("/v1/subscription", 200, body.to_string())]).await;

        let subscription = server
            .client(Some("secret-token"))
            .subscription()
            .await
            .unwrap();

        assert_eq!(
            subscription,
            Subscription {
                account_number: "A-100".to_string(),
                phone_number: "+15555550100".to_string(),
                status: "active".to_string(),
                plan_type: "standard".to_string(),
                plan_price: 2400,
            }
        );
        let heads = server.request_heads();
        assert_eq!(heads.len(), 1);
        let head = heads[0].to_ascii_lowercase();
        assert!(head.starts_with("get /v1/subscription "));
        assert!(head.contains("authorization: bearer secret-token"));
        assert!(head.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn feature_flag_fills_missing_name() {
        let server = CannedServer::start(vec![(
            "/v1/feature-flags/visionAccess",
            200,
            r#"{"bool": true}"#.to_string(),
        )])
        .await;

        let flag = server.client(None).feature_flag("visionAccess").await.unwrap();

        assert_eq!(flag, FeatureFlag::new("visionAccess", true));
        assert!(!server.request_heads()[0]
            .to_ascii_lowercase()
            .contains("authorization"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_error() {
        let server = CannedServer::start(vec![(
            "/v1/device/detailed",
            200,
            r#"{"id": "device-1"}"#.to_string(),
        )])
        .await;

        let error = server
            .client(None)
            .retrieve_detailed_device_info()
            .await
            .unwrap_err();
        assert!(matches!(error, ApiError::Json(_)));
    }
}
