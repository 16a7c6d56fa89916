use super::auth::{self, RANDOM_KEY_HEADER};
use crate::config::GatewayConfig;
use crate::domain::ports::{Endpoint, Gateway, HttpMethod};
use crate::error::{IyzipayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, warn};

const CLIENT_VERSION_HEADER: &str = "x-iyzi-client-version";
const CLIENT_VERSION: &str = concat!("iyzipay-adapter-", env!("CARGO_PKG_VERSION"));
const MAX_ERROR_BODY: usize = 512;

/// Gateway adapter speaking JSON over HTTPS with IYZWSv2-signed requests.
///
/// `Clone` shares the underlying `reqwest` connection pool.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    /// Validates `config` and builds a client honouring its timeout.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Uses a caller-built client, e.g. one with proxies or extra root certificates.
    pub fn with_client(client: Client, config: GatewayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn call(&self, endpoint: Endpoint, body: Value) -> Result<Value> {
        let path = endpoint.path();
        let url = self.config.url_for(path);
        // The signature must cover the exact bytes sent.
        let payload = serde_json::to_string(&body)?;
        let random_key = auth::random_key();
        let authorization = auth::authorization_header(
            &self.config.api_key,
            &self.config.secret_key,
            &random_key,
            path,
            &payload,
        )?;

        let builder = match endpoint.method() {
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        };

        debug!(%endpoint, url = %url, "sending gateway request");
        let response = builder
            .header(AUTHORIZATION, authorization)
            .header(RANDOM_KEY_HEADER, &random_key)
            .header(CLIENT_VERSION_HEADER, CLIENT_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(%endpoint, status = status.as_u16(), "gateway replied");

        match serde_json::from_str::<Value>(&text) {
            Ok(reply) if reply.is_object() => Ok(reply),
            _ => {
                warn!(%endpoint, status = status.as_u16(), "gateway reply is not a JSON object");
                Err(IyzipayError::UnexpectedResponse {
                    status: status.as_u16(),
                    body: truncate(&text, MAX_ERROR_BODY),
                })
            }
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn gateway_for(server: &MockServer) -> HttpGateway {
        HttpGateway::new(GatewayConfig::new("api-key", "secret").with_base_url(server.base_url()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_signed_post_returns_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/payment/3dsecure/auth")
                    .header_exists("authorization")
                    .header_exists("x-iyzi-rnd")
                    .header("content-type", "application/json")
                    .json_body(json!({"locale": "tr", "paymentId": "1"}));
                then.status(200)
                    .json_body(json!({"status": "success", "paymentId": "1"}));
            })
            .await;

        let reply = gateway_for(&server)
            .call(Endpoint::ThreedsAuth, json!({"locale": "tr", "paymentId": "1"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(reply["paymentId"], "1");
    }

    #[tokio::test]
    async fn test_submerchant_update_uses_put() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/onboarding/submerchant");
                then.status(200).json_body(json!({"status": "success"}));
            })
            .await;

        gateway_for(&server)
            .call(Endpoint::SubMerchantUpdate, json!({"subMerchantKey": "k"}))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_json_failure_body_passes_through_on_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/payment/iyzipos/item/approve");
                then.status(401).json_body(json!({
                    "status": "failure",
                    "errorCode": "1001",
                    "errorMessage": "api bilgileri bulunamadı"
                }));
            })
            .await;

        let reply = gateway_for(&server)
            .call(Endpoint::ItemApprove, json!({}))
            .await
            .unwrap();
        assert_eq!(reply["errorCode"], "1001");
    }

    #[tokio::test]
    async fn test_non_json_reply_is_unexpected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/onboarding/submerchant/detail");
                then.status(502).body("<html>Bad Gateway</html>");
            })
            .await;

        let err = gateway_for(&server)
            .call(Endpoint::SubMerchantRetrieve, json!({}))
            .await
            .unwrap_err();
        match err {
            IyzipayError::UnexpectedResponse { status, body } => {
                assert_eq!(status, 502);
                assert!(body.contains("Bad Gateway"));
            }
            other => panic!("expected unexpected response, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_with_client_keeps_config_and_signs_requests() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/payment/iyzipos/item/approve")
                    .header_exists("authorization")
                    .header_exists("x-iyzi-rnd");
                then.status(200).json_body(json!({"status": "success"}));
            })
            .await;
        let config = GatewayConfig::new("api-key", "secret").with_base_url(server.base_url());

        let gateway = HttpGateway::with_client(Client::new(), config).unwrap();
        assert_eq!(gateway.config().base_url, server.base_url());
        assert_eq!(gateway.config().api_key, "api-key");

        gateway
            .call(Endpoint::ItemApprove, json!({"paymentTransactionId": "7"}))
            .await
            .unwrap();
        mock.assert_async().await;

        assert!(HttpGateway::with_client(Client::new(), GatewayConfig::new("k", "")).is_err());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(HttpGateway::new(GatewayConfig::new("", "secret")).is_err());
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("ğüşiöç", 3), "ğüş...");
    }
}
