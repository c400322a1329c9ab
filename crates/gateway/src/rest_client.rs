use chrono::Utc;
use log::{Level, debug, log};
use reqwest::{Client, Response, header};
use serde::{Deserialize, de::DeserializeOwned};

use crate::config::{Credentials, GatewayConfig};
use crate::error::RestError;
use crate::signer::{HmacSigner, build_query_string};

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// REST API client for the futures exchange
/// Infrastructure component - handles HTTP communication and signing
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    api_key: String,
    signer: HmacSigner,
    recv_window_ms: u64,
}

impl RestClient {
    pub fn new(config: &GatewayConfig, credentials: &Credentials) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RestError::Setup(format!("Failed to create HTTP client: {}", e)))?;

        Ok(RestClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: credentials.api_key.clone(),
            signer: HmacSigner::new(&credentials.api_secret)?,
            recv_window_ms: config.recv_window_ms,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Unsigned GET, for market metadata
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, RestError> {
        let url = self.url(path, &owned(params));
        debug!("GET (public) {}", url);

        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp, Level::Debug).await
    }

    /// Signed GET, for account endpoints
    pub async fn get_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, RestError> {
        let signed = self.sign_params(params);
        let url = self.url(path, &signed);
        debug!("GET (signed) {}", path);

        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        self.handle_response(resp, Level::Debug).await
    }

    /// Signed POST with the parameters form-encoded in the body
    ///
    /// POSTs place orders, so the raw response is logged at info.
    pub async fn post_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, RestError> {
        let body = build_query_string(&self.sign_params(params));
        debug!("POST (signed) {}", path);

        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        self.handle_response(resp, Level::Info).await
    }

    fn url(&self, path: &str, params: &[(String, String)]) -> String {
        if params.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, build_query_string(params))
        }
    }

    fn sign_params(&self, params: &[(&str, String)]) -> Vec<(String, String)> {
        let mut signed = owned(params);
        signed.push(("recvWindow".to_string(), self.recv_window_ms.to_string()));
        self.signer.sign(&mut signed, Utc::now().timestamp_millis());
        signed
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: Response,
        level: Level,
    ) -> Result<T, RestError> {
        let status = resp.status();
        let text = resp.text().await?;
        log!(level, "Response {}: {}", status.as_u16(), text);

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<ErrorBody>(&text) {
                return Err(RestError::Api {
                    status: status.as_u16(),
                    code: err.code,
                    msg: err.msg,
                });
            }
            return Err(RestError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| RestError::Parse(format!("{} - body: {}", e, text)))
    }
}

fn owned(params: &[(&str, String)]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[derive(Deserialize)]
struct ErrorBody {
    code: i64,
    msg: String,
}
