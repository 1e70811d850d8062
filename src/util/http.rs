use crate::util::config::VendorConfig;
use crate::util::errors::ResolverError;
use crate::util::headers::generate_headers;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

pub type Params = Vec<(&'static str, String)>;

/// Outbound side of every vendor call. Errors (network failure, non-2xx)
/// propagate to the caller; nothing is retried.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn get(&self, url: &str, params: Params) -> Result<Value, ResolverError>;
    async fn post(&self, url: &str, body: &Value) -> Result<Value, ResolverError>;
}

pub struct HttpOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub query: Option<BTreeMap<&'static str, String>>,
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            query: None,
            body: None,
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

pub async fn make_request(
    url: &str,
    client: &Client,
    options: HttpOptions,
) -> Result<Value, ResolverError> {
    let mut req = client.request(options.method, url);
    req = req.headers(options.headers);
    if let Some(query) = options.query {
        req = req.query(&query);
    }
    if let Some(body) = options.body {
        req = req.body(body);
    }
    if let Some(timeout) = options.timeout {
        req = req.timeout(timeout);
    }

    let res = req.send().await?;
    let status = res.status();

    if !status.is_success() {
        return Err(ResolverError::FailedStatusCode(status.to_string()));
    }

    let body = res.bytes().await?;

    Ok(serde_json::from_slice(&body)?)
}

/// Parameters the vendor expects on every GET.
pub fn common_params(token: u32) -> BTreeMap<&'static str, String> {
    BTreeMap::from([
        ("g_tk", token.to_string()),
        ("loginUin", "0".to_string()),
        ("hostUin", "0".to_string()),
        ("inCharset", "utf8".to_string()),
        ("outCharset", "utf-8".to_string()),
        ("notice", "0".to_string()),
        ("needNewCode", "0".to_string()),
        ("format", "json".to_string()),
        ("platform", "yqq.json".to_string()),
    ])
}

/// Caller params win over the baseline ones.
pub fn merge_params(token: u32, params: Params) -> BTreeMap<&'static str, String> {
    let mut merged = common_params(token);
    merged.extend(params);
    merged
}

pub struct HttpTransport {
    client: Client,
    headers: HeaderMap,
    token: u32,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(client: Client, config: &VendorConfig) -> Result<Self, ResolverError> {
        let headers = generate_headers(&config.origin)
            .map_err(|error| ResolverError::InvalidHeader(error.to_string()))?;

        Ok(Self {
            client,
            headers,
            token: config.token,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, params: Params) -> Result<Value, ResolverError> {
        tracing::debug!("GET {}", url);

        let options = HttpOptions {
            headers: self.headers.clone(),
            query: Some(merge_params(self.token, params)),
            timeout: Some(self.timeout),
            ..Default::default()
        };

        make_request(url, &self.client, options).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, ResolverError> {
        tracing::debug!("POST {}", url);

        let mut headers = self.headers.clone();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let options = HttpOptions {
            method: Method::POST,
            headers,
            body: Some(serde_json::to_string(body)?),
            timeout: Some(self.timeout),
            ..Default::default()
        };

        make_request(url, &self.client, options).await
    }
}
