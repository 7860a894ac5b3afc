//! Asynchronous RUVDS client implementation.

use crate::models::{
    ActionListParams, AddSshKeyRequest, BalanceParams, CreateServerRequest, CreateTokenRequest,
    NotificationListParams, PaymentListParams, ServerActionRequest, ServerListParams,
    StartPasswordParams, UpdateNotificationRequest,
};
use crate::Result;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use ruvds_core::client::ClientConfig;
use ruvds_core::config::RuvdsConfig;
use ruvds_core::id::{NotificationId, ServerId, SshKeyId};
use ruvds_core::Error;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!("ruvds-api/", env!("CARGO_PKG_VERSION"));

/// Builder for [`RuvdsClient`].
#[derive(Debug)]
pub struct RuvdsClientBuilder {
    config: RuvdsConfig,
    http_config: ClientConfig,
}

impl RuvdsClientBuilder {
    /// Create a builder from a [`RuvdsConfig`].
    #[must_use]
    pub fn new(config: RuvdsConfig) -> Self {
        let http_config = ClientConfig::new().with_timeout(config.timeout());
        Self {
            config,
            http_config,
        }
    }

    /// Override the HTTP transport configuration.
    #[must_use]
    pub fn with_http_config(mut self, http_config: ClientConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Finalise the builder and create the [`RuvdsClient`].
    pub fn build(self) -> Result<RuvdsClient> {
        self.config.ensure_valid()?;
        let base_url = self.config.parse_api_url()?;

        let mut http_config = self.http_config;
        http_config.timeout = self.config.timeout();

        let mut builder = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(http_config.timeout)
            .connect_timeout(http_config.connect_timeout)
            .pool_idle_timeout(http_config.pool_idle_timeout)
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host);

        if !http_config.enable_compression {
            builder = builder.no_gzip();
        }

        let http = builder.build().map_err(|err| {
            Error::Config(format!("Failed to build RUVDS HTTP client: {err}"))
        })?;

        Ok(RuvdsClient {
            http,
            base_url,
            auth_header: self.config.bearer_header(),
        })
    }
}

/// Asynchronous client for the RUVDS v2 API.
///
/// Every method performs one independent exchange: build the request, send it,
/// decode the JSON answer. Responses carry no fixed schema and come back as
/// raw [`Value`]s. Nothing is retried, cached, or reordered, so concurrent
/// calls on clones of one client are safe and unrelated.
#[derive(Clone, Debug)]
pub struct RuvdsClient {
    http: Client,
    base_url: Url,
    auth_header: String,
}

impl RuvdsClient {
    /// Construct a client for the production endpoint.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        RuvdsClientBuilder::new(RuvdsConfig::new(api_token)).build()
    }

    /// Construct a client against a custom endpoint (staging, mock server).
    pub fn with_endpoint(
        api_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self> {
        RuvdsClientBuilder::new(RuvdsConfig::new(api_token).with_api_url(api_url)).build()
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List account actions.
    pub async fn list_actions(&self, params: &ActionListParams) -> Result<Value> {
        self.get_json("v2/actions", &params.to_pairs()).await
    }

    /// Fetch the account balance.
    pub async fn get_balance(&self, params: &BalanceParams) -> Result<Value> {
        self.get_json("v2/balance", &params.to_pairs()).await
    }

    /// List available datacenters.
    pub async fn list_datacenters(&self) -> Result<Value> {
        self.get_json("v2/datacenters", &[]).await
    }

    /// List account notifications.
    pub async fn list_notifications(&self, params: &NotificationListParams) -> Result<Value> {
        self.get_json("v2/notifications", &params.to_pairs()).await
    }

    /// Change the status of a notification.
    pub async fn update_notification_status(
        &self,
        id: NotificationId,
        request: &UpdateNotificationRequest,
    ) -> Result<Value> {
        let path = format!("v2/notifications/{id}");
        self.send_json(Method::PUT, &path, Some(request), &[]).await
    }

    /// List available operating system images.
    pub async fn list_operating_systems(&self) -> Result<Value> {
        self.get_json("v2/os", &[]).await
    }

    /// List payments.
    pub async fn list_payments(&self, params: &PaymentListParams) -> Result<Value> {
        self.get_json("v2/payments", &params.to_pairs()).await
    }

    /// Provision a virtual server.
    pub async fn create_server(&self, request: &CreateServerRequest) -> Result<Value> {
        self.send_json(Method::POST, "v2/servers", Some(request), &[])
            .await
    }

    /// List virtual servers.
    pub async fn list_servers(&self, params: &ServerListParams) -> Result<Value> {
        self.get_json("v2/servers", &params.to_pairs()).await
    }

    /// Register an SSH public key.
    pub async fn add_ssh_key(&self, request: &AddSshKeyRequest) -> Result<Value> {
        self.send_json(Method::POST, "v2/ssh_keys", Some(request), &[])
            .await
    }

    /// List registered SSH keys.
    pub async fn list_ssh_keys(&self) -> Result<Value> {
        self.get_json("v2/ssh_keys", &[]).await
    }

    /// Delete an SSH key.
    pub async fn delete_ssh_key(&self, id: SshKeyId) -> Result<Value> {
        let path = format!("v2/ssh_keys/{id}");
        self.send_json::<()>(Method::DELETE, &path, None, &[]).await
    }

    /// List API tokens.
    pub async fn list_tokens(&self) -> Result<Value> {
        self.get_json("v2/tokens", &[]).await
    }

    /// Create an API token.
    pub async fn create_token(&self, request: &CreateTokenRequest) -> Result<Value> {
        self.send_json(Method::POST, "v2/tokens", Some(request), &[])
            .await
    }

    /// Send a command to a virtual server.
    pub async fn send_server_action(
        &self,
        id: ServerId,
        request: &ServerActionRequest,
    ) -> Result<Value> {
        let path = format!("v2/servers/{id}/actions");
        self.send_json(Method::PUT, &path, Some(request), &[]).await
    }

    /// Fetch the initial password of a virtual server.
    pub async fn get_server_start_password(
        &self,
        id: ServerId,
        params: &StartPasswordParams,
    ) -> Result<Value> {
        let path = format!("v2/servers/{id}/start_password");
        self.get_json(&path, &params.to_pairs()).await
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let normalized = path.strip_prefix('/').unwrap_or(path);
        self.base_url
            .join(normalized)
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid RUVDS path `{path}`: {err}")))
    }

    async fn get_json(&self, path: &str, params: &[(&'static str, String)]) -> Result<Value> {
        self.send_json::<()>(Method::GET, path, None, params).await
    }

    async fn send_json<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &[(&'static str, String)],
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path)?;
        let mut request = self
            .http
            .request(method.clone(), url)
            .query(params)
            .header("Authorization", self.auth_header.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");

        if let Some(payload) = body {
            request = request.json(payload);
        }

        info!(path, method = %method, "RUVDS API request");

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|err| {
            Error::Http(format!("Failed to read RUVDS response body: {err}"))
        })?;

        if status.is_success() {
            return deserialize_body(path, status, &bytes);
        }

        debug!(path, status = %status, "RUVDS API error response");
        Err(error_from_response(status, &bytes))
    }
}

fn deserialize_body(path: &str, status: StatusCode, bytes: &[u8]) -> Result<Value> {
    if status == StatusCode::NO_CONTENT || bytes.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes)
        .map_err(|err| Error::Decode(format!("invalid JSON for `{path}`: {err}")))
}

fn error_from_response(status: StatusCode, bytes: &[u8]) -> Error {
    let body = serde_json::from_slice::<Value>(bytes).ok();
    let message = body
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| {
            let text = String::from_utf8_lossy(bytes);
            if text.trim().is_empty() {
                format!("HTTP status {status}")
            } else {
                text.into_owned()
            }
        });

    Error::Api {
        message,
        status,
        body: body.unwrap_or(Value::Null),
    }
}
