//! Request parameters and payloads for RUVDS API operations.
//!
//! Listing endpoints take a params struct whose `Default` carries the
//! documented defaults; defaults are sent literally on the wire, and only
//! genuinely nullable parameters are `Option`s (a `None` is omitted from the
//! query entirely). Write endpoints take flat request payloads.

use chrono::{DateTime, Utc};
use ruvds_core::id::{CurrencyId, DatacenterId, OsId, TariffId};
use ruvds_core::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction accepted by the paginated listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending (the API default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire representation of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for the `/v2/actions` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionListParams {
    /// Page number.
    pub page: u32,
    /// Results per page.
    pub per_page: u32,
    /// Sort field.
    pub sort: String,
    /// Sort direction.
    pub order: SortOrder,
}

impl Default for ActionListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
            sort: "id".to_string(),
            order: SortOrder::Asc,
        }
    }
}

impl ActionListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("page", self.page);
        params.push("per_page", self.per_page);
        params.push("sort", &self.sort);
        params.push("order", self.order);

        params.into_pairs()
    }
}

/// Parameters for the `/v2/balance` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceParams {
    /// Balance kind (sent as the `type` query parameter).
    pub balance_type: String,
    /// Billing currency.
    pub currency_id: CurrencyId,
}

impl Default for BalanceParams {
    fn default() -> Self {
        Self {
            balance_type: "default".to_string(),
            currency_id: CurrencyId::new(1),
        }
    }
}

impl BalanceParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("type", &self.balance_type);
        params.push("currency_id", self.currency_id);

        params.into_pairs()
    }
}

/// Parameters for the `/v2/notifications` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationListParams {
    /// Status filter (`all`, `read`, `unread`, ...).
    pub status: String,
    /// Page number.
    pub page: u32,
    /// Results per page.
    pub per_page: u32,
    /// Sort field.
    pub sort: String,
    /// Sort direction.
    pub order: SortOrder,
}

impl Default for NotificationListParams {
    fn default() -> Self {
        Self {
            status: "all".to_string(),
            page: 1,
            per_page: 25,
            sort: "add_dt".to_string(),
            order: SortOrder::Asc,
        }
    }
}

impl NotificationListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("status", &self.status);
        params.push("page", self.page);
        params.push("per_page", self.per_page);
        params.push("sort", &self.sort);
        params.push("order", self.order);

        params.into_pairs()
    }
}

/// Parameters for the `/v2/payments` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentListParams {
    /// Page number.
    pub page: u32,
    /// Results per page.
    pub per_page: u32,
    /// Sort field.
    pub sort: String,
    /// Sort direction.
    pub order: SortOrder,
}

impl Default for PaymentListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
            sort: "dt".to_string(),
            order: SortOrder::Asc,
        }
    }
}

impl PaymentListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("page", self.page);
        params.push("per_page", self.per_page);
        params.push("sort", &self.sort);
        params.push("order", self.order);

        params.into_pairs()
    }
}

/// Parameters for the `/v2/servers` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerListParams {
    /// Page number.
    pub page: u32,
    /// Results per page.
    pub per_page: u32,
    /// Sort field.
    pub sort: String,
    /// Sort direction.
    pub order: SortOrder,
    /// Include the paid-till date in each entry.
    pub get_paid_till: bool,
    /// Include network details in each entry.
    pub get_network: bool,
    /// Free-text search filter.
    pub search: Option<String>,
}

impl Default for ServerListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
            sort: "virtual_server_id".to_string(),
            order: SortOrder::Asc,
            get_paid_till: false,
            get_network: false,
            search: None,
        }
    }
}

impl ServerListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("page", self.page);
        params.push("per_page", self.per_page);
        params.push("sort", &self.sort);
        params.push("order", self.order);
        params.push("get_paid_till", self.get_paid_till);
        params.push("get_network", self.get_network);
        params.push_opt("search", self.search.as_deref());

        params.into_pairs()
    }
}

/// Parameters for the `/v2/servers/{id}/start_password` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartPasswordParams {
    /// Encoding of the returned password.
    pub response_format: String,
}

impl Default for StartPasswordParams {
    fn default() -> Self {
        Self {
            response_format: "base64".to_string(),
        }
    }
}

impl StartPasswordParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("response_format", &self.response_format);

        params.into_pairs()
    }
}

/// Request payload for provisioning a virtual server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateServerRequest {
    /// Datacenter hosting the server.
    pub datacenter: DatacenterId,
    /// Server tariff.
    pub tariff_id: TariffId,
    /// Operating system image.
    pub os_id: OsId,
    /// Payment period in months.
    pub payment_period: u32,
    /// CPU core count.
    pub cpu: u32,
    /// RAM in GB.
    pub ram: u32,
    /// Drive size in GB.
    pub drive: u32,
    /// Drive tariff.
    pub drive_tariff_id: TariffId,
    /// Number of public IP addresses.
    pub ip: u32,
    /// Hostname assigned to the server.
    pub computer_name: String,
    /// Free-form comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,
}

/// Request payload for registering an SSH public key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddSshKeyRequest {
    /// Public key material.
    pub public_key: String,
    /// Display name for the key.
    pub name: String,
}

/// Request payload for creating an API token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTokenRequest {
    /// Token display name.
    pub token_name: String,
    /// Role granted to the token.
    pub token_role: String,
    /// Expiry timestamp; a never-expiring token when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expiry: Option<DateTime<Utc>>,
}

/// Request payload for changing a notification's status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateNotificationRequest {
    /// New status (`read`, `unread`, ...).
    pub status: String,
}

impl UpdateNotificationRequest {
    /// Build a payload for the given status.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Request payload for sending a command to a virtual server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerActionRequest {
    /// Command to execute (`start`, `stop`, `restart`, ...), sent as `type`.
    #[serde(rename = "type")]
    pub action: String,
}

impl ServerActionRequest {
    /// Build a payload for the given command.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
        }
    }
}
