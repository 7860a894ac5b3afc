//! Client and data models for the RUVDS v2 management API.
//!
//! Provides typed request structures and an asynchronous client covering
//! server provisioning, billing, SSH key management, API tokens, and
//! notifications.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::{RuvdsClient, RuvdsClientBuilder};
pub use models::{
    ActionListParams, AddSshKeyRequest, BalanceParams, CreateServerRequest, CreateTokenRequest,
    NotificationListParams, PaymentListParams, ServerActionRequest, ServerListParams, SortOrder,
    StartPasswordParams, UpdateNotificationRequest,
};

/// Convenient result alias that reuses the shared RUVDS error type.
pub type Result<T> = ruvds_core::Result<T>;
