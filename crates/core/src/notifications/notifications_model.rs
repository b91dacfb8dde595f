//! Notification domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::TOTAL_ALERT_SCOPE;

/// What a budget alert is about: one category, or the aggregate total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertScope {
    Total,
    Category(String),
}

impl AlertScope {
    /// Stable key persisted in notification markers.
    pub fn key(&self) -> String {
        match self {
            AlertScope::Total => TOTAL_ALERT_SCOPE.to_string(),
            AlertScope::Category(id) => format!("category:{id}"),
        }
    }
}

/// Persisted record preventing duplicate alerts for the same threshold
/// crossing within one period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMarker {
    pub id: String,
    pub user_id: String,
    pub scope: String,
    pub period: String,
    pub notified_at: NaiveDateTime,
}

/// Insert model for a notification marker.
#[derive(Debug, Clone)]
pub struct NewNotificationMarker {
    pub user_id: String,
    pub scope: String,
    pub period: String,
}

/// Outcome of one alert that was due.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeliveryStatus {
    #[serde(rename = "SENT")]
    Sent,
    /// Already notified this period, or the mail transport is not configured.
    #[serde(rename = "SUPPRESSED")]
    Suppressed,
    #[serde(rename = "FAILED")]
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertOutcome {
    pub scope: String,
    /// Category name, or "Total budget" for the aggregate.
    pub label: String,
    pub remaining_percent: Decimal,
    pub remaining_amount: Decimal,
    pub status: DeliveryStatus,
}

/// Result of one `maybe_notify` evaluation: every alert that was due,
/// with its delivery status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOutcome {
    pub period: String,
    pub alerts: Vec<AlertOutcome>,
}

impl NotificationOutcome {
    pub fn sent(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.status == DeliveryStatus::Sent)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.status == DeliveryStatus::Failed)
            .count()
    }
}
