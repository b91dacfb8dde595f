use async_trait::async_trait;

use crate::budgets::BudgetSnapshot;
use crate::errors::Result;
use crate::notifications::notifications_model::{
    NewNotificationMarker, NotificationMarker, NotificationOutcome,
};
use crate::users::User;

/// Trait for notification marker repository operations
#[async_trait]
pub trait NotificationMarkerRepositoryTrait: Send + Sync {
    fn exists(&self, user_id: &str, scope: &str, period: &str) -> Result<bool>;
    async fn record(&self, marker: NewNotificationMarker) -> Result<NotificationMarker>;
}

/// Outbound email transport. Implemented by the mailer crate; core only
/// decides when to send and what the message says.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// False when no transport is configured; alerts are then suppressed
    /// instead of attempted.
    fn is_enabled(&self) -> bool {
        true
    }

    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Trait for notification service operations
#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    /// Checks the snapshot against the alert threshold and dispatches any
    /// due alerts. Delivery failures are reported in the outcome, never
    /// raised; `Err` only signals a marker store failure.
    async fn maybe_notify(
        &self,
        user: &User,
        snapshot: &BudgetSnapshot,
    ) -> Result<NotificationOutcome>;
}
