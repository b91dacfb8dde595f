use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::notifications_model::{
    AlertOutcome, AlertScope, DeliveryStatus, NewNotificationMarker, NotificationOutcome,
};
use super::notifications_traits::{
    Mailer, NotificationMarkerRepositoryTrait, NotificationServiceTrait,
};
use crate::budgets::BudgetSnapshot;
use crate::constants::ALERT_REMAINING_PERCENT;
use crate::errors::Result;
use crate::users::User;

/// A due alert before dispatch.
struct DueAlert {
    scope: AlertScope,
    label: String,
    remaining_percent: Decimal,
    remaining_amount: Decimal,
}

/// Service deciding when a budget alert is due and dispatching it.
pub struct NotificationService {
    marker_repository: Arc<dyn NotificationMarkerRepositoryTrait>,
    mailer: Arc<dyn Mailer>,
    threshold: Decimal,
}

impl NotificationService {
    pub fn new(
        marker_repository: Arc<dyn NotificationMarkerRepositoryTrait>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        NotificationService {
            marker_repository,
            mailer,
            threshold: Decimal::from_str(ALERT_REMAINING_PERCENT)
                .expect("alert threshold constant parses"),
        }
    }

    /// An alert is due when the budget is defined (non-zero) and the
    /// remaining share is at or below the threshold.
    fn due_alerts(&self, snapshot: &BudgetSnapshot) -> Vec<DueAlert> {
        let mut due = Vec::new();
        for usage in &snapshot.categories {
            if let Some(remaining) = usage.remaining_percent() {
                if remaining <= self.threshold {
                    due.push(DueAlert {
                        scope: AlertScope::Category(usage.category_id.clone()),
                        label: usage.name.clone(),
                        remaining_percent: remaining,
                        remaining_amount: usage.remaining_amount(),
                    });
                }
            }
        }
        if let Some(remaining) = snapshot.total.remaining_percent() {
            if remaining <= self.threshold {
                due.push(DueAlert {
                    scope: AlertScope::Total,
                    label: "Total budget".to_string(),
                    remaining_percent: remaining,
                    remaining_amount: snapshot.total.remaining_amount(),
                });
            }
        }
        due
    }

    fn subject(alert: &DueAlert) -> String {
        format!("Budget alert: {}", alert.label)
    }

    fn body(alert: &DueAlert, period: &str) -> String {
        format!(
            "Hi, your remaining budget for {} is {:.2} ({:.2}% left) for {}, \
             which is at or below {}% of your budget.",
            alert.label,
            alert.remaining_amount,
            alert.remaining_percent,
            period,
            ALERT_REMAINING_PERCENT,
        )
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    async fn maybe_notify(
        &self,
        user: &User,
        snapshot: &BudgetSnapshot,
    ) -> Result<NotificationOutcome> {
        let mut alerts = Vec::new();

        for alert in self.due_alerts(snapshot) {
            let scope_key = alert.scope.key();

            let status = if !self.mailer.is_enabled() {
                debug!(
                    "Mail transport not configured; suppressing alert {} for user {}",
                    scope_key, user.id
                );
                DeliveryStatus::Suppressed
            } else if self
                .marker_repository
                .exists(&user.id, &scope_key, &snapshot.period)?
            {
                debug!(
                    "Already notified {} for user {} in {}; suppressing",
                    scope_key, user.id, snapshot.period
                );
                DeliveryStatus::Suppressed
            } else {
                match self
                    .mailer
                    .send(&user.email, &Self::subject(&alert), &Self::body(&alert, &snapshot.period))
                    .await
                {
                    Ok(()) => {
                        // Recorded only after a successful send, so a failed
                        // delivery is retried on the next evaluation.
                        self.marker_repository
                            .record(NewNotificationMarker {
                                user_id: user.id.clone(),
                                scope: scope_key.clone(),
                                period: snapshot.period.clone(),
                            })
                            .await?;
                        DeliveryStatus::Sent
                    }
                    Err(e) => {
                        warn!(
                            "Failed to deliver budget alert {} for user {}: {}",
                            scope_key, user.id, e
                        );
                        DeliveryStatus::Failed
                    }
                }
            };

            alerts.push(AlertOutcome {
                scope: scope_key,
                label: alert.label,
                remaining_percent: alert.remaining_percent,
                remaining_amount: alert.remaining_amount,
                status,
            });
        }

        Ok(NotificationOutcome {
            period: snapshot.period.clone(),
            alerts,
        })
    }
}
