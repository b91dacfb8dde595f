//! Database models for notification markers.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for notification markers
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::notification_markers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NotificationMarkerDB {
    pub id: String,
    pub user_id: String,
    pub scope: String,
    pub period: String,
    pub notified_at: NaiveDateTime,
}

/// Database model for recording a new notification marker
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::notification_markers)]
pub struct NewNotificationMarkerDB {
    pub id: String,
    pub user_id: String,
    pub scope: String,
    pub period: String,
    pub notified_at: NaiveDateTime,
}

// Conversion to domain models
impl From<NotificationMarkerDB> for spendwise_core::notifications::NotificationMarker {
    fn from(db: NotificationMarkerDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            scope: db.scope,
            period: db.period,
            notified_at: db.notified_at,
        }
    }
}
