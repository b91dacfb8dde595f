use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use spendwise_core::notifications::{
    NewNotificationMarker, NotificationMarker, NotificationMarkerRepositoryTrait,
};
use spendwise_core::Result;

use super::model::{NewNotificationMarkerDB, NotificationMarkerDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::notification_markers;

pub struct NotificationMarkerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl NotificationMarkerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        NotificationMarkerRepository { pool, writer }
    }
}

#[async_trait]
impl NotificationMarkerRepositoryTrait for NotificationMarkerRepository {
    fn exists(&self, for_user_id: &str, for_scope: &str, for_period: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        diesel::select(exists(
            notification_markers::table
                .filter(notification_markers::user_id.eq(for_user_id))
                .filter(notification_markers::scope.eq(for_scope))
                .filter(notification_markers::period.eq(for_period)),
        ))
        .get_result::<bool>(&mut conn)
        .map_err(|e| StorageError::from(e).into())
    }

    async fn record(&self, marker: NewNotificationMarker) -> Result<NotificationMarker> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<NotificationMarker> {
                    let new_marker_db = NewNotificationMarkerDB {
                        id: Uuid::new_v4().to_string(),
                        user_id: marker.user_id,
                        scope: marker.scope,
                        period: marker.period,
                        notified_at: Utc::now().naive_utc(),
                    };

                    let result_db = diesel::insert_into(notification_markers::table)
                        .values(&new_marker_db)
                        .returning(NotificationMarkerDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    Ok(NotificationMarker::from(result_db))
                },
            )
            .await
    }
}
