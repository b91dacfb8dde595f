//! Notifications module - budget alert decisions, dedup markers, delivery.

mod notifications_model;
mod notifications_service;
mod notifications_traits;


pub use notifications_model::{
    AlertOutcome, AlertScope, DeliveryStatus, NewNotificationMarker, NotificationMarker,
    NotificationOutcome,
};
pub use notifications_service::NotificationService;
pub use notifications_traits::{
    Mailer, NotificationMarkerRepositoryTrait, NotificationServiceTrait,
};
