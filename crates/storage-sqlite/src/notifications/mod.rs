mod model;
mod repository;

pub use model::{NewNotificationMarkerDB, NotificationMarkerDB};
pub use repository::NotificationMarkerRepository;
