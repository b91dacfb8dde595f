use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use spendwise_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    notifications::{NotificationService, NotificationServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    users::{UserService, UserServiceTrait},
};
use spendwise_mailer::build_mailer;
use spendwise_storage_sqlite::{
    categories::CategoryRepository, db, db::write_actor, expenses::ExpenseRepository,
    notifications::NotificationMarkerRepository, users::UserRepository,
};

use crate::{auth::AuthManager, config::Config};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub notification_service: Arc<dyn NotificationServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub auth: Arc<AuthManager>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    db::init(&config.database_url)?;
    tracing::info!("Database path in use: {}", config.database_url);

    let pool = db::create_pool(&config.database_url)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let category_repository = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let marker_repository = Arc::new(NotificationMarkerRepository::new(
        pool.clone(),
        writer.clone(),
    ));

    let user_service: Arc<dyn UserServiceTrait> =
        Arc::new(UserService::new(user_repository.clone()));
    let category_service: Arc<dyn CategoryServiceTrait> =
        Arc::new(CategoryService::new(category_repository.clone()));
    let expense_service: Arc<dyn ExpenseServiceTrait> = Arc::new(ExpenseService::new(
        expense_repository.clone(),
        category_repository.clone(),
    ));
    let budget_service: Arc<dyn BudgetServiceTrait> = Arc::new(BudgetService::new(
        category_repository.clone(),
        expense_repository.clone(),
    ));

    let mailer = build_mailer(&config.mail)?;
    let notification_service: Arc<dyn NotificationServiceTrait> =
        Arc::new(NotificationService::new(marker_repository.clone(), mailer));

    let report_service: Arc<dyn ReportServiceTrait> = Arc::new(ReportService::new(
        budget_service.clone(),
        expense_repository.clone(),
    ));

    let secret = crate::auth::resolve_secret(config.secret_key.as_deref())?;
    let auth = Arc::new(AuthManager::new(&secret));

    Ok(Arc::new(AppState {
        user_service,
        category_service,
        expense_service,
        budget_service,
        notification_service,
        report_service,
        auth,
        db_path: config.database_url.clone(),
    }))
}
