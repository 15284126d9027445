//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use jobtrail_core::config::AppConfig;
use jobtrail_database::repositories::{
    ApplicationRepository, DocumentRepository, NotificationRepository, UserRepository,
};
use jobtrail_service::{
    ApplicationService, DocumentService, NotificationService, ProfileService, StatsService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped (or internally pooled) for cheap cloning
/// across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Application CRUD service
    pub application_service: ApplicationService,
    /// Document metadata service
    pub document_service: DocumentService,
    /// Notification read-state service
    pub notification_service: NotificationService,
    /// Profile service
    pub profile_service: ProfileService,
    /// Statistics service
    pub stats_service: StatsService,
}

impl AppState {
    /// Wire repositories and services over the connection pool.
    pub fn new(config: Arc<AppConfig>, db_pool: PgPool) -> Self {
        let application_repo = Arc::new(ApplicationRepository::new(db_pool.clone()));
        let document_repo = Arc::new(DocumentRepository::new(db_pool.clone()));
        let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));

        let notification_service = NotificationService::new(notification_repo);
        let application_service =
            ApplicationService::new(application_repo.clone(), notification_service.clone());
        let document_service = DocumentService::new(
            document_repo,
            application_repo.clone(),
            notification_service.clone(),
        );
        let stats_service = StatsService::new(application_repo);
        let profile_service = ProfileService::new(user_repo);

        Self {
            config,
            db_pool,
            application_service,
            document_service,
            notification_service,
            profile_service,
            stats_service,
        }
    }
}
