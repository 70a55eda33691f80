//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use hearth_auth::jwt::{JwtDecoder, JwtEncoder};
use hearth_auth::password::PasswordHasher;
use hearth_core::config::AppConfig;
use hearth_database::repositories::agent::AgentRepository;
use hearth_database::repositories::contact::ContactMessageRepository;
use hearth_database::repositories::inquiry::SellerInquiryRepository;
use hearth_database::repositories::property::PropertyRepository;
use hearth_database::repositories::review::ReviewRepository;
use hearth_database::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Property repository
    pub property_repo: Arc<PropertyRepository>,
    /// Agent repository
    pub agent_repo: Arc<AgentRepository>,
    /// Review repository
    pub review_repo: Arc<ReviewRepository>,
    /// Seller inquiry repository
    pub inquiry_repo: Arc<SellerInquiryRepository>,
    /// Contact message repository
    pub contact_repo: Arc<ContactMessageRepository>,
}

impl AppState {
    /// Assemble the full dependency graph from configuration and a live pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());

        Self {
            config: Arc::new(config),
            db_pool: db_pool.clone(),
            jwt_encoder,
            jwt_decoder,
            password_hasher,
            user_repo: Arc::new(UserRepository::new(db_pool.clone())),
            property_repo: Arc::new(PropertyRepository::new(db_pool.clone())),
            agent_repo: Arc::new(AgentRepository::new(db_pool.clone())),
            review_repo: Arc::new(ReviewRepository::new(db_pool.clone())),
            inquiry_repo: Arc::new(SellerInquiryRepository::new(db_pool.clone())),
            contact_repo: Arc::new(ContactMessageRepository::new(db_pool)),
        }
    }
}
