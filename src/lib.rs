use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db};

use auth::jwt::JwtService;
use entities::{achievement::Achievement, contact::ContactMessage, project::Project};
use repositories::memory::{MemoryAdminRepo, MemoryResourceRepo};
use repositories::mongo::{MongoAdminRepo, MongoResourceRepo};
use settings::AppConfig;
use use_cases::auth::AuthHandler;
use use_cases::resource::ResourceService;

/// One CRUD service per registered resource. Adding a resource means
/// adding a field here and a line in `routes::configure_routes`.
#[derive(Clone)]
pub struct AppServices {
    pub projects: ResourceService<Project>,
    pub achievements: ResourceService<Achievement>,
    pub contact: ResourceService<ContactMessage>,
}

impl AppServices {
    pub fn mongo(database: &mongodb::Database) -> Self {
        AppServices {
            projects: ResourceService::new(Arc::new(MongoResourceRepo::new(database))),
            achievements: ResourceService::new(Arc::new(MongoResourceRepo::new(database))),
            contact: ResourceService::new(Arc::new(MongoResourceRepo::new(database))),
        }
    }

    pub fn in_memory() -> Self {
        AppServices {
            projects: ResourceService::new(Arc::new(MemoryResourceRepo::new())),
            achievements: ResourceService::new(Arc::new(MemoryResourceRepo::new())),
            contact: ResourceService::new(Arc::new(MemoryResourceRepo::new())),
        }
    }
}

pub struct AppState {
    pub auth_handler: AuthHandler,
    pub services: AppServices,
}

impl AppState {
    /// Production wiring: every repository backed by the injected
    /// database handle.
    pub fn new(config: &AppConfig, database: &mongodb::Database) -> Self {
        let jwt_service = JwtService::new(config);
        let admin_repo = Arc::new(MongoAdminRepo::new(database));

        AppState {
            auth_handler: AuthHandler::new(admin_repo, jwt_service, config),
            services: AppServices::mongo(database),
        }
    }

    /// Self-contained wiring used by the test suite and for running
    /// without a database.
    pub fn in_memory(config: &AppConfig) -> Self {
        let jwt_service = JwtService::new(config);
        let admin_repo = Arc::new(MemoryAdminRepo::new());

        AppState {
            auth_handler: AuthHandler::new(admin_repo, jwt_service, config),
            services: AppServices::in_memory(),
        }
    }
}
