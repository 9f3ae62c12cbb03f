use actix_web::web;

use crate::entities::{achievement::Achievement, project::Project};
use crate::handlers::{
    auth::{change_password, login},
    contact::contact_scope,
    json_error::json_config,
    resources::resource_scope,
    system::{health_check, home},
};
use crate::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(json_config())
        .service(home)
        .service(health_check)
        .service(
            web::scope("/api")
                .service(
                    web::scope("/admin")
                        .route("/login", web::post().to(login))
                        .route("/password", web::put().to(change_password)),
                )
                .service(contact_scope(state.services.contact.clone()))
                .service(resource_scope::<Project>(state.services.projects.clone()))
                .service(resource_scope::<Achievement>(state.services.achievements.clone())),
        );
}
