use actix_web::{web, HttpResponse, Scope};

use crate::entities::contact::{ContactMessage, MessageReceipt, NewContactMessage};
use crate::errors::AppError;
use crate::handlers::resources::{delete_resource, list_resources, update_resource};
use crate::use_cases::resource::ResourceService;

/// Contact intake sits outside the generic router: creation is open to
/// anonymous visitors and answers with a receipt, not the stored record.
/// Everything else is the generic admin CRUD behavior.
pub fn contact_scope(service: ResourceService<ContactMessage>) -> Scope {
    web::scope("/contact")
        .app_data(web::Data::new(service))
        .route("", web::post().to(create_contact))
        .route("", web::get().to(list_resources::<ContactMessage>))
        .route("/{id}", web::put().to(update_resource::<ContactMessage>))
        .route("/{id}", web::delete().to(delete_resource::<ContactMessage>))
}

pub async fn create_contact(
    service: web::Data<ResourceService<ContactMessage>>,
    form: web::Json<NewContactMessage>,
) -> Result<HttpResponse, AppError> {
    let record = service.create(form.into_inner()).await?;

    Ok(HttpResponse::Created().json(MessageReceipt {
        message: "Your message has been received.".to_string(),
        id: record.id,
    }))
}
