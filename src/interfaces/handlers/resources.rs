use actix_web::{web, HttpResponse, Scope};
use uuid::Uuid;

use crate::entities::resource::Resource;
use crate::errors::AppError;
use crate::use_cases::resource::ResourceService;

/// Mounts the uniform CRUD surface for one resource under
/// `/{Resource::NAME}`. The service travels with the scope, so every
/// registered resource gets its own storage without touching AppState.
pub fn resource_scope<T: Resource>(service: ResourceService<T>) -> Scope {
    web::scope(&format!("/{}", T::NAME))
        .app_data(web::Data::new(service))
        .route("", web::get().to(list_resources::<T>))
        .route("", web::post().to(create_resource::<T>))
        .route("/{id}", web::put().to(update_resource::<T>))
        .route("/{id}", web::delete().to(delete_resource::<T>))
}

pub async fn list_resources<T: Resource>(
    service: web::Data<ResourceService<T>>,
) -> Result<HttpResponse, AppError> {
    let records = service.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn create_resource<T: Resource>(
    service: web::Data<ResourceService<T>>,
    payload: web::Json<T::Create>,
) -> Result<HttpResponse, AppError> {
    let record = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

pub async fn update_resource<T: Resource>(
    service: web::Data<ResourceService<T>>,
    id: web::Path<Uuid>,
    patch: web::Json<T::Patch>,
) -> Result<HttpResponse, AppError> {
    let record = service.update(&id, patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

pub async fn delete_resource<T: Resource>(
    service: web::Data<ResourceService<T>>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    service.delete(&id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Item deleted successfully"
    })))
}
