use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::shared::interfaces::host::{
    lifecycle::{
        CreateResourceRequest, DeleteResourceRequest, ImportResourceStateRequest,
        ReadResourceRequest, ResourceResponse, UpdateResourceRequest,
    },
    managed_resource::ManagedResource,
};

pub type LifecycleReply<D> = (StatusCode, Json<ResourceResponse<D>>);

/// Mounts `POST /resources/{type}/{operation}` for one resource type.
pub fn resource_router<R: ManagedResource>(resource: Arc<R>) -> Router {
    let base = format!("/resources/{}", R::TYPE_NAME);

    Router::new()
        .route(&format!("{base}/create"), post(create_resource::<R>))
        .route(&format!("{base}/read"), post(read_resource::<R>))
        .route(&format!("{base}/update"), post(update_resource::<R>))
        .route(&format!("{base}/delete"), post(delete_resource::<R>))
        .route(&format!("{base}/import"), post(import_resource_state::<R>))
        .with_state(resource)
}

pub async fn create_resource<R: ManagedResource>(
    State(resource): State<Arc<R>>,
    Json(request): Json<CreateResourceRequest<R::Data>>,
) -> LifecycleReply<R::Data> {
    reply(resource.create(request).await)
}

pub async fn read_resource<R: ManagedResource>(
    State(resource): State<Arc<R>>,
    Json(request): Json<ReadResourceRequest<R::Data>>,
) -> LifecycleReply<R::Data> {
    reply(resource.read(request).await)
}

pub async fn update_resource<R: ManagedResource>(
    State(resource): State<Arc<R>>,
    Json(request): Json<UpdateResourceRequest<R::Data>>,
) -> LifecycleReply<R::Data> {
    reply(resource.update(request).await)
}

pub async fn delete_resource<R: ManagedResource>(
    State(resource): State<Arc<R>>,
    Json(request): Json<DeleteResourceRequest<R::Data>>,
) -> LifecycleReply<R::Data> {
    reply(resource.delete(request).await)
}

pub async fn import_resource_state<R: ManagedResource>(
    State(resource): State<Arc<R>>,
    Json(request): Json<ImportResourceStateRequest>,
) -> LifecycleReply<R::Data> {
    reply(resource.import_state(request).await)
}

fn reply<D>(response: ResourceResponse<D>) -> LifecycleReply<D> {
    let status = if response.diagnostics.has_error() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };

    (status, Json(response))
}
