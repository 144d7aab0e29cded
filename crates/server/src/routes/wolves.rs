use axum::{extract::{Path, Query, State}, Json};
use common::types::Message;
use models::wolf;
use serde::Deserialize;
use service::{errors::ServiceError, wolf_service};
use tracing::info;
use utoipa::IntoParams;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateWolfQuery {
    pub wolf_name: String,
    pub wolf_power: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateWolfQuery {
    pub wolf_name: Option<String>,
    pub wolf_power: Option<i32>,
}

#[utoipa::path(
    post, path = "/create_wolf", tag = "wolves",
    params(CreateWolfQuery),
    responses(
        (status = 200, description = "Created", body = crate::openapi::WolfDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Query(q): Query<CreateWolfQuery>) -> Result<Json<wolf::Model>, JsonApiError> {
    match wolf_service::create_wolf(&state.db, &q.wolf_name, q.wolf_power).await {
        Ok(m) => { info!(id = m.id, power = m.wolf_power, "created wolf"); Ok(Json(m)) }
        Err(e) => Err(JsonApiError::from_service(e, "Create Failed")),
    }
}

#[utoipa::path(
    get, path = "/wolves", tag = "wolves",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::WolfDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<wolf::Model>>, JsonApiError> {
    match wolf_service::list_wolves(&state.db).await {
        Ok(list) => { info!(count = list.len(), "list wolves"); Ok(Json(list)) }
        Err(e) => Err(JsonApiError::from_service(e, "List Failed")),
    }
}

#[utoipa::path(
    get, path = "/wolves/{id}", tag = "wolves",
    params(("id" = i32, Path, description = "Wolf ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::WolfDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<wolf::Model>, JsonApiError> {
    wolf_service::get_wolf(&state.db, id)
        .await
        .and_then(|found| found.ok_or_else(|| ServiceError::not_found("wolf")))
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Read Failed"))
}

#[utoipa::path(
    put, path = "/wolves/{id}", tag = "wolves",
    params(("id" = i32, Path, description = "Wolf ID"), UpdateWolfQuery),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::WolfDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i32>, Query(q): Query<UpdateWolfQuery>) -> Result<Json<wolf::Model>, JsonApiError> {
    match wolf_service::update_wolf(&state.db, id, q.wolf_name.as_deref(), q.wolf_power).await {
        Ok(m) => { info!(id = m.id, "updated wolf"); Ok(Json(m)) }
        Err(e) => Err(JsonApiError::from_service(e, "Update Failed")),
    }
}

#[utoipa::path(
    delete, path = "/wolves/{id}", tag = "wolves",
    params(("id" = i32, Path, description = "Wolf ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Message>, JsonApiError> {
    match wolf_service::delete_wolf(&state.db, id).await {
        Ok(()) => { info!(id, "deleted wolf"); Ok(Json(Message::deleted("Wolf", id))) }
        Err(e) => Err(JsonApiError::from_service(e, "Delete Failed")),
    }
}
