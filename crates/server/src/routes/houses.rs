use axum::{extract::{Path, Query, State}, Json};
use common::types::Message;
use models::house;
use serde::Deserialize;
use service::{errors::ServiceError, house_service};
use tracing::info;
use utoipa::IntoParams;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateHouseQuery {
    pub house_type: String,
    pub house_sturdiness: i32,
    /// Owning pig; must exist when given.
    #[serde(default)]
    pub pig_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateHouseQuery {
    pub house_type: Option<String>,
    pub house_sturdiness: Option<i32>,
    pub pig_id: Option<i32>,
}

#[utoipa::path(
    post, path = "/create_house", tag = "houses",
    params(CreateHouseQuery),
    responses(
        (status = 200, description = "Created", body = crate::openapi::HouseDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Query(q): Query<CreateHouseQuery>) -> Result<Json<house::Model>, JsonApiError> {
    info!(house_type = %q.house_type, sturdiness = q.house_sturdiness, pig_id = ?q.pig_id, "house_create_request");
    let m = house_service::create_house(&state.db, &q.house_type, q.house_sturdiness, q.pig_id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Create Failed"))?;
    info!(id = m.id, "created house");
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/houses", tag = "houses",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::HouseDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<house::Model>>, JsonApiError> {
    let list = house_service::list_houses(&state.db)
        .await
        .map_err(|e| JsonApiError::from_service(e, "List Failed"))?;
    info!(count = list.len(), "list houses");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/houses/{id}", tag = "houses",
    params(("id" = i32, Path, description = "House ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::HouseDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<house::Model>, JsonApiError> {
    match house_service::get_house(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(JsonApiError::from_service(ServiceError::not_found("house"), "Read Failed")),
        Err(e) => Err(JsonApiError::from_service(e, "Read Failed")),
    }
}

#[utoipa::path(
    put, path = "/houses/{id}", tag = "houses",
    params(("id" = i32, Path, description = "House ID"), UpdateHouseQuery),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::HouseDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i32>, Query(q): Query<UpdateHouseQuery>) -> Result<Json<house::Model>, JsonApiError> {
    let m = house_service::update_house(&state.db, id, q.house_type.as_deref(), q.house_sturdiness, q.pig_id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Update Failed"))?;
    info!(id = m.id, "updated house");
    Ok(Json(m))
}

#[utoipa::path(
    delete, path = "/houses/{id}", tag = "houses",
    params(("id" = i32, Path, description = "House ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Message>, JsonApiError> {
    house_service::delete_house(&state.db, id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Delete Failed"))?;
    info!(id, "deleted house");
    Ok(Json(Message::deleted("House", id)))
}
