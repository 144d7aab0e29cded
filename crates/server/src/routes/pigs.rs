use axum::{extract::{Path, Query, State}, Json};
use common::types::Message;
use models::{house, pig};
use serde::Deserialize;
use service::{house_service, pig_service};
use tracing::info;
use utoipa::IntoParams;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreatePigQuery {
    pub pig_name: String,
    pub pig_house: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdatePigQuery {
    pub pig_name: Option<String>,
    pub pig_house: Option<String>,
}

#[utoipa::path(
    post, path = "/create_pig", tag = "pigs",
    params(CreatePigQuery),
    responses(
        (status = 200, description = "Created", body = crate::openapi::PigDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Query(q): Query<CreatePigQuery>) -> Result<Json<pig::Model>, JsonApiError> {
    let m = pig_service::create_pig(&state.db, &q.pig_name, &q.pig_house)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Create Failed"))?;
    info!(id = m.id, "created pig");
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/pigs", tag = "pigs",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::PigDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<pig::Model>>, JsonApiError> {
    let list = pig_service::list_pigs(&state.db)
        .await
        .map_err(|e| JsonApiError::from_service(e, "List Failed"))?;
    info!(count = list.len(), "list pigs");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/pigs/{id}", tag = "pigs",
    params(("id" = i32, Path, description = "Pig ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PigDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<pig::Model>, JsonApiError> {
    match pig_service::get_pig(&state.db, id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(JsonApiError::from_service(service::errors::ServiceError::not_found("pig"), "Read Failed")),
        Err(e) => Err(JsonApiError::from_service(e, "Read Failed")),
    }
}

#[utoipa::path(
    put, path = "/pigs/{id}", tag = "pigs",
    params(("id" = i32, Path, description = "Pig ID"), UpdatePigQuery),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PigDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i32>, Query(q): Query<UpdatePigQuery>) -> Result<Json<pig::Model>, JsonApiError> {
    let m = pig_service::update_pig(&state.db, id, q.pig_name.as_deref(), q.pig_house.as_deref())
        .await
        .map_err(|e| JsonApiError::from_service(e, "Update Failed"))?;
    info!(id = m.id, "updated pig");
    Ok(Json(m))
}

#[utoipa::path(
    delete, path = "/pigs/{id}", tag = "pigs",
    params(("id" = i32, Path, description = "Pig ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Message>, JsonApiError> {
    pig_service::delete_pig(&state.db, id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Delete Failed"))?;
    info!(id, "deleted pig");
    Ok(Json(Message::deleted("Pig", id)))
}

#[utoipa::path(
    get, path = "/pigs/{id}/houses", tag = "pigs",
    params(("id" = i32, Path, description = "Pig ID")),
    responses(
        (status = 200, description = "Houses owned by the pig", body = [crate::openapi::HouseDoc]),
        (status = 404, description = "Not Found")
    )
)]
pub async fn houses(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Vec<house::Model>>, JsonApiError> {
    house_service::houses_of_pig(&state.db, id)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "List Failed"))
}
