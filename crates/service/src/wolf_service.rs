use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, ModelTrait, QueryOrder, Set};
use tracing::instrument;
use models::wolf;
use crate::errors::ServiceError;

/// Create a wolf.
pub async fn create_wolf(db: &DatabaseConnection, wolf_name: &str, wolf_power: i32) -> Result<wolf::Model, ServiceError> {
    Ok(wolf::create(db, wolf_name, wolf_power).await?)
}

/// Get wolf by id.
pub async fn get_wolf(db: &DatabaseConnection, id: i32) -> Result<Option<wolf::Model>, ServiceError> {
    Ok(wolf::Entity::find_by_id(id).one(db).await?)
}

/// List all wolves.
pub async fn list_wolves(db: &DatabaseConnection) -> Result<Vec<wolf::Model>, ServiceError> {
    Ok(wolf::Entity::find().order_by_asc(wolf::Column::Id).all(db).await?)
}

/// Update wolf info; `None` leaves the column as is.
#[instrument(skip(db))]
pub async fn update_wolf(db: &DatabaseConnection, id: i32, wolf_name: Option<&str>, wolf_power: Option<i32>) -> Result<wolf::Model, ServiceError> {
    let existing = wolf::Entity::find_by_id(id)
        .one(db).await?
        .ok_or_else(|| ServiceError::not_found("wolf"))?;
    let mut am: wolf::ActiveModel = existing.clone().into();
    if let Some(n) = wolf_name {
        am.wolf_name = Set(n.to_string());
    }
    if let Some(p) = wolf_power {
        am.wolf_power = Set(p);
    }
    if !am.is_changed() {
        return Ok(existing);
    }
    Ok(am.update(db).await?)
}

/// Delete wolf.
#[instrument(skip(db))]
pub async fn delete_wolf(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let existing = get_wolf(db, id).await?.ok_or_else(|| ServiceError::not_found("wolf"))?;
    existing.delete(db).await?;
    Ok(())
}
