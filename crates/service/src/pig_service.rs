use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, ModelTrait, QueryOrder, Set};
use tracing::{debug, instrument};
use models::pig;
use crate::errors::ServiceError;

/// Create a pig.
#[instrument(skip(db))]
pub async fn create_pig(db: &DatabaseConnection, pig_name: &str, pig_house: &str) -> Result<pig::Model, ServiceError> {
    let created = pig::create(db, pig_name, pig_house).await?;
    debug!(id = created.id, "pig created");
    Ok(created)
}

/// Get pig by id.
pub async fn get_pig(db: &DatabaseConnection, id: i32) -> Result<Option<pig::Model>, ServiceError> {
    pig::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// List all pigs, oldest first.
pub async fn list_pigs(db: &DatabaseConnection) -> Result<Vec<pig::Model>, ServiceError> {
    pig::Entity::find()
        .order_by_asc(pig::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Overwrite only the supplied fields.
#[instrument(skip(db))]
pub async fn update_pig(db: &DatabaseConnection, id: i32, pig_name: Option<&str>, pig_house: Option<&str>) -> Result<pig::Model, ServiceError> {
    let existing = get_pig(db, id).await?.ok_or_else(|| ServiceError::not_found("pig"))?;
    let mut am: pig::ActiveModel = existing.clone().into();
    if let Some(n) = pig_name {
        am.pig_name = Set(n.to_string());
    }
    if let Some(h) = pig_house {
        am.pig_house = Set(h.to_string());
    }
    if !am.is_changed() {
        return Ok(existing);
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete pig. Fails with a database error while any house still references it.
#[instrument(skip(db))]
pub async fn delete_pig(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let existing = get_pig(db, id).await?.ok_or_else(|| ServiceError::not_found("pig"))?;
    existing.delete(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}
