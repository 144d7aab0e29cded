use sea_orm::{DatabaseConnection, EntityTrait, ActiveModelTrait, ModelTrait, QueryOrder, Set};
use tracing::{debug, instrument};
use models::{house, pig};
use crate::errors::ServiceError;

/// Create a house, optionally owned by a pig.
///
/// An unknown `pig_id` is rejected by the foreign key and surfaces as a database error.
#[instrument(skip(db))]
pub async fn create_house(db: &DatabaseConnection, house_type: &str, house_sturdiness: i32, pig_id: Option<i32>) -> Result<house::Model, ServiceError> {
    let created = house::create(db, house_type, house_sturdiness, pig_id).await?;
    debug!(id = created.id, "house created");
    Ok(created)
}

/// Get house by id.
pub async fn get_house(db: &DatabaseConnection, id: i32) -> Result<Option<house::Model>, ServiceError> {
    house::Entity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// List all houses.
pub async fn list_houses(db: &DatabaseConnection) -> Result<Vec<house::Model>, ServiceError> {
    house::Entity::find()
        .order_by_asc(house::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Houses owned by the given pig; `NotFound` when the pig itself is absent.
pub async fn houses_of_pig(db: &DatabaseConnection, pig_id: i32) -> Result<Vec<house::Model>, ServiceError> {
    let owner = pig::Entity::find_by_id(pig_id)
        .one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("pig"))?;
    owner
        .find_related(house::Entity)
        .order_by_asc(house::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Update house. A `None` pig id keeps the current owner; ownership cannot be cleared here.
#[instrument(skip(db))]
pub async fn update_house(
    db: &DatabaseConnection,
    id: i32,
    house_type: Option<&str>,
    house_sturdiness: Option<i32>,
    pig_id: Option<i32>,
) -> Result<house::Model, ServiceError> {
    let existing = get_house(db, id).await?.ok_or_else(|| ServiceError::not_found("house"))?;
    let mut am: house::ActiveModel = existing.clone().into();
    if let Some(t) = house_type {
        am.house_type = Set(t.to_string());
    }
    if let Some(s) = house_sturdiness {
        am.house_sturdiness = Set(s);
    }
    if let Some(p) = pig_id {
        am.pig_id = Set(Some(p));
    }
    if !am.is_changed() {
        return Ok(existing);
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete house.
#[instrument(skip(db))]
pub async fn delete_house(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let existing = get_house(db, id).await?.ok_or_else(|| ServiceError::not_found("house"))?;
    existing.delete(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pig_service;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn house_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let owner = pig_service::create_pig(&db, "Practical", "bricks").await?;

        let h = create_house(&db, "bricks", 10, Some(owner.id)).await?;
        assert_eq!(get_house(&db, h.id).await?, Some(h.clone()));

        let weaker = update_house(&db, h.id, None, Some(8), None).await?;
        assert_eq!(weaker.house_type, "bricks");
        assert_eq!(weaker.house_sturdiness, 8);
        assert_eq!(weaker.pig_id, Some(owner.id));

        delete_house(&db, h.id).await?;
        assert!(get_house(&db, h.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn house_without_owner_can_be_adopted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let h = create_house(&db, "straw", 1, None).await?;
        assert_eq!(h.pig_id, None);

        let owner = pig_service::create_pig(&db, "Fifer", "straw").await?;
        let adopted = update_house(&db, h.id, None, None, Some(owner.id)).await?;
        assert_eq!(adopted.pig_id, Some(owner.id));
        assert_eq!(houses_of_pig(&db, owner.id).await?, vec![adopted]);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_owner_is_a_db_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_house(&db, "sticks", 3, Some(7)).await.unwrap_err();
        assert!(!err.is_not_found());
        assert!(list_houses(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn houses_of_missing_pig_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(houses_of_pig(&db, 5).await.unwrap_err().is_not_found());
        assert!(update_house(&db, 5, Some("x"), None, None).await.unwrap_err().is_not_found());
        Ok(())
    }

    #[tokio::test]
    async fn owner_delete_blocked_while_house_exists() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let owner = pig_service::create_pig(&db, "Fiddler", "sticks").await?;
        let h = create_house(&db, "sticks", 3, Some(owner.id)).await?;

        let err = pig_service::delete_pig(&db, owner.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));

        delete_house(&db, h.id).await?;
        pig_service::delete_pig(&db, owner.id).await?;
        Ok(())
    }
}
