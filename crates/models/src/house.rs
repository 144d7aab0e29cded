use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::{errors, pig};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "houses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub house_type: String,
    pub house_sturdiness: i32,
    /// Owning pig, if any.
    pub pig_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Pig }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Pig => Entity::belongs_to(pig::Entity).from(Column::PigId).to(pig::Column::Id).into(),
        }
    }
}

impl Related<pig::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pig.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    house_type: &str,
    house_sturdiness: i32,
    pig_id: Option<i32>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        house_type: Set(house_type.to_string()),
        house_sturdiness: Set(house_sturdiness),
        pig_id: Set(pig_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
