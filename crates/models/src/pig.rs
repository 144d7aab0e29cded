use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::{errors, house};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pigs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pig_name: String,
    pub pig_house: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { House }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::House => Entity::has_many(house::Entity).into() }
    }
}

impl Related<house::Entity> for Entity {
    fn to() -> RelationDef { Relation::House.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, pig_name: &str, pig_house: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        pig_name: Set(pig_name.to_string()),
        pig_house: Set(pig_house.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_column_names() {
        let m = Model { id: 1, pig_name: "Fifer".into(), pig_house: "straw".into() };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"id": 1, "pig_name": "Fifer", "pig_house": "straw"}));
    }
}
