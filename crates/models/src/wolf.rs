use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wolves")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub wolf_name: String,
    pub wolf_power: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, wolf_name: &str, wolf_power: i32) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        wolf_name: Set(wolf_name.to_string()),
        wolf_power: Set(wolf_power),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_model() {
        let m = Model { id: 1, wolf_name: "Big".into(), wolf_power: 9 };
        assert_eq!(m.wolf_power, 9);
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["wolf_name"], "Big");
    }
}
