use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::property;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "property_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(skip)]
    pub file: Option<Vec<u8>>,
    pub enabled: bool,
    pub property_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Property }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Property => Entity::belongs_to(property::Entity)
                .from(Column::PropertyId)
                .to(property::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<property::Entity> for Entity {
    fn to() -> RelationDef { Relation::Property.def() }
}

impl ActiveModelBehavior for ActiveModel {}
