use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, property, validation};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "property_trace")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_sale: Date,
    pub name: String,
    pub value: i32,
    pub tax: i32,
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

pub fn validate(name: &str, value: i32, tax: i32) -> Result<(), errors::ModelError> {
    validation::required("name", name)?;
    validation::max_len("name", name, validation::NAME_MAX)?;
    validation::positive("value", value)?;
    validation::positive("tax", tax)?;
    Ok(())
}
