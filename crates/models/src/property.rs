use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, owner, property_image, property_trace, validation};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "property")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub price: i32,
    pub code_internal: String,
    pub year: i32,
    pub owner_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Owner,
    PropertyImage,
    PropertyTrace,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Owner => Entity::belongs_to(owner::Entity)
                .from(Column::OwnerId)
                .to(owner::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::PropertyImage => Entity::has_many(property_image::Entity).into(),
            Relation::PropertyTrace => Entity::has_many(property_trace::Entity).into(),
        }
    }
}

impl Related<owner::Entity> for Entity {
    fn to() -> RelationDef { Relation::Owner.def() }
}

impl Related<property_image::Entity> for Entity {
    fn to() -> RelationDef { Relation::PropertyImage.def() }
}

impl Related<property_trace::Entity> for Entity {
    fn to() -> RelationDef { Relation::PropertyTrace.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(name: &str, address: &str, price: i32, code_internal: &str, year: i32) -> Result<(), errors::ModelError> {
    validation::required("name", name)?;
    validation::required("address", address)?;
    validation::required("code_internal", code_internal)?;
    validation::max_len("name", name, validation::NAME_MAX)?;
    validation::max_len("address", address, validation::ADDRESS_MAX)?;
    validation::max_len("code_internal", code_internal, validation::CODE_MAX)?;
    validation::positive("price", price)?;
    validation::build_year(year)?;
    Ok(())
}
