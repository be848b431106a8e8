use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, property, validation};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "owner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub birthday: Date,
    /// Raw photo bytes; served by the photo download route, not inlined in JSON.
    #[serde(skip)]
    pub photo: Option<Vec<u8>>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Property }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Property => Entity::has_many(property::Entity).into(),
        }
    }
}

impl Related<property::Entity> for Entity {
    fn to() -> RelationDef { Relation::Property.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(name: &str, address: &str) -> Result<(), errors::ModelError> {
    validation::required("name", name)?;
    validation::required("address", address)?;
    validation::max_len("name", name, validation::NAME_MAX)?;
    validation::max_len("address", address, validation::ADDRESS_MAX)?;
    Ok(())
}
