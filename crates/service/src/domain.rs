//! Caller-facing inputs and their explicit mapping onto entity rows.
//!
//! Every field copied into a row is named here; nothing is mapped by
//! reflection or field-name matching. The `apply_to` functions are the
//! update contracts of each entity.

use chrono::NaiveDate;
use sea_orm::{NotSet, Set};
use serde::Deserialize;

use models::{owner, property, property_image, property_trace};

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OwnerInput {
    pub name: String,
    pub address: String,
    pub birthday: NaiveDate,
}

impl OwnerInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        Ok(owner::validate(&self.name, &self.address)?)
    }

    pub fn into_active_model(self, photo: Option<Vec<u8>>) -> owner::ActiveModel {
        owner::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            address: Set(self.address),
            birthday: Set(self.birthday),
            photo: Set(photo),
        }
    }

    pub fn to_model(&self, id: i32, photo: Option<Vec<u8>>) -> owner::Model {
        owner::Model {
            id,
            name: self.name.clone(),
            address: self.address.clone(),
            birthday: self.birthday,
            photo,
        }
    }

    /// Update contract: name, address and birthday. The photo is untouched.
    pub fn apply_to(&self, row: &mut owner::Model) {
        row.name = self.name.clone();
        row.address = self.address.clone();
        row.birthday = self.birthday;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyInput {
    pub name: String,
    pub address: String,
    pub price: i32,
    pub code_internal: String,
    pub year: i32,
    pub owner_id: i32,
}

impl PropertyInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        Ok(property::validate(&self.name, &self.address, self.price, &self.code_internal, self.year)?)
    }

    pub fn into_active_model(self) -> property::ActiveModel {
        property::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            address: Set(self.address),
            price: Set(self.price),
            code_internal: Set(self.code_internal),
            year: Set(self.year),
            owner_id: Set(self.owner_id),
        }
    }

    pub fn to_model(&self, id: i32) -> property::Model {
        let mut row = property::Model {
            id,
            name: String::new(),
            address: String::new(),
            price: 0,
            code_internal: String::new(),
            year: 0,
            owner_id: 0,
        };
        self.apply_to(&mut row);
        row
    }

    /// Update contract: every field except the id, including a move to another owner.
    pub fn apply_to(&self, row: &mut property::Model) {
        row.name = self.name.clone();
        row.address = self.address.clone();
        row.price = self.price;
        row.code_internal = self.code_internal.clone();
        row.year = self.year;
        row.owner_id = self.owner_id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PropertyImageInput {
    pub property_id: i32,
    #[serde(default)]
    pub enabled: bool,
}

impl PropertyImageInput {
    pub fn into_active_model(self, file: Option<Vec<u8>>) -> property_image::ActiveModel {
        property_image::ActiveModel {
            id: NotSet,
            file: Set(file),
            enabled: Set(self.enabled),
            property_id: Set(self.property_id),
        }
    }

    pub fn to_model(&self, id: i32, file: Option<Vec<u8>>) -> property_image::Model {
        property_image::Model { id, file, enabled: self.enabled, property_id: self.property_id }
    }
}

/// Update contract for images: only the `enabled` flag. The owning property
/// is fixed at creation and the file has its own replace operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PropertyImageUpdate {
    pub enabled: bool,
}

impl PropertyImageUpdate {
    pub fn apply_to(&self, row: &mut property_image::Model) {
        row.enabled = self.enabled;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropertyTraceInput {
    pub date_sale: NaiveDate,
    pub name: String,
    pub value: i32,
    pub tax: i32,
    pub property_id: i32,
}

impl PropertyTraceInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        Ok(property_trace::validate(&self.name, self.value, self.tax)?)
    }

    pub fn into_active_model(self) -> property_trace::ActiveModel {
        property_trace::ActiveModel {
            id: NotSet,
            date_sale: Set(self.date_sale),
            name: Set(self.name),
            value: Set(self.value),
            tax: Set(self.tax),
            property_id: Set(self.property_id),
        }
    }

    pub fn to_model(&self, id: i32) -> property_trace::Model {
        property_trace::Model {
            id,
            date_sale: self.date_sale,
            name: self.name.clone(),
            value: self.value,
            tax: self.tax,
            property_id: self.property_id,
        }
    }

    /// Update contract: every field except the id, including the owning property.
    pub fn apply_to(&self, row: &mut property_trace::Model) {
        row.date_sale = self.date_sale;
        row.name = self.name.clone();
        row.value = self.value;
        row.tax = self.tax;
        row.property_id = self.property_id;
    }
}
