//! Bootstrap rows for a fresh catalog: two owners, one property each,
//! one image and one sale trace per property.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, Set, TransactionTrait};
use tracing::info;

use crate::{errors::ModelError, owner, property, property_image, property_trace};

struct SeedListing {
    owner: (&'static str, &'static str, (i32, u32, u32)),
    property: (&'static str, &'static str, i32, &'static str, i32),
    trace: ((i32, u32, u32), i32, i32),
}

const LISTINGS: [SeedListing; 2] = [
    SeedListing {
        owner: ("John Doe", "123 Elm Street", (1975, 8, 15)),
        property: ("Modern Villa", "789 Pine Road", 500_000, "MODV123", 2015),
        trace: ((2020, 7, 15), 450_000, 45_000),
    },
    SeedListing {
        owner: ("Jane Smith", "456 Oak Avenue", (1980, 5, 22)),
        property: ("Beachfront Condo", "10 Ocean Drive", 300_000, "BFCD456", 2018),
        trace: ((2021, 3, 10), 280_000, 28_000),
    },
];

fn date((y, m, d): (i32, u32, u32)) -> Result<NaiveDate, ModelError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| ModelError::Validation(format!("invalid seed date {y}-{m}-{d}")))
}

/// Insert the bootstrap rows when the owner table is empty.
/// Returns `true` when rows were written.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<bool, ModelError> {
    let existing = owner::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(false);
    }

    let txn = db.begin().await?;
    for listing in &LISTINGS {
        let (name, address, birthday) = listing.owner;
        let o = owner::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            address: Set(address.to_string()),
            birthday: Set(date(birthday)?),
            photo: Set(None),
        }
        .insert(&txn)
        .await?;

        let (p_name, p_address, price, code, year) = listing.property;
        let p = property::ActiveModel {
            id: NotSet,
            name: Set(p_name.to_string()),
            address: Set(p_address.to_string()),
            price: Set(price),
            code_internal: Set(code.to_string()),
            year: Set(year),
            owner_id: Set(o.id),
        }
        .insert(&txn)
        .await?;

        property_image::ActiveModel { id: NotSet, file: Set(None), enabled: Set(true), property_id: Set(p.id) }
            .insert(&txn)
            .await?;

        let (sold_on, value, tax) = listing.trace;
        property_trace::ActiveModel {
            id: NotSet,
            date_sale: Set(date(sold_on)?),
            name: Set("Initial Sale".to_string()),
            value: Set(value),
            tax: Set(tax),
            property_id: Set(p.id),
        }
        .insert(&txn)
        .await?;
    }
    txn.commit().await?;

    info!(owners = LISTINGS.len(), event = "catalog_seeded", "seed data inserted");
    Ok(true)
}
