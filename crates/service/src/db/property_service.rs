use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use configs::NameMatch;
use models::{property, property_image, property_trace};

use crate::domain::PropertyInput;
use crate::errors::ServiceError;
use crate::property::PropertyFilter;

/// List properties, id ascending.
pub async fn list_properties(db: &DatabaseConnection) -> Result<Vec<property::Model>, ServiceError> {
    Ok(property::Entity::find().order_by_asc(property::Column::Id).all(db).await?)
}

/// Get property by id.
pub async fn get_property(db: &DatabaseConnection, id: i32) -> Result<Option<property::Model>, ServiceError> {
    Ok(property::Entity::find_by_id(id).one(db).await?)
}

/// Create a property. An unknown owner surfaces as a constraint violation.
pub async fn create_property(db: &DatabaseConnection, input: PropertyInput) -> Result<property::Model, ServiceError> {
    Ok(input.into_active_model().insert(db).await?)
}

/// Overwrite every mutable field. `None` when the property does not exist.
pub async fn update_property(db: &DatabaseConnection, id: i32, input: &PropertyInput) -> Result<Option<property::Model>, ServiceError> {
    let Some(mut row) = property::Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    input.apply_to(&mut row);
    let am = property::ActiveModel::from(row).reset_all();
    Ok(Some(am.update(db).await?))
}

/// Delete a property with its images and traces, in one transaction.
pub async fn delete_property(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    purge_children(&txn, &[id]).await?;
    let res = property::Entity::delete_by_id(id).exec(&txn).await?;
    if res.rows_affected == 0 {
        txn.rollback().await?;
        return Ok(false);
    }
    txn.commit().await?;
    Ok(true)
}

/// Properties owned by `owner_id`, id ascending.
pub async fn list_properties_by_owner(db: &DatabaseConnection, owner_id: i32) -> Result<Vec<property::Model>, ServiceError> {
    Ok(property::Entity::find()
        .filter(property::Column::OwnerId.eq(owner_id))
        .order_by_asc(property::Column::Id)
        .all(db)
        .await?)
}

/// Run the filter: SQL narrows, then the exact predicate decides.
pub async fn filter_properties(db: &DatabaseConnection, filter: &PropertyFilter, mode: NameMatch) -> Result<Vec<property::Model>, ServiceError> {
    let mut rows = property::Entity::find()
        .filter(filter.condition(mode))
        .order_by_asc(property::Column::Id)
        .all(db)
        .await?;
    rows.retain(|row| filter.matches(row, mode));
    Ok(rows)
}

/// Remove the images and traces of the given properties.
pub(crate) async fn purge_children<C: ConnectionTrait>(conn: &C, property_ids: &[i32]) -> Result<(), ServiceError> {
    if property_ids.is_empty() {
        return Ok(());
    }
    property_image::Entity::delete_many()
        .filter(property_image::Column::PropertyId.is_in(property_ids.iter().copied()))
        .exec(conn)
        .await?;
    property_trace::Entity::delete_many()
        .filter(property_trace::Column::PropertyId.is_in(property_ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::PaginatorTrait;
    use crate::db::{owner_service, property_image_service};
    use crate::domain::{OwnerInput, PropertyImageInput};
    use crate::errors::ServiceError;
    use crate::test_support::get_db;

    async fn owner_id(db: &DatabaseConnection) -> Result<i32, ServiceError> {
        let input = OwnerInput {
            name: "Owner".into(),
            address: "Road 1".into(),
            birthday: NaiveDate::from_ymd_opt(1980, 5, 22).unwrap(),
        };
        Ok(owner_service::create_owner(db, input, None).await?.id)
    }

    fn input(owner_id: i32, name: &str, price: i32, year: i32) -> PropertyInput {
        PropertyInput {
            name: name.into(),
            address: "Somewhere 3".into(),
            price,
            code_internal: format!("{name}-{price}"),
            year,
            owner_id,
        }
    }

    #[tokio::test]
    async fn property_crud_service() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let db = &t.db;
        let oid = owner_id(db).await?;

        let p = create_property(db, input(oid, "Villa", 500, 2015)).await?;
        assert_eq!(get_property(db, p.id).await?, Some(p.clone()));

        let second = owner_id(db).await?;
        let changed = input(second, "Loft", 900, 2001);
        let updated = update_property(db, p.id, &changed).await?.unwrap();
        assert_eq!(updated, changed.to_model(p.id));

        assert!(delete_property(db, p.id).await?);
        assert!(get_property(db, p.id).await?.is_none());
        assert!(!delete_property(db, p.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_owner_is_a_constraint_violation() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let db = &t.db;
        let err = create_property(db, input(4242, "Ghost", 1, 2000)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConstraintViolation(_)), "{err:?}");
        assert_eq!(property::Entity::find().count(db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn filter_runs_against_sqlite() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let db = &t.db;
        let oid = owner_id(db).await?;
        create_property(db, input(oid, "Modern Villa", 500, 2015)).await?;
        let b = create_property(db, input(oid, "modern loft", 1500, 2020)).await?;
        let c = create_property(db, input(oid, "50%_Deal", 2000, 2020)).await?;

        let f = PropertyFilter { min_price: Some(1000), year: Some(2020), ..Default::default() };
        let ids: Vec<i32> = filter_properties(db, &f, NameMatch::CaseSensitive).await?.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![b.id, c.id]);

        let all = filter_properties(db, &PropertyFilter::default(), NameMatch::CaseSensitive).await?;
        assert_eq!(all.len(), list_properties(db).await?.len());

        // SQLite LIKE ignores ASCII case; the recheck keeps the match exact.
        let by_name = PropertyFilter { name: Some("Modern".into()), ..Default::default() };
        let sensitive = filter_properties(db, &by_name, NameMatch::CaseSensitive).await?;
        assert_eq!(sensitive.len(), 1);
        let insensitive = filter_properties(db, &by_name, NameMatch::CaseInsensitive).await?;
        assert_eq!(insensitive.len(), 2);

        let literal = PropertyFilter { name: Some("%_".into()), ..Default::default() };
        let hits = filter_properties(db, &literal, NameMatch::CaseSensitive).await?;
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![c.id]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_property_removes_its_images() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let db = &t.db;
        let oid = owner_id(db).await?;
        let p = create_property(db, input(oid, "Villa", 500, 2015)).await?;
        property_image_service::create_image(db, PropertyImageInput { property_id: p.id, enabled: true }, Some(vec![7])).await?;
        assert!(delete_property(db, p.id).await?);
        assert_eq!(property_image::Entity::find().count(db).await?, 0);
        Ok(())
    }
}
