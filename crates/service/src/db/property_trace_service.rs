use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use models::property_trace;

use crate::domain::PropertyTraceInput;
use crate::errors::ServiceError;

/// List traces, id ascending.
pub async fn list_traces(db: &DatabaseConnection) -> Result<Vec<property_trace::Model>, ServiceError> {
    Ok(property_trace::Entity::find().order_by_asc(property_trace::Column::Id).all(db).await?)
}

/// Get trace by id.
pub async fn get_trace(db: &DatabaseConnection, id: i32) -> Result<Option<property_trace::Model>, ServiceError> {
    Ok(property_trace::Entity::find_by_id(id).one(db).await?)
}

/// Create a trace for an existing property.
pub async fn create_trace(db: &DatabaseConnection, input: PropertyTraceInput) -> Result<property_trace::Model, ServiceError> {
    Ok(input.into_active_model().insert(db).await?)
}

/// Overwrite every mutable field, the owning property included.
pub async fn update_trace(db: &DatabaseConnection, id: i32, input: &PropertyTraceInput) -> Result<Option<property_trace::Model>, ServiceError> {
    let Some(mut row) = property_trace::Entity::find_by_id(id).one(db).await? else { return Ok(None) };
    input.apply_to(&mut row);
    let am = property_trace::ActiveModel::from(row).reset_all();
    Ok(Some(am.update(db).await?))
}

/// Delete trace.
pub async fn delete_trace(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = property_trace::Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// Traces of one property, id ascending.
pub async fn list_traces_by_property(db: &DatabaseConnection, property_id: i32) -> Result<Vec<property_trace::Model>, ServiceError> {
    Ok(property_trace::Entity::find()
        .filter(property_trace::Column::PropertyId.eq(property_id))
        .order_by_asc(property_trace::Column::Id)
        .all(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::db::{owner_service, property_service};
    use crate::domain::{OwnerInput, PropertyInput};
    use crate::errors::ServiceError;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn trace_crud_service() -> Result<(), anyhow::Error> {
        let t = get_db().await?;
        let db = &t.db;
        let owner = owner_service::create_owner(
            db,
            OwnerInput { name: "O".into(), address: "A".into(), birthday: NaiveDate::from_ymd_opt(1960, 6, 6).unwrap() },
            None,
        )
        .await?;
        let mk = |code: &str| PropertyInput {
            name: "P".into(),
            address: "A".into(),
            price: 10,
            code_internal: code.into(),
            year: 1990,
            owner_id: owner.id,
        };
        let first = property_service::create_property(db, mk("P1")).await?;
        let second = property_service::create_property(db, mk("P2")).await?;

        let input = PropertyTraceInput {
            date_sale: NaiveDate::from_ymd_opt(2020, 7, 15).unwrap(),
            name: "Initial Sale".into(),
            value: 450000,
            tax: 45000,
            property_id: first.id,
        };
        let trace = create_trace(db, input.clone()).await?;
        assert_eq!(trace, input.to_model(trace.id));

        let moved = PropertyTraceInput { property_id: second.id, value: 460000, ..input.clone() };
        let updated = update_trace(db, trace.id, &moved).await?.unwrap();
        assert_eq!(updated.property_id, second.id);
        assert!(list_traces_by_property(db, first.id).await?.is_empty());
        assert_eq!(list_traces_by_property(db, second.id).await?, vec![updated]);

        let dangling = PropertyTraceInput { property_id: 9999, ..input };
        let err = update_trace(db, trace.id, &dangling).await.unwrap_err();
        assert!(matches!(err, ServiceError::ConstraintViolation(_)), "{err:?}");

        assert!(delete_trace(db, trace.id).await?);
        assert!(get_trace(db, trace.id).await?.is_none());
        Ok(())
    }
}
